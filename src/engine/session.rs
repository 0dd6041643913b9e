//! The turn/session state machine.
//!
//! A [`Session`] owns the grid, the ordered players, the turn index and the
//! outcome. [`Session::run`] drives one full game against a [`Game`]
//! implementation and an I/O [`Console`]: render, play a turn, check for a
//! winner, advance the turn, loop. The outcome is set exactly once and is
//! terminal; no further moves are accepted afterwards.
//!
//! All recoverable input problems (malformed text, out-of-range locations,
//! ownership and legality violations) are absorbed here by retry loops with
//! a distinct message per case. Only console I/O failures escape.
//!
//! `Session` is not synchronized; concurrent mutation from multiple threads
//! requires external locking.

use crate::console::Console;
use crate::engine::grid::{Cell, Grid, Location};
use crate::engine::input::InputMode;
use crate::engine::piece::Piece;
use crate::engine::player::{Player, PlayerId};
use crate::error::{MoveError, SessionError};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PlayerId),
    Draw,
}

/// How a session ended: a game outcome, or the player typing `"exit"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Winner(PlayerId),
    Draw,
    Exited,
}

impl From<GameOutcome> for SessionOutcome {
    fn from(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Winner(id) => SessionOutcome::Winner(id),
            GameOutcome::Draw => SessionOutcome::Draw,
        }
    }
}

/// What a single call to [`Game::play_turn`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    Played,
    Exited,
}

/// A concrete game: board setup, input semantics, and the per-turn protocol.
/// The engine drives the session loop; the game supplies the rules.
pub trait Game {
    fn name(&self) -> &str;

    /// Tutorial text explaining this game's input format.
    fn instructions(&self) -> &str;

    /// The shape of raw input this game expects at its prompts.
    fn input_mode(&self) -> InputMode;

    /// `(show_row_labels, show_col_labels)` for rendering.
    fn labels(&self) -> (bool, bool);

    /// Build the initial board for the given players.
    fn setup(&self, players: &[Player]) -> Result<Grid, SessionError>;

    /// Play one turn for the session's current player: gather input, apply
    /// the move, and declare a winner or draw on the session if the game is
    /// decided. Turn advancement is the session's job, not the game's.
    fn play_turn(
        &mut self,
        session: &mut Session,
        console: &mut dyn Console,
    ) -> Result<TurnStatus, SessionError>;
}

/// One game instance from setup to a declared outcome or exit.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    players: Vec<Player>,
    turn: usize,
    outcome: Option<GameOutcome>,
}

impl Session {
    /// Create a session with the game's initial board. Needs at least two
    /// players; player order is turn order.
    pub fn new(game: &dyn Game, players: Vec<Player>) -> Result<Self, SessionError> {
        if players.len() < 2 {
            return Err(SessionError::NotEnoughPlayers(players.len()));
        }
        let grid = game.setup(&players)?;
        Ok(Session {
            grid,
            players,
            turn: 0,
            outcome: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Record a winner. The first declared outcome wins; later calls are
    /// ignored.
    pub fn declare_winner(&mut self, winner: PlayerId) {
        if self.outcome.is_none() {
            self.outcome = Some(GameOutcome::Winner(winner));
        }
    }

    pub fn declare_draw(&mut self) {
        if self.outcome.is_none() {
            self.outcome = Some(GameOutcome::Draw);
        }
    }

    /// Cycle to the next player in order.
    pub fn advance_turn(&mut self) {
        self.turn = (self.turn + 1) % self.players.len();
    }

    /// Validate that `from` holds a piece the current player may pick up.
    pub fn selectable_piece(&self, from: Location) -> Result<Piece, MoveError> {
        match self.grid.get(from) {
            Ok(Cell::Occupied(piece)) if piece.owner == self.current_player().id() => Ok(*piece),
            _ => Err(MoveError::InvalidPieceSelection),
        }
    }

    /// Validate and apply a piece move for the current player, returning
    /// whatever occupied the destination. Rejections leave the grid
    /// untouched; no moves are accepted once the outcome is set.
    pub fn apply_piece_move(&mut self, from: Location, to: Location) -> Result<Cell, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let piece = self.selectable_piece(from)?;
        if !piece.is_legal_move(from, to, &self.grid) {
            return Err(MoveError::InvalidDestination);
        }
        let captured = self
            .grid
            .move_piece(from, to, Cell::Empty)
            .map_err(|_| MoveError::InvalidDestination)?;
        if let Ok(Cell::Occupied(moved)) = self.grid.get_mut(to) {
            moved.mark_moved();
        }
        Ok(captured)
    }

    /// Drive the session to completion: render the board, let the game play
    /// a turn, advance, repeat until an outcome is declared or the player
    /// exits.
    pub fn run(
        &mut self,
        game: &mut dyn Game,
        console: &mut dyn Console,
    ) -> Result<SessionOutcome, SessionError> {
        let (show_rows, show_cols) = game.labels();
        console.show(&self.grid.render(show_rows, show_cols))?;
        loop {
            if let Some(outcome) = self.outcome {
                return Ok(outcome.into());
            }
            match game.play_turn(self, console)? {
                TurnStatus::Exited => return Ok(SessionOutcome::Exited),
                TurnStatus::Played => {}
            }
            self.advance_turn();
            console.show(&self.grid.render(show_rows, show_cols))?;
        }
    }
}

/// A validated reply to a prompt: well-formed input text, or one of the
/// reserved tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    Input(String),
    Back,
    Exit,
}

/// Read lines until one is well-formed for `mode` on `grid`, or a reserved
/// token arrives. `"exit"` is honored everywhere; `"back"` only where the
/// protocol allows it. Malformed lines re-prompt with a format message.
pub fn read_well_formed(
    console: &mut dyn Console,
    grid: &Grid,
    mode: InputMode,
    allow_back: bool,
) -> Result<PromptReply, SessionError> {
    loop {
        let line = console.read_line()?;
        let line = line.trim();
        if line == "exit" {
            return Ok(PromptReply::Exit);
        }
        if allow_back && line == "back" {
            return Ok(PromptReply::Back);
        }
        if grid.is_well_formed_input(line, mode) {
            return Ok(PromptReply::Input(line.to_string()));
        }
        console.show("Input is in the wrong format or out of bounds. Try again")?;
    }
}

/// Result of the shared piece-move protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceMove {
    Moved {
        mover: Piece,
        from: Location,
        to: Location,
        captured: Cell,
    },
    Exited,
}

/// The generic select-piece / select-destination protocol for games with
/// movable pieces: prompt for a piece (must be owned by the current player),
/// prompt for a destination (`"back"` returns to piece selection without
/// consuming the turn), then apply the move through the session.
pub fn play_piece_move(
    session: &mut Session,
    console: &mut dyn Console,
) -> Result<PieceMove, SessionError> {
    'select: loop {
        console.show("Select your piece")?;
        let (from, piece) = loop {
            match read_well_formed(console, session.grid(), InputMode::Full, false)? {
                PromptReply::Exit => return Ok(PieceMove::Exited),
                PromptReply::Back => continue,
                PromptReply::Input(text) => {
                    let Ok(from) = text.parse::<Location>() else {
                        continue;
                    };
                    match session.selectable_piece(from) {
                        Ok(piece) => break (from, piece),
                        Err(err) => console.show(&err.to_string())?,
                    }
                }
            }
        };

        console.show(&format!(
            "Select where to move \"{}\" to. Type \"back\" to reselect piece",
            piece.symbol()
        ))?;
        loop {
            match read_well_formed(console, session.grid(), InputMode::Full, true)? {
                PromptReply::Exit => return Ok(PieceMove::Exited),
                PromptReply::Back => continue 'select,
                PromptReply::Input(text) => {
                    let Ok(to) = text.parse::<Location>() else {
                        continue;
                    };
                    match session.apply_piece_move(from, to) {
                        Ok(captured) => {
                            return Ok(PieceMove::Moved {
                                mover: piece,
                                from,
                                to,
                                captured,
                            })
                        }
                        Err(err) => console.show(&err.to_string())?,
                    }
                }
            }
        }
    }
}
