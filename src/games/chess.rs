//! Chess, minus the trimmings: standard placement and per-piece movement,
//! with the game ending as soon as a king is captured. No castling,
//! en-passant, promotion, or check detection.

use crate::console::Console;
use crate::engine::grid::{Cell, Grid, Location};
use crate::engine::input::InputMode;
use crate::engine::piece::{Piece, PieceKind};
use crate::engine::player::Player;
use crate::engine::session::{play_piece_move, Game, PieceMove, Session, TurnStatus};
use crate::error::SessionError;

const INSTRUCTIONS: &str = "You can select spots on the board by inputting the row and column \
with a comma in between. See example below\n1, 1";

/// Back-rank placement for player 0 at row 0, left to right. Player 1 gets
/// the mirror: `BACK_RANK[i]` at `(7, 7 - i)`, so queen and king swap files.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Default)]
pub struct Chess;

impl Chess {
    pub fn new() -> Self {
        Chess
    }
}

impl Game for Chess {
    fn name(&self) -> &str {
        "chess"
    }

    fn instructions(&self) -> &str {
        INSTRUCTIONS
    }

    fn input_mode(&self) -> InputMode {
        InputMode::Full
    }

    fn labels(&self) -> (bool, bool) {
        (true, true)
    }

    fn setup(&self, players: &[Player]) -> Result<Grid, SessionError> {
        let mut grid = Grid::new(8, 8)?;
        let first = players[0].id();
        let second = players[1].id();

        for col in 0..8 {
            grid.set(Location::new(1, col), Cell::Occupied(Piece::pawn(first, 1)))?;
            grid.set(
                Location::new(6, col),
                Cell::Occupied(Piece::pawn(second, -1)),
            )?;
        }
        for (i, kind) in BACK_RANK.into_iter().enumerate() {
            grid.set(Location::new(0, i), Cell::Occupied(Piece::new(first, kind)))?;
            grid.set(
                Location::new(7, 7 - i),
                Cell::Occupied(Piece::new(second, kind)),
            )?;
        }
        Ok(grid)
    }

    fn play_turn(
        &mut self,
        session: &mut Session,
        console: &mut dyn Console,
    ) -> Result<TurnStatus, SessionError> {
        console.show(&format!("{}'s turn", session.current_player()))?;
        let mover = session.current_player().id();
        match play_piece_move(session, console)? {
            PieceMove::Exited => Ok(TurnStatus::Exited),
            PieceMove::Moved { captured, .. } => {
                if captured.piece().is_some_and(Piece::is_king) {
                    session.declare_winner(mover);
                }
                Ok(TurnStatus::Played)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::engine::player::PlayerId;
    use crate::engine::session::SessionOutcome;
    use crate::error::MoveError;

    fn players() -> Vec<Player> {
        vec![
            Player::new(PlayerId(0), "Alice", 'X'),
            Player::new(PlayerId(1), "Bob", 'O'),
        ]
    }

    fn kind_at(grid: &Grid, row: usize, col: usize) -> PieceKind {
        grid.get(Location::new(row, col)).unwrap().piece().unwrap().kind
    }

    #[test]
    fn test_setup_places_pawns_and_back_ranks() {
        let session = Session::new(&Chess, players()).unwrap();
        let grid = session.grid();

        for col in 0..8 {
            assert_eq!(
                kind_at(grid, 1, col),
                PieceKind::Pawn {
                    has_moved: false,
                    forward: 1
                }
            );
            assert_eq!(
                kind_at(grid, 6, col),
                PieceKind::Pawn {
                    has_moved: false,
                    forward: -1
                }
            );
        }
        assert_eq!(kind_at(grid, 0, 3), PieceKind::Queen);
        assert_eq!(kind_at(grid, 0, 4), PieceKind::King);
        // Mirrored placement swaps the files on the far rank.
        assert_eq!(kind_at(grid, 7, 4), PieceKind::Queen);
        assert_eq!(kind_at(grid, 7, 3), PieceKind::King);
        assert_eq!(kind_at(grid, 7, 0), PieceKind::Rook);

        // Middle ranks are empty.
        for row in 2..6 {
            for col in 0..8 {
                assert!(grid.get(Location::new(row, col)).unwrap().is_empty());
            }
        }
    }

    #[test]
    fn test_ownership_split() {
        let session = Session::new(&Chess, players()).unwrap();
        let grid = session.grid();
        for col in 0..8 {
            assert_eq!(
                grid.get(Location::new(0, col)).unwrap().piece().unwrap().owner,
                PlayerId(0)
            );
            assert_eq!(
                grid.get(Location::new(7, col)).unwrap().piece().unwrap().owner,
                PlayerId(1)
            );
        }
    }

    /// Capturing the king ends the game on the spot.
    #[test]
    fn test_king_capture_wins() {
        let mut game = Chess;
        let mut session = Session::new(&game, players()).unwrap();

        // Rebuild the board as the scenario: Bob's king at (0, 4), Alice's
        // queen with a clear diagonal to it from (4, 0).
        *session.grid_mut() = Grid::new(8, 8).unwrap();
        session
            .grid_mut()
            .set(
                Location::new(0, 4),
                Cell::Occupied(Piece::new(PlayerId(1), PieceKind::King)),
            )
            .unwrap();
        session
            .grid_mut()
            .set(
                Location::new(4, 0),
                Cell::Occupied(Piece::new(PlayerId(0), PieceKind::Queen)),
            )
            .unwrap();

        let mut console = ScriptedConsole::new(["4, 0", "0, 4"]);
        let outcome = session.run(&mut game, &mut console).unwrap();

        assert_eq!(outcome, SessionOutcome::Winner(PlayerId(0)));
        assert!(session.is_over());
        // No further turns are accepted.
        assert_eq!(
            session.apply_piece_move(Location::new(0, 4), Location::new(0, 5)),
            Err(MoveError::GameOver)
        );
    }

    /// "back" at destination selection returns to piece selection without
    /// consuming the turn.
    #[test]
    fn test_back_reselects_piece() {
        let mut game = Chess;
        let mut session = Session::new(&game, players()).unwrap();

        let mut console = ScriptedConsole::new(["1, 0", "back", "1, 4", "3, 4", "exit"]);
        let outcome = session.run(&mut game, &mut console).unwrap();

        assert_eq!(outcome, SessionOutcome::Exited);
        // Alice's opening two-step landed even though she backed out of the
        // first selection.
        assert!(!session.grid().get(Location::new(3, 4)).unwrap().is_empty());
        assert!(session.grid().get(Location::new(1, 4)).unwrap().is_empty());
        // The exit arrived on Bob's turn, so exactly one turn was consumed.
        assert_eq!(session.current_player().id(), PlayerId(1));
    }

    /// Malformed and out-of-range input is re-prompted, never fatal.
    #[test]
    fn test_malformed_input_reprompts() {
        let mut game = Chess;
        let mut session = Session::new(&game, players()).unwrap();

        let mut console =
            ScriptedConsole::new(["9,9", "nonsense", "1, 4", "9, 9", "3, 4", "exit"]);
        let outcome = session.run(&mut game, &mut console).unwrap();

        assert_eq!(outcome, SessionOutcome::Exited);
        let format_errors = console
            .transcript()
            .iter()
            .filter(|line| line.starts_with("Input is in the wrong format"))
            .count();
        assert_eq!(format_errors, 3);
        assert!(!session.grid().get(Location::new(3, 4)).unwrap().is_empty());
    }

    /// Selecting an empty cell or the opponent's piece re-prompts.
    #[test]
    fn test_invalid_piece_selection_reprompts() {
        let mut game = Chess;
        let mut session = Session::new(&game, players()).unwrap();

        // (3, 3) is empty; (6, 0) belongs to Bob; (1, 0) is fine.
        let mut console = ScriptedConsole::new(["3, 3", "6, 0", "1, 0", "2, 0", "exit"]);
        let outcome = session.run(&mut game, &mut console).unwrap();

        assert_eq!(outcome, SessionOutcome::Exited);
        let rejections = console
            .transcript()
            .iter()
            .filter(|line| *line == "Invalid piece. Try again")
            .count();
        assert_eq!(rejections, 2);
    }

    /// An illegal destination re-prompts with its own message.
    #[test]
    fn test_invalid_destination_reprompts() {
        let mut game = Chess;
        let mut session = Session::new(&game, players()).unwrap();

        // A pawn cannot move sideways; then a legal push, then exit.
        let mut console = ScriptedConsole::new(["1, 0", "1, 1", "2, 0", "exit"]);
        let outcome = session.run(&mut game, &mut console).unwrap();

        assert_eq!(outcome, SessionOutcome::Exited);
        assert!(console
            .transcript()
            .iter()
            .any(|line| line == "Invalid destination. Try again"));
    }
}
