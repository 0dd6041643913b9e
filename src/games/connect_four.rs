//! Connect-four. Players pick a column; the chip falls to the lowest empty
//! cell. The first run of `connect` chips in a row, column, or diagonal
//! wins; a full board with no run is a draw.

use crate::config::ConnectFourConfig;
use crate::console::Console;
use crate::engine::grid::{Cell, Grid, Location};
use crate::engine::input::InputMode;
use crate::engine::piece::Piece;
use crate::engine::player::Player;
use crate::engine::scan::{has_consecutive, ScanDirections};
use crate::engine::session::{read_well_formed, Game, PromptReply, Session, TurnStatus};
use crate::error::{MoveError, SessionError};

const INSTRUCTIONS: &str =
    "You can select which column to drop your chip into by typing in the column number.";

#[derive(Debug)]
pub struct ConnectFour {
    config: ConnectFourConfig,
}

impl ConnectFour {
    pub fn new(config: ConnectFourConfig) -> Self {
        ConnectFour { config }
    }

    /// Drop a chip into `col`, scanning from the bottom row upward for the
    /// first empty cell. A full column is an invalid destination.
    pub fn drop_chip(grid: &mut Grid, col: usize, chip: Piece) -> Result<usize, MoveError> {
        for row in (0..grid.rows()).rev() {
            let location = Location::new(row, col);
            match grid.get(location) {
                Ok(cell) if cell.is_empty() => {
                    grid.set(location, Cell::Occupied(chip))
                        .map_err(|_| MoveError::InvalidDestination)?;
                    return Ok(row);
                }
                Ok(_) => continue,
                Err(_) => return Err(MoveError::InvalidDestination),
            }
        }
        Err(MoveError::InvalidDestination)
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        ConnectFour::new(ConnectFourConfig::default())
    }
}

impl Game for ConnectFour {
    fn name(&self) -> &str {
        "connect-four"
    }

    fn instructions(&self) -> &str {
        INSTRUCTIONS
    }

    fn input_mode(&self) -> InputMode {
        InputMode::ColOnly
    }

    fn labels(&self) -> (bool, bool) {
        (false, true)
    }

    fn setup(&self, _players: &[Player]) -> Result<Grid, SessionError> {
        Ok(Grid::new(self.config.rows, self.config.cols)?)
    }

    fn play_turn(
        &mut self,
        session: &mut Session,
        console: &mut dyn Console,
    ) -> Result<TurnStatus, SessionError> {
        let mover = session.current_player().id();
        let chip = Piece::chip(mover, session.current_player().token());
        console.show(&format!(
            "{}'s turn. Choose a column to drop your chip in",
            session.current_player()
        ))?;

        loop {
            match read_well_formed(console, session.grid(), InputMode::ColOnly, false)? {
                PromptReply::Exit => return Ok(TurnStatus::Exited),
                PromptReply::Back => continue,
                PromptReply::Input(text) => {
                    let Ok(col) = text.trim().parse::<usize>() else {
                        continue;
                    };
                    match Self::drop_chip(session.grid_mut(), col, chip) {
                        Ok(_row) => break,
                        Err(err) => console.show(&err.to_string())?,
                    }
                }
            }
        }

        if has_consecutive(session.grid(), self.config.connect, ScanDirections::all()) {
            session.declare_winner(mover);
        } else if session.grid().is_full() {
            session.declare_draw();
        }
        Ok(TurnStatus::Played)
    }
}
