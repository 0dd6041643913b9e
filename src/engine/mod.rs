//! The generic rule engine shared by all games: grid storage, input
//! parsing, piece legality, alignment scanning, and the session state
//! machine.

pub mod grid;
pub mod input;
pub mod piece;
pub mod player;
pub mod scan;
pub mod session;

pub use grid::{Cell, Grid, Location};
pub use input::InputMode;
pub use piece::{Piece, PieceKind};
pub use player::{Player, PlayerId};
pub use scan::{has_consecutive, ScanDirections};
pub use session::{Game, GameOutcome, Session, SessionOutcome, TurnStatus};
