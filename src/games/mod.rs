//! The game catalog: concrete [`Game`](crate::engine::Game)
//! implementations built from the engine.

pub mod chess;
pub mod connect_four;

pub use chess::Chess;
pub use connect_four::ConnectFour;
