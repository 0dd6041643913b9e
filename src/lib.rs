//! # boardgame-engine
//!
//! A small framework for turn-based, grid-based two-player board games
//! played through a text interface, with chess and connect-four as the
//! built-in games. The engine supplies the grid, piece-movement legality,
//! k-in-a-row win detection, and the turn/session state machine; a game
//! supplies board setup, input semantics, and the per-turn rules.
//!
//! ## Modules
//!
//! - [`engine`] — grid, pieces and legality, alignment scanner, session
//!   state machine
//! - [`games`] — the catalog: chess and connect-four
//! - [`console`] — the I/O collaborator seam (stdio and scripted consoles)
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — structured error types
//!
//! ## Threading
//!
//! Everything here is single-threaded and synchronous. `Grid` and `Session`
//! carry no internal synchronization; mutating them from multiple threads
//! requires external locking.

pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod games;
