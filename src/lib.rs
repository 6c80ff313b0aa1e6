//! Tic-tac-toe game engine
//!
//! The engine is the single source of truth for a two-player match: board
//! contents, turn order and the win/draw outcome. Display clients drive it
//! through three commands and render the snapshots it returns.
//!
//! # Architecture
//!
//! - **Games**: board model, rules, invariants and the [`GameEngine`]
//! - **Snapshot**: the [`GameSnapshot`] wire shape returned to clients
//! - **Server**: HTTP endpoints for `get_game_state`, `make_move`, `reset_game`
//! - **Config**: [`ServerConfig`] layered from TOML, environment and flags
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Outcome, Player};
//!
//! let mut engine = GameEngine::new();
//! for position in [0, 3, 1, 4, 2] {
//!     engine.make_move(position);
//! }
//! assert_eq!(engine.get_state().outcome(), Outcome::Win(Player::X));
//!
//! // Finished games ignore further moves until reset.
//! let before = engine.get_state();
//! assert_eq!(engine.make_move(8), before);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod server;
mod snapshot;

// Crate-level exports - Configuration
pub use config::{ConfigError, HOST_ENV, PORT_ENV, ServerConfig};

// Crate-level exports - Server
pub use server::{AppState, MakeMoveRequest, ServerError, router, serve};

// Crate-level exports - Wire types
pub use snapshot::{Cell, GameSnapshot, Winner};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameEngine, GameState, Move, MoveError, Outcome, Player, Position, Square,
    invariants, rules,
};
