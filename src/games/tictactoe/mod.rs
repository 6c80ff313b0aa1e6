//! Tic-tac-toe: board model, rules and the authoritative game engine.

mod action;
mod engine;
mod outcome;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use engine::GameEngine;
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, GameState, Player, Square};
