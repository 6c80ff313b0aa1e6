//! Outcome consistency invariant: the recorded outcome matches the board.

use super::super::rules::{check_winner, is_full};
use super::super::{GameState, Outcome};
use super::Invariant;

/// Invariant: the outcome is exactly what the rules say about the board.
///
/// - `Win(P)` requires a completed line of P.
/// - `Draw` requires a full board with no completed line.
/// - `InProgress` requires no completed line and at least one empty square.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.outcome() {
            Outcome::Win(player) => check_winner(board) == Some(player),
            Outcome::Draw => is_full(board) && check_winner(board).is_none(),
            Outcome::InProgress => !is_full(board) && check_winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Outcome matches the lines and fill state of the board"
    }
}
