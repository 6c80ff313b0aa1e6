//! Game engine for tic-tac-toe.
//!
//! [`GameEngine`] is the single authority over the board, the turn and the
//! outcome. It exposes three commands: [`get_state`](GameEngine::get_state),
//! [`make_move`](GameEngine::make_move) and [`reset`](GameEngine::reset).
//! Every command returns a full snapshot; invalid moves are no-ops.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::{check_winner, is_full};
use super::{GameState, Outcome, Position};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine holding a fresh game (empty board, X to move).
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns a snapshot of the current game state.
    pub fn get_state(&self) -> GameState {
        self.state.clone()
    }

    /// Places the current player's mark at `position`.
    ///
    /// On success the outcome is re-evaluated before the turn passes, so a
    /// finished game keeps the final mover as its current player.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has been won or drawn.
    /// - [`MoveError::SquareOccupied`] if the square already holds a mark.
    ///
    /// The state is untouched on error.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn play(&mut self, position: Position) -> Result<Move, MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let mv = Move::new(self.state.current_player(), position);
        self.state.place(position);

        let winner = check_winner(self.state.board());
        if let Some(winner) = winner {
            self.state.set_outcome(Outcome::Win(winner));
        } else if is_full(self.state.board()) {
            self.state.set_outcome(Outcome::Draw);
        } else {
            self.state.switch_turn();
        }

        debug_assert!(
            TicTacToeInvariants::check_all(&self.state).is_ok(),
            "invariants violated after {}",
            mv
        );

        match self.state.outcome() {
            Outcome::InProgress => {
                info!(%mv, next = %self.state.current_player(), "Move accepted");
            }
            outcome => {
                info!(%mv, %outcome, "Move ended the game");
            }
        }
        debug!(board = %self.state.board(), "Board after move");

        Ok(mv)
    }

    /// Applies a move at a raw board index and returns the resulting state.
    ///
    /// Out-of-range indices, occupied squares and moves after the game has
    /// ended are rejected: the state is returned unchanged.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, position: i64) -> GameState {
        let result = Position::try_from(position).and_then(|pos| self.play(pos));
        if let Err(error) = result {
            warn!(position, %error, "Move rejected");
        }
        self.get_state()
    }

    /// Starts a new game in place and returns its state.
    #[instrument(skip(self), fields(previous = %self.state.outcome()))]
    pub fn reset(&mut self) -> GameState {
        self.state = GameState::new();
        info!("Game reset");
        self.get_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    #[test]
    fn test_play_places_mark_and_switches_turn() {
        let mut engine = GameEngine::new();
        let mv = engine.play(Position::Center).unwrap();
        assert_eq!(mv, Move::new(Player::X, Position::Center));

        let state = engine.get_state();
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_play_rejects_occupied_square() {
        let mut engine = GameEngine::new();
        engine.play(Position::Center).unwrap();
        assert_eq!(
            engine.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(engine.get_state().current_player(), Player::O);
    }

    #[test]
    fn test_play_rejects_after_game_over() {
        let mut engine = GameEngine::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            engine.play(pos).unwrap();
        }
        assert_eq!(engine.get_state().outcome(), Outcome::Win(Player::X));
        assert_eq!(engine.play(Position::BottomRight), Err(MoveError::GameOver));
    }

    #[test]
    fn test_winner_stays_current_player() {
        let mut engine = GameEngine::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            engine.play(pos).unwrap();
        }
        assert_eq!(engine.get_state().current_player(), Player::X);
    }

    #[test]
    fn test_make_move_out_of_range_is_noop() {
        let mut engine = GameEngine::new();
        let before = engine.get_state();
        assert_eq!(engine.make_move(-1), before);
        assert_eq!(engine.make_move(9), before);
        assert_eq!(engine.make_move(i64::MAX), before);
    }

    #[test]
    fn test_reset_mid_game() {
        let mut engine = GameEngine::new();
        engine.make_move(4);
        engine.make_move(0);
        assert_eq!(engine.reset(), GameState::new());
        assert_eq!(engine.get_state(), GameState::new());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut engine = GameEngine::new();
        let snapshot = engine.get_state();
        engine.make_move(4);
        assert_eq!(snapshot, GameState::new());
        assert_ne!(engine.get_state(), snapshot);
    }
}
