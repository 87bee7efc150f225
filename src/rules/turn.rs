//! Turn scheduler: who rolls next.
//!
//! A turn runs `AwaitingRoll → roll → (move) → AwaitingRoll`. The roll
//! either permits a move or is stuck; a stuck roll is resolved on the spot
//! by passing the turn, so the only observable steps of a live game are
//! waiting for a roll and waiting for a move.
//!
//! After a consumed roll the player keeps the turn only if it was a six
//! (and the optional streak cap is not reached). Every other outcome hands
//! the turn to the next color in rotation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::movement::ENTRY_ROLL;
use crate::core::{Color, GameState, Phase};

/// Observable position in the turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnStep {
    /// Not in play (pre-game or concluded).
    Idle,
    /// The current player must roll.
    AwaitingRoll,
    /// A roll with at least one legal move is pending.
    AwaitingMove,
}

/// What happened to the turn after a roll was consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Same player rolls again.
    Retained,
    /// Play moved on to `next`.
    Passed { next: Color },
    /// The move won the game.
    GameOver { winner: Color },
}

impl GameState {
    /// Where the current turn stands.
    #[must_use]
    pub fn turn_step(&self) -> TurnStep {
        if self.phase != Phase::Playing {
            TurnStep::Idle
        } else if self.dice_value.is_some() && self.can_move {
            TurnStep::AwaitingMove
        } else {
            TurnStep::AwaitingRoll
        }
    }
}

/// Settle the turn after a move consumed `roll`.
///
/// Re-arms the dice for whoever rolls next.
pub(crate) fn after_move(state: &mut GameState, roll: u8, streak_cap: Option<u8>) -> TurnOutcome {
    if roll == ENTRY_ROLL {
        state.six_streak = state.six_streak.saturating_add(1);
        let capped = streak_cap.is_some_and(|cap| state.six_streak >= cap);
        if !capped {
            debug!(color = %state.turn, streak = state.six_streak, "bonus roll");
            state.disarm();
            return TurnOutcome::Retained;
        }
        debug!(color = %state.turn, cap = ?streak_cap, "six streak capped");
    }
    TurnOutcome::Passed { next: pass(state) }
}

/// Settle the turn after a roll with no legal move. Always passes;
/// returns the color now to roll.
pub(crate) fn after_stuck_roll(state: &mut GameState) -> Color {
    pass(state)
}

fn pass(state: &mut GameState) -> Color {
    let next = state.turn.next();
    debug!(from = %state.turn, to = %next, "turn passes");
    state.advance_turn(next);
    next
}
