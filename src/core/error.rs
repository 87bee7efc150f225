//! Rule violations reported by the engine.
//!
//! Every error is local and recoverable: a rejected call leaves the game
//! state exactly as it was, and the caller re-offers whatever is legal.
//! A roll with no legal move is *not* an error; see `RollOutcome::Stuck`.

use thiserror::Error;

use super::color::Color;
use super::state::Phase;
use super::token::Position;

/// Why a move request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    #[error("{owner} token cannot be moved on {turn}'s turn")]
    NotYourToken { owner: Color, turn: Color },

    #[error("a 6 is needed to leave base, rolled {rolled}")]
    NeedSixToEnter { rolled: u8 },

    #[error("moving {rolled} from progress {progress} overshoots the centre")]
    Overshoot { progress: u8, rolled: u8 },

    #[error("token has already finished")]
    TokenFinished,

    #[error("token stands at {position}, which is not on the board")]
    OffBoard { position: Position },
}

/// Engine error taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Operation attempted outside the phase or turn step that permits it.
    #[error("invalid in phase {phase:?}: {reason}")]
    InvalidPhase { phase: Phase, reason: &'static str },

    /// Move violates ownership, base-entry or overshoot rules.
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMoveReason),

    /// Die value outside 1..=6.
    #[error("die value {0} is outside 1..=6")]
    InvalidDieValue(u8),

    /// Token index outside 0..=3.
    #[error("token id {0} is outside 0..=3")]
    InvalidTokenId(u8),

    /// Track offset or lane depth outside the board.
    #[error("position {0} is not on the board")]
    InvalidPosition(Position),
}

impl RuleError {
    pub(crate) const fn phase(phase: Phase, reason: &'static str) -> Self {
        Self::InvalidPhase { phase, reason }
    }
}
