//! Move engine: validation, destination, captures.
//!
//! A move is computed in two stages. `plan_move` validates against the
//! current state and works out everything the move will do without touching
//! the state; `apply_plan` commits a plan. Callers that only want to know
//! whether a move is legal stop after planning.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::turn::TurnOutcome;
use crate::board::{global_cell, is_safe_cell, relative_to_global};
use crate::core::{
    Action, GameState, IllegalMoveReason, Phase, Position, RuleError, SafeCellPolicy, TokenRef,
};

/// The only roll that brings a token out of base (and earns a bonus roll).
pub const ENTRY_ROLL: u8 = 6;

/// Tokens sent home by one move. A single cell holds at most a handful.
pub type Captures = SmallVec<[TokenRef; 4]>;

/// Where a token at `from` lands after moving `roll` steps.
///
/// Overshooting the centre is an error, never clamped.
///
/// ```
/// use ludo_engine::core::Position;
/// use ludo_engine::rules::step;
///
/// assert_eq!(step(Position::Base, 6), Ok(Position::Track(0)));
/// assert_eq!(step(Position::Track(48), 4), Ok(Position::HomeStretch(2)));
/// assert_eq!(step(Position::HomeStretch(5), 2), Ok(Position::Finished));
/// assert!(step(Position::HomeStretch(5), 3).is_err());
/// ```
pub fn step(from: Position, roll: u8) -> Result<Position, IllegalMoveReason> {
    if from.is_finished() {
        return Err(IllegalMoveReason::TokenFinished);
    }
    if !from.is_on_board() {
        return Err(IllegalMoveReason::OffBoard { position: from });
    }

    match from.progress() {
        None if roll == ENTRY_ROLL => Ok(Position::Track(0)),
        None => Err(IllegalMoveReason::NeedSixToEnter { rolled: roll }),
        Some(progress) => Position::from_progress(progress.saturating_add(roll)).ok_or(
            IllegalMoveReason::Overshoot {
                progress,
                rolled: roll,
            },
        ),
    }
}

/// Every token on the shared loop, grouped by global cell.
///
/// Tokens in base, in a home lane, or finished are not on the loop and
/// never appear.
#[must_use]
pub fn occupancy(state: &GameState) -> FxHashMap<u8, Captures> {
    let mut cells: FxHashMap<u8, Captures> = FxHashMap::default();
    for player in state.players() {
        for token in player.tokens() {
            if let Some(cell) = global_cell(token.color, token.position) {
                cells.entry(cell).or_default().push(token.token_ref());
            }
        }
    }
    cells
}

/// What kind of move happened, for caller feedback.
///
/// When several apply, the first listed wins: a move that finishes is a
/// `Finish`, one that captures is a `Capture`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Finish,
    Capture,
    EnterPlay,
    Advance,
}

/// A validated move, not yet applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePlan {
    pub token: TokenRef,
    pub roll: u8,
    pub from: Position,
    pub to: Position,
    pub captured: Captures,
}

impl MovePlan {
    #[must_use]
    pub fn kind(&self) -> MoveKind {
        if self.to.is_finished() {
            MoveKind::Finish
        } else if !self.captured.is_empty() {
            MoveKind::Capture
        } else if self.from.is_base() {
            MoveKind::EnterPlay
        } else {
            MoveKind::Advance
        }
    }
}

/// Result of a successful move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub kind: MoveKind,
    pub token: TokenRef,
    pub from: Position,
    /// Resulting position of the moved token.
    pub to: Position,
    pub captured: Captures,
    /// The mover's four tokens are now all finished.
    pub player_won: bool,
    /// What happened to the turn afterwards.
    pub turn: TurnOutcome,
}

/// Validate a move and work out its effects.
pub fn plan_move(
    state: &GameState,
    policy: SafeCellPolicy,
    token: TokenRef,
) -> Result<MovePlan, RuleError> {
    if state.phase() != Phase::Playing {
        return Err(RuleError::phase(state.phase(), "moves are only accepted during play"));
    }
    let roll = match state.dice_value() {
        Some(roll) if state.can_move() => roll,
        _ => return Err(RuleError::phase(state.phase(), "no movable roll is pending")),
    };
    if token.color != state.turn() {
        return Err(IllegalMoveReason::NotYourToken {
            owner: token.color,
            turn: state.turn(),
        }
        .into());
    }

    let from = state.token(token).position;
    let to = step(from, roll)?;
    let captured = match to {
        Position::Track(offset) => captures_at(state, policy, token, offset),
        _ => Captures::new(),
    };

    Ok(MovePlan {
        token,
        roll,
        from,
        to,
        captured,
    })
}

/// Opposing tokens that a mover landing on `offset` sends home.
fn captures_at(
    state: &GameState,
    policy: SafeCellPolicy,
    mover: TokenRef,
    offset: u8,
) -> Captures {
    let cell = relative_to_global(mover.color, offset);
    if is_safe_cell(cell, policy) {
        trace!(cell, "landing on safe cell");
        return Captures::new();
    }

    occupancy(state)
        .remove(&cell)
        .unwrap_or_default()
        .into_iter()
        .filter(|other| other.color != mover.color)
        .collect()
}

/// Commit a plan: move the token, send captured tokens home, record history.
pub(crate) fn apply_plan(state: &mut GameState, plan: &MovePlan) {
    state.set_position(plan.token, plan.to);
    state.record(Action::Move {
        token: plan.token.id,
        from: plan.from,
        to: plan.to,
    });

    for &victim in &plan.captured {
        state.set_position(victim, Position::Base);
        state.record(Action::Capture { victim });
    }
}
