//! Dice resolver: where roll values come from and what they permit.

use smallvec::SmallVec;
use tracing::trace;

use super::movement::step;
use crate::core::{GameRng, PlayerState, RuleError, TokenId, DIE_FACES};

/// A source of die values.
///
/// The engine draws exactly one value per roll and keeps no state of its
/// own between rolls; any sequencing lives in the source.
pub trait DiceSource {
    /// Produce a value in `1..=6`.
    fn roll_die(&mut self) -> u8;
}

impl DiceSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        GameRng::roll_die(self)
    }
}

/// Replays a fixed sequence of die values, cycling when exhausted.
///
/// Useful for deterministic replays and scripted scenarios.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    values: Vec<u8>,
    next: usize,
}

impl ScriptedDice {
    /// Create from a non-empty list of values, each in `1..=6`.
    pub fn new(values: impl Into<Vec<u8>>) -> Result<Self, RuleError> {
        let values = values.into();
        if values.is_empty() {
            return Err(RuleError::InvalidDieValue(0));
        }
        if let Some(&bad) = values.iter().find(|v| !is_die_value(**v)) {
            return Err(RuleError::InvalidDieValue(bad));
        }
        Ok(Self { values, next: 0 })
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}

/// Whether `value` is a face of the die.
#[must_use]
pub const fn is_die_value(value: u8) -> bool {
    value >= 1 && value <= DIE_FACES
}

/// Whether any of the player's tokens can legally move `value` steps.
///
/// True iff some token is in base and `value` is 6, or is in play and
/// would not overshoot the centre. Finished tokens never count.
#[must_use]
pub fn has_legal_move(player: &PlayerState, value: u8) -> bool {
    let legal = player
        .tokens()
        .iter()
        .any(|token| step(token.position, value).is_ok());
    trace!(color = %player.color, value, legal, "checked for legal move");
    legal
}

/// Tokens the player may move with `value`, in ID order.
#[must_use]
pub fn movable_tokens(player: &PlayerState, value: u8) -> SmallVec<[TokenId; 4]> {
    player
        .tokens()
        .iter()
        .filter(|token| step(token.position, value).is_ok())
        .map(|token| token.id)
        .collect()
}
