//! The engine: the operations callers invoke.
//!
//! `LudoEngine` owns the configuration and the die. Game state is a plain
//! value passed in by reference; every operation returns a new state and
//! leaves its input untouched, so a rejected call has nothing to undo.
//!
//! ## Flow
//!
//! ```text
//! roll_dice ──► has_legal_move? ──no──► auto-pass ──► next color rolls
//!                    │yes
//!                    ▼
//!               apply_move ──► captures ──► win? ──yes──► Concluded
//!                                            │no
//!                                            ▼
//!                                 rolled 6? keep turn : pass
//! ```
//!
//! Any pacing a presentation layer wants (a roll "settling", a pause before
//! the hand-off) is applied around these calls, never inside them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use super::dice::{has_legal_move, is_die_value, movable_tokens, DiceSource};
use super::movement::{apply_plan, plan_move, MoveOutcome};
use super::turn::{after_move, after_stuck_roll, TurnOutcome};
use super::win::check_winner;
use crate::core::{
    Action, Color, GameRng, GameState, LastRoll, LudoConfig, Phase, Preferences, RuleError, TokenId,
    TokenRef,
};

/// Result of a roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollOutcome {
    /// At least one token may move; the roll waits for `apply_move`.
    Movable {
        value: u8,
        tokens: SmallVec<[TokenId; 4]>,
    },
    /// No legal move. The turn has already passed to `next`.
    Stuck { value: u8, next: Color },
}

impl RollOutcome {
    /// The rolled value.
    #[must_use]
    pub fn value(&self) -> u8 {
        match self {
            RollOutcome::Movable { value, .. } | RollOutcome::Stuck { value, .. } => *value,
        }
    }

    /// True when the roll had no legal move.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        matches!(self, RollOutcome::Stuck { .. })
    }
}

/// The rules engine.
///
/// Generic over its die so replays and scripted scenarios can substitute
/// `ScriptedDice` for the default seeded `GameRng`.
#[derive(Clone, Debug)]
pub struct LudoEngine<D: DiceSource = GameRng> {
    config: LudoConfig,
    dice: D,
}

impl LudoEngine<GameRng> {
    /// Create an engine with a die seeded from `config.seed` (or entropy).
    #[must_use]
    pub fn new(config: LudoConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_dice(config, rng)
    }
}

impl Default for LudoEngine<GameRng> {
    fn default() -> Self {
        Self::new(LudoConfig::default())
    }
}

impl<D: DiceSource> LudoEngine<D> {
    /// Create an engine with a custom die.
    pub fn with_dice(config: LudoConfig, dice: D) -> Self {
        Self { config, dice }
    }

    #[must_use]
    pub fn config(&self) -> &LudoConfig {
        &self.config
    }

    /// The die, e.g. to capture `GameRng::state()` for a replay.
    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    // === Lifecycle ===

    /// A fresh game in play: all tokens in base, the start color to roll.
    #[must_use]
    pub fn new_game(&self) -> GameState {
        GameState::new(self.config.start_color, Phase::Playing, Preferences::default())
    }

    /// A fresh board in the pre-game phase (splash/menu), accepting no rolls.
    #[must_use]
    pub fn lobby(&self, preferences: Preferences) -> GameState {
        GameState::new(self.config.start_color, Phase::PreGame, preferences)
    }

    /// Leave the pre-game phase and begin (or resume) play.
    pub fn start_game(&self, state: &GameState) -> Result<GameState, RuleError> {
        if state.phase() != Phase::PreGame {
            return Err(RuleError::phase(state.phase(), "only a pre-game board can be started"));
        }
        let mut next = state.clone();
        next.phase = Phase::Playing;
        debug!(turn = %next.turn(), "play started");
        Ok(next)
    }

    /// Step back to the pre-game phase (the menu), keeping the board.
    ///
    /// Only allowed while no roll is pending.
    pub fn suspend(&self, state: &GameState) -> Result<GameState, RuleError> {
        if state.phase() != Phase::Playing {
            return Err(RuleError::phase(state.phase(), "only a game in play can be suspended"));
        }
        if state.dice_value().is_some() {
            return Err(RuleError::phase(state.phase(), "cannot suspend with a roll pending"));
        }
        let mut next = state.clone();
        next.phase = Phase::PreGame;
        debug!("play suspended");
        Ok(next)
    }

    /// Start over: fresh board in play, optionally keeping preferences.
    #[must_use]
    pub fn reset_game(&self, previous: Option<&Preferences>) -> GameState {
        let preferences = previous.copied().unwrap_or_default();
        debug!(sound = preferences.sound_enabled, "game reset");
        GameState::new(self.config.start_color, Phase::Playing, preferences)
    }

    /// Replace caller preferences. Allowed in any phase.
    #[must_use]
    pub fn set_preferences(&self, state: &GameState, preferences: Preferences) -> GameState {
        let mut next = state.clone();
        next.preferences = preferences;
        next
    }

    // === Rolling ===

    /// Roll the die for the current player.
    ///
    /// Fails with `InvalidPhase` outside play or while a roll is pending.
    /// A roll with no legal move is recorded and the turn passes at once.
    #[instrument(level = "debug", skip_all, fields(turn = %state.turn()))]
    pub fn roll_dice(&mut self, state: &GameState) -> Result<(GameState, RollOutcome), RuleError> {
        check_can_roll(state).inspect_err(|e| debug!(error = %e, "roll rejected"))?;
        let value = self.dice.roll_die();
        Ok(self.resolve_roll(state, value))
    }

    /// Same transition as `roll_dice` with a caller-chosen value.
    #[instrument(level = "debug", skip_all, fields(turn = %state.turn(), value = value))]
    pub fn roll_with(
        &self,
        state: &GameState,
        value: u8,
    ) -> Result<(GameState, RollOutcome), RuleError> {
        if !is_die_value(value) {
            return Err(RuleError::InvalidDieValue(value));
        }
        check_can_roll(state).inspect_err(|e| debug!(error = %e, "roll rejected"))?;
        Ok(self.resolve_roll(state, value))
    }

    fn resolve_roll(&self, state: &GameState, value: u8) -> (GameState, RollOutcome) {
        let mut next = state.clone();
        let color = next.turn();
        next.last_roll = Some(LastRoll { color, value });
        next.record(Action::Roll { value });

        if has_legal_move(next.current_player(), value) {
            let tokens = movable_tokens(next.current_player(), value);
            debug!(%color, value, movable = tokens.len(), "rolled");
            next.dice_value = Some(value);
            next.can_move = true;
            return (next, RollOutcome::Movable { value, tokens });
        }

        debug!(%color, value, "rolled with no legal move");
        let next_color = after_stuck_roll(&mut next);
        (next, RollOutcome::Stuck { value, next: next_color })
    }

    // === Moving ===

    /// Move one of the current player's tokens by the pending roll.
    #[instrument(level = "debug", skip_all, fields(token = %token))]
    pub fn apply_move(
        &self,
        state: &GameState,
        token: TokenRef,
    ) -> Result<(GameState, MoveOutcome), RuleError> {
        let plan = plan_move(state, self.config.safe_cells, token)
            .inspect_err(|e| debug!(error = %e, "move rejected"))?;

        let mut next = state.clone();
        apply_plan(&mut next, &plan);
        debug!(
            from = %plan.from,
            to = %plan.to,
            captured = plan.captured.len(),
            "moved"
        );

        let player_won = check_winner(&mut next, token.color);
        let turn = if player_won {
            TurnOutcome::GameOver {
                winner: token.color,
            }
        } else {
            after_move(&mut next, plan.roll, self.config.six_streak_cap)
        };

        let outcome = MoveOutcome {
            kind: plan.kind(),
            token,
            from: plan.from,
            to: plan.to,
            captured: plan.captured,
            player_won,
            turn,
        };
        Ok((next, outcome))
    }

    /// Move the current player's token `id`.
    pub fn move_token(
        &self,
        state: &GameState,
        id: TokenId,
    ) -> Result<(GameState, MoveOutcome), RuleError> {
        self.apply_move(state, TokenRef::new(state.turn(), id))
    }

    /// Tokens the current player may move with the pending roll.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState) -> SmallVec<[TokenId; 4]> {
        match state.dice_value() {
            Some(value) if state.can_move() && state.phase() == Phase::Playing => {
                movable_tokens(state.current_player(), value)
            }
            _ => SmallVec::new(),
        }
    }
}

fn check_can_roll(state: &GameState) -> Result<(), RuleError> {
    if state.phase() != Phase::Playing {
        return Err(RuleError::phase(state.phase(), "rolls are only accepted during play"));
    }
    if state.dice_value().is_some() {
        return Err(RuleError::phase(state.phase(), "a roll is already pending"));
    }
    Ok(())
}
