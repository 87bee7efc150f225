//! Game state: the single aggregate the engine transitions.
//!
//! ## PlayerState
//!
//! One color's four tokens. `has_won` is derived, never stored.
//!
//! ## GameState
//!
//! Complete game state:
//! - Phase, turn, pending die value, move gate, winner
//! - Per-color players
//! - Last roll (kept for display after an auto-pass clears the die)
//! - Caller preferences (opaque to the rules)
//! - Action history
//!
//! Uses an `im` persistent vector for history so that every transition can
//! return a fresh state without copying the log.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::color::{Color, ColorMap};
use super::error::RuleError;
use super::token::{Position, Token, TokenId, TokenRef};

/// Coarse lifecycle gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Splash/menu: the board exists but no roll or move is accepted.
    PreGame,
    /// Normal play.
    #[default]
    Playing,
    /// A winner has been declared; frozen until reset.
    Concluded,
}

/// Caller-level settings carried across resets. The rules never read them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Preferences {
    pub sound_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sound_enabled: true,
        }
    }
}

/// The most recent roll, for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LastRoll {
    pub color: Color,
    pub value: u8,
}

/// One color's tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    pub color: Color,
    tokens: [Token; 4],
}

impl PlayerState {
    /// All four tokens in base.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            tokens: TokenId::ALL.map(|id| Token::new(color, id)),
        }
    }

    /// The four tokens, ordered by ID.
    #[must_use]
    pub fn tokens(&self) -> &[Token; 4] {
        &self.tokens
    }

    #[must_use]
    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    pub(crate) fn set_position(&mut self, id: TokenId, position: Position) {
        self.tokens[id.index()].position = position;
    }

    /// True iff all four tokens are finished.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.tokens.iter().all(|t| t.position.is_finished())
    }

    /// Number of finished tokens.
    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.position.is_finished()).count()
    }
}

/// The full game state.
///
/// Read freely; change it only through `LudoEngine` operations. Each
/// operation takes a state by reference and returns a new one, so a
/// rejected call can never leave a half-applied state behind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: ColorMap<PlayerState>,
    pub(crate) turn: Color,
    pub(crate) dice_value: Option<u8>,
    pub(crate) can_move: bool,
    pub(crate) winner: Option<Color>,
    pub(crate) phase: Phase,
    pub(crate) last_roll: Option<LastRoll>,
    pub(crate) six_streak: u8,
    pub(crate) turn_number: u32,
    pub(crate) action_sequence: u32,
    pub(crate) preferences: Preferences,
    pub(crate) history: Vector<ActionRecord>,
}

impl GameState {
    /// A fresh board: every token in base, no die pending.
    #[must_use]
    pub fn new(start: Color, phase: Phase, preferences: Preferences) -> Self {
        Self {
            players: ColorMap::new(PlayerState::new),
            turn: start,
            dice_value: None,
            can_move: false,
            winner: None,
            phase,
            last_roll: None,
            six_streak: 0,
            turn_number: 1,
            action_sequence: 0,
            preferences,
            history: Vector::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Color whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Unconsumed die value, if a roll is pending.
    #[must_use]
    pub fn dice_value(&self) -> Option<u8> {
        self.dice_value
    }

    /// Whether a move may be submitted right now.
    #[must_use]
    pub fn can_move(&self) -> bool {
        self.can_move
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<LastRoll> {
        self.last_roll
    }

    /// Sixes consumed in a row by the current player.
    #[must_use]
    pub fn six_streak(&self) -> u8 {
        self.six_streak
    }

    /// Turn counter, starting at 1 and bumped on every hand-off.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &PlayerState {
        &self.players[color]
    }

    /// Iterate over players in turn order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.values()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.turn]
    }

    #[must_use]
    pub fn token(&self, token: TokenRef) -> &Token {
        self.players[token.color].token(token.id)
    }

    // === Scenario setup ===

    /// Place a token directly. For arranging positions (puzzles, tests,
    /// restoring a board); it bypasses every rule except that the position
    /// must exist on the board.
    pub fn with_position(mut self, token: TokenRef, position: Position) -> Result<Self, RuleError> {
        let position = position.checked()?;
        self.players[token.color].set_position(token.id, position);
        Ok(self)
    }

    /// Hand the turn to `color` with no roll pending.
    #[must_use]
    pub fn with_turn(mut self, color: Color) -> Self {
        self.turn = color;
        self.dice_value = None;
        self.can_move = false;
        self.six_streak = 0;
        self
    }

    // === Mutation (engine only) ===

    pub(crate) fn set_position(&mut self, token: TokenRef, position: Position) {
        self.players[token.color].set_position(token.id, position);
    }

    /// Record an action by the current player.
    pub(crate) fn record(&mut self, action: Action) {
        let record = ActionRecord::new(self.turn, action, self.turn_number, self.action_sequence);
        self.action_sequence += 1;
        self.history.push_back(record);
    }

    /// Clear the pending roll.
    pub(crate) fn disarm(&mut self) {
        self.dice_value = None;
        self.can_move = false;
    }

    /// Hand the turn to the next color.
    pub(crate) fn advance_turn(&mut self, next: Color) {
        self.record(Action::PassTurn { to: next });
        self.turn = next;
        self.six_streak = 0;
        self.turn_number += 1;
        self.action_sequence = 0;
        self.disarm();
    }
}
