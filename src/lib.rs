//! # ludo-engine
//!
//! A rules engine for four-player Ludo.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation takes a `GameState` by reference
//!    and returns a new one. A rejected call leaves nothing half-applied.
//!
//! 2. **Relative coordinates**: each color reasons in its own track offsets.
//!    Global loop cells appear only for presentation and capture checks.
//!
//! 3. **Closed color set**: the four colors are an enum with exhaustive
//!    lookup tables, never string keys.
//!
//! ## Example
//!
//! ```
//! use ludo_engine::{Color, LudoConfig, LudoEngine, TokenId, TurnOutcome};
//!
//! let engine = LudoEngine::new(LudoConfig::default().with_seed(7));
//! let state = engine.new_game();
//!
//! // A six brings a token out and earns another roll.
//! let (state, _) = engine.roll_with(&state, 6).unwrap();
//! let (state, outcome) = engine.move_token(&state, TokenId::new(0).unwrap()).unwrap();
//! assert_eq!(outcome.turn, TurnOutcome::Retained);
//! assert_eq!(state.turn(), Color::Green);
//! ```
//!
//! ## Modules
//!
//! - `core`: colors, tokens, state, actions, RNG, configuration, errors
//! - `board`: track geometry and logical cell layout
//! - `rules`: dice, movement, turn scheduling, win detection, the engine

pub mod core;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Color, ColorMap, GameRng, GameRngState, GameState, IllegalMoveReason,
    LastRoll, LudoConfig, Phase, PlayerState, Position, Preferences, RuleError, SafeCellPolicy,
    Token, TokenId, TokenRef,
};

pub use crate::board::{cell_of, relative_to_global, BoardCell};

pub use crate::rules::{
    DiceSource, LudoEngine, MoveKind, MoveOutcome, RollOutcome, ScriptedDice, TurnOutcome,
    TurnStep,
};
