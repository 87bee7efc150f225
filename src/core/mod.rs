//! Core engine types: colors, tokens, state, actions, RNG, configuration, errors.
//!
//! These are the data entities of the game. They carry invariants but no
//! rules; the rules live in `rules` and read/produce these values.

pub mod color;
pub mod token;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use color::{Color, ColorMap, PLAYER_COUNT};
pub use token::{Position, Token, TokenId, TokenRef, TOKENS_PER_PLAYER};
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use config::{LudoConfig, SafeCellPolicy};
pub use action::{Action, ActionRecord};
pub use state::{GameState, LastRoll, Phase, PlayerState, Preferences};
pub use error::{IllegalMoveReason, RuleError};
