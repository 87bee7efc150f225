//! The rules of Ludo.
//!
//! - `dice`: where roll values come from and whether a roll permits a move
//! - `movement`: validating a move, its destination, and captures
//! - `turn`: bonus rolls and rotation
//! - `win`: detecting the winner
//! - `engine`: `LudoEngine`, the operations callers invoke
//!
//! Only `engine` changes game state; the other modules compute.

pub mod dice;
pub mod movement;
pub mod turn;
pub mod win;
pub mod engine;

pub use dice::{has_legal_move, is_die_value, movable_tokens, DiceSource, ScriptedDice};
pub use movement::{occupancy, plan_move, step, Captures, MoveKind, MoveOutcome, MovePlan, ENTRY_ROLL};
pub use turn::{TurnOutcome, TurnStep};
pub use win::winner;
pub use engine::{LudoEngine, RollOutcome};
