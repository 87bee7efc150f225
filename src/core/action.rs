//! Action history entries.
//!
//! Every committed transition appends one or more `ActionRecord`s to the
//! game history: the roll, the move it allowed, any captures the move
//! caused, and the hand-off when the turn passes. The history is a replay
//! and debugging aid; the rules never read it back.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::token::{Position, TokenId, TokenRef};

/// One committed step of play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The die was rolled.
    Roll { value: u8 },
    /// A token moved.
    Move {
        token: TokenId,
        from: Position,
        to: Position,
    },
    /// An opposing token was sent back to base.
    Capture { victim: TokenRef },
    /// The turn passed to the next color.
    PassTurn { to: Color },
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The color acting.
    pub color: Color,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(color: Color, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            color,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_record() {
        let action = Action::Roll { value: 6 };
        let record = ActionRecord::new(Color::Red, action, 3, 1);

        assert_eq!(record.color, Color::Red);
        assert_eq!(record.action, action);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 1);
    }

    #[test]
    fn test_action_equality() {
        let a1 = Action::Move {
            token: TokenId::ALL[0],
            from: Position::Base,
            to: Position::Track(0),
        };
        let a2 = a1;
        let a3 = Action::Move {
            token: TokenId::ALL[1],
            from: Position::Base,
            to: Position::Track(0),
        };

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
    }

    #[test]
    fn test_action_record_serialization() {
        let victim = TokenRef::new(Color::Blue, TokenId::ALL[3]);
        let record = ActionRecord::new(Color::Green, Action::Capture { victim }, 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
