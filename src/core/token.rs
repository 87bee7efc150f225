//! Token identity and position.
//!
//! ## Position Layout
//!
//! A token is always in exactly one of four zones:
//! - `Base`: waiting in the yard, not yet in play
//! - `Track(offset)`: on the shared loop, `offset` relative to the owner's entry cell
//! - `HomeStretch(depth)`: in the owner's private lane, depth `1..=HOME_STRETCH_LEN`
//! - `Finished`: reached the centre, out of play
//!
//! Every zone except `Base` maps to a single *progress* value, the number of
//! steps taken since entering at offset 0. Moves only ever increase progress;
//! the one way backwards is a capture, which sends the token to `Base`.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::RuleError;
use crate::board::{FINISH_PROGRESS, HOME_STRETCH_LEN, SHARED_TRACK_LEN};

/// Number of tokens each player owns.
pub const TOKENS_PER_PLAYER: usize = 4;

/// Token identifier, unique within a player (0..=3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(u8);

impl TokenId {
    /// All token IDs in order.
    pub const ALL: [TokenId; TOKENS_PER_PLAYER] = [TokenId(0), TokenId(1), TokenId(2), TokenId(3)];

    /// Create a token ID, rejecting anything outside 0..=3.
    pub fn new(id: u8) -> Result<Self, RuleError> {
        if (id as usize) < TOKENS_PER_PLAYER {
            Ok(Self(id))
        } else {
            Err(RuleError::InvalidTokenId(id))
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for TokenId {
    type Error = RuleError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {}", self.0)
    }
}

/// Addresses a single token on the board: owner plus ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenRef {
    pub color: Color,
    pub id: TokenId,
}

impl TokenRef {
    #[must_use]
    pub const fn new(color: Color, id: TokenId) -> Self {
        Self { color, id }
    }
}

impl std::fmt::Display for TokenRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.id)
    }
}

/// Where a token currently is.
///
/// Deserialization rejects offsets and depths that are not on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub enum Position {
    /// In the yard, not yet in play.
    #[default]
    Base,
    /// On the shared loop, offset relative to the owner's entry cell.
    Track(u8),
    /// In the owner's private lane, depth 1 (just entered) to `HOME_STRETCH_LEN`.
    HomeStretch(u8),
    /// Reached the centre. Terminal.
    Finished,
}

impl Position {
    /// Steps taken since entering play, or `None` for `Base`.
    ///
    /// ```
    /// use ludo_engine::core::Position;
    ///
    /// assert_eq!(Position::Base.progress(), None);
    /// assert_eq!(Position::Track(0).progress(), Some(0));
    /// assert_eq!(Position::HomeStretch(1).progress(), Some(51));
    /// assert_eq!(Position::Finished.progress(), Some(57));
    /// ```
    #[must_use]
    pub const fn progress(self) -> Option<u8> {
        match self {
            Position::Base => None,
            Position::Track(offset) => Some(offset),
            Position::HomeStretch(depth) => Some((SHARED_TRACK_LEN - 1).saturating_add(depth)),
            Position::Finished => Some(FINISH_PROGRESS),
        }
    }

    /// Interpret a progress value, or `None` if it lies past the centre.
    #[must_use]
    pub const fn from_progress(progress: u8) -> Option<Position> {
        if progress < SHARED_TRACK_LEN {
            Some(Position::Track(progress))
        } else if progress < FINISH_PROGRESS {
            Some(Position::HomeStretch(progress - (SHARED_TRACK_LEN - 1)))
        } else if progress == FINISH_PROGRESS {
            Some(Position::Finished)
        } else {
            None
        }
    }

    /// True unless a track offset or lane depth lies outside the board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        match self {
            Position::Track(offset) => offset < SHARED_TRACK_LEN,
            Position::HomeStretch(depth) => depth >= 1 && depth <= HOME_STRETCH_LEN,
            Position::Base | Position::Finished => true,
        }
    }

    /// The position itself, or `InvalidPosition` if it is off the board.
    pub fn checked(self) -> Result<Self, RuleError> {
        if self.is_on_board() {
            Ok(self)
        } else {
            Err(RuleError::InvalidPosition(self))
        }
    }

    #[must_use]
    pub const fn is_base(self) -> bool {
        matches!(self, Position::Base)
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Position::Finished)
    }

    /// On the shared loop (and therefore capturable).
    #[must_use]
    pub const fn is_on_track(self) -> bool {
        matches!(self, Position::Track(_))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Base => f.write_str("base"),
            Position::Track(offset) => write!(f, "track +{}", offset),
            Position::HomeStretch(depth) => write!(f, "home {}", depth),
            Position::Finished => f.write_str("finished"),
        }
    }
}

/// Serialized form of `Position`, validated on the way in.
#[derive(Deserialize)]
enum RawPosition {
    Base,
    Track(u8),
    HomeStretch(u8),
    Finished,
}

impl TryFrom<RawPosition> for Position {
    type Error = RuleError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        let position = match raw {
            RawPosition::Base => Position::Base,
            RawPosition::Track(offset) => Position::Track(offset),
            RawPosition::HomeStretch(depth) => Position::HomeStretch(depth),
            RawPosition::Finished => Position::Finished,
        };
        position.checked()
    }
}

/// A single playing piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub color: Color,
    pub position: Position,
}

impl Token {
    /// A fresh token sitting in its owner's yard.
    #[must_use]
    pub const fn new(color: Color, id: TokenId) -> Self {
        Self {
            id,
            color,
            position: Position::Base,
        }
    }

    #[must_use]
    pub const fn token_ref(&self) -> TokenRef {
        TokenRef::new(self.color, self.id)
    }
}
