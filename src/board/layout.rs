//! Logical board cells for presentation.
//!
//! Renderers map a `BoardCell` to pixels; the engine only decides which
//! logical cell a token occupies.

use serde::{Deserialize, Serialize};

use super::geometry::relative_to_global;
use crate::core::{Color, Position, Token};

/// Slot inside a color's 2×2 yard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseSlot {
    pub row: u8,
    pub col: u8,
}

/// A logical cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardCell {
    /// Waiting in the owner's yard.
    Base { color: Color, slot: BaseSlot },
    /// Shared loop cell, global index.
    Track { index: u8 },
    /// Owner's private lane.
    HomeLane { color: Color, depth: u8 },
    /// The centre triangle of the owner's color.
    Centre { color: Color },
}

/// Where a token is drawn.
///
/// ```
/// use ludo_engine::board::{cell_of, BoardCell};
/// use ludo_engine::core::{Color, Position, Token, TokenId};
///
/// let mut token = Token::new(Color::Red, TokenId::new(0).unwrap());
/// token.position = Position::Track(2);
/// assert_eq!(cell_of(&token), BoardCell::Track { index: 15 });
/// ```
#[must_use]
pub fn cell_of(token: &Token) -> BoardCell {
    let color = token.color;
    match token.position {
        Position::Base => {
            let id = token.id.index() as u8;
            BoardCell::Base {
                color,
                slot: BaseSlot {
                    row: id / 2,
                    col: id % 2,
                },
            }
        }
        Position::Track(offset) => BoardCell::Track {
            index: relative_to_global(color, offset),
        },
        Position::HomeStretch(depth) => BoardCell::HomeLane { color, depth },
        Position::Finished => BoardCell::Centre { color },
    }
}
