//! Track constants and coordinate translation.

use crate::core::{Color, Position, SafeCellPolicy};

/// Cells in the shared loop.
pub const TRACK_CELLS: u8 = 52;

/// Relative offsets a token walks on the shared loop (`0..SHARED_TRACK_LEN`).
///
/// Shorter than the loop: a token leaves for its own lane one cell before
/// it would arrive back at the cell behind its entry.
pub const SHARED_TRACK_LEN: u8 = 51;

/// Cells in each color's private lane.
pub const HOME_STRETCH_LEN: u8 = 6;

/// Steps from the entry cell to the centre.
pub const FINISH_PROGRESS: u8 = SHARED_TRACK_LEN + HOME_STRETCH_LEN;

/// Distance from an entry cell to the star cell that follows it.
pub const STAR_OFFSET: u8 = 8;

const ENTRY_SPACING: u8 = TRACK_CELLS / 4;

/// Global loop cell where `color` enters play.
///
/// ```
/// use ludo_engine::board::entry_cell;
/// use ludo_engine::core::Color;
///
/// assert_eq!(entry_cell(Color::Green), 0);
/// assert_eq!(entry_cell(Color::Red), 13);
/// assert_eq!(entry_cell(Color::Blue), 26);
/// assert_eq!(entry_cell(Color::Yellow), 39);
/// ```
#[must_use]
pub const fn entry_cell(color: Color) -> u8 {
    match color {
        Color::Green => 0,
        Color::Red => ENTRY_SPACING,
        Color::Blue => 2 * ENTRY_SPACING,
        Color::Yellow => 3 * ENTRY_SPACING,
    }
}

/// Translate a relative track offset into a global loop cell.
#[must_use]
pub const fn relative_to_global(color: Color, offset: u8) -> u8 {
    ((entry_cell(color) as u16 + offset as u16) % TRACK_CELLS as u16) as u8
}

/// Global loop cell a position occupies, if it is on the shared loop.
#[must_use]
pub const fn global_cell(color: Color, position: Position) -> Option<u8> {
    match position {
        Position::Track(offset) => Some(relative_to_global(color, offset)),
        _ => None,
    }
}

/// Whether occupants of a loop cell are protected from capture.
#[must_use]
pub fn is_safe_cell(cell: u8, policy: SafeCellPolicy) -> bool {
    let from_entry = cell % ENTRY_SPACING;
    match policy {
        SafeCellPolicy::EntryCells => from_entry == 0,
        SafeCellPolicy::EntryAndStarCells => from_entry == 0 || from_entry == STAR_OFFSET,
    }
}

/// All safe loop cells under a policy, ascending.
pub fn safe_cells(policy: SafeCellPolicy) -> impl Iterator<Item = u8> {
    (0..TRACK_CELLS).filter(move |&cell| is_safe_cell(cell, policy))
}
