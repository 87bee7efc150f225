//! Path geometry: the fixed board and coordinate translation.
//!
//! Each color reasons in its own *relative* offsets, starting at 0 on its
//! entry cell. Global loop indices are needed only for presentation and to
//! detect two colors sharing a cell (captures).
//!
//! ## Layout
//!
//! - 52 loop cells; entries at 0 (Green), 13 (Red), 26 (Blue), 39 (Yellow)
//! - Relative track offsets `0..=50`, then home-lane depths `1..=6`
//! - Progress 57 is the centre
//!
//! Pure functions only, no state.

mod geometry;
mod layout;

pub use geometry::{
    entry_cell, global_cell, is_safe_cell, relative_to_global, safe_cells, FINISH_PROGRESS,
    HOME_STRETCH_LEN, SHARED_TRACK_LEN, STAR_OFFSET, TRACK_CELLS,
};
pub use layout::{cell_of, BaseSlot, BoardCell};
