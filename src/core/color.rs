//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! The closed set of four seats. Play rotates through them in a fixed
//! order: Green, Red, Blue, Yellow, then back to Green.
//!
//! ## ColorMap
//!
//! Per-color storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 4;

/// One of the four player colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Green,
    Red,
    Blue,
    Yellow,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; PLAYER_COUNT] = [Color::Green, Color::Red, Color::Blue, Color::Yellow];

    /// Seat index in turn order (Green = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Green => 0,
            Color::Red => 1,
            Color::Blue => 2,
            Color::Yellow => 3,
        }
    }

    /// The color that plays after this one.
    ///
    /// ```
    /// use ludo_engine::core::Color;
    ///
    /// assert_eq!(Color::Green.next(), Color::Red);
    /// assert_eq!(Color::Yellow.next(), Color::Green);
    /// ```
    #[must_use]
    pub const fn next(self) -> Color {
        match self {
            Color::Green => Color::Red,
            Color::Red => Color::Blue,
            Color::Blue => Color::Yellow,
            Color::Yellow => Color::Green,
        }
    }

    /// Iterate over all colors in turn order.
    pub fn all() -> impl Iterator<Item = Color> {
        Self::ALL.into_iter()
    }

    /// Upper-case display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Green => "GREEN",
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Yellow => "YELLOW",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{Color, ColorMap};
///
/// let mut finished: ColorMap<u8> = ColorMap::new(|_| 0);
/// finished[Color::Blue] = 2;
/// assert_eq!(finished[Color::Blue], 2);
/// assert_eq!(finished[Color::Red], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: Color::ALL.map(factory),
        }
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Color, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Color, &mut T)> {
        Color::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Clone> ColorMap<T> {
    /// Create a map with all entries set to the same value.
    pub fn with_value(value: T) -> Self {
        Self::new(|_| value.clone())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
