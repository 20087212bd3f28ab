//! Core types for the tailfeather library
//!
//! This module defines the color palette shared by every field tracker and the
//! error type returned by the few fallible operations in the library.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for tailfeather operations
pub type Result<T> = std::result::Result<T, TailfeatherError>;

/// Number of colors in the palette, and so the number of values a single
/// column can track at once.
pub const PALETTE_SIZE: usize = 7;

/// A foreground color a field value can be rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Magenta,
    Cyan,
    Blue,
    Green,
    Yellow,
    Red,
}

/// The palette, in slot order.
///
/// Slot `s` of every field tracker is permanently bound to `PALETTE[s]`, so this
/// order decides which color a given sequence of novel values receives.
pub const PALETTE: [Color; PALETTE_SIZE] = [
    Color::White,
    Color::Magenta,
    Color::Cyan,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Red,
];

impl Color {
    /// Color bound to a tracker slot. Slots wrap modulo the palette size.
    pub fn for_slot(slot: usize) -> Self {
        PALETTE[slot % PALETTE_SIZE]
    }

    /// Lowercase color name
    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Red => "red",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while setting up line processing
#[derive(Debug, thiserror::Error)]
pub enum TailfeatherError {
    #[error("Invalid input delimiter {0:?}: delimiters cannot contain line breaks")]
    InvalidDelimiter(String),
}
