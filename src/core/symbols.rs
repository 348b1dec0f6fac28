//! Glyph tables for axis ticks and line segments.

use crate::core::{constants::SYMBOL_COUNT, error::ConfigError};

/// Ten glyphs, indexed as
///
/// 0 zero tick (┼), 1 tick (┤), 2 gap exit (╶), 3 gap entry (╴), 4 flat (─),
/// 5 fall end (╰), 6 rise end (╭), 7 fall start (╮), 8 rise start (╯), 9 vertical (│)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbols([char; SYMBOL_COUNT]);

impl Symbols {
    pub const UNICODE: Self = Self(['┼', '┤', '╶', '╴', '─', '╰', '╭', '╮', '╯', '│']);
    pub const ASCII: Self = Self(['+', '|', '-', '-', '-', '\\', '.', '.', '/', '|']);

    #[inline]
    #[must_use]
    pub const fn new(glyphs: [char; SYMBOL_COUNT]) -> Self {
        Self(glyphs)
    }

    #[inline]
    #[must_use]
    pub const fn zero_tick(&self) -> char {
        self.0[0]
    }
    #[inline]
    #[must_use]
    pub const fn tick(&self) -> char {
        self.0[1]
    }
    /// Line re-enters after missing samples.
    #[inline]
    #[must_use]
    pub const fn gap_exit(&self) -> char {
        self.0[2]
    }
    /// Line runs into missing samples.
    #[inline]
    #[must_use]
    pub const fn gap_entry(&self) -> char {
        self.0[3]
    }
    #[inline]
    #[must_use]
    pub const fn flat(&self) -> char {
        self.0[4]
    }
    #[inline]
    #[must_use]
    pub const fn fall_end(&self) -> char {
        self.0[5]
    }
    #[inline]
    #[must_use]
    pub const fn rise_end(&self) -> char {
        self.0[6]
    }
    #[inline]
    #[must_use]
    pub const fn fall_start(&self) -> char {
        self.0[7]
    }
    #[inline]
    #[must_use]
    pub const fn rise_start(&self) -> char {
        self.0[8]
    }
    #[inline]
    #[must_use]
    pub const fn vertical(&self) -> char {
        self.0[9]
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::UNICODE
    }
}

impl TryFrom<&[char]> for Symbols {
    type Error = ConfigError;

    fn try_from(glyphs: &[char]) -> Result<Self, Self::Error> {
        <[char; SYMBOL_COUNT]>::try_from(glyphs)
            .map(Self)
            .map_err(|_| ConfigError::SymbolCount(glyphs.len()))
    }
}

impl TryFrom<&str> for Symbols {
    type Error = ConfigError;

    fn try_from(glyphs: &str) -> Result<Self, Self::Error> {
        let chars: Vec<char> = glyphs.chars().collect();
        Self::try_from(chars.as_slice())
    }
}
