//! Parser configuration.
//!
//! The only tunable is which bytes count as insignificant whitespace. Two
//! presets exist: [`ParseOptions::standard`] uses the JSON whitespace set,
//! [`ParseOptions::legacy`] reproduces an older scanner that skipped the
//! letter `r` in place of carriage return.

/// Bytes treated as whitespace between tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitespaceSet {
    /// Space, tab, line feed, carriage return.
    #[default]
    Standard,
    /// Space, tab, line feed and the ASCII letter `r`. Carriage return is
    /// not whitespace in this mode.
    Legacy,
}

impl WhitespaceSet {
    /// Check whether `b` is whitespace under this set.
    pub const fn contains(&self, b: u8) -> bool {
        match self {
            WhitespaceSet::Standard => matches!(b, b' ' | b'\t' | b'\n' | b'\r'),
            WhitespaceSet::Legacy => matches!(b, b' ' | b'\t' | b'\n' | b'r'),
        }
    }
}

/// Options for a parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Whitespace accepted before and after the value
    pub whitespace: WhitespaceSet,
}

impl ParseOptions {
    /// Standard JSON whitespace.
    pub const fn standard() -> Self {
        Self {
            whitespace: WhitespaceSet::Standard,
        }
    }

    /// Compatibility mode for documents produced against the older scanner.
    pub const fn legacy() -> Self {
        Self {
            whitespace: WhitespaceSet::Legacy,
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::standard()
    }
}
