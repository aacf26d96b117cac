//! Code point classification.
//!
//! A code point is either part of a token (inside the script's letter block,
//! or the joiner) or a boundary. There is no third class: whitespace,
//! punctuation, Latin letters and control characters are all boundaries
//! when scanning for Arabic.

/// The joiner character (`_`), always treated as a token constituent.
pub const JOINER: char = '\u{005F}';

/// Classification of a single code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Part of a candidate token.
    Token,
    /// Separates candidate tokens.
    Boundary,
}

/// Inclusive range of code points that make up a script's tokens.
///
/// # Invariant
///
/// `low <= high`. Enforced by [`ScriptRange::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScriptRange {
    low: char,
    high: char,
}

impl ScriptRange {
    /// Arabic letters and Arabic-Indic digits: `U+0620..=U+0670`.
    ///
    /// Runs from ARABIC LETTER KASHMIRI YEH through ARABIC LETTER SUPERSCRIPT
    /// ALEF, covering the Arabic-Indic digits `U+0660..=U+0669`.
    pub const ARABIC: Self = Self {
        low: '\u{0620}',
        high: '\u{0670}',
    };

    /// Create a range, or `None` if `low > high`.
    pub fn new(low: char, high: char) -> Option<Self> {
        (low <= high).then_some(Self { low, high })
    }

    /// Lowest code point in the range.
    #[inline]
    pub fn low(self) -> char {
        self.low
    }

    /// Highest code point in the range.
    #[inline]
    pub fn high(self) -> char {
        self.high
    }

    /// Classify a code point against this range.
    #[inline]
    pub fn classify(self, c: char) -> CharClass {
        if c == JOINER || (self.low..=self.high).contains(&c) {
            CharClass::Token
        } else {
            CharClass::Boundary
        }
    }

    /// Returns `true` if `c` may appear inside a token.
    #[inline]
    pub fn is_token_char(self, c: char) -> bool {
        self.classify(c) == CharClass::Token
    }
}

impl Default for ScriptRange {
    fn default() -> Self {
        Self::ARABIC
    }
}

#[cfg(test)]
mod tests;
