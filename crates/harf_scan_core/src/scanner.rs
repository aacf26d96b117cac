//! Candidate scanner.
//!
//! Produces maximal runs of token characters, one per call. The scanner owns
//! a [`Cursor`] and never backtracks: whatever it has consumed stays consumed,
//! so a candidate rejected downstream is simply skipped.
//!
//! # Length cap
//!
//! Runs longer than `max_len` code points are either truncated to exactly
//! `max_len` code points or dropped, per [`OverlongPolicy`]. Either way the
//! whole run is consumed; the tail of a truncated run is never re-emitted
//! as a separate candidate.
//!
//! # Case folding
//!
//! With folding on, each code point is lowercased as it is appended and the
//! cap counts the folded code points. A letter whose lowercase form is
//! longer (`İ` folds to `i` + U+0307) can therefore fill the cap early, and
//! a run is never longer than `max_len` after folding.

use std::io;
use std::num::NonZeroUsize;

use crate::{CharSource, Cursor, ScriptRange};

/// Upper bound on the buffer reserved up front for a run.
const INITIAL_RUN_CAPACITY: usize = 64;

/// What to do with a run longer than the maximum term length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlongPolicy {
    /// Keep the first `max_len` code points.
    #[default]
    Truncate,
    /// Drop the run entirely.
    Drop,
}

/// A run of token characters, at most `max_len` code points long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    text: String,
    truncated: bool,
}

impl Candidate {
    /// Wrap text produced outside the scanner (e.g. by an upstream
    /// segmenter) so it can go through the same validation.
    pub fn new(text: impl Into<String>, truncated: bool) -> Self {
        Self {
            text: text.into(),
            truncated,
        }
    }

    /// The candidate's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the run was cut down to the length cap.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Result of scanning one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scanned {
    /// A run within the length cap (possibly after truncation).
    Candidate(Candidate),
    /// An overlong run discarded under [`OverlongPolicy::Drop`].
    Dropped {
        /// Length of the discarded run in code points, after folding.
        len: usize,
    },
}

/// Pull-based scanner over a character source.
///
/// Not restartable: build a fresh scanner for every input stream.
#[derive(Debug)]
pub struct Scanner<S> {
    cursor: Cursor<S>,
    script: ScriptRange,
    max_len: NonZeroUsize,
    overlong: OverlongPolicy,
    fold_case: bool,
}

impl<S: CharSource> Scanner<S> {
    pub fn new(
        source: S,
        script: ScriptRange,
        max_len: NonZeroUsize,
        overlong: OverlongPolicy,
    ) -> Self {
        Self {
            cursor: Cursor::new(source),
            script,
            max_len,
            overlong,
            fold_case: false,
        }
    }

    /// Lowercase each code point as it is appended to a run.
    #[must_use]
    pub fn with_case_folding(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }

    /// Scan the next run.
    ///
    /// Returns `Ok(None)` at end of stream, and keeps doing so on every
    /// later call. A read fault is returned once; the scanner is at end of
    /// stream afterwards. A run interrupted by a fault is lost, not
    /// returned short.
    pub fn next_candidate(&mut self) -> io::Result<Option<Scanned>> {
        // Skip boundaries.
        loop {
            match self.cursor.current()? {
                None => return Ok(None),
                Some(c) if self.script.is_token_char(c) => break,
                Some(_) => self.cursor.bump(),
            }
        }

        // Accept token characters, keeping at most `max_len` of them.
        let max_len = self.max_len.get();
        let mut text = String::with_capacity(max_len.min(INITIAL_RUN_CAPACITY));
        let mut len = 0usize;
        while let Some(c) = self.cursor.current()? {
            if !self.script.is_token_char(c) {
                break;
            }
            if self.fold_case {
                for folded in c.to_lowercase() {
                    if len < max_len {
                        text.push(folded);
                    }
                    len += 1;
                }
            } else {
                if len < max_len {
                    text.push(c);
                }
                len += 1;
            }
            self.cursor.bump();
        }

        if len <= max_len {
            return Ok(Some(Scanned::Candidate(Candidate {
                text,
                truncated: false,
            })));
        }
        Ok(Some(match self.overlong {
            OverlongPolicy::Drop => Scanned::Dropped { len },
            OverlongPolicy::Truncate => Scanned::Candidate(Candidate {
                text,
                truncated: true,
            }),
        }))
    }

    /// Number of code points read from the source so far.
    pub fn chars_consumed(&self) -> u64 {
        self.cursor.consumed()
    }

    /// Returns `true` once the source is exhausted.
    pub fn is_finished(&self) -> bool {
        self.cursor.is_eos()
    }

    pub fn script(&self) -> ScriptRange {
        self.script
    }

    pub fn max_len(&self) -> NonZeroUsize {
        self.max_len
    }

    pub fn overlong_policy(&self) -> OverlongPolicy {
        self.overlong
    }

    pub fn folds_case(&self) -> bool {
        self.fold_case
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
