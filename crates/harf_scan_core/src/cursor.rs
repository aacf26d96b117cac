//! One-code-point lookahead over a [`CharSource`].
//!
//! The cursor is a small state machine: the lookahead slot is either
//! unread, holds a code point, or records end of stream. Reading is lazy:
//! nothing is pulled from the source until [`Cursor::current`] is called.
//!
//! # Faults
//!
//! A read fault moves the cursor to end of stream before the error is
//! returned. The scanner never re-reads a source that has failed once, so a
//! broken session ends cleanly instead of retrying.

use std::io;

use crate::CharSource;

/// Contents of the lookahead slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lookahead {
    /// Nothing read since the last [`Cursor::bump`].
    Unread,
    /// A code point that has been read but not consumed.
    Char(char),
    /// The source is exhausted (or failed).
    Eos,
}

/// Lookahead cursor owning its character source.
///
/// Dropping the cursor drops the source, so the source is released on every
/// exit path of a tokenisation session.
#[derive(Debug)]
pub struct Cursor<S> {
    source: S,
    lookahead: Lookahead,
    /// Code points pulled from the source so far.
    consumed: u64,
}

impl<S: CharSource> Cursor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            lookahead: Lookahead::Unread,
            consumed: 0,
        }
    }

    /// Returns the code point under the cursor, reading it if needed.
    ///
    /// `Ok(None)` means end of stream. Repeated calls without an intervening
    /// [`bump`](Self::bump) return the same value and read nothing.
    #[inline]
    pub fn current(&mut self) -> io::Result<Option<char>> {
        if self.lookahead == Lookahead::Unread {
            self.read_one()?;
        }
        Ok(match self.lookahead {
            Lookahead::Char(c) => Some(c),
            Lookahead::Unread | Lookahead::Eos => None,
        })
    }

    /// Consume the code point under the cursor.
    ///
    /// No-op at end of stream.
    #[inline]
    pub fn bump(&mut self) {
        if let Lookahead::Char(_) = self.lookahead {
            self.lookahead = Lookahead::Unread;
        }
    }

    /// Returns `true` once the source is known to be exhausted.
    ///
    /// A cursor that has not read anything yet is not at EOS, even over an
    /// empty source.
    #[inline]
    pub fn is_eos(&self) -> bool {
        self.lookahead == Lookahead::Eos
    }

    /// Number of code points read from the source so far, including the
    /// current lookahead.
    #[inline]
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Unwrap the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }

    fn read_one(&mut self) -> io::Result<()> {
        match self.source.next_char() {
            Ok(Some(c)) => {
                self.consumed += 1;
                self.lookahead = Lookahead::Char(c);
                Ok(())
            }
            Ok(None) => {
                self.lookahead = Lookahead::Eos;
                Ok(())
            }
            Err(e) => {
                self.lookahead = Lookahead::Eos;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
