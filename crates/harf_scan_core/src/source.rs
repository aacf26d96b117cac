//! Sequential code point sources.
//!
//! The scanner reads through the [`CharSource`] trait: one code point per
//! call, `Ok(None)` at end of stream, `Err` on a read fault. Buffering is the
//! caller's business; [`Utf8Reader`] expects an already-buffered reader.

use std::io::{self, BufRead};
use std::str::Chars;

/// A source of Unicode scalar values read in order.
pub trait CharSource {
    /// Read the next code point.
    ///
    /// Returns `Ok(None)` at end of stream. Implementations should keep
    /// returning `Ok(None)` once exhausted.
    fn next_char(&mut self) -> io::Result<Option<char>>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    #[inline]
    fn next_char(&mut self) -> io::Result<Option<char>> {
        (**self).next_char()
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    #[inline]
    fn next_char(&mut self) -> io::Result<Option<char>> {
        (**self).next_char()
    }
}

/// Infallible source over an in-memory string.
#[derive(Clone, Debug)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { chars: text.chars() }
    }
}

impl CharSource for StrSource<'_> {
    #[inline]
    fn next_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.next())
    }
}

/// Adapter for any iterator of fallible characters.
///
/// Useful for sources that decode on their own (e.g. from a network frame)
/// and for injecting read faults in tests.
#[derive(Clone, Debug)]
pub struct CharIter<I> {
    iter: I,
}

impl<I> CharIter<I>
where
    I: Iterator<Item = io::Result<char>>,
{
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I> CharSource for CharIter<I>
where
    I: Iterator<Item = io::Result<char>>,
{
    #[inline]
    fn next_char(&mut self) -> io::Result<Option<char>> {
        self.iter.next().transpose()
    }
}

/// Decodes UTF-8 from a buffered byte reader one scalar value at a time.
///
/// Malformed input (invalid lead byte, bad continuation, overlong encoding,
/// surrogate, or a sequence cut off by end of stream) is reported as an
/// [`io::ErrorKind::InvalidData`] read fault.
#[derive(Debug)]
pub struct Utf8Reader<R> {
    inner: R,
}

impl<R: BufRead> Utf8Reader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let byte = match self.inner.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if byte.is_some() {
                self.inner.consume(1);
            }
            return Ok(byte);
        }
    }
}

impl<R: BufRead> CharSource for Utf8Reader<R> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };
        let width = utf8_width(lead);
        if width == 0 {
            return Err(invalid_utf8(format!("invalid UTF-8 lead byte 0x{lead:02X}")));
        }

        let mut bytes = [lead, 0, 0, 0];
        for slot in &mut bytes[1..width] {
            *slot = self
                .next_byte()?
                .ok_or_else(|| invalid_utf8("UTF-8 sequence truncated by end of stream".into()))?;
        }

        let decoded = std::str::from_utf8(&bytes[..width])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(decoded.chars().next())
    }
}

/// Encoded length implied by a UTF-8 lead byte, or 0 if it cannot start a
/// sequence.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn invalid_utf8(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
