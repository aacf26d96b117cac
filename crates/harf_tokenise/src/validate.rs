//! Noise-reduction rules for candidate tokens.
//!
//! Two rules run in a single left-to-right pass and short-circuit on the
//! first violation:
//!
//! - **Digit density**: more than [`MAX_DIGITS_PER_TERM`] ASCII digits.
//! - **Run length**: more than [`MAX_CONSECUTIVE_SAME_CHARS`] identical
//!   characters in a row.
//!
//! The length cap is not checked here; the scanner applies it before a
//! candidate reaches the validator.

use harf_scan_core::Candidate;

/// Maximum number of ASCII digits allowed in a term.
pub const MAX_DIGITS_PER_TERM: usize = 4;

/// Maximum number of consecutive identical characters allowed in a term.
pub const MAX_CONSECUTIVE_SAME_CHARS: usize = 3;

/// Why a candidate was not emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// More than [`MAX_DIGITS_PER_TERM`] ASCII digits.
    TooManyDigits,
    /// A character repeated more than [`MAX_CONSECUTIVE_SAME_CHARS`] times.
    RepeatedRun,
    /// Longer than the term length cap while configured to drop.
    Overlong,
    /// Nothing left after trimming whitespace.
    Empty,
}

/// Verdict on one candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The candidate passed unchanged (apart from trimming).
    Accepted(String),
    /// The candidate was cut to the length cap and then passed.
    Truncated(String),
    Rejected(RejectReason),
}

impl Outcome {
    /// The emitted token, if any.
    pub fn into_token(self) -> Option<String> {
        match self {
            Self::Accepted(token) | Self::Truncated(token) => Some(token),
            Self::Rejected(_) => None,
        }
    }
}

/// Check a token against the digit-density and run-length rules.
///
/// Returns the token with surrounding whitespace trimmed, or the rule it
/// broke. Pure: no state is kept between calls.
pub fn check(token: &str) -> Result<&str, RejectReason> {
    let token = token.trim();
    if token.is_empty() {
        return Err(RejectReason::Empty);
    }

    let mut digits = 0usize;
    let mut run = 0usize;
    let mut prev = None;
    for c in token.chars() {
        if c.is_ascii_digit() {
            digits += 1;
        }
        if prev == Some(c) {
            run += 1;
        } else {
            run = 1;
        }
        prev = Some(c);

        if run > MAX_CONSECUTIVE_SAME_CHARS {
            return Err(RejectReason::RepeatedRun);
        }
        if digits > MAX_DIGITS_PER_TERM {
            return Err(RejectReason::TooManyDigits);
        }
    }
    Ok(token)
}

/// Validate a scanned candidate, taking ownership of its text.
pub fn validate(candidate: Candidate) -> Outcome {
    let truncated = candidate.is_truncated();
    let mut text = candidate.into_text();
    let (start, end) = match check(&text) {
        Ok(trimmed) => {
            let start = text.len() - text.trim_start().len();
            (start, start + trimmed.len())
        }
        Err(reason) => return Outcome::Rejected(reason),
    };
    text.truncate(end);
    text.drain(..start);

    if truncated {
        Outcome::Truncated(text)
    } else {
        Outcome::Accepted(text)
    }
}
