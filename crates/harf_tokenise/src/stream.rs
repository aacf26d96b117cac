//! Lazy token stream: scanner output through the validator.
//!
//! ```text
//! CharSource → Scanner (lowercase, length cap) → Scanned → validate() → Outcome → token
//! ```
//!
//! Case folding happens in the scanner, before the length cap and the
//! validator, so every rule sees exactly the text that is emitted.
//!
//! Dropped and rejected candidates never reach the consumer. Each call to
//! `next()` keeps pulling candidates until one is accepted, the source ends,
//! or the source fails.

use std::iter::FusedIterator;

use harf_scan_core::{CharSource, Scanned, Scanner};
use tracing::{debug, trace, warn};

use crate::validate::{validate, Outcome, RejectReason};
use crate::{TokeniseError, TokeniserConfig};

/// Per-stream counters.
///
/// `accepted` counts every emitted token; `truncated` is the subset that
/// was cut to the length cap first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenStats {
    pub accepted: u64,
    pub truncated: u64,
    pub rejected_digits: u64,
    pub rejected_runs: u64,
    pub dropped_overlong: u64,
    pub rejected_empty: u64,
}

impl TokenStats {
    /// Total candidates that were not emitted.
    pub fn rejected(&self) -> u64 {
        self.rejected_digits + self.rejected_runs + self.dropped_overlong + self.rejected_empty
    }

    fn record_rejection(&mut self, reason: RejectReason) {
        match reason {
            RejectReason::TooManyDigits => self.rejected_digits += 1,
            RejectReason::RepeatedRun => self.rejected_runs += 1,
            RejectReason::Overlong => self.dropped_overlong += 1,
            RejectReason::Empty => self.rejected_empty += 1,
        }
    }
}

/// Forward-only sequence of accepted tokens from one source.
///
/// Yields `Ok(token)` for each accepted token. A read fault yields a single
/// `Err` and ends the stream. Owns its source, which is dropped with the
/// stream.
#[derive(Debug)]
pub struct TokenStream<S> {
    scanner: Scanner<S>,
    stats: TokenStats,
    done: bool,
}

impl<S: CharSource> TokenStream<S> {
    pub(crate) fn new(source: S, config: &TokeniserConfig) -> Self {
        Self {
            scanner: Scanner::new(
                source,
                config.script(),
                config.max_term_length(),
                config.overlong_policy(),
            )
            .with_case_folding(config.lowercase()),
            stats: TokenStats::default(),
            done: false,
        }
    }

    /// Code points read from the source so far.
    ///
    /// Rejected candidates leave no placeholder in the token sequence; this
    /// counter lets a consumer tell how much input lay between tokens.
    pub fn chars_consumed(&self) -> u64 {
        self.scanner.chars_consumed()
    }

    pub fn stats(&self) -> TokenStats {
        self.stats
    }

    fn emit(&mut self, token: String) -> String {
        self.stats.accepted += 1;
        token
    }

    fn finish(&mut self) {
        self.done = true;
        debug!(
            chars = self.scanner.chars_consumed(),
            accepted = self.stats.accepted,
            truncated = self.stats.truncated,
            rejected = self.stats.rejected(),
            "token stream finished"
        );
    }
}

impl<S: CharSource> Iterator for TokenStream<S> {
    type Item = Result<String, TokeniseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let scanned = match self.scanner.next_candidate() {
                Ok(Some(scanned)) => scanned,
                Ok(None) => {
                    self.finish();
                    return None;
                }
                Err(source) => {
                    let chars_consumed = self.scanner.chars_consumed();
                    warn!(chars_consumed, error = %source, "input read failed");
                    self.finish();
                    return Some(Err(TokeniseError::StreamRead {
                        chars_consumed,
                        source,
                    }));
                }
            };

            let candidate = match scanned {
                Scanned::Candidate(candidate) => candidate,
                Scanned::Dropped { len } => {
                    trace!(len, "dropped overlong token");
                    self.stats.record_rejection(RejectReason::Overlong);
                    continue;
                }
            };

            match validate(candidate) {
                Outcome::Accepted(token) => return Some(Ok(self.emit(token))),
                Outcome::Truncated(token) => {
                    trace!(token = %token, "truncated token");
                    self.stats.truncated += 1;
                    return Some(Ok(self.emit(token)));
                }
                Outcome::Rejected(reason) => {
                    trace!(?reason, "rejected token");
                    self.stats.record_rejection(reason);
                }
            }
        }
    }
}

impl<S: CharSource> FusedIterator for TokenStream<S> {}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
