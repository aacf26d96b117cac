//! Error types for tokenisation sessions and configuration.
//!
//! Rejected tokens are not errors: they are counted in
//! [`TokenStats`](crate::TokenStats) and skipped. The only runtime failure a
//! consumer sees is a fault reading the input.

use std::io;

use thiserror::Error;

/// Fatal failure of a tokenisation session.
#[derive(Debug, Error)]
pub enum TokeniseError {
    /// The character source failed. The session ends; nothing is retried.
    #[error("failed to read input after {chars_consumed} characters")]
    StreamRead {
        /// Code points successfully read before the fault.
        chars_consumed: u64,
        #[source]
        source: io::Error,
    },
}

impl TokeniseError {
    /// The underlying I/O error kind.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::StreamRead { source, .. } => source.kind(),
        }
    }
}

/// Invalid tokeniser configuration, rejected before any input is read.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max.term.length must be positive, got {value}")]
    NonPositiveMaxTermLength { value: i64 },
    #[error("script range is empty: {low:?} is above {high:?}")]
    EmptyScriptRange { low: char, high: char },
}

#[cfg(test)]
mod tests;
