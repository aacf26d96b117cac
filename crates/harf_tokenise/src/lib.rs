//! Validating script tokeniser for text-indexing pipelines.
//!
//! Splits a character stream into maximal runs of a script's letters (Arabic
//! by default), optionally lowercasing as it goes, then filters out noise:
//! overlong runs are truncated or dropped, and runs with more than four
//! ASCII digits or more than three identical characters in a row are
//! rejected.
//!
//! ```
//! use harf_tokenise::{Tokeniser, TokeniserConfig};
//!
//! let tokeniser = Tokeniser::new(TokeniserConfig::default());
//! let tokens = tokeniser.tokens_str("ذهب الولد إلى المدرسسسسة").unwrap_or_default();
//! assert_eq!(tokens, ["ذهب", "الولد", "إلى"]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! harf_scan_core:  CharSource → Cursor → Scanner (runs, length cap)
//! harf_tokenise:   Scanner → validate → TokenStream (Iterator)
//! ```

mod config;
mod error;
mod stream;
pub mod validate;

use std::io::{BufReader, Read};
use std::sync::Once;

pub use config::{
    TokeniserConfig, DEFAULT_DROP_OVERLONG_TOKENS, DEFAULT_LOWERCASE, DEFAULT_MAX_TERM_LENGTH,
};
pub use error::{ConfigError, TokeniseError};
pub use harf_scan_core::{CharIter, CharSource, ScriptRange, StrSource, Utf8Reader};
pub use stream::{TokenStats, TokenStream};

/// Entry point: builds a [`TokenStream`] per input source.
///
/// Holds only the immutable configuration, so one `Tokeniser` can be shared
/// across threads while each thread tokenises its own sources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokeniser {
    config: TokeniserConfig,
}

impl Tokeniser {
    pub fn new(config: TokeniserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokeniserConfig {
        &self.config
    }

    /// Tokenise an arbitrary character source.
    pub fn tokenise<S: CharSource>(&self, source: S) -> TokenStream<S> {
        TokenStream::new(source, &self.config)
    }

    /// Tokenise an in-memory string. Never yields `Err`.
    pub fn tokenise_str<'a>(&self, text: &'a str) -> TokenStream<StrSource<'a>> {
        self.tokenise(StrSource::new(text))
    }

    /// Tokenise UTF-8 bytes from a reader.
    ///
    /// Malformed UTF-8 ends the stream with a read fault.
    pub fn tokenise_reader<R: Read>(&self, reader: R) -> TokenStream<Utf8Reader<BufReader<R>>> {
        self.tokenise(Utf8Reader::new(BufReader::new(reader)))
    }

    /// Collect every token from `source`, or the read fault that ended it.
    pub fn tokens<S: CharSource>(&self, source: S) -> Result<Vec<String>, TokeniseError> {
        self.tokenise(source).collect()
    }

    /// Collect every token from an in-memory string.
    pub fn tokens_str(&self, text: &str) -> Result<Vec<String>, TokeniseError> {
        self.tokens(StrSource::new(text))
    }
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=harf_tokenise=trace` to see every rejected candidate.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
