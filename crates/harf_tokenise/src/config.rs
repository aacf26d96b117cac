//! Tokeniser configuration.
//!
//! Configuration is an immutable value handed to
//! [`Tokeniser::new`](crate::Tokeniser::new). There is no process-wide
//! state, so two tokenisers with different settings can run side by side.
//!
//! The embedding environment usually supplies the values as properties.
//! `TokeniserConfig` deserializes from any serde format using the property
//! names `lowercase`, `max.term.length`, `drop.long.tokens` and `script`;
//! missing properties take their defaults and invalid values are rejected
//! during deserialization.

use std::num::NonZeroUsize;

use harf_scan_core::{OverlongPolicy, ScriptRange};
use serde::Deserialize;

use crate::ConfigError;

/// Default for `max.term.length`.
pub const DEFAULT_MAX_TERM_LENGTH: NonZeroUsize = NonZeroUsize::MIN.saturating_add(19);

/// Default for `lowercase`.
pub const DEFAULT_LOWERCASE: bool = true;

/// Default for `drop.long.tokens`.
pub const DEFAULT_DROP_OVERLONG_TOKENS: bool = false;

/// Immutable tokeniser settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct TokeniserConfig {
    max_term_length: NonZeroUsize,
    lowercase: bool,
    drop_overlong_tokens: bool,
    script: ScriptRange,
}

impl TokeniserConfig {
    /// Create a configuration with the given length cap and default
    /// everything else.
    pub fn new(max_term_length: usize) -> Result<Self, ConfigError> {
        let max_term_length = NonZeroUsize::new(max_term_length)
            .ok_or(ConfigError::NonPositiveMaxTermLength { value: 0 })?;
        Ok(Self {
            max_term_length,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    #[must_use]
    pub fn with_drop_overlong_tokens(mut self, drop: bool) -> Self {
        self.drop_overlong_tokens = drop;
        self
    }

    #[must_use]
    pub fn with_script(mut self, script: ScriptRange) -> Self {
        self.script = script;
        self
    }

    /// Maximum token length in code points.
    pub fn max_term_length(&self) -> NonZeroUsize {
        self.max_term_length
    }

    /// Whether tokens are lowercased before the length cap and validation.
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// Whether overlong tokens are dropped instead of truncated.
    pub fn drop_overlong_tokens(&self) -> bool {
        self.drop_overlong_tokens
    }

    pub fn script(&self) -> ScriptRange {
        self.script
    }

    pub(crate) fn overlong_policy(&self) -> OverlongPolicy {
        if self.drop_overlong_tokens {
            OverlongPolicy::Drop
        } else {
            OverlongPolicy::Truncate
        }
    }
}

impl Default for TokeniserConfig {
    fn default() -> Self {
        Self {
            max_term_length: DEFAULT_MAX_TERM_LENGTH,
            lowercase: DEFAULT_LOWERCASE,
            drop_overlong_tokens: DEFAULT_DROP_OVERLONG_TOKENS,
            script: ScriptRange::ARABIC,
        }
    }
}

/// Unchecked property values as supplied by the embedding environment.
#[derive(Deserialize)]
struct RawConfig {
    #[serde(rename = "max.term.length", default = "raw_default_max_term_length")]
    max_term_length: i64,
    #[serde(default = "raw_default_lowercase")]
    lowercase: bool,
    #[serde(rename = "drop.long.tokens", default)]
    drop_overlong_tokens: bool,
    #[serde(default)]
    script: Option<RawScript>,
}

#[derive(Deserialize)]
struct RawScript {
    low: char,
    high: char,
}

fn raw_default_max_term_length() -> i64 {
    // 20 always fits.
    i64::try_from(DEFAULT_MAX_TERM_LENGTH.get()).unwrap_or(i64::MAX)
}

fn raw_default_lowercase() -> bool {
    DEFAULT_LOWERCASE
}

impl TryFrom<RawConfig> for TokeniserConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let max_term_length = usize::try_from(raw.max_term_length)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ConfigError::NonPositiveMaxTermLength {
                value: raw.max_term_length,
            })?;
        let script = match raw.script {
            None => ScriptRange::ARABIC,
            Some(RawScript { low, high }) => ScriptRange::new(low, high)
                .ok_or(ConfigError::EmptyScriptRange { low, high })?,
        };
        Ok(Self {
            max_term_length,
            lowercase: raw.lowercase,
            drop_overlong_tokens: raw.drop_overlong_tokens,
            script,
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
