//! Low-level character-class scanner for harf.
//!
//! Turns a stream of code points into maximal runs of in-range characters
//! ("candidates"), applying the term length cap on the way. It does not
//! validate candidates or fold case; that is the job of `harf_tokenise`.
//!
//! ```text
//! CharSource → Cursor (one-char lookahead) → Scanner → Scanned
//! ```
//!
//! This crate has no dependencies so that any pipeline stage needing only
//! the raw runs can use it directly.

mod class;
mod cursor;
mod scanner;
mod source;

pub use class::{CharClass, ScriptRange, JOINER};
pub use cursor::Cursor;
pub use scanner::{Candidate, OverlongPolicy, Scanned, Scanner};
pub use source::{CharIter, CharSource, StrSource, Utf8Reader};
