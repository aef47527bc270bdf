//! Low-level tokenizer for the Clyp language.
//!
//! Produces `(RawTag, len)` pairs from a sentinel-terminated buffer. Nothing
//! here knows about keywords, builtins or HTML; those belong to the cooking
//! layer in `clyp_highlight`.
//!
//! # Pipeline
//!
//! ```text
//! &str ──► SourceBuffer ──► Cursor ──► RawScanner ──► RawToken { tag, len }
//! ```
//!
//! Token lengths always add up to the source length, so callers can rebuild
//! byte offsets by summing lengths.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
