//! Wavefront asset parsing for the screensaver: OBJ meshes flattened into
//! GPU-ready attribute buffers, and MTL material libraries.
//!
//! Both parsers are line-oriented and forward-tolerant: directives they do
//! not recognize are logged and skipped, never fatal.

use thiserror::Error;

mod line;
pub mod mesh;
pub mod mtl;
pub mod obj;

/// Errors the parsers report. Everything else (unknown directives, malformed
/// numeric data) degrades gracefully instead of erroring; see module docs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// A face reference resolved outside its attribute table, e.g. a relative
    /// index before any entries of that kind exist.
    #[error("face index {index} out of range ({len} entries) on line {line}")]
    IndexOutOfRange { line: usize, index: i64, len: usize },

    /// A face reference slot that is not an integer at all.
    #[error("malformed face reference '{reference}' on line {line}")]
    MalformedFaceReference { line: usize, reference: String },

    /// An MTL property directive appeared before the first `newmtl`.
    #[error("property '{keyword}' outside a material block on line {line}")]
    PropertyOutsideMaterial { line: usize, keyword: String },
}
