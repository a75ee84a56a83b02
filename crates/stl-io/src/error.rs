//! Error types for STL codec operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for STL codec operations.
pub type StlResult<T> = Result<T, StlError>;

/// Errors that can occur while decoding or encoding STL data.
///
/// All parse errors are fatal: a decode either produces a whole mesh or
/// fails without partial results. Degenerate normals are deliberately not
/// represented here — they are a soft condition handled by derivation or
/// zero-vector fallback and surfaced through `tracing` warnings.
#[derive(Debug, Error)]
pub enum StlError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Binary input ended before the declared triangle count was satisfied.
    #[error("truncated binary STL: expected {expected} triangles, got {got}")]
    TruncatedInput {
        /// Triangle count declared in the header.
        expected: u32,
        /// Triangles fully read before the stream ended.
        got: u32,
    },

    /// ASCII `endfacet` reached with fewer than three accumulated vertices.
    #[error("incomplete facet at line {line} in {path}")]
    IncompleteFacet {
        /// Source the ASCII data was read from.
        path: PathBuf,
        /// 1-based line number of the offending `endfacet`.
        line: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
