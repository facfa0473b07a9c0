//! Error types for the matching core.

use thiserror::Error;

/// Errors that can occur when building a lexical index.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// No documents were supplied.
    #[error("cannot build an index over an empty corpus")]
    EmptyCorpus,

    /// The id and text sequences differ in length.
    #[error("got {ids} ids but {texts} texts")]
    LengthMismatch {
        /// Number of ids supplied.
        ids: usize,
        /// Number of texts supplied.
        texts: usize,
    },
}
