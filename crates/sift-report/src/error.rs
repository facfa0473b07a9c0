//! Error types for screening runs and reports.

use std::{io, path::PathBuf};

use sift_document::DocumentError;
use thiserror::Error;

/// Errors that can occur while screening or reading and writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Loading the role or the candidates failed.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Failed to write a file.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to read a file.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to serialize a report.
    #[error("failed to serialize report: {0}")]
    Serialize(serde_json::Error),

    /// A report file is not valid report JSON.
    #[error("failed to parse report {path}: {source}")]
    Parse {
        /// Path to the report.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// No report exists at the expected location.
    #[error("no report found at {path}")]
    NotFound {
        /// Where the report was expected.
        path: PathBuf,
    },
}
