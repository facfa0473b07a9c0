//! Error types for candidate ingestion and role loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when reading candidates or roles.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write a file.
    #[error("failed to write file {path}: {source}")]
    WriteFile {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A role file could not be understood.
    #[error("malformed role file {path}: {reason}")]
    MalformedRole {
        /// Path to the role file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// A role file has an extension other than `.yaml`, `.yml` or `.json`.
    #[error("unsupported role format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedRoleFormat {
        /// Path to the role file.
        path: PathBuf,
    },

    /// An ingestion glob pattern could not be compiled.
    #[error("invalid ingest pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Underlying configuration error.
        source: sift_config::ConfigError,
    },

    /// The candidate directory does not exist.
    #[error("candidate directory not found: {path}")]
    MissingDirectory {
        /// The missing directory.
        path: PathBuf,
    },
}
