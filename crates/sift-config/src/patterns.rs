//! Include/exclude pattern compilation and matching.
//!
//! Compiles the `[ingest]` glob patterns into matchers that decide which files under the
//! candidate directory are treated as resumes.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::{ConfigError, IngestSettings};

/// Compiled ingestion globs.
#[derive(Debug, Clone)]
pub struct IngestPatterns {
    /// Files must match at least one of these.
    include: GlobSet,
    /// Files matching any of these are skipped.
    exclude: GlobSet,
}

impl IngestPatterns {
    /// Compiles include/exclude patterns into efficient matchers.
    pub fn compile(settings: &IngestSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            include: build_set(&settings.include, "include")?,
            exclude: build_set(&settings.exclude, "exclude")?,
        })
    }

    /// Checks if a path (relative to the candidate directory) should be ingested.
    ///
    /// A file matches if it matches at least one include pattern and no exclude pattern.
    pub fn matches(&self, path: &Path) -> bool {
        self.include.is_match(path) && !self.exclude.is_match(path)
    }
}

/// Builds a glob set from a list of patterns.
fn build_set(patterns: &[String], kind: &str) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_glob(pattern)?);
    }
    builder.build().map_err(|e| ConfigError::InvalidPattern {
        pattern: format!("<combined {kind} patterns>"),
        source: e,
    })
}

/// Compiles a single glob pattern.
fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}
