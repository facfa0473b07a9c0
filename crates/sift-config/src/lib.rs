//! Configuration system for sift.
//!
//! sift uses TOML configuration files named `.sift.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.sift.toml` files
//! found, then loading `~/.sift.toml` as the global config with lowest precedence.
//!
//! The loaded [`Config`] is an explicit value: the CLI loads it once and hands the relevant
//! sections to the ranking pipeline and the ingestion code.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod patterns;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{
    CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config,
};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawIngestSettings, RawPathSettings, RawRankingSettings, parse_config_file,
    parse_config_str,
};
pub use patterns::IngestPatterns;
pub use resolve::{format_path_for_display, resolve_path};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;

/// Default minimum similarity for an interview invitation.
pub const DEFAULT_INVITE_THRESHOLD: f64 = 0.2;
/// Default number of decimals kept in reported fit scores.
pub const DEFAULT_SCORE_PRECISION: u32 = 4;
/// Default vocabulary cap for the lexical index.
pub const DEFAULT_MAX_FEATURES: usize = 5000;
/// Default n-gram range (inclusive) for the lexical index.
pub const DEFAULT_NGRAM_RANGE: (usize, usize) = (1, 2);
/// Default include globs for resume ingestion.
pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &["**/*.txt", "**/*.pdf", "**/*.json", "**/*.md"];

/// Top-level merged configuration for sift.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.sift.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Data and output locations.
    pub paths: PathSettings,
    /// Ranking pipeline settings.
    pub ranking: RankingSettings,
    /// Resume ingestion settings.
    pub ingest: IngestSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.sift.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found. The merged
    /// configuration is validated before it is returned.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let config = merge_configs(&parsed)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every setting is within its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate::validate_settings(self)
    }

    /// Returns non-fatal warnings about the configured directories.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        validate::collect_warnings(self)
    }

    /// Compiles the ingestion include/exclude globs.
    pub fn ingest_patterns(&self) -> Result<IngestPatterns, ConfigError> {
        IngestPatterns::compile(&self.ingest)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.sift.toml` file so it can be pasted into one.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            paths: SerializablePaths::from(&self.paths),
            ranking: self.ranking.clone(),
            ingest: self.ingest.clone(),
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::Serialize)
    }
}

/// Locations of the candidate corpus, role definitions and generated reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSettings {
    /// Root data directory.
    pub data_dir: PathBuf,
    /// Directory where reports are written.
    pub output_dir: PathBuf,
    /// Directory scanned for resumes.
    pub candidate_dir: PathBuf,
    /// Directory holding role definitions.
    pub roles_dir: PathBuf,
}

impl PathSettings {
    /// Returns a copy rooted at `data_dir`, with candidates and roles beneath it.
    pub fn with_data_dir(&self, data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            output_dir: self.output_dir.clone(),
            candidate_dir: data_dir.join("candidates"),
            roles_dir: data_dir.join("roles"),
        }
    }
}

impl Default for PathSettings {
    fn default() -> Self {
        let data_dir = PathBuf::from("data");
        Self {
            candidate_dir: data_dir.join("candidates"),
            roles_dir: data_dir.join("roles"),
            data_dir,
            output_dir: PathBuf::from("outputs"),
        }
    }
}

/// Settings for the ranking pipeline and its lexical index.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RankingSettings {
    /// Minimum similarity for an interview invitation.
    pub invite_threshold: f64,
    /// Decimal places kept in the reported fit score.
    pub score_precision: u32,
    /// Maximum vocabulary size, keeping the most frequent terms.
    pub max_features: usize,
    /// Inclusive n-gram range used to build index terms.
    pub ngram_range: (usize, usize),
    /// Use `1 + ln(tf)` instead of raw term counts.
    pub sublinear_tf: bool,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            invite_threshold: DEFAULT_INVITE_THRESHOLD,
            score_precision: DEFAULT_SCORE_PRECISION,
            max_features: DEFAULT_MAX_FEATURES,
            ngram_range: DEFAULT_NGRAM_RANGE,
            sublinear_tf: true,
        }
    }
}

/// Settings for resume ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IngestSettings {
    /// Globs (relative to the candidate directory) selecting resume files.
    pub include: Vec<String>,
    /// Globs excluding files that matched an include pattern.
    pub exclude: Vec<String>,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            include: DEFAULT_INCLUDE_PATTERNS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            exclude: Vec::new(),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Data and output locations.
    paths: SerializablePaths,
    /// Ranking pipeline settings.
    ranking: RankingSettings,
    /// Resume ingestion settings.
    ingest: IngestSettings,
}

/// Path settings rendered as display strings.
#[derive(Serialize)]
struct SerializablePaths {
    /// Root data directory.
    data_dir: String,
    /// Report output directory.
    output_dir: String,
    /// Resume directory.
    candidate_dir: String,
    /// Role directory.
    roles_dir: String,
}

impl From<&PathSettings> for SerializablePaths {
    fn from(paths: &PathSettings) -> Self {
        Self {
            data_dir: paths.data_dir.display().to_string(),
            output_dir: paths.output_dir.display().to_string(),
            candidate_dir: paths.candidate_dir.display().to_string(),
            roles_dir: paths.roles_dir.display().to_string(),
        }
    }
}
