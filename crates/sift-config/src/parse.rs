//! Configuration file parsing.
//!
//! Parses individual `.sift.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Path settings section.
    pub paths: Option<RawPathSettings>,
    /// Ranking settings section.
    pub ranking: Option<RawRankingSettings>,
    /// Ingestion settings section.
    pub ingest: Option<RawIngestSettings>,
}

/// Raw `[paths]` section. Relative paths resolve against the declaring file's directory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPathSettings {
    /// Root data directory.
    pub data_dir: Option<String>,
    /// Report output directory.
    pub output_dir: Option<String>,
    /// Resume directory. Defaults to `<data_dir>/candidates`.
    pub candidate_dir: Option<String>,
    /// Role directory. Defaults to `<data_dir>/roles`.
    pub roles_dir: Option<String>,
}

/// Raw `[ranking]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRankingSettings {
    /// Minimum similarity for an interview invitation.
    pub invite_threshold: Option<f64>,
    /// Decimal places kept in the reported fit score.
    pub score_precision: Option<u32>,
    /// Vocabulary cap.
    pub max_features: Option<usize>,
    /// Inclusive n-gram range, written as a two-element array.
    pub ngram_range: Option<(usize, usize)>,
    /// Sublinear term-frequency scaling.
    pub sublinear_tf: Option<bool>,
}

/// Raw `[ingest]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawIngestSettings {
    /// Include glob(s). Accepts a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub include: Option<Vec<String>>,
    /// Exclude glob(s). Accepts a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub exclude: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.paths.is_none());
        assert!(config.ranking.is_none());
        assert!(config.ingest.is_none());
    }

    #[test]
    fn test_parse_ranking_section() {
        let toml = r"
[ranking]
invite_threshold = 0.35
ngram_range = [1, 3]
sublinear_tf = false
";
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let ranking = config.ranking.unwrap();
        assert_eq!(ranking.invite_threshold, Some(0.35));
        assert_eq!(ranking.ngram_range, Some((1, 3)));
        assert_eq!(ranking.sublinear_tf, Some(false));
        assert!(ranking.max_features.is_none());
    }

    #[test]
    fn test_parse_paths_section() {
        let toml = r#"
[paths]
data_dir = "./hiring"
output_dir = "~/reports"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let paths = config.paths.unwrap();
        assert_eq!(paths.data_dir.as_deref(), Some("./hiring"));
        assert_eq!(paths.output_dir.as_deref(), Some("~/reports"));
        assert!(paths.candidate_dir.is_none());
    }

    #[test]
    fn test_parse_ingest_single_string() {
        let toml = r#"
[ingest]
include = "**/*.txt"
exclude = ["**/drafts/**", "**/old/**"]
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let ingest = config.ingest.unwrap();
        assert_eq!(ingest.include, Some(vec!["**/*.txt".to_string()]));
        assert_eq!(ingest.exclude.map(|e| e.len()), Some(2));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_config_str("[ranking\nbroken", Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_wrong_type() {
        let toml = "[ranking]\nmax_features = \"lots\"\n";
        let result = parse_config_str(toml, Path::new("bad.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_config_file(Path::new("/nonexistent/.sift.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }
}
