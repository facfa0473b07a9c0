//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, IngestSettings, PathSettings, RankingSettings,
    discovery::is_global_config,
    parse::{RawConfig, RawIngestSettings, RawPathSettings, RawRankingSettings},
    resolve::resolve_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Paths: first defined value wins, resolved against the directory of the declaring file
/// - Ingest patterns: the highest precedence list replaces lower ones entirely
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let config_root = configs.first().map(|c| c.dir().to_path_buf());
    // Defaults stay relative to the working directory when only the global file exists
    let anchor_dir = configs
        .iter()
        .find(|c| !is_global_config(&c.path))
        .map(ParsedConfig::dir);
    let paths = merge_paths(configs, anchor_dir)?;
    let ranking = merge_ranking(configs);
    let ingest = merge_ingest(configs);

    Ok(Config {
        paths,
        ranking,
        ingest,
        config_root,
    })
}

/// Merges the `[paths]` section.
///
/// Unset directories fall back to the defaults, anchored at `anchor_dir`. The candidate and
/// role directories default to children of the resolved data directory.
fn merge_paths(
    configs: &[ParsedConfig],
    anchor_dir: Option<&Path>,
) -> Result<PathSettings, ConfigError> {
    let anchor = |path: PathBuf| match anchor_dir {
        Some(root) if path.is_relative() => root.join(path),
        _ => path,
    };
    let defaults = PathSettings::default();

    let data_dir = first_path(configs, |p| p.data_dir.as_deref())?
        .unwrap_or_else(|| anchor(defaults.data_dir.clone()));
    let output_dir = first_path(configs, |p| p.output_dir.as_deref())?
        .unwrap_or_else(|| anchor(defaults.output_dir.clone()));
    let candidate_dir = first_path(configs, |p| p.candidate_dir.as_deref())?
        .unwrap_or_else(|| data_dir.join("candidates"));
    let roles_dir =
        first_path(configs, |p| p.roles_dir.as_deref())?.unwrap_or_else(|| data_dir.join("roles"));

    Ok(PathSettings {
        data_dir,
        output_dir,
        candidate_dir,
        roles_dir,
    })
}

/// Finds the highest precedence definition of a path field and resolves it.
fn first_path<F>(configs: &[ParsedConfig], field: F) -> Result<Option<PathBuf>, ConfigError>
where
    F: Fn(&RawPathSettings) -> Option<&str>,
{
    for parsed in configs {
        if let Some(ref paths) = parsed.config.paths
            && let Some(value) = field(paths)
        {
            return resolve_path(value, parsed.dir()).map(Some);
        }
    }
    Ok(None)
}

/// Merges ranking settings, taking first defined value for each field.
fn merge_ranking(configs: &[ParsedConfig]) -> RankingSettings {
    let mut result = RankingSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref ranking) = parsed.config.ranking {
            apply_raw_ranking(&mut result, ranking);
        }
    }

    result
}

/// Applies raw ranking settings to result, overwriting any present values.
fn apply_raw_ranking(result: &mut RankingSettings, raw: &RawRankingSettings) {
    if let Some(v) = raw.invite_threshold {
        result.invite_threshold = v;
    }
    if let Some(v) = raw.score_precision {
        result.score_precision = v;
    }
    if let Some(v) = raw.max_features {
        result.max_features = v;
    }
    if let Some(v) = raw.ngram_range {
        result.ngram_range = v;
    }
    if let Some(v) = raw.sublinear_tf {
        result.sublinear_tf = v;
    }
}

/// Merges ingestion settings.
fn merge_ingest(configs: &[ParsedConfig]) -> IngestSettings {
    let mut result = IngestSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref ingest) = parsed.config.ingest {
            apply_raw_ingest(&mut result, ingest);
        }
    }

    result
}

/// Applies raw ingestion settings to result.
fn apply_raw_ingest(result: &mut IngestSettings, raw: &RawIngestSettings) {
    if let Some(ref v) = raw.include {
        result.include.clone_from(v);
    }
    if let Some(ref v) = raw.exclude {
        result.exclude.clone_from(v);
    }
}
