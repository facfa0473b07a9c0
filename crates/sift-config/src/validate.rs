//! Configuration validation.
//!
//! Rejects out-of-range settings and reports warnings for missing directories.

use std::fmt;

use crate::{Config, ConfigError};

/// Largest accepted `score_precision`.
const MAX_SCORE_PRECISION: u32 = 10;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The candidate directory does not exist.
    CandidateDirMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The role directory does not exist.
    RolesDirMissing {
        /// Path that doesn't exist.
        path: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CandidateDirMissing { path } => {
                write!(f, "candidate directory does not exist: {path}")
            }
            Self::RolesDirMissing { path } => {
                write!(f, "roles directory does not exist: {path}")
            }
        }
    }
}

/// Checks every ranking setting against its accepted range.
pub fn validate_settings(config: &Config) -> Result<(), ConfigError> {
    let ranking = &config.ranking;

    if !(0.0..=1.0).contains(&ranking.invite_threshold) {
        return Err(ConfigError::InvalidSetting {
            key: "ranking.invite_threshold",
            reason: format!("{} is outside [0, 1]", ranking.invite_threshold),
        });
    }
    if ranking.score_precision > MAX_SCORE_PRECISION {
        return Err(ConfigError::InvalidSetting {
            key: "ranking.score_precision",
            reason: format!(
                "{} exceeds the maximum of {MAX_SCORE_PRECISION}",
                ranking.score_precision
            ),
        });
    }
    if ranking.max_features == 0 {
        return Err(ConfigError::InvalidSetting {
            key: "ranking.max_features",
            reason: "must be at least 1".to_string(),
        });
    }
    let (min_n, max_n) = ranking.ngram_range;
    if min_n == 0 || min_n > max_n {
        return Err(ConfigError::InvalidSetting {
            key: "ranking.ngram_range",
            reason: format!("[{min_n}, {max_n}] must satisfy 1 <= min <= max"),
        });
    }

    Ok(())
}

/// Returns warnings for configured directories that do not exist yet.
pub fn collect_warnings(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if !config.paths.candidate_dir.is_dir() {
        warnings.push(ConfigWarning::CandidateDirMissing {
            path: config.paths.candidate_dir.display().to_string(),
        });
    }
    if !config.paths.roles_dir.is_dir() {
        warnings.push(ConfigWarning::RolesDirMissing {
            path: config.paths.roles_dir.display().to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathSettings, test_support::TestDir};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_settings(&Config::default()).is_ok());
    }

    #[test]
    fn test_threshold_bounds() {
        let mut config = Config::default();
        config.ranking.invite_threshold = 1.0;
        assert!(validate_settings(&config).is_ok());

        config.ranking.invite_threshold = 1.5;
        let err = validate_settings(&config).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidSetting { key, .. } if key == "ranking.invite_threshold")
        );

        config.ranking.invite_threshold = f64::NAN;
        assert!(validate_settings(&config).is_err());
    }

    #[test]
    fn test_precision_limit() {
        let mut config = Config::default();
        config.ranking.score_precision = 11;
        assert!(validate_settings(&config).is_err());
    }

    #[test]
    fn test_zero_max_features() {
        let mut config = Config::default();
        config.ranking.max_features = 0;
        assert!(validate_settings(&config).is_err());
    }

    #[test]
    fn test_ngram_range() {
        let mut config = Config::default();
        config.ranking.ngram_range = (0, 2);
        assert!(validate_settings(&config).is_err());
        config.ranking.ngram_range = (3, 2);
        assert!(validate_settings(&config).is_err());
        config.ranking.ngram_range = (2, 2);
        assert!(validate_settings(&config).is_ok());
    }

    #[test]
    fn test_missing_directories_warn() {
        let test_dir = TestDir::new();
        let config = Config {
            paths: PathSettings::default().with_data_dir(test_dir.path()),
            ..Config::default()
        };

        let warnings = collect_warnings(&config);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].to_string().starts_with("candidate directory"));

        test_dir.create_dir("candidates");
        test_dir.create_dir("roles");
        assert!(collect_warnings(&config).is_empty());
    }
}
