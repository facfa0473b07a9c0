//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use sift_config::{Config, PathSettings};
use sift_document::{RoleProfile, load_role};

use super::args::{DataArgs, OutArgs};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Configured paths, re-rooted when `--data` is given.
    pub fn paths(&self, data: &DataArgs) -> PathSettings {
        match &data.data {
            Some(dir) => self.config.paths.with_data_dir(dir),
            None => self.config.paths.clone(),
        }
    }

    /// Report directory: `--out` if given, otherwise the configured output directory.
    pub fn output_dir(&self, out: &OutArgs) -> PathBuf {
        out.out
            .clone()
            .unwrap_or_else(|| self.config.paths.output_dir.clone())
    }
}

/// Loads a role file or exits with a consistent error.
pub fn load_role_or_failure(path: &Path) -> Result<RoleProfile, ExitCode> {
    load_role(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
