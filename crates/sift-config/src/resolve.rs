//! Path resolution for configured directories.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths. Unlike discovery, resolution
//! does not require the target to exist: `sift demo` and `sift ingest` create missing
//! directories on demand.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a configured path against the directory of the file that declared it.
///
/// Handles three cases:
/// - Tilde paths (`~/hiring`) - expanded to home directory
/// - Relative paths (`./data`, `../shared`) - joined onto `config_dir`
/// - Absolute paths - returned as-is
pub fn resolve_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Formats a path for display, relative to `base` when that is shorter.
///
/// Paths under the home directory that cannot be made relative are shown with a `~` prefix.
pub fn format_path_for_display(path: &Path, base: &Path) -> String {
    if let Some(relative) = pathdiff::diff_paths(path, base)
        && !relative.starts_with("..")
    {
        if relative.as_os_str().is_empty() {
            return ".".to_string();
        }
        return relative.display().to_string();
    }

    if let Ok(home) = home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        return Path::new("~").join(rest).display().to_string();
    }

    path.display().to_string()
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_path("./data", Path::new("/work")).unwrap();
        assert_eq!(resolved, PathBuf::from("/work/./data"));
    }

    #[test]
    fn test_resolve_relative_path_without_dot() {
        let resolved = resolve_path("data/candidates", Path::new("/work")).unwrap();
        assert_eq!(resolved, PathBuf::from("/work/data/candidates"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let resolved = resolve_path("/srv/hiring", Path::new("/other")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/hiring"));
    }

    #[test]
    fn test_resolve_tilde_path() {
        let Ok(home) = home_dir() else {
            return;
        };
        let resolved = resolve_path("~/hiring", Path::new("/other")).unwrap();
        assert_eq!(resolved, home.join("hiring"));
    }

    #[test]
    fn test_resolve_missing_path_is_not_an_error() {
        let resolved = resolve_path("does/not/exist", Path::new("/nowhere")).unwrap();
        assert_eq!(resolved, PathBuf::from("/nowhere/does/not/exist"));
    }

    #[test]
    fn test_format_relative_to_base() {
        let shown = format_path_for_display(Path::new("/work/data/roles"), Path::new("/work"));
        assert_eq!(shown, "data/roles");
    }

    #[test]
    fn test_format_same_as_base() {
        let shown = format_path_for_display(Path::new("/work"), Path::new("/work"));
        assert_eq!(shown, ".");
    }

    #[test]
    fn test_format_outside_base_stays_absolute() {
        let shown = format_path_for_display(Path::new("/srv/x"), Path::new("/work"));
        assert!(shown == "/srv/x" || shown.starts_with('~'));
    }
}
