//! Configuration file discovery.
//!
//! Discovers `.sift.toml` files by walking up the directory tree from a starting point,
//! then appending the global `~/.sift.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".sift.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global (`~/.sift.toml`) last.
/// Discovery stops at a config file that sets `root = true`; the global file is skipped
/// in that case.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let is_root = is_root_config(&config_path);
            configs.push(config_path);
            if is_root {
                found_root = true;
                break;
            }
        }
        current = dir.parent();
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.sift.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    /// Drops the global config (if the test machine has one) from a discovery result.
    fn local_only(configs: &[PathBuf]) -> Vec<&PathBuf> {
        configs.iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn test_discover_no_configs() {
        let test_dir = TestDir::new();
        let subdir = test_dir.create_dir("a/b/c");

        let configs = discover_config_files(&subdir);

        assert!(local_only(&configs).is_empty());
    }

    #[test]
    fn test_discover_multiple_configs_precedence_order() {
        let test_dir = TestDir::new();
        let root_config = test_dir.create_config_at_root();
        let mid_config = test_dir.create_config("hiring");
        let leaf_config = test_dir.create_config("hiring/cs/2026");
        let working_dir = test_dir.create_dir("hiring/cs/2026/round1");

        let configs = discover_config_files(&working_dir);
        let local = local_only(&configs);

        assert_eq!(local.len(), 3);
        assert_eq!(local[0], &leaf_config);
        assert_eq!(local[1], &mid_config);
        assert_eq!(local[2], &root_config);
    }

    #[test]
    fn test_discover_skips_directory_named_like_config() {
        let test_dir = TestDir::new();
        fs::create_dir_all(test_dir.path().join(CONFIG_FILENAME)).unwrap();
        let subdir = test_dir.create_dir("subdir");

        let configs = discover_config_files(&subdir);

        assert!(local_only(&configs).is_empty());
    }

    #[test]
    fn test_root_config_stops_discovery() {
        let test_dir = TestDir::new();
        let _parent_config = test_dir.create_config_at_root();
        let root_config = test_dir.create_root_config("project");
        let working_dir = test_dir.create_dir("project/candidates");

        let configs = discover_config_files(&working_dir);

        assert_eq!(configs, vec![root_config]);
    }

    #[test]
    fn test_root_false_does_not_stop_discovery() {
        let test_dir = TestDir::new();
        let parent_config = test_dir.create_config_at_root();
        let mid_config = test_dir.create_config_with_content("project", "root = false\n");
        let working_dir = test_dir.create_dir("project/src");

        let configs = discover_config_files(&working_dir);
        let local = local_only(&configs);

        assert_eq!(local, vec![&mid_config, &parent_config]);
    }

    #[test]
    fn test_global_config_path_uses_filename() {
        let path = global_config_path();
        assert!(path.is_some_and(|p| p.ends_with(CONFIG_FILENAME)));
    }
}
