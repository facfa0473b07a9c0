//! Configuration templates for `sift init`.
//!
//! Templates are stored as valid TOML files and returned as commented-out
//! example configurations.

/// Default local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Converts a valid TOML template into a commented-out example config.
///
/// Lines that are already comments are preserved as-is. Non-comment, non-empty
/// lines get a "# " prefix. Empty lines are preserved.
fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{merge::ParsedConfig, merge_configs, parse::parse_config_str};

    #[test]
    fn local_template_parses_and_validates() {
        let path = Path::new("/work/.sift.toml");
        let config = parse_config_str(LOCAL_TEMPLATE, path).unwrap();
        let merged = merge_configs(&[ParsedConfig {
            path: path.to_path_buf(),
            config,
        }])
        .unwrap();
        assert!(merged.validate().is_ok());
    }

    #[test]
    fn global_template_parses_as_valid_toml() {
        let result = parse_config_str(GLOBAL_TEMPLATE, Path::new("~/.sift.toml"));
        assert!(
            result.is_ok(),
            "global template failed to parse: {result:?}"
        );
    }

    #[test]
    fn rendered_template_is_all_comments() {
        for line in local_template().lines() {
            assert!(line.is_empty() || line.starts_with('#'), "{line}");
        }
    }

    #[test]
    fn comment_template_preserves_existing_comments() {
        let input = "# This is a comment\nkey = \"value\"\n";
        let result = comment_template(input);
        assert_eq!(result, "# This is a comment\n# key = \"value\"\n");
    }

    #[test]
    fn comment_template_handles_section_headers() {
        let input = "[section]\nkey = \"value\"\n\n";
        let result = comment_template(input);
        assert_eq!(result, "# [section]\n# key = \"value\"\n\n");
    }
}
