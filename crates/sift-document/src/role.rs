//! Role profile files.
//!
//! Roles are stored as YAML (`.yaml`, `.yml`) or JSON (`.json`):
//!
//! ```yaml
//! id: cs_asst_prof
//! title: Assistant Professor of Computer Science
//! department: Computer Science
//! required_skills: [machine learning, data structures]
//! preferred_skills: deep learning
//! ```
//!
//! Every list is optional and a bare string counts as a one-element list.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::{DocumentError, RoleProfile};

/// Role file contents before defaults are applied.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRole {
    /// Identifier; defaults to the file stem.
    id: Option<String>,
    /// Required position title.
    title: Option<String>,
    /// Department; defaults to empty.
    department: Option<String>,
    /// Required skills.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    required_skills: Option<Vec<String>>,
    /// Preferred skills.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    preferred_skills: Option<Vec<String>>,
    /// Research focus areas.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    research_focus: Option<Vec<String>>,
    /// Teaching requirements.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    teaching_requirements: Option<Vec<String>>,
}

/// Serialization format of a role file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoleFormat {
    /// YAML document.
    Yaml,
    /// JSON object.
    Json,
}

impl RoleFormat {
    /// Picks the format from a file extension.
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(OsStr::to_str)?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Loads a role profile from a YAML or JSON file.
pub fn load_role(path: &Path) -> Result<RoleProfile, DocumentError> {
    if RoleFormat::from_path(path).is_none() {
        return Err(DocumentError::UnsupportedRoleFormat {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path).map_err(|source| DocumentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_role_str(&contents, path)
}

/// Parses role file contents. The format and the default id both come from `path`.
pub fn parse_role_str(contents: &str, path: &Path) -> Result<RoleProfile, DocumentError> {
    let malformed = |reason: String| DocumentError::MalformedRole {
        path: path.to_path_buf(),
        reason,
    };

    let raw: RawRole = match RoleFormat::from_path(path) {
        Some(RoleFormat::Yaml) => {
            serde_yaml::from_str(contents).map_err(|e| malformed(e.to_string()))?
        }
        Some(RoleFormat::Json) => {
            serde_json::from_str(contents).map_err(|e| malformed(e.to_string()))?
        }
        None => {
            return Err(DocumentError::UnsupportedRoleFormat {
                path: path.to_path_buf(),
            });
        }
    };

    let title = raw
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| malformed("missing required field `title`".to_string()))?;
    let id = raw
        .id
        .filter(|id| !id.trim().is_empty())
        .or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .ok_or_else(|| malformed("cannot derive an id from the file name".to_string()))?;

    Ok(RoleProfile {
        id,
        title,
        department: raw.department.unwrap_or_default(),
        required_skills: raw.required_skills.unwrap_or_default(),
        preferred_skills: raw.preferred_skills.unwrap_or_default(),
        research_focus: raw.research_focus.unwrap_or_default(),
        teaching_requirements: raw.teaching_requirements.unwrap_or_default(),
    })
}

/// Writes `role` as pretty JSON to `<dir>/<id>.json`, creating `dir` if needed.
pub fn save_role(dir: &Path, role: &RoleProfile) -> Result<PathBuf, DocumentError> {
    let path = dir.join(format!("{}.json", role.id));
    let write_error = |source| DocumentError::WriteFile {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(write_error)?;
    let json = serde_json::to_string_pretty(role).map_err(|e| write_error(e.into()))?;
    fs::write(&path, json).map_err(write_error)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_yaml_role() {
        let yaml = r"
id: cs_asst_prof
title: Assistant Professor of Computer Science
department: Computer Science
required_skills:
  - machine learning
  - data structures
preferred_skills: deep learning
";
        let role = parse_role_str(yaml, Path::new("roles/cs.yaml")).unwrap();
        assert_eq!(role.id, "cs_asst_prof");
        assert_eq!(role.required_skills.len(), 2);
        assert_eq!(role.preferred_skills, vec!["deep learning".to_string()]);
        assert!(role.research_focus.is_empty());
    }

    #[test]
    fn test_id_and_department_defaults() {
        let role = parse_role_str("title: Lecturer\n", Path::new("roles/lecturer.yml")).unwrap();
        assert_eq!(role.id, "lecturer");
        assert_eq!(role.department, "");
        assert!(role.required_skills.is_empty());
    }

    #[test]
    fn test_parse_json_role() {
        let json = r#"{"title": "Professor of Physics", "research_focus": ["optics"]}"#;
        let role = parse_role_str(json, Path::new("physics.json")).unwrap();
        assert_eq!(role.id, "physics");
        assert_eq!(role.research_focus, vec!["optics".to_string()]);
    }

    #[test]
    fn test_missing_title_is_malformed() {
        let result = parse_role_str("department: Biology\n", Path::new("bio.yaml"));
        assert!(
            matches!(result, Err(DocumentError::MalformedRole { ref reason, .. }) if reason.contains("title"))
        );
    }

    #[test]
    fn test_invalid_yaml_is_malformed() {
        let result = parse_role_str("title: [unterminated\n", Path::new("bad.yaml"));
        assert!(matches!(result, Err(DocumentError::MalformedRole { .. })));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = load_role(Path::new("role.toml"));
        assert!(matches!(
            result,
            Err(DocumentError::UnsupportedRoleFormat { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_role(Path::new("/nonexistent/role.yaml"));
        assert!(matches!(result, Err(DocumentError::ReadFile { .. })));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let role = RoleProfile {
            id: "math_lecturer".into(),
            title: "Lecturer in Mathematics".into(),
            department: "Mathematics".into(),
            required_skills: vec!["calculus".into()],
            ..RoleProfile::default()
        };

        let path = save_role(&dir.path().join("roles"), &role).unwrap();

        assert!(path.ends_with("roles/math_lecturer.json"));
        assert_eq!(load_role(&path).unwrap(), role);
    }
}
