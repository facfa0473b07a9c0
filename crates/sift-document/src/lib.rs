//! Candidate and role records for sift.
//!
//! This crate owns the two inputs of a screening run:
//! - [`Candidate`] records, ingested from a directory of resumes
//! - [`RoleProfile`] records, loaded from YAML/JSON files or synthesized from a job title
//!
//! Nothing here scores anything; ranking lives in `sift-match`.

#![warn(missing_docs)]

mod classify;
mod error;
mod ingest;
mod markdown;
mod role;

use std::collections::BTreeMap;

pub use classify::{classify_role, infer_department, title_to_id};
pub use error::DocumentError;
pub use ingest::{display_name, ingest_candidates};
pub use markdown::markdown_to_text;
pub use role::{load_role, parse_role_str, save_role};
use serde::{Deserialize, Serialize};

/// A candidate applying for a role.
///
/// `resume_text` holds the text extracted from the resume file. The ranking pipeline
/// normalizes it before indexing, so ingestion keeps it as read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique identifier, derived from the resume file stem.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact address, when the resume record carries one.
    pub email: Option<String>,
    /// Resume body.
    pub resume_text: String,
    /// Self-reported skills.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Research areas.
    #[serde(default)]
    pub research_areas: Vec<String>,
    /// Teaching experience entries.
    #[serde(default)]
    pub teaching_experience: Vec<String>,
    /// Publications.
    #[serde(default)]
    pub publications: Vec<String>,
    /// Free-form metadata carried through to reports.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

/// An academic position that candidates are screened against.
///
/// List order is significant: explanations are reported in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoleProfile {
    /// Unique identifier.
    pub id: String,
    /// Position title.
    pub title: String,
    /// Owning department.
    pub department: String,
    /// Skills a candidate must show.
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Skills that strengthen a candidacy.
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    /// Research areas of interest.
    #[serde(default)]
    pub research_focus: Vec<String>,
    /// Teaching duties.
    #[serde(default)]
    pub teaching_requirements: Vec<String>,
}

impl RoleProfile {
    /// Returns every role term in query order: required, preferred, research, teaching.
    pub fn query_terms(&self) -> impl Iterator<Item = &str> {
        self.required_skills
            .iter()
            .chain(&self.preferred_skills)
            .chain(&self.research_focus)
            .chain(&self.teaching_requirements)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_terms_order() {
        let role = RoleProfile {
            id: "r".into(),
            title: "Role".into(),
            department: String::new(),
            required_skills: vec!["a".into(), "b".into()],
            preferred_skills: vec!["c".into()],
            research_focus: vec![],
            teaching_requirements: vec!["d".into()],
        };
        let terms: Vec<_> = role.query_terms().collect();
        assert_eq!(terms, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_candidate_deserializes_with_missing_lists() {
        let json = r#"{"id":"jane","name":"Jane","email":null,"resume_text":"ml"}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert!(candidate.skills.is_empty());
        assert!(candidate.metadata.is_empty());
    }
}
