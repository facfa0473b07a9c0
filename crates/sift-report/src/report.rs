//! The `report.json` artifact.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use sift_document::{Candidate, RoleProfile};
use sift_match::MatchResult;
use tracing::info;

use crate::{DevelopmentPlan, ReportError};

/// File name of the report inside the output directory.
pub const REPORT_FILENAME: &str = "report.json";

/// Candidate fields included in a report. Resume text and metadata are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSummary {
    /// Candidate id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: Option<String>,
    /// Skills.
    pub skills: Vec<String>,
    /// Research areas.
    pub research_areas: Vec<String>,
    /// Teaching experience.
    pub teaching_experience: Vec<String>,
    /// Publications.
    pub publications: Vec<String>,
}

impl From<&Candidate> for CandidateSummary {
    fn from(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            skills: candidate.skills.clone(),
            research_areas: candidate.research_areas.clone(),
            teaching_experience: candidate.teaching_experience.clone(),
            publications: candidate.publications.clone(),
        }
    }
}

/// Everything a screening run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The role screened against.
    pub role: RoleProfile,
    /// Every ingested candidate, in ingestion order.
    pub candidates: Vec<CandidateSummary>,
    /// Ranked matches, best first.
    pub matches: Vec<MatchResult>,
    /// Development plan per candidate id.
    pub development_plans: BTreeMap<String, DevelopmentPlan>,
}

/// Writes `report` to `<out_dir>/report.json`, creating `out_dir` if needed.
pub fn write_report(out_dir: &Path, report: &Report) -> Result<PathBuf, ReportError> {
    let path = out_dir.join(REPORT_FILENAME);
    fs::create_dir_all(out_dir).map_err(|source| ReportError::WriteFile {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let json = serde_json::to_string_pretty(report).map_err(ReportError::Serialize)?;
    fs::write(&path, json).map_err(|source| ReportError::WriteFile {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), matches = report.matches.len(), "wrote report");
    Ok(path)
}

/// Reads a report written by [`write_report`].
pub fn read_report(path: &Path) -> Result<Report, ReportError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ReportError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReportError::ReadFile {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&contents).map_err(|source| ReportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
