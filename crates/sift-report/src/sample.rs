//! Sample data for `sift demo`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use sift_config::PathSettings;

use crate::ReportError;

/// File name of the sample role inside the roles directory.
pub const SAMPLE_ROLE_FILENAME: &str = "cs_assistant_professor.yaml";
/// File name of the sample resume inside the candidate directory.
pub const SAMPLE_RESUME_FILENAME: &str = "jane_doe.txt";

/// Sample role definition.
const SAMPLE_ROLE: &str = "\
id: cs_asst_prof
title: Assistant Professor of Computer Science
department: Computer Science
required_skills:
  - machine learning
  - data structures
  - teaching
preferred_skills:
  - deep learning
  - natural language processing
research_focus:
  - artificial intelligence
  - data science
teaching_requirements:
  - undergraduate courses
  - curriculum development
";

/// Sample resume.
const SAMPLE_RESUME: &str = "\
Jane Doe
Email: jane@example.edu
Experience: Teaching undergraduate courses in data structures and algorithms.
Research: Artificial intelligence, machine learning, and data science.
Skills: machine learning, deep learning, natural language processing, teaching, curriculum development
Publications: 10 peer-reviewed papers in AI venues.
";

/// Locations of the demo inputs and which of them were just created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleData {
    /// Path of the sample role file.
    pub role_path: PathBuf,
    /// Path of the sample resume.
    pub resume_path: PathBuf,
    /// Whether the role file was written by this call.
    pub created_role: bool,
    /// Whether the resume was written by this call.
    pub created_resume: bool,
}

/// Writes the sample role and resume unless they already exist.
///
/// Existing files are left untouched, so a user can edit the demo inputs and rerun.
pub fn ensure_sample_data(paths: &PathSettings) -> Result<SampleData, ReportError> {
    let role_path = paths.roles_dir.join(SAMPLE_ROLE_FILENAME);
    let resume_path = paths.candidate_dir.join(SAMPLE_RESUME_FILENAME);

    let created_role = write_if_missing(&role_path, SAMPLE_ROLE)?;
    // The candidate directory must exist even when the resume is already there
    create_dir(&paths.candidate_dir)?;
    let created_resume = write_if_missing(&resume_path, SAMPLE_RESUME)?;

    Ok(SampleData {
        role_path,
        resume_path,
        created_role,
        created_resume,
    })
}

/// Writes `contents` to `path` if nothing is there yet. Returns whether it wrote.
fn write_if_missing(path: &Path, contents: &str) -> Result<bool, ReportError> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    fs::write(path, contents).map_err(|source| ReportError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Creates a directory and its parents.
fn create_dir(dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(dir).map_err(|source| ReportError::WriteFile {
        path: dir.to_path_buf(),
        source,
    })
}
