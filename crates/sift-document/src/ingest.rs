//! Resume ingestion.
//!
//! Walks a candidate directory and turns every matching resume file into a [`Candidate`].
//! Files are read in sorted path order so candidate order (and therefore tie order in
//! rankings) is stable across runs.

use std::{
    collections::{BTreeMap, HashSet},
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
use sift_config::{ConfigError, IngestPatterns, IngestSettings};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{Candidate, DocumentError, markdown::markdown_to_text};

/// Structured resume record accepted from `.json` files.
#[serde_as]
#[derive(Debug, Deserialize)]
struct CandidateRecord {
    /// Display name, overriding the one derived from the file name.
    name: Option<String>,
    /// Contact address.
    email: Option<String>,
    /// Resume body.
    #[serde(alias = "text")]
    resume_text: String,
    /// Skills.
    #[serde_as(as = "OneOrMany<_>")]
    #[serde(default)]
    skills: Vec<String>,
    /// Research areas.
    #[serde_as(as = "OneOrMany<_>")]
    #[serde(default)]
    research_areas: Vec<String>,
    /// Teaching experience.
    #[serde_as(as = "OneOrMany<_>")]
    #[serde(default)]
    teaching_experience: Vec<String>,
    /// Publications.
    #[serde_as(as = "OneOrMany<_>")]
    #[serde(default)]
    publications: Vec<String>,
    /// Free-form metadata.
    #[serde(default)]
    metadata: BTreeMap<String, String>,
}

/// Ingests every resume under `dir` that the ingestion globs select.
///
/// Hidden files and directories are skipped, as are files whose text is empty. Ids come from
/// file stems; a repeated stem gets a `-2`, `-3`, ... suffix.
pub fn ingest_candidates(
    dir: &Path,
    settings: &IngestSettings,
) -> Result<Vec<Candidate>, DocumentError> {
    if !dir.is_dir() {
        return Err(DocumentError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }
    let patterns = IngestPatterns::compile(settings).map_err(pattern_error)?;

    let mut used_ids = HashSet::new();
    let mut candidates = Vec::new();

    for path in discover_resumes(dir, &patterns) {
        let Some(mut candidate) = read_candidate(&path)? else {
            warn!(path = %path.display(), "skipping empty resume");
            continue;
        };

        let id = unique_id(&candidate.id, &used_ids);
        if id != candidate.id {
            warn!(path = %path.display(), id = %id, "duplicate candidate id, renamed");
            candidate.id = id;
        }
        used_ids.insert(candidate.id.clone());

        debug!(id = %candidate.id, path = %path.display(), chars = candidate.resume_text.len(), "ingested resume");
        candidates.push(candidate);
    }

    Ok(candidates)
}

/// Converts a file stem into a display name: separators become spaces, words are title-cased.
pub fn display_name(stem: &str) -> String {
    stem.replace(['_', '-'], " ")
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-cases the first character of a word and lower-cases the rest.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Lists resume files under `dir` in sorted order.
fn discover_resumes(dir: &Path, patterns: &IngestPatterns) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .strip_prefix(dir)
                .is_ok_and(|rel| patterns.matches(rel))
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Checks if a filename represents a hidden file (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

/// Reads one resume file. Returns `None` when it holds no text.
fn read_candidate(path: &Path) -> Result<Option<Candidate>, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    // PDFs pass through as lossy UTF-8; there is no text extraction
    let raw = String::from_utf8_lossy(&bytes);

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut candidate = Candidate {
        name: display_name(&stem),
        id: stem,
        ..Candidate::default()
    };

    match extension(path).as_deref() {
        Some("md" | "markdown") => candidate.resume_text = markdown_to_text(&raw),
        Some("json") => match serde_json::from_str::<CandidateRecord>(&raw) {
            Ok(record) => apply_record(&mut candidate, record),
            Err(_) => candidate.resume_text = raw.into_owned(),
        },
        _ => candidate.resume_text = raw.into_owned(),
    }

    if candidate.resume_text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(candidate))
}

/// Copies structured record fields onto a candidate.
fn apply_record(candidate: &mut Candidate, record: CandidateRecord) {
    if let Some(name) = record.name.filter(|n| !n.trim().is_empty()) {
        candidate.name = name;
    }
    candidate.email = record.email;
    candidate.resume_text = record.resume_text;
    candidate.skills = record.skills;
    candidate.research_areas = record.research_areas;
    candidate.teaching_experience = record.teaching_experience;
    candidate.publications = record.publications;
    candidate.metadata = record.metadata;
}

/// Lower-cased file extension.
fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase)
}

/// Returns `base`, or the first `base-N` (N >= 2) not yet taken.
fn unique_id(base: &str, used: &HashSet<String>) -> String {
    if !used.contains(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Maps a glob compilation failure onto the document error type.
fn pattern_error(source: ConfigError) -> DocumentError {
    let pattern = match &source {
        ConfigError::InvalidPattern { pattern, .. } => pattern.clone(),
        other => other.to_string(),
    };
    DocumentError::InvalidPattern { pattern, source }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, rel: &str, content: &str) {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn ingest(dir: &TempDir) -> Vec<Candidate> {
        ingest_candidates(dir.path(), &IngestSettings::default()).unwrap()
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("jane_doe"), "Jane Doe");
        assert_eq!(display_name("mary-ann_SMITH"), "Mary Ann Smith");
        assert_eq!(display_name("__x__"), "X");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_ingest_plain_text() {
        let dir = TempDir::new().unwrap();
        write(&dir, "jane_doe.txt", "Machine learning researcher");

        let candidates = ingest(&dir);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, "jane_doe");
        assert_eq!(candidates[0].name, "Jane Doe");
        assert_eq!(candidates[0].resume_text, "Machine learning researcher");
        assert!(candidates[0].email.is_none());
    }

    #[test]
    fn test_ingest_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        write(&dir, "zoe.txt", "zoe text");
        write(&dir, "adam.md", "# Adam\n\nSystems");
        write(&dir, "photo.png", "not a resume");
        write(&dir, ".hidden.txt", "secret");
        write(&dir, ".cache/bob.txt", "bob");

        let ids: Vec<_> = ingest(&dir).into_iter().map(|c| c.id).collect();

        assert_eq!(ids, vec!["adam", "zoe"]);
    }

    #[test]
    fn test_ingest_markdown_flattened() {
        let dir = TempDir::new().unwrap();
        write(&dir, "adam.md", "# Adam\n\n*Distributed* systems");

        let candidates = ingest(&dir);

        assert_eq!(candidates[0].resume_text, "Adam\nDistributed systems");
    }

    #[test]
    fn test_ingest_skips_empty_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "empty.txt", "");
        write(&dir, "blank.txt", "  \n\t");
        write(&dir, "real.txt", "content");

        let candidates = ingest(&dir);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, "real");
    }

    #[test]
    fn test_ingest_json_record() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "r1.json",
            r#"{"name": "Ada Lovelace", "email": "ada@example.org", "text": "analytical engines", "skills": "mathematics"}"#,
        );

        let candidates = ingest(&dir);

        assert_eq!(candidates[0].id, "r1");
        assert_eq!(candidates[0].name, "Ada Lovelace");
        assert_eq!(candidates[0].email.as_deref(), Some("ada@example.org"));
        assert_eq!(candidates[0].resume_text, "analytical engines");
        assert_eq!(candidates[0].skills, vec!["mathematics".to_string()]);
    }

    #[test]
    fn test_ingest_other_json_is_plain_text() {
        let dir = TempDir::new().unwrap();
        write(&dir, "misc.json", r#"{"summary": "deep learning"}"#);

        let candidates = ingest(&dir);

        assert_eq!(candidates[0].resume_text, r#"{"summary": "deep learning"}"#);
        assert_eq!(candidates[0].name, "Misc");
    }

    #[test]
    fn test_ingest_pdf_lossy_passthrough() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("scan.pdf"), b"%PDF \xff\xfe machine learning").unwrap();

        let candidates = ingest(&dir);

        assert!(candidates[0].resume_text.contains("machine learning"));
        assert!(candidates[0].resume_text.contains('\u{fffd}'));
    }

    #[test]
    fn test_ingest_duplicate_stems() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a/jane.txt", "one");
        write(&dir, "b/jane.md", "two");
        write(&dir, "c/jane.txt", "three");

        let ids: Vec<_> = ingest(&dir).into_iter().map(|c| c.id).collect();

        assert_eq!(ids, vec!["jane", "jane-2", "jane-3"]);
    }

    #[test]
    fn test_ingest_missing_directory() {
        let result = ingest_candidates(Path::new("/nonexistent/cands"), &IngestSettings::default());
        assert!(matches!(result, Err(DocumentError::MissingDirectory { .. })));
    }

    #[test]
    fn test_ingest_invalid_pattern() {
        let dir = TempDir::new().unwrap();
        let settings = IngestSettings {
            include: vec!["[bad".into()],
            exclude: vec![],
        };
        let result = ingest_candidates(dir.path(), &settings);
        assert!(
            matches!(result, Err(DocumentError::InvalidPattern { ref pattern, .. }) if pattern == "[bad")
        );
    }

    #[test]
    fn test_unique_id() {
        let used: HashSet<String> = ["x".to_string(), "x-2".to_string()].into();
        assert_eq!(unique_id("x", &used), "x-3");
        assert_eq!(unique_id("y", &used), "y");
    }
}
