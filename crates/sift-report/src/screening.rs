//! End-to-end screening runs.

use std::path::{Path, PathBuf};

use sift_config::{Config, IngestSettings};
use sift_document::{Candidate, RoleProfile, ingest_candidates, load_role};
use sift_match::RankingPipeline;
use tracing::info;

use crate::{CandidateSummary, Report, ReportError, development_plan, write_report};

/// Result of [`Screening::run`].
#[derive(Debug, Clone)]
pub struct ScreeningOutcome {
    /// Where the report was written.
    pub report_path: PathBuf,
    /// The report that was written.
    pub report: Report,
}

/// Runs the screening workflow with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Screening {
    /// Ranking pipeline built from the `[ranking]` settings.
    pipeline: RankingPipeline,
    /// Resume selection globs.
    ingest: IngestSettings,
}

impl Screening {
    /// Creates a screening workflow from the loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            pipeline: RankingPipeline::new(&config.ranking),
            ingest: config.ingest.clone(),
        }
    }

    /// Loads the role, ingests candidates, ranks them, and writes the report into `out_dir`.
    pub fn run(
        &self,
        role_path: &Path,
        candidate_dir: &Path,
        out_dir: &Path,
    ) -> Result<ScreeningOutcome, ReportError> {
        let role = load_role(role_path)?;
        let candidates = ingest_candidates(candidate_dir, &self.ingest)?;
        info!(
            role = %role.id,
            candidates = candidates.len(),
            "screening candidates"
        );

        let report = self.screen(role, &candidates);
        let report_path = write_report(out_dir, &report)?;
        Ok(ScreeningOutcome {
            report_path,
            report,
        })
    }

    /// Ranks already-loaded candidates and assembles the report without touching disk.
    pub fn screen(&self, role: RoleProfile, candidates: &[Candidate]) -> Report {
        let matches = self.pipeline.rank(candidates, &role);
        let development_plans = candidates
            .iter()
            .map(|c| (c.id.clone(), development_plan(c)))
            .collect();

        Report {
            role,
            candidates: candidates.iter().map(CandidateSummary::from).collect(),
            matches,
            development_plans,
        }
    }
}
