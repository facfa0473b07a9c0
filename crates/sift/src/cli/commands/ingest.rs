//! Implementation of `sift ingest`.

use std::process::ExitCode;

use serde::Serialize;
use sift_config::format_path_for_display;
use sift_document::ingest_candidates;

use crate::cli::{
    args::IngestCommand,
    context::CommandContext,
    output::{dim, print_json, success},
};

/// JSON output for `sift ingest --json`.
#[derive(Serialize)]
struct IngestSummary {
    /// Directory that was scanned.
    candidate_dir: String,
    /// Number of candidates found.
    count: usize,
    /// Candidate ids and names, in ingestion order.
    candidates: Vec<IngestedCandidate>,
}

/// One ingested candidate.
#[derive(Serialize)]
struct IngestedCandidate {
    /// Candidate id.
    id: String,
    /// Display name.
    name: String,
    /// Length of the extracted resume text in characters.
    chars: usize,
}

/// Ingests the candidate directory and reports what was found.
pub fn run(ctx: &CommandContext, cmd: &IngestCommand) -> ExitCode {
    let paths = ctx.paths(&cmd.data);
    let candidates = match ingest_candidates(&paths.candidate_dir, &ctx.config.ingest) {
        Ok(candidates) => candidates,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let dir_display = format_path_for_display(&paths.candidate_dir, &ctx.cwd);

    if cmd.json {
        return print_json(&IngestSummary {
            candidate_dir: dir_display,
            count: candidates.len(),
            candidates: candidates
                .iter()
                .map(|c| IngestedCandidate {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    chars: c.resume_text.chars().count(),
                })
                .collect(),
        });
    }

    println!(
        "{} {} candidates from {dir_display}",
        success("Ingested"),
        candidates.len()
    );
    for c in &candidates {
        println!("   {} {}", c.name, dim(&format!("({})", c.id)));
    }
    ExitCode::SUCCESS
}
