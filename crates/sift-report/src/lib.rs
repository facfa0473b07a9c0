//! Screening runs and their artifacts.
//!
//! [`Screening`] drives a full run: load the role, ingest resumes, rank, attach a development
//! plan to every candidate, and write `report.json`. The hiring helpers (interview questions,
//! transcript scoring, onboarding steps) are fixed templates used by the CLI.

#![warn(missing_docs)]

mod error;
mod interview;
mod onboarding;
mod plan;
mod report;
mod sample;
mod screening;

pub use error::ReportError;
pub use interview::{TranscriptScores, evaluate_transcript, interview_questions};
pub use onboarding::onboarding_plan;
pub use plan::{DevelopmentPlan, development_plan};
pub use report::{CandidateSummary, REPORT_FILENAME, Report, read_report, write_report};
pub use sample::{SAMPLE_RESUME_FILENAME, SAMPLE_ROLE_FILENAME, SampleData, ensure_sample_data};
pub use screening::{Screening, ScreeningOutcome};
