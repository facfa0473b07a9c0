//! Candidate ranking.

use serde::{Deserialize, Serialize};
use sift_config::RankingSettings;
use sift_document::{Candidate, RoleProfile};
use tracing::{debug, warn};

use crate::{IndexOptions, LexicalIndex, explain::explain_fit, text::normalize};

/// Next step for candidates worth interviewing.
pub const INVITE_TO_INTERVIEW: &str = "Invite to interview";
/// Next step for everyone else.
pub const NEEDS_FOLLOW_UP: &str = "Needs follow-up";

/// The outcome of screening one candidate against one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Candidate id.
    pub candidate_id: String,
    /// Role id.
    pub role_id: String,
    /// Cosine similarity in `[0, 1]`, rounded to the configured precision.
    pub fit_score: f64,
    /// Role terms found in the resume.
    pub strengths: Vec<String>,
    /// Required skills missing from the resume.
    pub risks: Vec<String>,
    /// Recommended actions.
    pub next_steps: Vec<String>,
}

/// Ranks candidates against a role by lexical similarity.
///
/// The pipeline only holds settings. Each call to [`RankingPipeline::rank`] fits its own
/// index, so a pipeline can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct RankingPipeline {
    /// Ranking settings.
    settings: RankingSettings,
}

impl RankingPipeline {
    /// Creates a pipeline with the given settings.
    pub fn new(settings: &RankingSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    /// Ranks `candidates` against `role`.
    ///
    /// Returns exactly one result per candidate, ordered by fit score descending. Candidates
    /// with equal similarity keep their input order.
    pub fn rank(&self, candidates: &[Candidate], role: &RoleProfile) -> Vec<MatchResult> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        let texts: Vec<String> = candidates.iter().map(|c| normalize(&c.resume_text)).collect();
        let index = match LexicalIndex::build(&ids, &texts, &IndexOptions::from(&self.settings)) {
            Ok(index) => index,
            Err(err) => {
                warn!(%err, "could not build lexical index");
                return Vec::new();
            }
        };

        let query = role.query_terms().collect::<Vec<_>>().join(" ");
        let sims = index
            .query(&[query])
            .into_iter()
            .next()
            .unwrap_or_default();

        let mut order: Vec<usize> = (0..candidates.len()).collect();
        order.sort_by(|&a, &b| score_at(&sims, b).total_cmp(&score_at(&sims, a)));

        order
            .into_iter()
            .map(|i| {
                let score = score_at(&sims, i).clamp(0.0, 1.0);
                let explanation = explain_fit(&texts[i], role);
                let next_steps = decide_next_steps(
                    score,
                    &explanation.strengths,
                    &explanation.risks,
                    self.settings.invite_threshold,
                );
                debug!(candidate = %candidates[i].id, score, "ranked candidate");

                MatchResult {
                    candidate_id: candidates[i].id.clone(),
                    role_id: role.id.clone(),
                    fit_score: round_to(score, self.settings.score_precision),
                    strengths: explanation.strengths,
                    risks: explanation.risks,
                    next_steps,
                }
            })
            .collect()
    }
}

/// Decides the next step for a scored candidate.
///
/// Candidates at or above `threshold` with no more risks than strengths are invited;
/// everyone else needs follow-up.
pub fn decide_next_steps(
    score: f64,
    strengths: &[String],
    risks: &[String],
    threshold: f64,
) -> Vec<String> {
    let step = if score >= threshold && risks.len() <= strengths.len() {
        INVITE_TO_INTERVIEW
    } else {
        NEEDS_FOLLOW_UP
    };
    vec![step.to_string()]
}

/// Similarity for document `i`, zero when missing.
fn score_at(sims: &[f64], i: usize) -> f64 {
    sims.get(i).copied().unwrap_or(0.0)
}

/// Rounds to `precision` decimal places.
fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powf(f64::from(precision));
    (value * factor).round() / factor
}
