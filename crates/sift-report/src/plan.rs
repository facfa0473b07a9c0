//! Faculty development plans.

use serde::{Deserialize, Serialize};
use sift_document::Candidate;

/// Goals every new hire starts with.
const GOALS: &[&str] = &[
    "Publish in top-tier venues",
    "Enhance teaching effectiveness",
    "Expand interdisciplinary collaborations",
];

/// Support recommended to every new hire.
const RECOMMENDATIONS: &[&str] = &[
    "Join pedagogy workshop series",
    "Identify a senior mentor for grant writing",
    "Present at departmental seminar",
];

/// Development goals and recommendations for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentPlan {
    /// Candidate the plan belongs to.
    pub candidate_id: String,
    /// Career goals.
    pub goals: Vec<String>,
    /// Recommended actions.
    pub recommendations: Vec<String>,
}

/// Builds the standard development plan for a candidate.
pub fn development_plan(candidate: &Candidate) -> DevelopmentPlan {
    DevelopmentPlan {
        candidate_id: candidate.id.clone(),
        goals: GOALS.iter().map(|s| (*s).to_string()).collect(),
        recommendations: RECOMMENDATIONS.iter().map(|s| (*s).to_string()).collect(),
    }
}
