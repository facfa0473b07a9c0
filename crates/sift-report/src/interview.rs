//! Interview questions and transcript scoring.

use serde::{Deserialize, Serialize};
use sift_document::RoleProfile;

/// Number of required skills that get a deep-dive question.
const DEEP_DIVE_SKILLS: usize = 3;
/// Words that signal an engaged answer.
const POSITIVE_SIGNALS: &[&str] = &["impact", "students", "research", "collaborate", "community"];
/// Phrases that signal an unprepared answer.
const NEGATIVE_SIGNALS: &[&str] = &["don't know", "no idea", "not sure"];
/// Score of a transcript with no signals either way.
const NEUTRAL_SCORE: f64 = 0.5;
/// Score change per net signal.
const SIGNAL_WEIGHT: f64 = 0.1;

/// Heuristic scores for an interview transcript, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TranscriptScores {
    /// Communication.
    pub communication: f64,
    /// Research vision.
    pub research_vision: f64,
    /// Teaching philosophy.
    pub teaching_philosophy: f64,
}

/// Generates interview questions for a role.
///
/// Three standard questions come first, followed by a deep-dive question for each of the
/// first three required skills.
pub fn interview_questions(role: &RoleProfile) -> Vec<String> {
    let mut questions = vec![
        format!(
            "Describe your research vision in {} over the next 3 years.",
            role.department
        ),
        "Tell us about a time you improved student learning outcomes.".to_string(),
        "How do you integrate diversity, equity, and inclusion in teaching and mentorship?"
            .to_string(),
    ];
    questions.extend(
        role.required_skills
            .iter()
            .take(DEEP_DIVE_SKILLS)
            .map(|skill| format!("Deep dive: {skill} — can you discuss a relevant project?")),
    );
    questions
}

/// Scores a transcript by counting signal phrases.
///
/// Each distinct positive signal present adds 0.1 to a neutral 0.5, each distinct negative
/// signal subtracts 0.1; the result is clamped to `[0, 1]` and used for every dimension.
pub fn evaluate_transcript(transcript: &str) -> TranscriptScores {
    let lower = transcript.to_lowercase();
    let count = |signals: &[&str]| signals.iter().filter(|s| lower.contains(**s)).count();
    let net = count(POSITIVE_SIGNALS) as f64 - count(NEGATIVE_SIGNALS) as f64;
    let score = SIGNAL_WEIGHT.mul_add(net, NEUTRAL_SCORE).clamp(0.0, 1.0);

    TranscriptScores {
        communication: score,
        research_vision: score,
        teaching_philosophy: score,
    }
}
