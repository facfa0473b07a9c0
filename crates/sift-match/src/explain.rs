//! Keyword-based fit explanations.

use serde::{Deserialize, Serialize};
use sift_document::RoleProfile;

/// Human-readable reasons for a candidate's fit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    /// Role terms found in the resume.
    pub strengths: Vec<String>,
    /// Required skills missing from the resume.
    pub risks: Vec<String>,
}

/// Explains how a candidate's (normalized) resume text lines up with a role.
///
/// A role term is present when its lowercased form occurs anywhere in `candidate_text`. Only
/// required skills produce risks. Messages quote the term as declared on the role, and are
/// ordered required, preferred, research, teaching.
pub fn explain_fit(candidate_text: &str, role: &RoleProfile) -> Explanation {
    let mentions = |term: &str| candidate_text.contains(&term.to_lowercase());
    let mut explanation = Explanation::default();

    for skill in &role.required_skills {
        if mentions(skill.as_str()) {
            explanation
                .strengths
                .push(format!("Mentions required skill: {skill}"));
        } else {
            explanation
                .risks
                .push(format!("Missing required skill: {skill}"));
        }
    }

    let optional = [
        (&role.preferred_skills, "Mentions preferred skill"),
        (&role.research_focus, "Research focus alignment"),
        (&role.teaching_requirements, "Teaching alignment"),
    ];
    for (terms, label) in optional {
        explanation.strengths.extend(
            terms
                .iter()
                .filter(|term| mentions(term.as_str()))
                .map(|term| format!("{label}: {term}")),
        );
    }

    explanation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role() -> RoleProfile {
        RoleProfile {
            id: "cs".into(),
            title: "Assistant Professor".into(),
            department: "Computer Science".into(),
            required_skills: vec![
                "machine learning".into(),
                "data structures".into(),
                "databases".into(),
            ],
            preferred_skills: vec!["Deep Learning".into()],
            research_focus: vec!["Distributed Systems".into()],
            teaching_requirements: vec!["undergraduate teaching".into()],
        }
    }

    #[test]
    fn test_required_skills_split() {
        let explanation = explain_fit("machine learning teaching data structures", &role());
        assert_eq!(
            explanation.strengths,
            vec![
                "Mentions required skill: machine learning",
                "Mentions required skill: data structures",
            ]
        );
        assert_eq!(
            explanation.risks,
            vec!["Missing required skill: databases"]
        );
    }

    #[test]
    fn test_messages_keep_declared_case() {
        let explanation = explain_fit("deep learning", &role());
        assert!(
            explanation
                .strengths
                .contains(&"Mentions preferred skill: Deep Learning".to_string())
        );
    }

    #[test]
    fn test_research_alignment() {
        let explanation = explain_fit("work on distributed systems", &role());
        assert!(
            explanation
                .strengths
                .contains(&"Research focus alignment: Distributed Systems".to_string())
        );
    }

    #[test]
    fn test_teaching_alignment() {
        let explanation = explain_fit("years of undergraduate teaching", &role());
        assert!(
            explanation
                .strengths
                .contains(&"Teaching alignment: undergraduate teaching".to_string())
        );
    }

    #[test]
    fn test_empty_role() {
        let explanation = explain_fit("anything", &RoleProfile::default());
        assert_eq!(explanation, Explanation::default());
    }

    #[test]
    fn test_empty_text_flags_every_required_skill() {
        let explanation = explain_fit("", &role());
        assert!(explanation.strengths.is_empty());
        assert_eq!(explanation.risks.len(), 3);
    }
}
