//! Onboarding checklist.

/// Returns the onboarding steps for a new hire in `department`.
pub fn onboarding_plan(department: &str) -> Vec<String> {
    vec![
        "Complete HR paperwork".to_string(),
        format!("Meet department chair ({department})"),
        "Get teaching resources and LMS access".to_string(),
        "Assign mentorship pairing".to_string(),
        "Schedule lab/safety orientation".to_string(),
    ]
}
