//! Rendering and JSON serialization for CLI output.

use std::{
    collections::HashMap,
    io::{self, IsTerminal},
    process::ExitCode,
};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
pub use sift_highlight::{dim, header, subheader, success, warning};
use sift_highlight::{Highlighter, fit_score, indent_content, risk, rule, strength};
use sift_report::Report;

/// Width of the rule under a report header.
const RULE_WIDTH: usize = 40;

/// Renders `value` as pretty JSON, syntax-highlighted when `color` is set.
pub fn render_json<T: Serialize>(value: &T, color: bool) -> serde_json::Result<String> {
    let json = serde_json::to_string_pretty(value)?;
    if color {
        Ok(Highlighter::new().highlight_json(&json))
    } else {
        Ok(json)
    }
}

/// Prints `value` as pretty JSON on stdout, highlighted only when stdout is a terminal.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match render_json(value, io::stdout().is_terminal()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize output: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the ranking table for a report: one row per match, best first.
pub fn ranking_table(report: &Report) -> Table {
    let names: HashMap<&str, &str> = report
        .candidates
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        "#",
        "Candidate",
        "Score",
        "Strengths",
        "Risks",
        "Next step",
    ]);

    for (rank, m) in report.matches.iter().enumerate() {
        let name = names
            .get(m.candidate_id.as_str())
            .copied()
            .unwrap_or(m.candidate_id.as_str());
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(name),
            Cell::new(format!("{:.4}", m.fit_score)).set_alignment(CellAlignment::Right),
            Cell::new(m.strengths.len()).set_alignment(CellAlignment::Right),
            Cell::new(m.risks.len()).set_alignment(CellAlignment::Right),
            Cell::new(m.next_steps.join("; ")),
        ]);
    }
    table
}

/// Prints a human-readable report: role header, ranking table, then per-candidate detail.
pub fn print_report(report: &Report, invite_threshold: f64) {
    let role = &report.role;
    println!("{} {}", header(&role.title), dim(&format!("({})", role.id)));
    if !role.department.is_empty() {
        println!("{}", dim(&role.department));
    }
    println!("{}", rule(RULE_WIDTH));
    println!();

    if report.matches.is_empty() {
        println!("{}", dim("No candidates found."));
        return;
    }

    println!("{}", ranking_table(report));
    println!();

    for m in &report.matches {
        println!(
            "{} {}",
            subheader(&m.candidate_id),
            fit_score(m.fit_score, invite_threshold)
        );
        let details: Vec<String> = m
            .strengths
            .iter()
            .map(|s| strength(s))
            .chain(m.risks.iter().map(|r| risk(r)))
            .collect();
        if details.is_empty() {
            println!("{}", indent_content(&dim("(no keyword matches)")));
        } else {
            println!("{}", indent_content(&details.join("\n")));
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sift_document::{Candidate, RoleProfile};
    use sift_match::MatchResult;
    use sift_report::CandidateSummary;

    use super::*;

    #[test]
    fn render_json_plain_and_colored() {
        let scores = sift_report::evaluate_transcript("impact");

        let plain = render_json(&scores, false).unwrap();
        assert!(!plain.contains('\x1b'));
        let parsed: serde_json::Value = serde_json::from_str(&plain).unwrap();
        assert!((parsed["communication"].as_f64().unwrap() - 0.6).abs() < 1e-9);

        let colored = render_json(&scores, true).unwrap();
        assert!(colored.contains("\x1b["));
        assert!(colored.contains("communication"));
    }

    #[test]
    fn table_uses_display_names() {
        let candidate = Candidate {
            id: "jane_doe".into(),
            name: "Jane Doe".into(),
            ..Candidate::default()
        };
        let report = Report {
            role: RoleProfile::default(),
            candidates: vec![CandidateSummary::from(&candidate)],
            matches: vec![
                MatchResult {
                    candidate_id: "jane_doe".into(),
                    role_id: "cs".into(),
                    fit_score: 0.5,
                    strengths: vec!["Mentions required skill: teaching".into()],
                    risks: vec![],
                    next_steps: vec!["Invite to interview".into()],
                },
                MatchResult {
                    candidate_id: "ghost".into(),
                    role_id: "cs".into(),
                    fit_score: 0.0,
                    strengths: vec![],
                    risks: vec![],
                    next_steps: vec!["Needs follow-up".into()],
                },
            ],
            development_plans: BTreeMap::new(),
        };

        let rendered = ranking_table(&report).to_string();

        assert!(rendered.contains("Jane Doe"));
        assert!(rendered.contains("ghost"));
        assert!(rendered.contains("0.5000"));
        assert!(rendered.contains("Invite to interview"));
    }
}
