//! Implementation of `sift evaluate`.

use std::{fs, process::ExitCode};

use sift_report::evaluate_transcript;

use crate::cli::{
    args::EvaluateCommand,
    output::{print_json, subheader},
};

/// Scores an interview transcript.
pub fn run(cmd: &EvaluateCommand) -> ExitCode {
    let transcript = match fs::read_to_string(&cmd.transcript) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: failed to read {}: {e}", cmd.transcript.display());
            return ExitCode::FAILURE;
        }
    };

    let scores = evaluate_transcript(&transcript);
    if cmd.json {
        return print_json(&scores);
    }

    println!("{}", subheader("Transcript scores:"));
    println!("   communication        {:.2}", scores.communication);
    println!("   research vision      {:.2}", scores.research_vision);
    println!("   teaching philosophy  {:.2}", scores.teaching_philosophy);
    ExitCode::SUCCESS
}
