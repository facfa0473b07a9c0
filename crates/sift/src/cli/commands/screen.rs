//! Implementation of `sift match`.

use std::{path::Path, process::ExitCode};

use sift_config::format_path_for_display;
use sift_report::Screening;

use crate::cli::{
    args::MatchCommand,
    context::CommandContext,
    output::{print_json, print_report, success},
};

/// Ranks the candidate directory against a role and writes `report.json`.
pub fn run(ctx: &CommandContext, cmd: &MatchCommand) -> ExitCode {
    let paths = ctx.paths(&cmd.data);
    let out_dir = ctx.output_dir(&cmd.out);
    run_screening(ctx, &cmd.role, &paths.candidate_dir, &out_dir, cmd.json)
}

/// Runs a screening and prints the result. Shared with `sift demo`.
pub fn run_screening(
    ctx: &CommandContext,
    role_path: &Path,
    candidate_dir: &Path,
    out_dir: &Path,
    json: bool,
) -> ExitCode {
    let outcome = match Screening::new(&ctx.config).run(role_path, candidate_dir, out_dir) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if json {
        return print_json(&outcome.report);
    }

    println!(
        "{} {}",
        success("Report generated:"),
        format_path_for_display(&outcome.report_path, &ctx.cwd)
    );
    println!();
    print_report(&outcome.report, ctx.config.ranking.invite_threshold);
    ExitCode::SUCCESS
}
