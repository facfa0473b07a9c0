//! Implementation of `sift report`.

use std::process::ExitCode;

use sift_report::{REPORT_FILENAME, ReportError, read_report};

use crate::cli::{
    args::ReportCommand,
    context::CommandContext,
    output::{print_json, print_report},
};

/// Shows the report in the output directory.
pub fn run(ctx: &CommandContext, cmd: &ReportCommand) -> ExitCode {
    let path = ctx.output_dir(&cmd.out).join(REPORT_FILENAME);
    let report = match read_report(&path) {
        Ok(report) => report,
        Err(ReportError::NotFound { .. }) => {
            eprintln!("error: No report found. Run 'sift match' first.");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return print_json(&report);
    }
    print_report(&report, ctx.config.ranking.invite_threshold);
    ExitCode::SUCCESS
}
