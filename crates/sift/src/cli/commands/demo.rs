//! Implementation of `sift demo`.

use std::{fs, process::ExitCode};

use sift_config::format_path_for_display;
use sift_highlight::{Highlighter, indent_content};
use sift_report::ensure_sample_data;

use super::screen::run_screening;
use crate::cli::{args::DemoCommand, context::CommandContext, output::warning};

/// Creates the sample role and resume if missing, then screens the candidate directory.
pub fn run(ctx: &CommandContext, cmd: &DemoCommand) -> ExitCode {
    let paths = ctx.paths(&cmd.data);
    let sample = match ensure_sample_data(&paths) {
        Ok(sample) => sample,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if sample.created_role {
        println!(
            "{}",
            warning(&format!(
                "Created sample role at {}",
                format_path_for_display(&sample.role_path, &ctx.cwd)
            ))
        );
        match fs::read_to_string(&sample.role_path) {
            Ok(yaml) => println!(
                "{}",
                indent_content(&Highlighter::new().highlight_yaml(&yaml))
            ),
            Err(e) => eprintln!(
                "warning: could not read {}: {e}",
                sample.role_path.display()
            ),
        }
    }
    if sample.created_resume {
        println!(
            "{}",
            warning(&format!(
                "Created sample resume at {}",
                format_path_for_display(&sample.resume_path, &ctx.cwd)
            ))
        );
    }

    let out_dir = ctx.output_dir(&cmd.out);
    run_screening(
        ctx,
        &sample.role_path,
        &paths.candidate_dir,
        &out_dir,
        false,
    )
}
