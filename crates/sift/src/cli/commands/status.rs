//! Implementation of `sift status`.

use std::process::ExitCode;

use sift_config::{ConfigWarning, discover_config_files, format_path_for_display};

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files, data locations, ingest patterns, and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;

    let config_files = discover_config_files(cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("sift init")
        );
    } else {
        println!("{}", subheader("Config files:"));
        for path in &config_files {
            println!("   {}", format_path_for_display(path, cwd));
        }
    }
    println!();

    let config = &ctx.config;
    let paths = &config.paths;
    println!("{}", subheader("Paths:"));
    for (label, path) in [
        ("data", &paths.data_dir),
        ("candidates", &paths.candidate_dir),
        ("roles", &paths.roles_dir),
        ("outputs", &paths.output_dir),
    ] {
        let display_path = format_path_for_display(path, cwd);
        if path.exists() {
            println!("   {label:<11} {}", dim(&display_path));
        } else {
            println!(
                "   {label:<11} {} {}",
                dim(&display_path),
                warning("[missing]")
            );
        }
    }
    println!();

    println!("{}", subheader("Patterns:"));
    for pattern in &config.ingest.include {
        println!("   + {pattern}");
    }
    for pattern in &config.ingest.exclude {
        println!("   - {pattern}");
    }
    println!();

    let warnings = config.warnings();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::CandidateDirMissing { .. } => {
                println!(
                    "{}",
                    dim("Hint: add resumes under the candidate directory, or run 'sift demo'")
                );
            }
            ConfigWarning::RolesDirMissing { .. } => {
                println!(
                    "{}",
                    dim("Hint: create a role with 'sift classify TITLE' or 'sift demo'")
                );
            }
        }
    }
}
