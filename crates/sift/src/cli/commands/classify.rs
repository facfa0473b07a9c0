//! Implementation of `sift classify`.

use std::process::ExitCode;

use sift_config::format_path_for_display;
use sift_document::{classify_role, save_role};
use sift_highlight::indent_content;

use crate::cli::{
    args::ClassifyCommand,
    context::CommandContext,
    output::{render_json, subheader, success},
};

/// Builds a role profile from a title and saves it as `<id>.json`.
pub fn run(ctx: &CommandContext, cmd: &ClassifyCommand) -> ExitCode {
    let role = classify_role(&cmd.title);
    let dir = cmd
        .out
        .clone()
        .unwrap_or_else(|| ctx.config.paths.roles_dir.clone());

    let path = match save_role(&dir, &role) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{} {}",
        success("Saved"),
        format_path_for_display(&path, &ctx.cwd)
    );
    println!();
    println!("{}", subheader("Role written:"));
    match render_json(&role, true) {
        Ok(json) => println!("{}", indent_content(&json)),
        Err(e) => {
            eprintln!("error: failed to render role: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
