//! Implementation of `sift onboard`.

use std::process::ExitCode;

use sift_report::onboarding_plan;

use crate::cli::{
    args::RoleCommand,
    context::load_role_or_failure,
    output::{dim, header},
};

/// Prints the onboarding checklist for a role's department.
pub fn run(cmd: &RoleCommand) -> ExitCode {
    let role = match load_role_or_failure(&cmd.role) {
        Ok(role) => role,
        Err(code) => return code,
    };

    println!("{} {}", header(&role.title), dim("onboarding"));
    for step in onboarding_plan(&role.department) {
        println!("   [ ] {step}");
    }
    ExitCode::SUCCESS
}
