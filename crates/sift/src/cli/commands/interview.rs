//! Implementation of `sift interview`.

use std::process::ExitCode;

use sift_report::interview_questions;

use crate::cli::{
    args::RoleCommand,
    context::load_role_or_failure,
    output::{dim, header},
};

/// Prints interview questions for a role.
pub fn run(cmd: &RoleCommand) -> ExitCode {
    let role = match load_role_or_failure(&cmd.role) {
        Ok(role) => role,
        Err(code) => return code,
    };

    println!("{} {}", header(&role.title), dim("interview questions"));
    for (i, question) in interview_questions(&role).iter().enumerate() {
        println!("{:>3}. {question}", i + 1);
    }
    ExitCode::SUCCESS
}
