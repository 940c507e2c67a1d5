//
// Copyright (c) 2025 Hemi Labs, Inc.
//
// This file is part of the optscan-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::process::{Command, Output, Stdio};

pub struct TestPlan {
    pub cmd: String,
    pub args: Vec<String>,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

fn run_test_base(cmd: &str, args: &[String]) -> Output {
    let relpath = if cfg!(debug_assertions) {
        format!("target/debug/{}", cmd)
    } else {
        format!("target/release/{}", cmd)
    };
    // tests run from the member crate's directory; the workspace
    // target directory lives one level up
    let test_bin_path = std::env::current_dir()
        .unwrap()
        .parent()
        .unwrap()
        .join(relpath);

    Command::new(&test_bin_path)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .unwrap_or_else(|_| panic!("failed to run command {}", test_bin_path.display()))
}

pub fn run_test(plan: TestPlan) {
    let output = run_test_base(&plan.cmd, &plan.args);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
}
