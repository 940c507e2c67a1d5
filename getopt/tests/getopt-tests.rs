//
// Copyright (c) 2025 Hemi Labs, Inc.
//
// This file is part of the optscan-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use optscan::testing::{run_test, TestPlan};

fn to_args(args: Vec<&str>) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_getopt_mixed_options() {
    run_test(TestPlan {
        cmd: String::from("getopt"),
        args: to_args(vec!["a:bcd:ef?", "-a", "val", "-bc", "-d42", "-?"]),
        expected_out: String::from("-a val\n-b\n-c\n-d 42\n-?\n"),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_getopt_stacked_options() {
    run_test(TestPlan {
        cmd: String::from("getopt"),
        args: to_args(vec!["a:bcd:ef?", "-bcf"]),
        expected_out: String::from("-b\n-c\n-f\n"),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_getopt_value_in_next_word() {
    run_test(TestPlan {
        cmd: String::from("getopt"),
        args: to_args(vec!["a:bcd:ef?", "-d", "42"]),
        expected_out: String::from("-d 42\n"),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_getopt_missing_value() {
    run_test(TestPlan {
        cmd: String::from("getopt"),
        args: to_args(vec!["a:bcd:ef?", "-d"]),
        expected_out: String::from("-d\n"),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_getopt_skips_operands_and_unrecognized() {
    run_test(TestPlan {
        cmd: String::from("getopt"),
        args: to_args(vec!["a:bcd:ef?", "file", "-", "-x"]),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_getopt_no_words() {
    run_test(TestPlan {
        cmd: String::from("getopt"),
        args: to_args(vec!["a:bcd:ef?"]),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn test_getopt_rejects_leading_colon() {
    run_test(TestPlan {
        cmd: String::from("getopt"),
        args: to_args(vec![":abc", "-a"]),
        expected_out: String::new(),
        expected_err: String::from("getopt: option string must not begin with ':'\n"),
        expected_exit_code: 1,
    });
}
