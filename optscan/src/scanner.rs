//
// Copyright (c) 2025 Jeff Garzik
//
// This file is part of the optscan-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

/// One recognized option occurrence, in command line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptMatch {
    /// The matched option letter.
    pub letter: char,

    /// The option's value, present only when the option takes a value
    /// and one was found on the command line.
    pub value: Option<String>,

    /// Index into the argument vector of the token the value came
    /// from. `None` whenever `value` is `None`.
    pub value_index: Option<usize>,
}

// Looks up `letter` in `optstring`. Returns None if the letter is not a
// recognized option, otherwise whether the option takes a value. A `:`
// only marks the preceding letter as value-taking and never matches as
// a letter itself; a letter listed twice resolves to its first
// occurrence.
fn lookup(optstring: &str, letter: char) -> Option<bool> {
    let pos = optstring
        .char_indices()
        .find(|&(_, c)| c == letter && c != ':')
        .map(|(pos, _)| pos)?;
    Some(optstring[pos + letter.len_utf8()..].starts_with(':'))
}

/// Scans `args` for the single character options described by
/// `optstring` and returns the matches in the order encountered.
///
/// `args[0]` is taken to be the program name and is never scanned.
/// Tokens not beginning with `-`, a bare `-`, and letters not present
/// in `optstring` are skipped without comment. A value-taking option
/// consumes the rest of its token (`-dVALUE`) or, failing that, the
/// whole next token (`-d VALUE`); either way the remainder of the
/// current token is never read as further stacked options. A
/// value-taking option at the very end of the command line is reported
/// with no value.
pub fn scan(args: &[String], optstring: &str) -> Vec<OptMatch> {
    let mut matches = Vec::new();

    let mut arg_idx = 1;
    while arg_idx < args.len() {
        let arg = &args[arg_idx];
        if !arg.starts_with('-') || arg.len() < 2 {
            arg_idx += 1;
            continue;
        }

        // byte offset into `arg`, past the leading '-'
        let mut pos = 1;
        while pos < arg.len() {
            let letter = arg[pos..].chars().next().unwrap();
            pos += letter.len_utf8();

            match lookup(optstring, letter) {
                None => {}
                Some(false) => matches.push(OptMatch {
                    letter,
                    value: None,
                    value_index: None,
                }),
                Some(true) => {
                    let (value, value_index) = if pos < arg.len() {
                        (Some(arg[pos..].to_string()), Some(arg_idx))
                    } else if arg_idx + 1 < args.len() {
                        arg_idx += 1;
                        (Some(args[arg_idx].clone()), Some(arg_idx))
                    } else {
                        (None, None)
                    };
                    matches.push(OptMatch {
                        letter,
                        value,
                        value_index,
                    });
                    // a value-taking option always ends the current token
                    break;
                }
            }
        }

        arg_idx += 1;
    }

    matches
}
