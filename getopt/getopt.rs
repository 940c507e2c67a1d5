//
// Copyright (c) 2025 Jeff Garzik
//
// This file is part of the optscan-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use clap::Parser;
use optscan::{base_name, scan};

/// getopt - scan words for single character options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {
    /// recognized option letters; a letter followed by `:` takes a value
    optstring: String,

    /// words to scan, in command line order
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

fn show_options(args: Args) {
    // the scanner skips element 0 as the program name
    let mut argv = Vec::with_capacity(args.words.len() + 1);
    argv.push(String::from("getopt"));
    argv.extend(args.words);

    for opt in scan(&argv, &args.optstring) {
        match opt.value {
            Some(value) => println!("-{} {}", opt.letter, value),
            None => println!("-{}", opt.letter),
        }
    }
}

fn main() {
    let args = Args::parse();

    if args.optstring.starts_with(':') {
        let argv0 = std::env::args().next().unwrap_or_default();
        eprintln!(
            "{}: option string must not begin with ':'",
            base_name(&argv0)
        );
        std::process::exit(1);
    }

    show_options(args);
}
