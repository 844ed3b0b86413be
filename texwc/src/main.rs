//! # texwc
//!
//! A CLI tool for counting Chinese characters and English words across a
//! LaTeX document tree.
//!
//! ## Overview
//!
//! texwc is built on top of texwclib. Starting from a root file it follows
//! `\input` and `\include` directives, counts each file's prose, and prints
//! the include hierarchy with per-file counts followed by a grand total.
//!
//! ## Usage
//!
//! ```bash
//! # Count the default root (body/graduate/content.tex)
//! texwc
//!
//! # Count a specific root; bare names are also tried under body/graduate/
//! texwc thesis.tex
//!
//! # Only show the first two levels of the tree (totals still cover everything)
//! texwc thesis.tex --max-depth 2
//! ```
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=texwclib=debug`).

mod render;

use std::process::ExitCode;

use clap::{value_parser, Arg, ArgMatches, Command};
use texwclib::{count_document, CountOptions, DEFAULT_ROOT};
use tracing_subscriber::EnvFilter;

use render::{render_report, TreeOptions};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("texwc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count words in a LaTeX project, following \\input and \\include")
        .arg(
            Arg::new("root_file")
                .help("Root TeX file to start counting from")
                .default_value(DEFAULT_ROOT),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .value_name("DEPTH")
                .value_parser(value_parser!(usize))
                .help("Maximum depth of the tree to display"),
        )
}

/// Log to stderr, `warn` unless RUST_LOG says otherwise
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let root = matches
        .get_one::<String>("root_file")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_ROOT);
    let max_depth = matches.get_one::<usize>("max-depth").copied();

    tracing::debug!("counting from root {root}");
    let report = count_document(root, CountOptions::new())?;

    let options = TreeOptions {
        max_depth,
        styled: console::colors_enabled(),
    };
    Ok(render_report(&report, &options))
}

fn main() -> ExitCode {
    init_tracing();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        // Fatal errors share stdout with the report.
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
