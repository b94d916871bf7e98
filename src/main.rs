//! Word Ladder - CLI
//!
//! One-shot batch command: read a dictionary, search for a ladder between
//! two words, print it one word per line.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use word_ladder::{
    commands::{FindConfig, find_path},
    output::{print_path, print_summary},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find a word ladder between two words through a dictionary",
    version,
    author
)]
struct Cli {
    /// Path to the dictionary file, one word per line
    dictionary: PathBuf,

    /// Start word of the ladder
    start: String,

    /// Goal word of the ladder
    goal: String,

    /// Print search statistics after the path
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = FindConfig {
        dictionary: cli.dictionary,
        start: cli.start,
        goal: cli.goal,
    };

    match find_path(&config) {
        Ok(result) => {
            print_path(&result);
            if cli.verbose {
                print_summary(&result);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            // All failure paths exit non-zero, file errors included
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
