//! Display functions for ladder results

use crate::commands::LadderResult;
use colored::Colorize;

/// Print the ladder, one word per line, start first, goal last
///
/// This is the machine-consumable success output, so the words themselves
/// are never decorated.
pub fn print_path(result: &LadderResult) {
    for word in &result.path {
        println!("{word}");
    }
}

/// Print a verbose run summary after the path
pub fn print_summary(result: &LadderResult) {
    println!();
    println!("{}", "─".repeat(40).cyan());
    println!(
        "{} {} transformation{}",
        "Steps:".bold(),
        result.steps(),
        if result.steps() == 1 { "" } else { "s" }
    );
    println!("{} {}", "Cost:".bold(), result.cost);
    println!(
        "{} {} of {} words",
        "Explored:".bold(),
        result.explored,
        result.dictionary_size
    );
}
