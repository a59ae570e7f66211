// Progress bar and progress indicators module

use colored::Colorize;
use std::io::{self, Write};

const BAR_LENGTH: usize = 30;

/// Draw an in-place progress bar on the current line.
pub fn show_progress_bar(processed: usize, total: usize, prefix: &str) {
    let percentage = if total > 0 { processed * 100 / total } else { 0 };
    let filled = if total > 0 {
        processed * BAR_LENGTH / total
    } else {
        0
    };
    let empty = BAR_LENGTH.saturating_sub(filled);

    print!(
        "\r{} [{}{}] {}% ({}/{}) ",
        prefix.white(),
        "=".repeat(filled).green(),
        " ".repeat(empty),
        percentage,
        processed,
        total
    );

    io::stdout().flush().ok();
}

/// Clear the current line after a progress bar finishes.
pub fn clear_line() {
    print!("\r{}\r", " ".repeat(80));
    io::stdout().flush().ok();
}
