// UI prompts and user interaction module

use colored::Colorize;
use std::io::{self, Write};

/// Ask user for yes/no confirmation
pub fn confirm(message: &str) -> io::Result<bool> {
    print!("{} ", message.white().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}

/// Ask for confirmation with retry on IO errors. Returns `Ok(true)` only
/// for an explicit y/yes answer.
pub fn read_confirmation(prompt: &str, max_attempts: u32) -> anyhow::Result<bool> {
    for attempt in 1..=max_attempts {
        print!("{}", prompt.white().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(_) => {
                let response = input.trim().to_lowercase();
                return Ok(response == "y" || response == "yes");
            }
            Err(e) if attempt < max_attempts => {
                println!(
                    "{}",
                    format!(
                        "Error reading input (attempt {}/{}): {}",
                        attempt, max_attempts, e
                    )
                    .yellow()
                );
                continue;
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to read confirmation after {} attempts: {}",
                    max_attempts,
                    e
                ));
            }
        }
    }
    unreachable!()
}
