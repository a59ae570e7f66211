use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::core::{scanner, Config, VaultScanner};
use crate::ui::confirm;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let force = matches.get_flag("force");

    let config = Config::load()?;
    let vault = super::resolve_vault(matches, &config)?;

    println!(
        "{}",
        "Scanning for legacy-named audio files...".cyan().bold()
    );
    println!();

    let candidates = VaultScanner::new(vault.join(&config.audio_dir)).scan()?;

    if candidates.is_empty() {
        println!("{}", "No legacy-named audio files found.".green());
        return Ok(());
    }

    println!(
        "{} {}",
        "Found:".white().bold(),
        format!("{} files", candidates.len()).yellow().bold()
    );
    println!();
    for candidate in &candidates {
        println!(
            "  {} {}",
            candidate.file_name.cyan(),
            format!("-> {}", candidate.timestamp).dimmed()
        );
    }
    println!();
    println!(
        "{}",
        "Timestamps come from file modification times; review them before migrating.".dimmed()
    );

    if let Some(out) = matches.get_one::<String>("write") {
        let out_path = PathBuf::from(out);

        if out_path.exists() && !force {
            println!();
            let overwrite = confirm(&format!(
                "Manifest {} already exists. Overwrite? (y/n):",
                out_path.display()
            ))?;
            if !overwrite {
                println!("{}", "Manifest not written.".yellow());
                return Ok(());
            }
        }

        let manifest = scanner::to_manifest(&candidates, &config.audio_dir, &config.note_dir);
        manifest.save(&out_path)?;

        println!();
        println!(
            "{} {}",
            "✓ Manifest written to:".green(),
            out_path.display().to_string().cyan().bold()
        );
        println!(
            "  {}",
            format!("retime migrate --manifest {}", out_path.display()).dimmed()
        );
    }

    Ok(())
}
