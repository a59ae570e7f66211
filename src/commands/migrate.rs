use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::{
    Config, Manifest, ReferenceUpdater, RenameOutcome, RenamePlan, RenameReport, Renamer,
};
use crate::ui::{clear_line, read_confirmation, show_progress_bar};

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let dry_run = matches.get_flag("dry-run");
    let assume_yes = matches.get_flag("yes");

    if dry_run {
        println!(
            "{}",
            "DRY RUN MODE - No files will be renamed or rewritten"
                .yellow()
                .bold()
        );
        println!();
    }

    let config = Config::load()?;
    let vault = super::resolve_vault(matches, &config)?;

    let manifest_path = match matches.get_one::<String>("manifest") {
        Some(path) => PathBuf::from(path),
        None => vault.join(Manifest::DEFAULT_FILE_NAME),
    };
    let manifest = Manifest::load(&manifest_path)
        .with_context(|| format!("Cannot load migration manifest {:?}", manifest_path))?;

    if manifest.is_empty() {
        println!("{}", "Manifest contains no rename entries.".yellow());
        return Ok(());
    }

    let plan = RenamePlan::from_manifest(&manifest)?;

    // Folder overrides in the manifest win over the global config
    let audio_dir = manifest.audio_dir.as_deref().unwrap_or(&config.audio_dir);
    let note_dir = manifest.note_dir.as_deref().unwrap_or(&config.note_dir);
    let note_ext = manifest.note_ext();

    println!("{}", "Starting vault migration...".cyan().bold());
    println!();
    println!(
        "{} {}",
        "Vault:".white().bold(),
        vault.display().to_string().cyan()
    );
    println!(
        "{} {}",
        "Manifest:".white().bold(),
        format!("{} ({} entries)", manifest_path.display(), plan.len()).cyan()
    );
    println!("{} {}", "Audio folder:".white().bold(), audio_dir.cyan());
    println!("{} {}", "Notes folder:".white().bold(), note_dir.cyan());
    println!();

    if !dry_run && !assume_yes {
        println!(
            "{}",
            "⚠️  Warning: This will rename files and rewrite notes across the vault."
                .yellow()
                .bold()
        );
        println!();
        let confirmed = read_confirmation("Do you want to continue? (y/n): ", 3)?;
        if !confirmed {
            println!();
            println!("{}", "Operation cancelled by user.".yellow());
            return Ok(());
        }
        println!();
    }

    println!("{}", "Renaming audio files...".cyan().bold());
    let audio_report = Renamer::new(vault.join(audio_dir)).apply(&plan.audio, dry_run);
    print_rename_lines(&audio_report, dry_run);
    println!();

    println!("{}", "Renaming transcription notes...".cyan().bold());
    let note_report =
        Renamer::new(vault.join(note_dir)).apply(&plan.note_file_pairs(note_ext), dry_run);
    print_rename_lines(&note_report, dry_run);
    println!();

    println!("{}", "Updating references in notes...".cyan().bold());
    let updater = ReferenceUpdater::new(&vault, note_ext, &plan.audio, &plan.notes);
    let stats = updater.update(dry_run, |processed, total| {
        show_progress_bar(processed, total, "Progress:");
    })?;
    clear_line();

    for path in &stats.changed_files {
        let shown = path.strip_prefix(&vault).unwrap_or(path);
        println!(
            "  {} {}",
            "✓".green(),
            shown.display().to_string().cyan()
        );
    }

    println!();
    println!("{}", "─".repeat(50));
    println!("{}", "Migration Summary".white().bold());
    println!("{}", "─".repeat(50));

    print_stage_summary("Audio files:", &audio_report, dry_run);
    print_stage_summary("Notes:", &note_report, dry_run);

    let references = format!(
        "{} of {} notes ({} replacements)",
        stats.files_changed, stats.files_scanned, stats.replacements
    );
    if dry_run {
        println!("{} {}", "Would update:".white(), references.yellow().bold());
    } else {
        println!(
            "{} {}",
            "References:".green().bold(),
            references.yellow().bold()
        );
    }

    let failures = audio_report.failed() + note_report.failed();
    if failures > 0 {
        println!(
            "{} {}",
            "Failed:".red().bold(),
            format!("{} renames", failures).red()
        );
    }

    println!();
    if !dry_run {
        println!("{}", "✓ Migration completed".green().bold());
    }

    Ok(())
}

fn print_rename_lines(report: &RenameReport, dry_run: bool) {
    for attempt in &report.attempts {
        match &attempt.outcome {
            RenameOutcome::Renamed => {
                let marker = if dry_run { "→".yellow() } else { "✓".green() };
                println!("  {} {} -> {}", marker, attempt.old, attempt.new.cyan());
            }
            RenameOutcome::SkippedMissing => {
                println!(
                    "  {} {} {}",
                    "·".dimmed(),
                    attempt.old.dimmed(),
                    "(not found, skipped)".dimmed()
                );
            }
            RenameOutcome::Failed(reason) => {
                println!(
                    "  {} {} -> {} ({})",
                    "✗".red(),
                    attempt.old,
                    attempt.new,
                    reason.red()
                );
            }
        }
    }
}

fn print_stage_summary(label: &str, report: &RenameReport, dry_run: bool) {
    let verb = if dry_run { "would rename" } else { "renamed" };
    let mut line = format!(
        "{} {}, {} skipped",
        report.renamed(),
        verb,
        report.skipped()
    );
    if report.failed() > 0 {
        line.push_str(&format!(", {} failed", report.failed()));
    }
    println!("{} {}", label.white().bold(), line.yellow());
}
