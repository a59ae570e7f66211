use crate::core::Config;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Configuration type enum for DRY code
enum ConfigType {
    Vault,
    Audio,
    Notes,
}

impl ConfigType {
    fn name(&self) -> &'static str {
        match self {
            ConfigType::Vault => "Vault",
            ConfigType::Audio => "Audio",
            ConfigType::Notes => "Notes",
        }
    }

    fn set_value(&self, config: &mut Config, value: String) {
        match self {
            ConfigType::Vault => config.set_vault_path(value),
            ConfigType::Audio => config.audio_dir = value,
            ConfigType::Notes => config.note_dir = value,
        }
    }

    fn get_value<'a>(&self, config: &'a Config) -> Option<&'a str> {
        match self {
            ConfigType::Vault => config.get_vault_path().map(|s| s.as_str()),
            ConfigType::Audio => Some(config.audio_dir.as_str()),
            ConfigType::Notes => Some(config.note_dir.as_str()),
        }
    }

    fn example(&self) -> &'static str {
        match self {
            ConfigType::Vault => "~/vaults/mynote",
            ConfigType::Audio => "03_audio",
            ConfigType::Notes => "21_transcripts",
        }
    }
}

pub fn handle_set(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("vault", sub_matches)) => set_vault_path(sub_matches),
        Some(("audio", sub_matches)) => set_folder_name(sub_matches, ConfigType::Audio),
        Some(("notes", sub_matches)) => set_folder_name(sub_matches, ConfigType::Notes),
        _ => {
            println!("Use 'retime set --help' for more information.");
            Ok(())
        }
    }
}

/// Set the vault root path, canonicalized when it exists
fn set_vault_path(matches: &clap::ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .context("Path argument is required")?;

    let path_buf = Path::new(path);
    if !path_buf.exists() {
        println!(
            "{}",
            format!("⚠️  Warning: Path '{}' does not exist", path).yellow()
        );
        println!(
            "{}",
            "The path will be saved but may not be usable until created.".dimmed()
        );
    }

    let canonical_path = if path_buf.exists() {
        path_buf
            .canonicalize()
            .map_err(|e| anyhow::anyhow!("Failed to resolve path: {}", e))?
            .to_string_lossy()
            .to_string()
    } else {
        path.to_string()
    };

    let mut config = Config::load()?;
    config.set_vault_path(canonical_path.clone());
    config.save()?;

    println!("{} {}", "✓ Vault path set to:".green(), canonical_path);

    Ok(())
}

/// Shared logic for setting a folder name inside the vault
fn set_folder_name(matches: &clap::ArgMatches, config_type: ConfigType) -> Result<()> {
    let name = matches
        .get_one::<String>("name")
        .context("Folder name argument is required")?;

    validate_folder_name(name)?;

    let mut config = Config::load()?;
    config_type.set_value(&mut config, name.clone());
    config.save()?;

    println!(
        "{} {}",
        format!("✓ {} folder set to:", config_type.name()).green(),
        name.cyan().bold()
    );

    Ok(())
}

/// Folder settings are bare names inside the vault, not paths
fn validate_folder_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("Folder name cannot be empty");
    }
    if name.contains('/') || name.contains('\\') {
        anyhow::bail!("Folder name cannot contain path separators: '{}'", name);
    }
    if name == "." || name == ".." {
        anyhow::bail!("Folder name cannot be '{}'", name);
    }
    Ok(())
}

pub fn handle_get(matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("vault", _)) => get_value_for_type(ConfigType::Vault),
        Some(("audio", _)) => get_value_for_type(ConfigType::Audio),
        Some(("notes", _)) => get_value_for_type(ConfigType::Notes),
        _ => {
            println!("Use 'retime get --help' for more information.");
            Ok(())
        }
    }
}

/// Shared logic for printing a configuration value
fn get_value_for_type(config_type: ConfigType) -> Result<()> {
    let config = Config::load()?;
    let type_name = config_type.name();
    let type_lower = type_name.to_lowercase();

    match config_type.get_value(&config) {
        Some(value) => {
            println!("{}", format!("{} setting:", type_name).white());
            println!("{}", value.cyan().bold());
        }
        None => {
            println!(
                "{}",
                format!("No {} path configured.", type_lower).yellow()
            );
            println!();
            println!(
                "{}",
                format!("To set the {} path, run:", type_lower).white()
            );
            println!(
                "  {}",
                format!("retime set {} <path>", type_lower).cyan().bold()
            );
            println!();
            println!("{}", "Example:".dimmed());
            println!(
                "  {}",
                format!("retime set {} {}", type_lower, config_type.example()).dimmed()
            );
        }
    }

    Ok(())
}
