// Command handlers module
pub mod completions;
pub mod config;
pub mod migrate;
pub mod scan;
pub mod version;

// Re-exports for cleaner imports
pub use migrate::execute as migrate;
pub use scan::execute as scan;
pub use version::execute as version;

use std::path::PathBuf;

use anyhow::Result;

use crate::core::Config;

/// Resolve the vault root: an explicit --vault flag wins over the
/// configured path.
pub(crate) fn resolve_vault(matches: &clap::ArgMatches, config: &Config) -> Result<PathBuf> {
    let vault = match matches.get_one::<String>("vault") {
        Some(path) => PathBuf::from(path),
        None => match config.get_vault_path() {
            Some(path) => PathBuf::from(path),
            None => anyhow::bail!(
                "No vault configured. Pass --vault <PATH> or run 'retime set vault <path>' first"
            ),
        },
    };

    if !vault.is_dir() {
        anyhow::bail!("Vault path is not a directory: {}", vault.display());
    }

    Ok(vault)
}
