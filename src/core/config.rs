use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_audio_dir() -> String {
    "audio".to_string()
}

fn default_note_dir() -> String {
    "notes".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path of the vault to operate on
    #[serde(default)]
    pub vault_path: Option<String>,
    /// Folder inside the vault holding the voice recordings
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,
    /// Folder inside the vault holding the transcription notes
    #[serde(default = "default_note_dir")]
    pub note_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vault_path: None,
            audio_dir: default_audio_dir(),
            note_dir: default_note_dir(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing or empty file yields the
    /// default config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|_| {
            // If deserialization fails, return default config
            // (this can happen when the config format changes)
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, data)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("retime").join("config.json"))
    }

    pub fn set_vault_path(&mut self, path: String) {
        self.vault_path = Some(path);
    }

    pub fn get_vault_path(&self) -> Option<&String> {
        self.vault_path.as_ref()
    }
}
