use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RetimeError};

const DEFAULT_NOTE_PREFIX: &str = "Transcription-";
const DEFAULT_NOTE_EXT: &str = "md";

/// One audio file to migrate: the legacy name it carries on disk and the
/// second-precision timestamp it should carry afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameEntry {
    pub audio: String,
    pub timestamp: String,
}

/// Migration manifest, usually `retime.toml` in the vault root.
///
/// The file lists every audio file to migrate as a `[[rename]]` table and
/// may override the folder layout and note naming configured globally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_ext: Option<String>,

    #[serde(default, rename = "rename")]
    pub renames: Vec<RenameEntry>,
}

impl Manifest {
    /// File name looked up inside the vault root when no explicit
    /// manifest path is given.
    pub const DEFAULT_FILE_NAME: &'static str = "retime.toml";

    /// Load a manifest from disk. A missing or unparseable file is an
    /// error here, unlike the global config which falls back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RetimeError::manifest(format!(
                "manifest not found: {}",
                path.display()
            )));
        }
        let data = fs::read_to_string(path)?;
        let manifest: Manifest = toml::from_str(&data).map_err(|e| {
            RetimeError::manifest(format!("failed to parse {}: {}", path.display(), e))
        })?;
        Ok(manifest)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let body = toml::to_string_pretty(self)
            .map_err(|e| RetimeError::manifest(format!("failed to serialize manifest: {e}")))?;
        let mut data = String::from(
            "# retime migration manifest\n\
             # timestamps are second-precision, derived from audio modification times\n\n",
        );
        data.push_str(&body);
        fs::write(path, data)?;
        Ok(())
    }

    /// Shared title prefix of transcription notes.
    pub fn note_prefix(&self) -> &str {
        self.note_prefix.as_deref().unwrap_or(DEFAULT_NOTE_PREFIX)
    }

    /// Extension (without the dot) of transcription note files.
    pub fn note_ext(&self) -> &str {
        self.note_ext.as_deref().unwrap_or(DEFAULT_NOTE_EXT)
    }

    pub fn len(&self) -> usize {
        self.renames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }
}
