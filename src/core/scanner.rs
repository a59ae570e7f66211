use std::fs;
use std::path::PathBuf;

use crate::core::manifest::{Manifest, RenameEntry};
use crate::core::timestamp;
use crate::error::{Result, RetimeError};

/// Extensions the scanner accepts as voice recordings.
const AUDIO_EXTENSIONS: [&str; 5] = ["m4a", "mp3", "wav", "ogg", "webm"];

/// A legacy-named audio file found on disk, with the second-precision
/// timestamp its modification time suggests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCandidate {
    pub file_name: String,
    pub timestamp: String,
}

/// Scans one audio folder for files still using a legacy naming scheme.
pub struct VaultScanner {
    audio_dir: PathBuf,
}

impl VaultScanner {
    pub fn new<P: Into<PathBuf>>(audio_dir: P) -> Self {
        VaultScanner {
            audio_dir: audio_dir.into(),
        }
    }

    /// List legacy-named audio files sorted by name. Files that already
    /// carry a second-precision name, and anything that is not an audio
    /// file, are left out.
    pub fn scan(&self) -> Result<Vec<ScanCandidate>> {
        if !self.audio_dir.is_dir() {
            return Err(RetimeError::invalid_path(format!(
                "audio folder not found: {}",
                self.audio_dir.display()
            )));
        }

        let mut candidates = Vec::new();
        for entry in fs::read_dir(&self.audio_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let name_os = entry.file_name();
            let file_name = match name_os.to_str() {
                Some(name) => name,
                None => {
                    log::debug!("skipping non-UTF8 name in {}", self.audio_dir.display());
                    continue;
                }
            };

            let path = entry.path();
            let ext = match path.extension().and_then(|e| e.to_str()) {
                Some(ext) => ext.to_ascii_lowercase(),
                None => continue,
            };
            if !AUDIO_EXTENSIONS.contains(&ext.as_str()) {
                continue;
            }
            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem,
                None => continue,
            };
            if !timestamp::is_legacy(stem) {
                continue;
            }

            let mtime = entry.metadata()?.modified()?;
            candidates.push(ScanCandidate {
                file_name: file_name.to_string(),
                timestamp: timestamp::precise_from_mtime(mtime),
            });
        }

        candidates.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(candidates)
    }
}

/// Build a migration manifest from scan results, recording the folder
/// layout it was produced for.
pub fn to_manifest(candidates: &[ScanCandidate], audio_dir: &str, note_dir: &str) -> Manifest {
    Manifest {
        audio_dir: Some(audio_dir.to_string()),
        note_dir: Some(note_dir.to_string()),
        renames: candidates
            .iter()
            .map(|c| RenameEntry {
                audio: c.file_name.clone(),
                timestamp: c.timestamp.clone(),
            })
            .collect(),
        ..Manifest::default()
    }
}
