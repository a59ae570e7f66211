use std::collections::HashSet;

use crate::core::manifest::Manifest;
use crate::core::timestamp;
use crate::error::{Result, RetimeError};

/// A single old-name to new-name substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    pub old: String,
    pub new: String,
}

impl RenamePair {
    pub fn new<S: Into<String>>(old: S, new: S) -> Self {
        RenamePair {
            old: old.into(),
            new: new.into(),
        }
    }
}

/// Rename plan derived from a manifest: one pair per audio file and one
/// pair per transcription note title, both in manifest order.
#[derive(Debug, Clone)]
pub struct RenamePlan {
    pub audio: Vec<RenamePair>,
    pub notes: Vec<RenamePair>,
}

impl RenamePlan {
    /// Derive the plan from manifest entries, validating each one.
    ///
    /// The new audio name keeps the entry's extension, the note title is
    /// the configured prefix plus the old stem mapped to the prefix plus
    /// the timestamp.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self> {
        let prefix = manifest.note_prefix();
        let mut audio = Vec::with_capacity(manifest.len());
        let mut notes = Vec::with_capacity(manifest.len());
        let mut seen_old: HashSet<String> = HashSet::new();
        let mut seen_new: HashSet<String> = HashSet::new();
        let mut seen_stems: HashSet<String> = HashSet::new();

        for entry in &manifest.renames {
            if !timestamp::is_precise(&entry.timestamp) {
                return Err(RetimeError::manifest(format!(
                    "entry '{}': timestamp '{}' is not of the form YYYYMMDD-HHMMSS",
                    entry.audio, entry.timestamp
                )));
            }
            let (stem, ext) = split_name(&entry.audio).ok_or_else(|| {
                RetimeError::manifest(format!(
                    "entry '{}': audio file name has no extension",
                    entry.audio
                ))
            })?;
            let new_audio = format!("{}.{}", entry.timestamp, ext);
            if new_audio == entry.audio {
                return Err(RetimeError::manifest(format!(
                    "entry '{}': already named after its timestamp",
                    entry.audio
                )));
            }
            if !seen_old.insert(entry.audio.clone()) {
                return Err(RetimeError::manifest(format!(
                    "entry '{}': listed more than once",
                    entry.audio
                )));
            }
            if !seen_new.insert(new_audio.clone()) {
                return Err(RetimeError::manifest(format!(
                    "entry '{}': target name '{}' collides with another entry",
                    entry.audio, new_audio
                )));
            }
            if !seen_stems.insert(stem.to_string()) {
                return Err(RetimeError::manifest(format!(
                    "entry '{}': stem '{}' collides with another entry",
                    entry.audio, stem
                )));
            }

            notes.push(RenamePair::new(
                format!("{prefix}{stem}"),
                format!("{prefix}{}", entry.timestamp),
            ));
            audio.push(RenamePair::new(entry.audio.clone(), new_audio));
        }

        Ok(RenamePlan { audio, notes })
    }

    /// Note file renames: the title pairs with the note extension appended.
    pub fn note_file_pairs(&self, ext: &str) -> Vec<RenamePair> {
        self.notes
            .iter()
            .map(|pair| {
                RenamePair::new(
                    format!("{}.{}", pair.old, ext),
                    format!("{}.{}", pair.new, ext),
                )
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.audio.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_empty()
    }
}

/// Sort pairs longest old-name first. An old name that is a strict prefix
/// of another must not be substituted into text before the longer one.
/// The sort is stable, so equal-length names keep manifest order.
pub fn sorted_longest_first(pairs: &[RenamePair]) -> Vec<RenamePair> {
    let mut sorted = pairs.to_vec();
    sorted.sort_by(|a, b| b.old.len().cmp(&a.old.len()));
    sorted
}

/// Split a file name into stem and extension at the last dot. Names
/// without an extension (or with nothing around the dot) yield None.
fn split_name(name: &str) -> Option<(&str, &str)> {
    let idx = name.rfind('.')?;
    if idx == 0 || idx + 1 == name.len() {
        return None;
    }
    Some((&name[..idx], &name[idx + 1..]))
}
