use std::fs;
use std::path::PathBuf;

use ignore::WalkBuilder;

use crate::core::mapping::{self, RenamePair};
use crate::error::{Result, RetimeError};

/// Tally of one reference-update pass over the vault.
#[derive(Debug, Default)]
pub struct UpdateStats {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub replacements: usize,
    pub changed_files: Vec<PathBuf>,
}

/// Rewrites textual references to renamed files across every note in the
/// vault tree. Matching is substring replacement, so embeds, wiki links
/// and plain mentions are all covered by the same pass.
pub struct ReferenceUpdater {
    root: PathBuf,
    note_ext: String,
    audio_pairs: Vec<RenamePair>,
    note_pairs: Vec<RenamePair>,
}

impl ReferenceUpdater {
    /// Pairs are re-sorted longest old-name first at construction. The
    /// audio pass always runs before the note-title pass.
    pub fn new<P: Into<PathBuf>>(
        root: P,
        note_ext: &str,
        audio_pairs: &[RenamePair],
        note_pairs: &[RenamePair],
    ) -> Self {
        ReferenceUpdater {
            root: root.into(),
            note_ext: note_ext.to_string(),
            audio_pairs: mapping::sorted_longest_first(audio_pairs),
            note_pairs: mapping::sorted_longest_first(note_pairs),
        }
    }

    /// Collect every note file under the root in stable path order.
    /// Hidden directories (like `.obsidian`) are skipped. Gitignore
    /// rules are not applied; a versioned vault is walked in full.
    pub fn collect_notes(&self) -> Result<Vec<PathBuf>> {
        let mut walker = WalkBuilder::new(&self.root);
        walker
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false);

        let mut notes = Vec::new();
        for entry in walker.build() {
            let entry = entry.map_err(|e| RetimeError::vault(format!("walk failed: {e}")))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let path = entry.into_path();
            if path.extension().and_then(|e| e.to_str()) == Some(self.note_ext.as_str()) {
                notes.push(path);
            }
        }
        notes.sort();
        log::debug!(
            "collected {} note files under {}",
            notes.len(),
            self.root.display()
        );
        Ok(notes)
    }

    /// Run the update pass. A note is rewritten only when its content
    /// actually changed; read or write failures abort the whole pass.
    pub fn update<F>(&self, dry_run: bool, on_progress: F) -> Result<UpdateStats>
    where
        F: Fn(usize, usize),
    {
        let notes = self.collect_notes()?;
        let total = notes.len();
        let mut stats = UpdateStats {
            files_scanned: total,
            ..UpdateStats::default()
        };

        for (index, path) in notes.iter().enumerate() {
            on_progress(index + 1, total);

            let original = fs::read_to_string(path).map_err(|e| {
                RetimeError::vault(format!("failed to read '{}': {}", path.display(), e))
            })?;
            let mut content = original.clone();
            let mut replaced = apply_pairs(&mut content, &self.audio_pairs);
            replaced += apply_pairs(&mut content, &self.note_pairs);

            if content != original {
                if !dry_run {
                    fs::write(path, &content).map_err(|e| {
                        RetimeError::vault(format!(
                            "failed to write '{}': {}",
                            path.display(),
                            e
                        ))
                    })?;
                }
                stats.files_changed += 1;
                stats.replacements += replaced;
                stats.changed_files.push(path.clone());
            }
        }

        Ok(stats)
    }
}

/// Replace occurrences of each pair's old name with its new name, in pair
/// order. Returns the number of substitutions made.
fn apply_pairs(content: &mut String, pairs: &[RenamePair]) -> usize {
    let mut replaced = 0;
    for pair in pairs {
        if !content.contains(pair.old.as_str()) {
            continue;
        }
        let (updated, hits) = replace_guarded(content, &pair.old, &pair.new);
        *content = updated;
        replaced += hits;
    }
    replaced
}

/// Substring replacement with one guard: an occurrence immediately
/// followed by an ASCII digit is left alone. A minute-precision name is a
/// strict prefix of the second-precision name derived from it, so inside
/// already-migrated text every legacy name resurfaces followed by the
/// remaining seconds digits; those must not be substituted again.
fn replace_guarded(content: &str, old: &str, new: &str) -> (String, usize) {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    let mut hits = 0;

    while let Some(pos) = rest.find(old) {
        let after = &rest[pos + old.len()..];
        out.push_str(&rest[..pos]);
        if after.starts_with(|c: char| c.is_ascii_digit()) {
            out.push_str(old);
        } else {
            out.push_str(new);
            hits += 1;
        }
        rest = after;
    }
    out.push_str(rest);

    (out, hits)
}
