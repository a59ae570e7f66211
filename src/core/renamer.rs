use std::fs;
use std::path::PathBuf;

use crate::core::mapping::RenamePair;

/// Outcome of one rename attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was renamed, or would be in dry-run mode.
    Renamed,
    /// The source file does not exist, usually because an earlier run
    /// already migrated it.
    SkippedMissing,
    /// The OS refused the rename.
    Failed(String),
}

/// One attempted rename and what came of it.
#[derive(Debug, Clone)]
pub struct RenameAttempt {
    pub old: String,
    pub new: String,
    pub outcome: RenameOutcome,
}

/// Collected outcomes of a rename pass over one folder.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub attempts: Vec<RenameAttempt>,
}

impl RenameReport {
    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Renamed))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::SkippedMissing))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Failed(_)))
    }

    pub fn failures(&self) -> impl Iterator<Item = &RenameAttempt> {
        self.attempts
            .iter()
            .filter(|a| matches!(a.outcome, RenameOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.attempts.iter().filter(|a| pred(&a.outcome)).count()
    }
}

/// Renames files inside a single folder according to a list of pairs.
pub struct Renamer {
    dir: PathBuf,
}

impl Renamer {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Renamer { dir: dir.into() }
    }

    /// Apply every pair in order. A missing source is skipped and an OS
    /// error is recorded against its entry; neither stops the pass.
    pub fn apply(&self, pairs: &[RenamePair], dry_run: bool) -> RenameReport {
        let mut report = RenameReport::default();

        for pair in pairs {
            let old_path = self.dir.join(&pair.old);
            let outcome = if !old_path.exists() {
                log::debug!("rename source missing, skipping: {}", old_path.display());
                RenameOutcome::SkippedMissing
            } else if dry_run {
                RenameOutcome::Renamed
            } else {
                match fs::rename(&old_path, self.dir.join(&pair.new)) {
                    Ok(()) => RenameOutcome::Renamed,
                    Err(e) => {
                        log::debug!("rename failed for {}: {}", old_path.display(), e);
                        RenameOutcome::Failed(e.to_string())
                    }
                }
            };
            report.attempts.push(RenameAttempt {
                old: pair.old.clone(),
                new: pair.new.clone(),
                outcome,
            });
        }

        report
    }
}
