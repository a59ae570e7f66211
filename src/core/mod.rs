// Core business logic module

pub mod config;
pub mod manifest;
pub mod mapping;
pub mod renamer;
pub mod scanner;
pub mod timestamp;
pub mod updater;

// Re-export commonly used items
pub use config::Config;
pub use manifest::{Manifest, RenameEntry};
pub use mapping::{RenamePair, RenamePlan};
pub use renamer::{RenameAttempt, RenameOutcome, RenameReport, Renamer};
pub use scanner::{ScanCandidate, VaultScanner};
pub use updater::{ReferenceUpdater, UpdateStats};
