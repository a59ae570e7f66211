use std::sync::OnceLock;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use regex::Regex;

static PRECISE_RE: OnceLock<Regex> = OnceLock::new();
static MINUTE_RE: OnceLock<Regex> = OnceLock::new();
static RECORDER_RE: OnceLock<Regex> = OnceLock::new();

fn precise_re() -> &'static Regex {
    PRECISE_RE.get_or_init(|| Regex::new(r"^\d{8}-\d{6}$").expect("valid regex"))
}

fn minute_re() -> &'static Regex {
    MINUTE_RE.get_or_init(|| Regex::new(r"^\d{8}-\d{4}(-\d+)?$").expect("valid regex"))
}

fn recorder_re() -> &'static Regex {
    RECORDER_RE.get_or_init(|| Regex::new(r"^Recording_\d{14}$").expect("valid regex"))
}

/// True when `stem` is a second-precision name (`20260123-203038`).
pub fn is_precise(stem: &str) -> bool {
    precise_re().is_match(stem)
}

/// True when `stem` uses the minute-precision scheme, with or without the
/// `-N` counter appended to recordings made within the same minute
/// (`20260202-2130`, `20260202-2130-2`).
pub fn is_minute(stem: &str) -> bool {
    minute_re().is_match(stem)
}

/// True when `stem` is an untouched recorder default (`Recording_20260130201233`).
pub fn is_recorder_default(stem: &str) -> bool {
    recorder_re().is_match(stem)
}

/// True when `stem` belongs to one of the legacy naming schemes the
/// migration targets.
pub fn is_legacy(stem: &str) -> bool {
    is_minute(stem) || is_recorder_default(stem)
}

/// Format a filesystem timestamp as a second-precision stem in local time.
pub fn precise_from_mtime(mtime: SystemTime) -> String {
    let local: DateTime<Local> = mtime.into();
    local.format("%Y%m%d-%H%M%S").to_string()
}
