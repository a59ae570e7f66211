// Tests for reference rewriting across the vault tree

use retime::core::{ReferenceUpdater, RenamePair};
use std::fs;
use tempfile::TempDir;

fn no_progress(_done: usize, _total: usize) {}

#[test]
fn test_rewrites_embeds_and_wikilinks() {
    let temp_dir = TempDir::new().unwrap();
    let notes_dir = temp_dir.path().join("21_transcripts");
    fs::create_dir_all(&notes_dir).unwrap();
    fs::write(
        notes_dir.join("Transcription-20260123-2030.md"),
        "![[03_audio/20260123-2030.m4a]]\n\ntranscribed text\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("daily.md"),
        "- listened to [[Transcription-20260123-2030]] today\n",
    )
    .unwrap();

    let audio = vec![RenamePair::new("20260123-2030.m4a", "20260123-203038.m4a")];
    let notes = vec![RenamePair::new(
        "Transcription-20260123-2030",
        "Transcription-20260123-203038",
    )];
    let updater = ReferenceUpdater::new(temp_dir.path(), "md", &audio, &notes);
    let stats = updater.update(false, no_progress).unwrap();

    assert_eq!(stats.files_scanned, 2);
    assert_eq!(stats.files_changed, 2);
    assert_eq!(stats.replacements, 2);

    let note = fs::read_to_string(notes_dir.join("Transcription-20260123-2030.md")).unwrap();
    assert!(note.contains("![[03_audio/20260123-203038.m4a]]"));
    let daily = fs::read_to_string(temp_dir.path().join("daily.md")).unwrap();
    assert!(daily.contains("[[Transcription-20260123-203038]]"));
}

#[test]
fn test_files_without_matches_stay_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("unrelated.md");
    let body = "# Reading list\n\nNo recordings referenced here.\n";
    fs::write(&path, body).unwrap();
    let mtime_before = fs::metadata(&path).unwrap().modified().unwrap();

    let audio = vec![RenamePair::new("20260123-2030.m4a", "20260123-203038.m4a")];
    let updater = ReferenceUpdater::new(temp_dir.path(), "md", &audio, &[]);
    let stats = updater.update(false, no_progress).unwrap();

    assert_eq!(stats.files_scanned, 1);
    assert_eq!(stats.files_changed, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), body);
    assert_eq!(
        fs::metadata(&path).unwrap().modified().unwrap(),
        mtime_before
    );
}

#[test]
fn test_counter_variant_survives_either_manifest_order() {
    let orders = [
        vec![
            RenamePair::new("20260202-2130.m4a", "20260202-213007.m4a"),
            RenamePair::new("20260202-2130-2.m4a", "20260202-213019.m4a"),
        ],
        vec![
            RenamePair::new("20260202-2130-2.m4a", "20260202-213019.m4a"),
            RenamePair::new("20260202-2130.m4a", "20260202-213007.m4a"),
        ],
    ];

    for audio in orders {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.md");
        fs::write(
            &path,
            "![[a/20260202-2130.m4a]]\n![[a/20260202-2130-2.m4a]]\n",
        )
        .unwrap();

        let updater = ReferenceUpdater::new(temp_dir.path(), "md", &audio, &[]);
        let stats = updater.update(false, no_progress).unwrap();
        assert_eq!(stats.replacements, 2);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("![[a/20260202-213007.m4a]]"));
        assert!(content.contains("![[a/20260202-213019.m4a]]"));
        assert!(!content.contains("2130-2.m4a"));
    }
}

#[test]
fn test_note_title_disambiguation_both_ways() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("index.md");
    fs::write(
        &path,
        "[[Transcription-20260202-2130]] then [[Transcription-20260202-2130-2]]\n",
    )
    .unwrap();

    // deliberately worst-case order: the shorter title first
    let notes = vec![
        RenamePair::new("Transcription-20260202-2130", "Transcription-20260202-213007"),
        RenamePair::new(
            "Transcription-20260202-2130-2",
            "Transcription-20260202-213019",
        ),
    ];
    let updater = ReferenceUpdater::new(temp_dir.path(), "md", &[], &notes);
    updater.update(false, no_progress).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "[[Transcription-20260202-213007]] then [[Transcription-20260202-213019]]\n"
    );
}

#[test]
fn test_second_run_is_a_no_op() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("note.md");
    fs::write(
        &path,
        "![[03_audio/20260202-2130.m4a]] and [[Transcription-20260202-2130]] \
         plus [[Transcription-20260202-2130.md|alias]]\n",
    )
    .unwrap();

    let audio = vec![RenamePair::new("20260202-2130.m4a", "20260202-213007.m4a")];
    let notes = vec![RenamePair::new(
        "Transcription-20260202-2130",
        "Transcription-20260202-213007",
    )];
    let updater = ReferenceUpdater::new(temp_dir.path(), "md", &audio, &notes);

    let first = updater.update(false, no_progress).unwrap();
    assert_eq!(first.files_changed, 1);
    let migrated = fs::read_to_string(&path).unwrap();
    assert!(migrated.contains("![[03_audio/20260202-213007.m4a]]"));
    assert!(migrated.contains("[[Transcription-20260202-213007]]"));
    assert!(migrated.contains("[[Transcription-20260202-213007.md|alias]]"));

    let second = updater.update(false, no_progress).unwrap();
    assert_eq!(second.files_changed, 0);
    assert_eq!(second.replacements, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), migrated);
}

#[test]
fn test_walks_nested_directories() {
    let temp_dir = TempDir::new().unwrap();
    let deep = temp_dir.path().join("journal").join("2026").join("02");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("weekly.md"), "ref 20260123-2030.m4a end").unwrap();

    let audio = vec![RenamePair::new("20260123-2030.m4a", "20260123-203038.m4a")];
    let updater = ReferenceUpdater::new(temp_dir.path(), "md", &audio, &[]);
    let stats = updater.update(false, no_progress).unwrap();

    assert_eq!(stats.files_changed, 1);
    assert_eq!(
        fs::read_to_string(deep.join("weekly.md")).unwrap(),
        "ref 20260123-203038.m4a end"
    );
}

#[test]
fn test_hidden_directories_are_not_walked() {
    let temp_dir = TempDir::new().unwrap();
    let hidden = temp_dir.path().join(".obsidian");
    fs::create_dir_all(&hidden).unwrap();
    fs::write(hidden.join("cache.md"), "20260123-2030.m4a").unwrap();

    let audio = vec![RenamePair::new("20260123-2030.m4a", "20260123-203038.m4a")];
    let updater = ReferenceUpdater::new(temp_dir.path(), "md", &audio, &[]);
    let stats = updater.update(false, no_progress).unwrap();

    assert_eq!(stats.files_scanned, 0);
    assert_eq!(
        fs::read_to_string(hidden.join("cache.md")).unwrap(),
        "20260123-2030.m4a"
    );
}

#[test]
fn test_gitignored_notes_are_still_rewritten() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join(".git")).unwrap();
    fs::write(temp_dir.path().join(".gitignore"), "private/\n").unwrap();
    let private = temp_dir.path().join("private");
    fs::create_dir_all(&private).unwrap();
    fs::write(
        temp_dir.path().join("open.md"),
        "![[03_audio/20260123-2030.m4a]]",
    )
    .unwrap();
    fs::write(private.join("secret.md"), "![[03_audio/20260123-2030.m4a]]").unwrap();

    let audio = vec![RenamePair::new("20260123-2030.m4a", "20260123-203038.m4a")];
    let updater = ReferenceUpdater::new(temp_dir.path(), "md", &audio, &[]);
    let stats = updater.update(false, no_progress).unwrap();

    assert_eq!(stats.files_scanned, 2);
    assert_eq!(stats.files_changed, 2);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("open.md")).unwrap(),
        "![[03_audio/20260123-203038.m4a]]"
    );
    assert_eq!(
        fs::read_to_string(private.join("secret.md")).unwrap(),
        "![[03_audio/20260123-203038.m4a]]"
    );
}

#[test]
fn test_only_note_extension_is_touched() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.md"), "20260123-2030.m4a").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "20260123-2030.m4a").unwrap();
    fs::write(temp_dir.path().join("c.canvas"), "20260123-2030.m4a").unwrap();

    let audio = vec![RenamePair::new("20260123-2030.m4a", "20260123-203038.m4a")];
    let updater = ReferenceUpdater::new(temp_dir.path(), "md", &audio, &[]);
    let stats = updater.update(false, no_progress).unwrap();

    assert_eq!(stats.files_scanned, 1);
    assert_eq!(stats.files_changed, 1);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("b.txt")).unwrap(),
        "20260123-2030.m4a"
    );
}

#[test]
fn test_dry_run_reports_but_does_not_write() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("note.md");
    let body = "![[03_audio/20260123-2030.m4a]]";
    fs::write(&path, body).unwrap();

    let audio = vec![RenamePair::new("20260123-2030.m4a", "20260123-203038.m4a")];
    let updater = ReferenceUpdater::new(temp_dir.path(), "md", &audio, &[]);
    let stats = updater.update(true, no_progress).unwrap();

    assert_eq!(stats.files_changed, 1);
    assert_eq!(stats.replacements, 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), body);
}

#[test]
fn test_unreadable_note_aborts_the_run() {
    let temp_dir = TempDir::new().unwrap();
    // not valid UTF-8, so the full-text read fails
    fs::write(temp_dir.path().join("broken.md"), [0xff, 0xfe, 0x20, 0x26]).unwrap();

    let audio = vec![RenamePair::new("20260123-2030.m4a", "20260123-203038.m4a")];
    let updater = ReferenceUpdater::new(temp_dir.path(), "md", &audio, &[]);
    let err = updater.update(false, no_progress).unwrap_err();

    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn test_progress_callback_sees_every_note() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let temp_dir = TempDir::new().unwrap();
    for i in 0..5 {
        fs::write(temp_dir.path().join(format!("n{i}.md")), "text").unwrap();
    }

    let calls = AtomicUsize::new(0);
    let updater = ReferenceUpdater::new(temp_dir.path(), "md", &[], &[]);
    let stats = updater
        .update(false, |done, total| {
            calls.fetch_add(1, Ordering::SeqCst);
            assert!(done <= total);
            assert_eq!(total, 5);
        })
        .unwrap();

    assert_eq!(stats.files_scanned, 5);
    assert_eq!(calls.load(Ordering::SeqCst), 5);
}
