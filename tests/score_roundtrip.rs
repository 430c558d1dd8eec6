//! Score ledger persistence round trip through a real file.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use eight_puzzle::score::ScoreStore;

fn unique_temp_dir(name: &str) -> PathBuf {
    let base = std::env::temp_dir().join("eight_puzzle_tests").join(name);
    let _ = fs::create_dir_all(&base);

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    for i in 0..1000u32 {
        let p = base.join(format!("{pid}-{nanos}-{i}"));
        if fs::create_dir(&p).is_ok() {
            return p;
        }
    }

    panic!("failed to create a unique temp dir under {}", base.display());
}

#[test]
fn entries_survive_flush_and_reopen() {
    let dir = unique_temp_dir("roundtrip");
    let path = dir.join("scores.jsonl");

    let mut store = ScoreStore::open(&path).unwrap();
    assert!(store.is_empty());
    store.record("ana", 870);
    store.record("bo", 990);
    store.flush().unwrap();

    let reopened = ScoreStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 2);
    let ranked = reopened.ranked();
    assert_eq!(ranked[0].alias, "bo");
    assert_eq!(ranked[0].points, 990);
    assert_eq!(ranked[1].alias, "ana");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_lines_are_skipped_on_load() {
    let dir = unique_temp_dir("corrupt");
    let path = dir.join("scores.jsonl");

    let good = r#"{"alias":"cy","points":500,"unix_secs":1724700000}"#;
    fs::write(&path, format!("{good}\nnot json at all\n\n{good}\n")).unwrap();

    let store = ScoreStore::open(&path).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.ranked().iter().all(|e| e.alias == "cy"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn reopening_without_flush_sees_nothing_new() {
    let dir = unique_temp_dir("lifecycle");
    let path = dir.join("scores.jsonl");

    let mut store = ScoreStore::open(&path).unwrap();
    store.record("dee", 100);
    // No flush: the lifecycle is explicit, nothing writes on drop.
    drop(store);

    let reopened = ScoreStore::open(&path).unwrap();
    assert!(reopened.is_empty());

    let _ = fs::remove_dir_all(&dir);
}
