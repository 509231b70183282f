//! Integration tests for replaying recorded ticks
//!
//! These tests verify:
//! - Snapshot files load from disk with typed errors
//! - A recorded tick filters the same way the live client would
//! - Gated ticks leave the menu alone

use camino::Utf8PathBuf;
use easy_unnote::models::GameState;
use easy_unnote::replay::{SnapshotError, TickSnapshot};
use easy_unnote::{FilterState, UnnoteConfig};
use std::fs;
use tempfile::TempDir;

fn demo_snapshot() -> TickSnapshot {
    let path = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/varrock_west_bank.yaml");
    TickSnapshot::load(&path).unwrap()
}

fn replay(state: &FilterState, snapshot: &TickSnapshot) -> Option<Vec<String>> {
    state
        .process_tick(
            &snapshot.context,
            snapshot.entries.clone(),
            &snapshot.resolver(),
        )
        .map(|kept| {
            kept.into_iter()
                .map(|e| format!("{} {}", e.option, e.target).trim().to_string())
                .collect()
        })
}

#[test]
fn test_demo_tick_default_config() {
    let kept = replay(&FilterState::default(), &demo_snapshot()).unwrap();

    assert_eq!(
        kept,
        ["Cancel", "Walk here", "Use Banker", "Use Bank booth"]
    );
}

#[test]
fn test_demo_tick_with_tables() {
    let state = FilterState::new(UnnoteConfig {
        enable_tables: true,
        ..UnnoteConfig::default()
    });

    let kept = replay(&state, &demo_snapshot()).unwrap();

    assert_eq!(
        kept,
        [
            "Cancel",
            "Walk here",
            "Use Dining table",
            "Use Banker",
            "Use Bank booth"
        ]
    );
}

#[test]
fn test_demo_tick_with_custom_list() {
    let state = FilterState::new(UnnoteConfig {
        custom_unnote_list: "door\nguard".to_string(),
        ..UnnoteConfig::default()
    });

    let kept = replay(&state, &demo_snapshot()).unwrap();

    assert_eq!(
        kept,
        [
            "Cancel",
            "Walk here",
            "Use Door",
            "Use Guard",
            "Use Banker",
            "Use Bank booth"
        ]
    );
}

#[test]
fn test_logged_out_tick_is_skipped() {
    let mut snapshot = demo_snapshot();
    snapshot.context.game_state = GameState::LoginScreen;

    let state = FilterState::default();
    assert_eq!(replay(&state, &snapshot), None);
}

#[test]
fn test_unnoted_item_keeps_full_menu() {
    let mut snapshot = demo_snapshot();
    if let Some(item) = snapshot.items.get_mut(&1516) {
        item.is_noted = false;
    }

    let kept = replay(&FilterState::default(), &snapshot).unwrap();
    assert_eq!(kept.len(), snapshot.entries.len());
}

#[test]
fn test_missing_snapshot_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::try_from(temp_dir.path().join("missing.yaml")).unwrap();

    let err = TickSnapshot::load(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::Read { .. }));
}

#[test]
fn test_snapshot_file_roundtrip_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::try_from(temp_dir.path().join("tick.yaml")).unwrap();

    let snapshot = demo_snapshot();
    fs::write(&path, serde_yaml_ng::to_string(&snapshot).unwrap()).unwrap();

    assert_eq!(TickSnapshot::load(&path).unwrap(), snapshot);
}
