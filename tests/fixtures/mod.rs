//! Shared test fixtures for end-to-end composition tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};

use layerlens::keycode_db::{KeycodeDb, KeycodeEntry};
use layerlens::models::{BoardGeometry, KeyGeometry, KeymapDocument};

/// Keymap document matching the 2x2 test board: two layers, the second
/// reachable through `MO(1)` on the first.
pub const KEYMAP_2X2: &str = r#"{
    "keyboard": "test_board",
    "layout": "LAYOUT_2x2",
    "layers": [
        ["KC_A", "KC_B", "KC_NO", "MO(1)"],
        ["KC_ENTER", "KC_ZZZZ", "LSFT(KC_A)", "MO(0)"],
    ],
}"#;

/// Board description with a 2x2 variant of four 1u keys and a second
/// variant with a wide key.
pub const BOARD_2X2: &str = r#"{
    "keyboard_name": "test_board",
    "layouts": {
        "LAYOUT_2x2": {
            "layout": [
                {"x": 0, "y": 0},
                {"x": 1, "y": 0},
                {"x": 0, "y": 1},
                {"x": 1, "y": 1},
            ],
        },
        "LAYOUT_2x2_wide": {
            "layout": [
                {"x": 0, "y": 0, "w": 2},
                {"x": 2, "y": 0},
                {"x": 0, "y": 1},
                {"x": 1, "y": 1, "h": 2},
            ],
        },
    },
}"#;

/// Primary keycode dictionary in QMK hjson shape (comments, trailing
/// commas).
pub const KEYCODES_PRIMARY: &str = r#"{
    // Basic keycodes
    "keycodes": {
        "0x0004": {"key": "KC_A", "label": "A"},
        "0x0005": {"key": "KC_B", "label": "B"},
        "0x0028": {"key": "KC_ENT", "label": "Enter", "aliases": ["KC_ENTER"]},
    },
}"#;

/// Extra/aliases dictionary.
pub const KEYCODES_EXTRA: &str = r#"{
    "aliases": {
        "KC_GRV": {"key": "KC_GRAVE", "label": "`", "aliases": ["KC_TILDE"]},
    },
}"#;

/// Writes the four fixture documents into `dir` and returns their paths in
/// (keymap, board, primary, extra) order.
pub fn write_fixture_files(dir: &Path) -> (PathBuf, PathBuf, PathBuf, PathBuf) {
    let keymap = dir.join("keymap.json");
    let board = dir.join("info.json");
    let primary = dir.join("keycodes_basic.hjson");
    let extra = dir.join("keycodes_us.hjson");

    fs::write(&keymap, KEYMAP_2X2).unwrap();
    fs::write(&board, BOARD_2X2).unwrap();
    fs::write(&primary, KEYCODES_PRIMARY).unwrap();
    fs::write(&extra, KEYCODES_EXTRA).unwrap();

    (keymap, board, primary, extra)
}

/// Builds the 2x2 board geometry programmatically (bypassing the parser).
pub fn board_2x2() -> BoardGeometry {
    let mut board = BoardGeometry::new();
    board.add_variant(
        "LAYOUT_2x2",
        vec![
            KeyGeometry::new(0.0, 0.0),
            KeyGeometry::new(1.0, 0.0),
            KeyGeometry::new(0.0, 1.0),
            KeyGeometry::new(1.0, 1.0),
        ],
    );
    board
}

/// Builds the keymap document matching [`board_2x2`] programmatically.
pub fn keymap_2x2() -> KeymapDocument {
    KeymapDocument::new(
        "test_board",
        "LAYOUT_2x2",
        vec![
            vec![
                "KC_A".to_string(),
                "KC_B".to_string(),
                "KC_NO".to_string(),
                "MO(1)".to_string(),
            ],
            vec![
                "KC_ENTER".to_string(),
                "KC_ZZZZ".to_string(),
                "LSFT(KC_A)".to_string(),
                "MO(0)".to_string(),
            ],
        ],
    )
}

/// Builds a small keycode database programmatically.
pub fn db_basic() -> KeycodeDb {
    KeycodeDb::from_entries(
        vec![
            KeycodeEntry {
                key: "KC_A".to_string(),
                label: "A".to_string(),
                aliases: vec![],
            },
            KeycodeEntry {
                key: "KC_B".to_string(),
                label: "B".to_string(),
                aliases: vec![],
            },
            KeycodeEntry {
                key: "KC_ENT".to_string(),
                label: "Enter".to_string(),
                aliases: vec!["KC_ENTER".to_string()],
            },
        ],
        vec![],
    )
}
