//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use sprite_indexer::models::Report;
use std::path::Path;

use super::fixtures::read_png_info;

/// Assert the report is a success and return its JSON form
pub fn assert_success(report: &Report) -> serde_json::Value {
    assert!(report.is_success(), "Expected success, got:\n{report}");
    serde_json::from_str(&report.to_json().unwrap()).unwrap()
}

/// Assert the report is a failure and return its JSON form
pub fn assert_failure(report: &Report) -> serde_json::Value {
    assert!(!report.is_success(), "Expected failure, got:\n{report}");
    serde_json::from_str(&report.to_json().unwrap()).unwrap()
}

/// Assert a file is a 64×64 sprite: 4-bit indexed with a full 16-entry PLTE
pub fn assert_sprite_png(path: &Path) {
    let info = read_png_info(path);
    assert_eq!((info.width, info.height), (64, 64), "{}", path.display());
    assert_eq!(info.color_type, png::ColorType::Indexed);
    assert_eq!(info.bit_depth, png::BitDepth::Four);
    assert_eq!(info.palette.len(), 16 * 3, "PLTE must hold 16 entries");
}

/// Assert a file is a JASC palette with 16 CRLF-terminated entries
pub fn assert_jasc(path: &Path) -> Vec<String> {
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.starts_with("JASC-PAL\r\n0100\r\n16\r\n"), "bad header: {text:?}");
    assert!(text.ends_with("\r\n"));

    let entries: Vec<String> = text
        .split("\r\n")
        .skip(3)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    assert_eq!(entries.len(), 16);
    entries
}
