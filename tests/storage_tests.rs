//! Tests for the persistence layer: bounds record and appearance config.

use framemark::model::Bounds;
use framemark::storage::{bounds_store, config};

#[test]
fn bounds_save_then_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("window_bounds.txt");

    let bounds = Bounds::new(500, 300, 400, 300);
    bounds_store::save_to(&path, &bounds).unwrap();
    assert_eq!(bounds_store::load_from(&path), Some(bounds));
}

#[test]
fn bounds_save_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("window_bounds.txt");

    let bounds = Bounds::new(-100, 50, 120, 80);
    bounds_store::save_to(&path, &bounds).unwrap();
    assert_eq!(bounds_store::load_from(&path), Some(bounds));
}

#[test]
fn bounds_save_overwrites_previous_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("window_bounds.txt");

    bounds_store::save_to(&path, &Bounds::new(1, 2, 300, 400)).unwrap();
    let newer = Bounds::new(5, 6, 700, 800);
    bounds_store::save_to(&path, &newer).unwrap();
    assert_eq!(bounds_store::load_from(&path), Some(newer));
}

#[test]
fn bounds_load_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(bounds_store::load_from(&dir.path().join("absent.txt")), None);
}

#[test]
fn bounds_load_malformed_record_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("window_bounds.txt");
    std::fs::write(&path, "abc").unwrap();
    assert_eq!(bounds_store::load_from(&path), None);
}

#[test]
fn malformed_record_falls_back_to_default_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("window_bounds.txt");
    std::fs::write(&path, "abc").unwrap();

    let bounds = bounds_store::load_from(&path).unwrap_or_default();
    assert_eq!(bounds, Bounds::new(500, 300, 400, 300));
}

#[test]
fn config_missing_file_yields_defaults_and_writes_them() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let loaded = config::load_from(&path);
    assert_eq!(loaded, config::Config::default());
    // First run leaves an editable file behind.
    assert!(path.exists());
}

#[test]
fn config_roundtrip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let saved = config::Config {
        border_color: "#00AAFF".to_string(),
        border_width: 6,
        overlay_alpha_pct: 80,
    };
    config::save_to(&path, &saved).unwrap();
    assert_eq!(config::load_from(&path), saved);
}

#[test]
fn config_invalid_json_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(config::load_from(&path), config::Config::default());
}

#[test]
fn config_out_of_range_values_are_clamped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r##"{ "border_color": "#123456", "border_width": 500, "overlay_alpha_pct": 255 }"##,
    )
    .unwrap();

    let loaded = config::load_from(&path);
    assert_eq!(loaded.border_width, 20);
    assert_eq!(loaded.overlay_alpha_pct, 100);
    assert_eq!(loaded.border_color, "#123456");
}
