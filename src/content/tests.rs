//! Content domain: tests for RON parsing and validation.

use std::path::Path;

use super::{
    LevelLayout, MovementTuningDef, load_all_content, parse_single, validate_level,
    validate_tuning,
};
use crate::movement::MovementTuning;

const TUNING_RON: &str = r#"(
    schema_version: 1,
    max_speed: 7.0,
    jump_take_off_speed: 7.0,
    jump_deceleration: 0.5,
    jump_modifier: 1.5,
    climb_speed: 0.2,
    gravity: 9.81,
    ground_probe_distance: 0.05,
)"#;

#[test]
fn test_parse_tuning_matches_defaults() {
    let def: MovementTuningDef = parse_single("movement.ron", TUNING_RON).unwrap();
    assert_eq!(def.schema_version, 1);
    assert_eq!(MovementTuning::from(def), MovementTuning::default());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_single::<MovementTuningDef>("movement.ron", "(max_speed: )").unwrap_err();
    assert_eq!(err.file, "movement.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("movement.ron"));
}

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&MovementTuning::default()).is_empty());
}

#[test]
fn test_invalid_tuning_reports_each_field() {
    let tuning = MovementTuning {
        max_speed: 0.0,
        jump_deceleration: 1.5,
        gravity: -1.0,
        ..MovementTuning::default()
    };

    let errors = validate_tuning(&tuning);
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["max_speed", "jump_deceleration", "gravity"]);
}

#[test]
fn test_default_level_is_valid() {
    assert!(validate_level(&LevelLayout::default()).is_empty());
}

#[test]
fn test_inverted_ladder_handles_rejected() {
    let mut level = LevelLayout::default();
    let ladder = &mut level.ladders[0];
    std::mem::swap(&mut ladder.top_handle, &mut ladder.bottom_handle);

    let errors = validate_level(&level);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "ladders[0].top_handle.y");
}

#[test]
fn test_missing_content_dir_reports_both_files() {
    let errors = load_all_content(Path::new("does/not/exist")).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].file.ends_with("movement.ron"));
    assert!(errors[1].file.ends_with("level.ron"));
    assert!(errors.iter().all(|e| e.message.starts_with("IO error")));
}

#[test]
fn test_shipped_content_loads_and_validates() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::CONTENT_DIR);
    let (tuning, level) = load_all_content(&base).unwrap();
    assert!(validate_tuning(&tuning).is_empty());
    assert!(validate_level(&level).is_empty());
    assert!(!level.ladders.is_empty());
}
