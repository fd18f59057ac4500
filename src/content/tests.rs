//! Content domain: tests for the movement config loader.

use std::path::Path;

use super::*;
use crate::movement::{SimulationSettings, TuningError};

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_config_parses_and_validates() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(MOVEMENT_CONFIG_PATH);
    let config = load_movement_config(&path).expect("shipped movement config should load");

    assert_eq!(config.tuning.multi_jump_count_max(), 3);
    assert_eq!(config.simulation.fixed_hz, 50.0);
    assert!(config.tuning.jump_buffer_duration > 0.0);
}

#[test]
fn test_missing_sections_fall_back_to_defaults() {
    let config = parse_movement_config("()", "inline").expect("empty config should parse");
    assert_eq!(config, MovementConfig::default());

    let config = parse_movement_config(
        "(simulation: (fixed_hz: 60.0), tuning: (coyote_duration: 0.1))",
        "inline",
    )
    .expect("partial config should parse");
    assert_eq!(config.simulation.fixed_hz, 60.0);
    assert_eq!(
        config.simulation.max_steps_per_frame,
        SimulationSettings::default().max_steps_per_frame
    );
    assert_eq!(config.tuning.coyote_duration, 0.1);
    assert_eq!(config.tuning.jump_levels.len(), 2);
}

#[test]
fn test_jump_levels_are_read_in_order() {
    let config = parse_movement_config(
        "(tuning: (jump_levels: [
            (jump_speed: 600.0, jump_min_duration: 0.1, jump_max_duration: 0.2),
            (jump_speed: 400.0, jump_min_duration: 0.05, jump_max_duration: 0.1),
        ]))",
        "inline",
    )
    .expect("jump ladder should parse");

    let speeds: Vec<f32> = config
        .tuning
        .jump_levels
        .iter()
        .map(|level| level.jump_speed)
        .collect();
    assert_eq!(speeds, vec![600.0, 400.0]);
}

// -----------------------------------------------------------------------------
// Errors
// -----------------------------------------------------------------------------

#[test]
fn test_syntax_error_is_reported_with_file() {
    let err = parse_movement_config("(tuning: (", "broken.ron").unwrap_err();
    assert!(matches!(err, ContentLoadError::Parse { .. }));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_invalid_values_are_rejected() {
    let err = parse_movement_config("(tuning: (jump_levels: []))", "empty.ron").unwrap_err();
    assert!(matches!(
        err,
        ContentLoadError::Invalid {
            source: TuningError::NoJumpLevels,
            ..
        }
    ));

    let err = parse_movement_config("(simulation: (fixed_hz: 0.0))", "clock.ron").unwrap_err();
    assert!(matches!(
        err,
        ContentLoadError::Invalid {
            source: TuningError::FixedRate(_),
            ..
        }
    ));

    let err = parse_movement_config("(tuning: (ground: (max_speed: -5.0)))", "speed.ron")
        .unwrap_err();
    assert!(err.to_string().contains("ground.max_speed"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = load_movement_config(Path::new("does/not/exist/hero_movement.ron")).unwrap_err();
    assert!(matches!(err, ContentLoadError::Io { .. }));
    assert!(err.to_string().contains("hero_movement.ron"));
}
