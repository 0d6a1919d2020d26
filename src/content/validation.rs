//! Validation for tuning ranges and level geometry.

use super::data::*;
use crate::movement::MovementTuning;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub value: f32,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {} {}", self.field, self.value, self.reason)
    }
}

/// Helper macro for checking a value satisfies a bound
macro_rules! check_range {
    ($errors:expr, $field:expr, $value:expr, $ok:expr, $reason:expr) => {
        if !$ok {
            $errors.push(ValidationError {
                field: $field.to_string(),
                value: $value,
                reason: $reason,
            });
        }
    };
}

/// Validate tuning values.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_range!(
        errors,
        "max_speed",
        tuning.max_speed,
        tuning.max_speed > 0.0,
        "must be positive"
    );
    check_range!(
        errors,
        "jump_take_off_speed",
        tuning.jump_take_off_speed,
        tuning.jump_take_off_speed >= 0.0,
        "must not be negative"
    );
    check_range!(
        errors,
        "jump_deceleration",
        tuning.jump_deceleration,
        (0.0..=1.0).contains(&tuning.jump_deceleration),
        "must be within [0, 1]"
    );
    check_range!(
        errors,
        "jump_modifier",
        tuning.jump_modifier,
        tuning.jump_modifier > 0.0,
        "must be positive"
    );
    check_range!(
        errors,
        "climb_speed",
        tuning.climb_speed,
        tuning.climb_speed >= 0.0,
        "must not be negative"
    );
    check_range!(
        errors,
        "gravity",
        tuning.gravity,
        tuning.gravity >= 0.0,
        "must not be negative"
    );
    check_range!(
        errors,
        "ground_probe_distance",
        tuning.ground_probe_distance,
        tuning.ground_probe_distance > 0.0,
        "must be positive"
    );

    errors
}

/// Validate level geometry.
pub fn validate_level(level: &LevelLayout) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let size = level.player.size;
    check_range!(errors, "player.size.x", size.x, size.x > 0.0, "must be positive");
    check_range!(errors, "player.size.y", size.y, size.y > 0.0, "must be positive");

    for (i, block) in level.blocks.iter().enumerate() {
        check_range!(
            errors,
            format!("blocks[{}].size.x", i),
            block.size.x,
            block.size.x > 0.0,
            "must be positive"
        );
        check_range!(
            errors,
            format!("blocks[{}].size.y", i),
            block.size.y,
            block.size.y > 0.0,
            "must be positive"
        );
    }

    for (i, ladder) in level.ladders.iter().enumerate() {
        check_range!(
            errors,
            format!("ladders[{}].top_handle.y", i),
            ladder.top_handle.y,
            ladder.top_handle.y > ladder.bottom_handle.y,
            "must be above bottom_handle.y"
        );
        check_range!(
            errors,
            format!("ladders[{}].size.y", i),
            ladder.size.y,
            ladder.size.y > 0.0,
            "must be positive"
        );
    }

    errors
}
