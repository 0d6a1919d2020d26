//! Movement domain: normalized move intent and jump edges.

use bevy::prelude::*;

use crate::movement::MovementInput;

/// Axis magnitude below which input counts as released.
pub const INPUT_DEAD_ZONE: f32 = 0.01;

/// Gate on player control. Disabling it zeroes intent but does not pause the
/// jump lifecycle.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlEnabled(pub bool);

impl Default for ControlEnabled {
    fn default() -> Self {
        Self(true)
    }
}

/// Per-frame intent for one character.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct MoveIntent {
    /// Both components clamped to [-1, 1].
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub jump_released: bool,
}

impl MoveIntent {
    pub fn sample(input: &MovementInput, control: ControlEnabled) -> Self {
        if !control.0 {
            return Self::default();
        }

        Self {
            axis: input.axis.clamp(Vec2::NEG_ONE, Vec2::ONE),
            jump_pressed: input.jump_just_pressed,
            jump_released: input.jump_just_released,
        }
    }

    pub fn horizontal_active(&self) -> bool {
        self.axis.x.abs() > INPUT_DEAD_ZONE
    }

    pub fn vertical_active(&self) -> bool {
        self.axis.y.abs() > INPUT_DEAD_ZONE
    }
}
