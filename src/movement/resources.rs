//! Movement domain: tuning and input resources.

use bevy::prelude::*;

/// Read-only movement tuning, loaded from `movement.ron` at startup.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub jump_take_off_speed: f32,
    /// Factor applied to upward velocity on early release and on natural decay.
    pub jump_deceleration: f32,
    pub jump_modifier: f32,
    pub climb_speed: f32,
    pub gravity: f32,
    /// Length of the downward ground ray, measured from the feet.
    pub ground_probe_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 7.0,
            jump_take_off_speed: 7.0,
            jump_deceleration: 0.5,
            jump_modifier: 1.5,
            climb_speed: 0.2,
            gravity: 9.81,
            ground_probe_distance: 0.05,
        }
    }
}

impl MovementTuning {
    /// Vertical velocity applied on takeoff and reused as the climb impulse.
    pub fn takeoff_velocity(&self) -> f32 {
        self.jump_take_off_speed * self.jump_modifier
    }

    /// Apex height of an uninterrupted jump, ignoring decay.
    /// Uses h = v^2 / (2g)
    pub fn single_jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        let v = self.takeoff_velocity();
        v * v / (2.0 * self.gravity)
    }
}

/// Raw per-frame input, before clamping and control gating.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
}
