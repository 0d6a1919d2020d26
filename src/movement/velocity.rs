//! Movement domain: target velocity resolution and render-facing outputs.

use bevy::prelude::*;

use crate::movement::{
    ClimbPose, Facing, INPUT_DEAD_ZONE, JumpController, MoveIntent, MovementTuning,
};

/// Which priority rule produced the vertical velocity this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalRule {
    Takeoff,
    EarlyCutoff,
    ClimbAssist,
    Decay,
    Unchanged,
}

/// Velocity handed to the motion integrator. Rewritten every frame.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct TargetVelocity(pub Vec2);

/// One-way signals for the animation and render sinks.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct AnimationSignals {
    pub grounded: bool,
    /// |velocity.x| / max_speed
    pub speed_x: f32,
    pub flip_x: bool,
    pub pose: ClimbPose,
}

/// Resolve the vertical velocity by priority. The first matching rule wins.
/// Consumes the takeoff and early-release requests it acts on.
pub fn resolve_vertical(
    jump: &mut JumpController,
    climb_held: bool,
    grounded: bool,
    velocity_y: f32,
    tuning: &MovementTuning,
) -> (f32, VerticalRule) {
    if jump.jump && grounded {
        jump.jump = false;
        return (tuning.takeoff_velocity(), VerticalRule::Takeoff);
    }

    if jump.stop_jump {
        jump.stop_jump = false;
        if velocity_y > 0.0 {
            return (velocity_y * tuning.jump_deceleration, VerticalRule::EarlyCutoff);
        }
        return (velocity_y, VerticalRule::EarlyCutoff);
    }

    if climb_held {
        return (tuning.takeoff_velocity(), VerticalRule::ClimbAssist);
    }

    if velocity_y > 0.0 {
        return (velocity_y * tuning.jump_deceleration, VerticalRule::Decay);
    }

    (velocity_y, VerticalRule::Unchanged)
}

impl Facing {
    /// Facing after this frame's horizontal intent, keeping `self` inside the
    /// dead zone.
    pub fn from_axis(self, x: f32) -> Facing {
        if x > INPUT_DEAD_ZONE {
            Facing::Right
        } else if x < -INPUT_DEAD_ZONE {
            Facing::Left
        } else {
            self
        }
    }
}

/// Horizontal component scales with intent; vertical is the resolved value.
pub fn target_velocity(intent: &MoveIntent, velocity_y: f32, tuning: &MovementTuning) -> Vec2 {
    Vec2::new(intent.axis.x * tuning.max_speed, velocity_y)
}

pub fn animation_signals(
    grounded: bool,
    velocity: Vec2,
    facing: Facing,
    pose: ClimbPose,
    tuning: &MovementTuning,
) -> AnimationSignals {
    let speed_x = if tuning.max_speed > 0.0 {
        velocity.x.abs() / tuning.max_speed
    } else {
        0.0
    };

    AnimationSignals {
        grounded,
        speed_x,
        flip_x: facing == Facing::Left,
        pose,
    }
}
