//! Movement domain: velocity resolution, integrator hand-off, and sinks.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AnimationSignals, ClimbController, ClimbStep, JumpController, MoveIntent, MovementState,
    MovementTuning, Player, TargetVelocity, VerticalRule, animation_signals, resolve_vertical,
    target_velocity,
};

pub(crate) fn resolve_velocity(
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &MoveIntent,
            &ClimbController,
            &mut MovementState,
            &mut JumpController,
            &mut LinearVelocity,
            &mut TargetVelocity,
        ),
        With<Player>,
    >,
) {
    for (intent, climb, mut state, mut jump, mut velocity, mut target) in &mut query {
        let (velocity_y, rule) = resolve_vertical(
            &mut jump,
            climb.climb_held,
            state.on_ground,
            velocity.y,
            &tuning,
        );
        if rule == VerticalRule::Takeoff {
            debug!("[JUMP] Takeoff at vy={}", velocity_y);
        }

        velocity.y = velocity_y;
        target.0 = target_velocity(intent, velocity_y, &tuning);
        state.facing = state.facing.from_axis(intent.axis.x);
    }
}

/// Motion integrator hand-off. Outside a climb, horizontal velocity follows the
/// target and gravity accumulates; during a climb the body moves only by
/// direct placement or, when rising, by the climb-assist velocity.
pub(crate) fn integrate_motion(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&ClimbController, &TargetVelocity, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (climb, target, mut velocity) in &mut query {
        match climb.last_step() {
            ClimbStep::Integrate | ClimbStep::Reset(_) => {
                velocity.x = target.0.x;
                velocity.y -= tuning.gravity * dt;
            }
            ClimbStep::Hold | ClimbStep::Climb { rising: false, .. } => {
                velocity.0 = Vec2::ZERO;
            }
            ClimbStep::Climb { rising: true, .. } => {
                velocity.x = 0.0;
            }
        }
    }
}

pub(crate) fn publish_animation_signals(
    tuning: Res<MovementTuning>,
    mut query: Query<
        (&MovementState, &ClimbController, &LinearVelocity, &mut AnimationSignals),
        With<Player>,
    >,
) {
    for (state, climb, velocity, mut signals) in &mut query {
        let next = animation_signals(state.on_ground, velocity.0, state.facing, climb.pose(), &tuning);
        if *signals != next {
            *signals = next;
        }
    }
}

pub(crate) fn apply_facing_to_sprite(
    mut query: Query<(&AnimationSignals, &mut Sprite), (With<Player>, Changed<AnimationSignals>)>,
) {
    for (signals, mut sprite) in &mut query {
        sprite.flip_x = signals.flip_x;
    }
}
