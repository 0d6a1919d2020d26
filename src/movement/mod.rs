//! Movement domain: jump lifecycle, ladder climbing, and velocity resolution
//! for the player character.
//!
//! The pure controllers (`jump`, `climb`, `velocity`) hold all the state and
//! rules; `systems` wires them into two cadences. Intent, jump, climb
//! derivation and velocity run every rendered frame in `Update`; the climb
//! step and the integrator hand-off run in `FixedUpdate`, ahead of Avian's
//! physics step in `FixedPostUpdate`.

mod bootstrap;
mod climb;
mod components;
mod events;
mod intent;
mod jump;
mod resources;
mod systems;
mod velocity;

pub use climb::{
    BodyMode, ClimbController, ClimbPose, ClimbStep, LadderAnchor, ResetCause, snap,
};
pub use components::{CharacterBody, Facing, GameLayer, Ground, Ladder, MovementState, Player};
pub use events::{LadderZoneSignal, PlayerJumped, PlayerLanded, PlayerStopJump};
pub use intent::{ControlEnabled, INPUT_DEAD_ZONE, MoveIntent};
pub use jump::{JumpController, JumpLifecycle, JumpState};
pub use resources::{MovementInput, MovementTuning};
pub use velocity::{
    AnimationSignals, TargetVelocity, VerticalRule, animation_signals, resolve_vertical,
    target_velocity,
};

use bevy::prelude::*;

use crate::content::LevelLayout;
use crate::core::gameplay_active;
use crate::movement::bootstrap::{bootstrap_player_from_data, spawn_level};
use crate::movement::systems::{
    advance_jump_state, apply_facing_to_sprite, apply_ladder_zone_signals, derive_climb_state,
    detect_ground, integrate_motion, log_lifecycle_events, publish_animation_signals, read_input,
    resolve_velocity, sample_intent, step_climb, sync_body_mode, track_ladder_zones,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<LevelLayout>()
            .add_message::<PlayerJumped>()
            .add_message::<PlayerLanded>()
            .add_message::<PlayerStopJump>()
            .add_message::<LadderZoneSignal>()
            .add_systems(Startup, (spawn_level, bootstrap_player_from_data))
            .add_systems(
                Update,
                (
                    track_ladder_zones,
                    apply_ladder_zone_signals,
                    read_input,
                    sample_intent,
                    detect_ground,
                    advance_jump_state,
                    derive_climb_state,
                    sync_body_mode,
                    resolve_velocity,
                    publish_animation_signals,
                    apply_facing_to_sprite,
                    log_lifecycle_events,
                )
                    .chain()
                    .run_if(gameplay_active),
            )
            .add_systems(
                FixedUpdate,
                (step_climb, sync_body_mode, integrate_motion)
                    .chain()
                    .run_if(gameplay_active),
            );
    }
}
