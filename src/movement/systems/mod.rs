//! Movement domain: system modules for locomotion updates.

pub(crate) mod climb;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod jump;
pub(crate) mod velocity;

pub(crate) use climb::{apply_ladder_zone_signals, derive_climb_state, step_climb, sync_body_mode};
pub(crate) use collisions::{detect_ground, track_ladder_zones};
pub(crate) use input::{read_input, sample_intent};
pub(crate) use jump::{advance_jump_state, log_lifecycle_events};
pub(crate) use velocity::{
    apply_facing_to_sprite, integrate_motion, publish_animation_signals, resolve_velocity,
};
