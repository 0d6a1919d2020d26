//! Movement domain: per-frame jump lifecycle advance.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    JumpController, JumpLifecycle, MoveIntent, MovementState, Player, PlayerJumped, PlayerLanded,
    PlayerStopJump,
};

pub(crate) fn advance_jump_state(
    mut query: Query<(Entity, &MoveIntent, &MovementState, &mut JumpController), With<Player>>,
    mut jumped_events: MessageWriter<PlayerJumped>,
    mut landed_events: MessageWriter<PlayerLanded>,
    mut stop_jump_events: MessageWriter<PlayerStopJump>,
) {
    for (player, intent, state, mut jump) in &mut query {
        let before = jump.state;

        if intent.jump_released {
            jump.release_jump();
            stop_jump_events.write(PlayerStopJump { player });
        }

        match jump.tick(intent.jump_pressed, state.on_ground) {
            Some(JumpLifecycle::Jumped) => {
                jumped_events.write(PlayerJumped { player });
            }
            Some(JumpLifecycle::Landed) => {
                landed_events.write(PlayerLanded { player });
            }
            Some(JumpLifecycle::StopJump) | None => {}
        }

        if jump.state != before {
            debug!("[JUMP] {:?}: {:?} -> {:?}", player, before, jump.state);
        }
    }
}

/// Stand-in listener for the audio sink.
pub(crate) fn log_lifecycle_events(
    mut jumped_events: MessageReader<PlayerJumped>,
    mut landed_events: MessageReader<PlayerLanded>,
    mut stop_jump_events: MessageReader<PlayerStopJump>,
) {
    for event in jumped_events.read() {
        info!("[JUMP] {:?} jumped", event.player);
    }
    for event in landed_events.read() {
        info!("[JUMP] {:?} landed", event.player);
    }
    for event in stop_jump_events.read() {
        debug!("[JUMP] {:?} released jump", event.player);
    }
}
