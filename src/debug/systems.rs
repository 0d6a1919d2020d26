//! Debug systems: control toggle and climb flag logging.

use bevy::prelude::*;

use crate::debug::ClimbFlagsSnapshot;
use crate::movement::{ClimbController, ControlEnabled, Player};

pub(crate) fn toggle_player_control(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(Entity, &mut ControlEnabled), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F2) {
        return;
    }

    for (player, mut control) in &mut query {
        control.0 = !control.0;
        info!("[DEBUG] {:?} control enabled: {}", player, control.0);
    }
}

pub(crate) fn log_climb_flags(
    mut commands: Commands,
    mut query: Query<(Entity, &ClimbController, Option<&mut ClimbFlagsSnapshot>), With<Player>>,
) {
    for (player, climb, snapshot) in &mut query {
        let now = ClimbFlagsSnapshot {
            near: climb.is_near_ladder,
            held: climb.climb_held,
            started: climb.has_started_climb,
        };

        match snapshot {
            Some(mut previous) if *previous != now => {
                debug!(
                    "[DEBUG] {:?} near={} held={} started={} body={:?}",
                    player,
                    now.near,
                    now.held,
                    now.started,
                    climb.body_mode()
                );
                *previous = now;
            }
            Some(_) => {}
            None => {
                commands.entity(player).insert(now);
            }
        }
    }
}
