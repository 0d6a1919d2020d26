//! Movement domain: ladder zone bookkeeping and the fixed-rate climb step.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{
    BodyMode, CharacterBody, ClimbController, ClimbStep, Ladder, LadderAnchor, LadderZoneSignal,
    MoveIntent, MovementTuning, Player,
};

pub(crate) fn apply_ladder_zone_signals(
    mut zone_signals: MessageReader<LadderZoneSignal>,
    mut player_query: Query<&mut ClimbController, With<Player>>,
    ladder_query: Query<(&Ladder, &Transform)>,
) {
    for signal in zone_signals.read() {
        match *signal {
            LadderZoneSignal::Enter { player, ladder } => {
                let Ok(mut climb) = player_query.get_mut(player) else {
                    continue;
                };
                let Ok((handles, transform)) = ladder_query.get(ladder) else {
                    warn!("[CLIMB] Zone enter for {:?} without ladder data", ladder);
                    continue;
                };
                climb.enter_zone(LadderAnchor::capture(ladder, handles, transform));
                info!("[CLIMB] {:?} entered ladder zone {:?}", player, ladder);
            }
            LadderZoneSignal::Exit { player, ladder } => {
                let Ok(mut climb) = player_query.get_mut(player) else {
                    continue;
                };
                if climb.exit_zone(ladder) {
                    info!("[CLIMB] {:?} exited ladder zone {:?}", player, ladder);
                }
            }
        }
    }
}

pub(crate) fn derive_climb_state(
    mut query: Query<(Entity, &MoveIntent, &mut ClimbController), With<Player>>,
) {
    for (player, intent, mut climb) in &mut query {
        if climb.derive(intent) {
            debug!("[CLIMB] {:?} latched climb", player);
        }
    }
}

pub(crate) fn step_climb(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (&MoveIntent, &CharacterBody, &mut ClimbController, &mut Transform),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (intent, body, mut climb, mut transform) in &mut query {
        let position = transform.translation.truncate();
        let step = climb.step(intent, position, body.half_size.y, dt, &tuning);

        if let ClimbStep::Climb { position: target, .. } = step {
            transform.translation.x = target.x;
            transform.translation.y = target.y;
        }
    }
}

/// Single writer of the player's rigid body mode.
pub(crate) fn sync_body_mode(mut query: Query<(&ClimbController, &mut RigidBody), With<Player>>) {
    for (climb, mut body) in &mut query {
        let wanted = match climb.body_mode() {
            BodyMode::Dynamic => RigidBody::Dynamic,
            BodyMode::Kinematic => RigidBody::Kinematic,
        };
        if *body != wanted {
            *body = wanted;
        }
    }
}
