//! Movement domain: ground detection and ladder zone tracking.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{GameLayer, Ladder, LadderZoneSignal, MovementState, MovementTuning, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &Transform, &Collider, &mut MovementState), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not ladders or other sensors)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (entity, transform, collider, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        // Cast a short ray downward from the player's feet
        let player_half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 0.5,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, player_half_height);

        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_probe_distance,
            true,
            &ground_filter,
        );

        state.on_ground = hit.is_some();

        if state.on_ground != was_on_ground {
            debug!("[GROUND] {:?} on_ground={}", entity, state.on_ground);
        }
    }
}

/// Turns sensor overlaps between the player and ladders into zone signals.
pub(crate) fn track_ladder_zones(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut zone_signals: MessageWriter<LadderZoneSignal>,
    ladder_query: Query<(), With<Ladder>>,
    player_query: Query<(), With<Player>>,
) {
    for event in collision_start_events.read() {
        let Some((player, ladder)) =
            classify_pair(event.collider1, event.collider2, &player_query, &ladder_query)
        else {
            continue;
        };
        zone_signals.write(LadderZoneSignal::Enter { player, ladder });
    }

    for event in collision_end_events.read() {
        let Some((player, ladder)) =
            classify_pair(event.collider1, event.collider2, &player_query, &ladder_query)
        else {
            continue;
        };
        zone_signals.write(LadderZoneSignal::Exit { player, ladder });
    }
}

fn classify_pair(
    a: Entity,
    b: Entity,
    player_query: &Query<(), With<Player>>,
    ladder_query: &Query<(), With<Ladder>>,
) -> Option<(Entity, Entity)> {
    if player_query.contains(a) && ladder_query.contains(b) {
        Some((a, b))
    } else if player_query.contains(b) && ladder_query.contains(a) {
        Some((b, a))
    } else {
        None
    }
}
