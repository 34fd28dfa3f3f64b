//! Per-tick orchestration
//!
//! One tick is a pure synchronous transformation of the session state:
//! difficulty -> lane scroll/recycle -> obstacle advance/cull -> spawners ->
//! avatar clamp -> termination checks. Spawn timers are cooperative events
//! that fire inside this sequence, always before the collision check.

use super::collision::{fell_behind, first_collision};
use super::difficulty::difficulty_for_score;
use super::spawn::run_spawners;
use super::state::{EndReason, GameState, ObstacleKind, SessionPhase};

/// Advance the session by one timestep. A no-op unless `Running`.
pub fn tick(state: &mut GameState, dt: f32) {
    if state.phase != SessionPhase::Running || dt <= 0.0 {
        return;
    }
    state.time_ticks += 1;

    let diff = difficulty_for_score(state.score, &state.tuning);
    let scroll = diff.scroll_speed * dt;

    // World scroll: lanes, obstacles and the avatar all share it, so
    // vehicles stay visually locked to their lanes and the avatar drifts
    // toward the bottom edge unless it keeps moving up
    state.lanes.scroll(scroll);
    let relocated = state.lanes.recycle();
    if relocated > 0 {
        log::debug!("recycled {relocated} lane(s) to the top");
    }

    for obstacle in &mut state.obstacles {
        obstacle.pos.y -= scroll;
        match obstacle.kind {
            ObstacleKind::GroundVehicle => {
                obstacle.pos.x += obstacle.speed * obstacle.heading.sign() * dt;
            }
            ObstacleKind::AerialHazard => {
                obstacle.pos.y -= obstacle.speed * dt;
            }
        }
    }
    state.avatar.pos.y -= scroll;

    cull_obstacles(state);

    run_spawners(state, &diff, dt);

    clamp_avatar(state);

    if fell_behind(&state.avatar, state.tuning.viewport.y) {
        state.end(EndReason::FellBehind);
        return;
    }

    if let Some(id) = first_collision(&state.avatar, &state.obstacles) {
        log::debug!("avatar hit obstacle {id}");
        state.end(EndReason::Collision);
    }
}

/// Remove obstacles that have fully left the viewport on their travel axis,
/// clearing lane occupancy in the same pass.
fn cull_obstacles(state: &mut GameState) {
    let half_w = state.tuning.viewport.x / 2.0;
    let half_h = state.tuning.viewport.y / 2.0;

    let mut i = 0;
    while i < state.obstacles.len() {
        let o = &state.obstacles[i];
        let past_bottom = o.pos.y < -half_h - o.size.y / 2.0;
        let gone = match o.kind {
            // Travelled the full corridor width, or scrolled off the bottom
            ObstacleKind::GroundVehicle => {
                past_bottom || o.pos.x * o.heading.sign() > half_w + o.size.x / 2.0
            }
            ObstacleKind::AerialHazard => past_bottom,
        };

        if gone {
            let o = state.obstacles.remove(i);
            if let Some(slot) = o.lane_slot {
                state.lanes.set_occupied(slot, false);
            }
            log::debug!("obstacle {} culled", o.id);
        } else {
            i += 1;
        }
    }
}

/// Horizontal bounds are silent clamps; the top edge clamps too. Only the
/// bottom edge terminates, and that is handled by the fall-behind check.
fn clamp_avatar(state: &mut GameState) {
    let half_w = state.tuning.viewport.x / 2.0;
    let half_h = state.tuning.viewport.y / 2.0;
    let avatar = &mut state.avatar;

    let max_x = half_w - avatar.size.x / 2.0;
    avatar.pos.x = avatar.pos.x.clamp(-max_x, max_x);

    let max_y = half_h - avatar.size.y / 2.0;
    if avatar.pos.y > max_y {
        avatar.pos.y = max_y;
    }
}
