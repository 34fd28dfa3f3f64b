//! Obstacle spawn scheduling
//!
//! Two cooperative repeating timers fire inside the tick loop: ground
//! vehicles on road lanes, aerial hazards once the score crosses the enable
//! threshold. A firing with no free road lane defers to a retry flag checked
//! once per tick instead of rescheduling itself recursively, so sustained
//! lane congestion cannot recurse or spin. Timer periods are sampled from
//! the difficulty curve when a timer re-arms; a period change never affects
//! time already elapsed toward the current firing.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::difficulty::Difficulty;
use super::state::{GameState, Heading, Obstacle, ObstacleKind};

/// One repeating timer with a jitter window
#[derive(Debug, Clone, Default)]
struct SpawnTimer {
    armed: bool,
    remaining: f32,
}

impl SpawnTimer {
    /// Schedule the next firing at `interval ± jitter` seconds from now
    fn arm(&mut self, interval: f32, jitter: f32, rng: &mut Pcg32) {
        let offset = if jitter > 0.0 {
            rng.random_range(-jitter..=jitter)
        } else {
            0.0
        };
        self.remaining = (interval + offset).max(0.01);
        self.armed = true;
    }

    /// Advance by `dt`; reports at most one firing and disarms on fire
    fn advance(&mut self, dt: f32) -> bool {
        if !self.armed {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.armed = false;
            true
        } else {
            false
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

/// Scheduler state owned by the session
#[derive(Debug, Clone, Default)]
pub(crate) struct Spawners {
    vehicle: SpawnTimer,
    bird: SpawnTimer,
    /// Latched once the score crosses the enable threshold
    bird_enabled: bool,
    /// Session-start burst bookkeeping
    burst_remaining: u32,
    burst_delay: f32,
    /// A vehicle firing found no free road lane; retry next tick
    vehicle_retry: bool,
}

impl Spawners {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Arm the vehicle timer and queue the start burst
    pub(crate) fn prime(
        &mut self,
        burst_count: u32,
        vehicle_interval: f32,
        jitter: f32,
        rng: &mut Pcg32,
    ) {
        self.burst_remaining = burst_count;
        self.burst_delay = 0.0;
        self.vehicle.arm(vehicle_interval, jitter, rng);
    }

    /// Stop all scheduled and deferred spawning. Called on session end.
    pub(crate) fn cancel(&mut self) {
        self.vehicle.disarm();
        self.bird.disarm();
        self.burst_remaining = 0;
        self.vehicle_retry = false;
    }

    #[cfg(test)]
    pub(crate) fn is_idle(&self) -> bool {
        !self.vehicle.armed && !self.bird.armed && self.burst_remaining == 0 && !self.vehicle_retry
    }
}

/// Run both spawners for one tick. Only ever called while `Running`.
pub(crate) fn run_spawners(state: &mut GameState, diff: &Difficulty, dt: f32) {
    let mut sp = std::mem::take(&mut state.spawners);
    let jitter = state.tuning.spawn_jitter;

    // Start burst: obstacles are present immediately instead of only after
    // the first full interval
    if sp.burst_remaining > 0 {
        sp.burst_delay -= dt;
        while sp.burst_delay <= 0.0 && sp.burst_remaining > 0 {
            if !spawn_vehicle(state) {
                sp.vehicle_retry = true;
            }
            sp.burst_remaining -= 1;
            sp.burst_delay += state.tuning.burst_spacing;
        }
    }

    // Deferred retry from an earlier firing that found no free lane
    if sp.vehicle_retry && spawn_vehicle(state) {
        sp.vehicle_retry = false;
    }

    if sp.vehicle.advance(dt) {
        if !spawn_vehicle(state) {
            sp.vehicle_retry = true;
        }
        sp.vehicle.arm(diff.vehicle_interval, jitter, &mut state.rng);
    }

    if !sp.bird_enabled && state.score >= state.tuning.bird_enable_score {
        sp.bird_enabled = true;
        sp.bird.arm(diff.bird_interval, jitter, &mut state.rng);
        log::info!("aerial hazards enabled at score {}", state.score);
    }
    if sp.bird.advance(dt) {
        spawn_bird(state);
        sp.bird.arm(diff.bird_interval, jitter, &mut state.rng);
    }

    state.spawners = sp;
}

/// Create a ground vehicle on a random free road lane.
/// Returns false when every road lane is occupied.
fn spawn_vehicle(state: &mut GameState) -> bool {
    let free = state.lanes.available_road_slots();
    if free.is_empty() {
        log::debug!("vehicle spawn deferred: no free road lane");
        return false;
    }

    let slot = free[state.rng.random_range(0..free.len())];
    let Some(lane) = state.lanes.lane(slot) else {
        return false;
    };
    let lane_y = lane.y;

    let heading = if state.rng.random_bool(0.5) {
        Heading::Rightward
    } else {
        Heading::Leftward
    };
    // A deeply negative score could drive the base below zero and stall the
    // car on screen forever; keep it moving
    let base = (state.tuning.vehicle_base_speed
        + state.tuning.vehicle_speed_per_point * state.score as f32)
        .max(10.0);
    let speed = base * state.rng.random_range(0.5..1.5);

    let size = state.tuning.vehicle_size;
    // Enter fully off-screen on the side opposite the travel direction
    let x = -(state.tuning.viewport.x / 2.0 + size.x / 2.0) * heading.sign();

    let id = state.next_entity_id();
    state.lanes.set_occupied(slot, true);
    state.obstacles.push(Obstacle {
        id,
        kind: ObstacleKind::GroundVehicle,
        pos: Vec2::new(x, lane_y),
        heading,
        speed,
        size,
        hitbox: size * state.tuning.hitbox_shrink,
        lane_slot: Some(slot),
    });

    log::debug!("vehicle {id} spawned on lane {slot}, speed {speed:.0}");
    true
}

/// Create an aerial hazard in the outer left or right third of the viewport.
/// Ignores lane occupancy entirely.
fn spawn_bird(state: &mut GameState) {
    let w = state.tuning.viewport.x;
    let left = state.rng.random_bool(0.5);
    let x = if left {
        state.rng.random_range(-w / 2.0..-w / 4.0)
    } else {
        state.rng.random_range(w / 4.0..w / 2.0)
    };

    let size = state.tuning.bird_size;
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        kind: ObstacleKind::AerialHazard,
        pos: Vec2::new(x, state.tuning.viewport.y / 2.0),
        heading: if left {
            Heading::Leftward
        } else {
            Heading::Rightward
        },
        speed: state.tuning.bird_speed,
        size,
        hitbox: size * state.tuning.hitbox_shrink,
        lane_slot: None,
    });

    log::debug!("hazard {id} spawned at x {x:.0}");
}
