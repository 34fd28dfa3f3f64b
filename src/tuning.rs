//! Data-driven game balance
//!
//! Every gameplay constant the sim consumes lives here so runs can be tuned
//! without touching simulation code. Validated once at session construction;
//! a session never starts with a bad configuration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tunable gameplay constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Viewport size in world units (width, height)
    pub viewport: Vec2,
    /// Height of one corridor lane
    pub lane_height: f32,

    /// Scroll speed at score 0, world units per second
    pub base_scroll_speed: f32,
    /// Scroll speed gained per 10 points of score
    pub scroll_increment: f32,

    /// Vehicle spawn interval at score 0, seconds
    pub base_vehicle_interval: f32,
    /// Interval shaved off per 10 points of score
    pub vehicle_interval_decrement: f32,
    /// Interval never drops below this
    pub vehicle_interval_floor: f32,
    /// Vehicle speed at score 0, world units per second
    pub vehicle_base_speed: f32,
    /// Vehicle speed gained per point of score
    pub vehicle_speed_per_point: f32,
    /// Visual size of a ground vehicle
    pub vehicle_size: Vec2,

    /// Aerial-hazard spawn interval baseline; effective interval is half this
    pub base_bird_interval: f32,
    /// Score at which the aerial spawner arms
    pub bird_enable_score: i32,
    /// Downward speed of an aerial hazard, world units per second
    pub bird_speed: f32,
    /// Visual size of an aerial hazard
    pub bird_size: Vec2,

    /// Avatar bounding size
    pub avatar_size: Vec2,
    /// Discrete step applied per directional command, both axes
    pub move_step: f32,

    /// Hitbox size as a fraction of visual size, in (0, 1]
    pub hitbox_shrink: f32,
    /// Spawn timer jitter half-window, seconds (fires at interval ± jitter)
    pub spawn_jitter: f32,
    /// Vehicles spawned in the session-start burst
    pub burst_count: u32,
    /// Spacing between burst spawns, seconds
    pub burst_spacing: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(750.0, 1334.0),
            lane_height: 250.0,

            base_scroll_speed: 60.0,
            scroll_increment: 12.0,

            base_vehicle_interval: 3.0,
            vehicle_interval_decrement: 0.2,
            vehicle_interval_floor: 0.5,
            vehicle_base_speed: 100.0,
            vehicle_speed_per_point: 5.0,
            vehicle_size: Vec2::new(250.0, 150.0),

            base_bird_interval: 5.0,
            bird_enable_score: 20,
            bird_speed: 300.0,
            bird_size: Vec2::new(200.0, 200.0),

            avatar_size: Vec2::new(50.0, 50.0),
            move_step: 125.0,

            hitbox_shrink: 0.8,
            spawn_jitter: 0.1,
            burst_count: 3,
            burst_spacing: 0.3,
        }
    }
}

/// Rejected tuning configuration
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// A dimension (viewport, lane, entity size, step) is zero or negative
    NonPositiveDimension(&'static str),
    /// A spawn interval or speed is zero or negative
    NonPositiveRate(&'static str),
    /// Hitbox shrink factor outside (0, 1]
    BadShrinkFactor(f32),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::NonPositiveDimension(name) => {
                write!(f, "tuning dimension `{name}` must be positive")
            }
            TuningError::NonPositiveRate(name) => {
                write!(f, "tuning rate `{name}` must be positive")
            }
            TuningError::BadShrinkFactor(v) => {
                write!(f, "hitbox_shrink must be in (0, 1], got {v}")
            }
        }
    }
}

impl std::error::Error for TuningError {}

impl Tuning {
    /// Validate the configuration. Called once when a session is built;
    /// any failure is fatal before the first tick.
    pub fn validate(&self) -> Result<(), TuningError> {
        let dims: [(&'static str, f32); 10] = [
            ("viewport.x", self.viewport.x),
            ("viewport.y", self.viewport.y),
            ("lane_height", self.lane_height),
            ("vehicle_size.x", self.vehicle_size.x),
            ("vehicle_size.y", self.vehicle_size.y),
            ("bird_size.x", self.bird_size.x),
            ("bird_size.y", self.bird_size.y),
            ("avatar_size.x", self.avatar_size.x),
            ("avatar_size.y", self.avatar_size.y),
            ("move_step", self.move_step),
        ];
        for (name, v) in dims {
            if v <= 0.0 {
                return Err(TuningError::NonPositiveDimension(name));
            }
        }

        let rates: [(&'static str, f32); 6] = [
            ("base_scroll_speed", self.base_scroll_speed),
            ("base_vehicle_interval", self.base_vehicle_interval),
            ("vehicle_interval_floor", self.vehicle_interval_floor),
            ("vehicle_base_speed", self.vehicle_base_speed),
            ("base_bird_interval", self.base_bird_interval),
            ("bird_speed", self.bird_speed),
        ];
        for (name, v) in rates {
            if v <= 0.0 {
                return Err(TuningError::NonPositiveRate(name));
            }
        }

        if self.hitbox_shrink <= 0.0 || self.hitbox_shrink > 1.0 {
            return Err(TuningError::BadShrinkFactor(self.hitbox_shrink));
        }

        Ok(())
    }

    /// Number of lanes needed to cover the viewport plus one lane of margin
    /// on each edge
    pub fn lane_count(&self) -> usize {
        (self.viewport.y / self.lane_height).ceil() as usize + 2
    }
}
