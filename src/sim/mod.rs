//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed or caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (obstacles by creation id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod lanes;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, fell_behind, first_collision};
pub use difficulty::{Difficulty, difficulty_for_score};
pub use lanes::{Lane, LaneKind, LaneRing};
pub use state::{
    Avatar, Direction, EndReason, GameState, Heading, Obstacle, ObstacleKind, SessionError,
    SessionPhase, Snapshot,
};
pub use tick::tick;
