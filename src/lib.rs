//! Road Hopper - an endless lane-corridor dodge game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lane ring, spawning, collisions, session state)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Best-distance persistence collaborator
//!
//! Rendering, audio and gesture decoding are external collaborators: the sim
//! consumes resolved directional commands and exposes read-only snapshots.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::{Tuning, TuningError};

/// Fixed-loop constants
pub mod consts {
    /// Fixed simulation timestep, 60 Hz
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
