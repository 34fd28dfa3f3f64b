//! Session state and core entity types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::lanes::LaneRing;
use super::spawn::Spawners;
use crate::tuning::{Tuning, TuningError};

/// Discrete directional command, resolved externally from gesture input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Horizontal travel direction of a ground vehicle; for aerial hazards it
/// records which side of the viewport the spawn band was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Leftward,
    Rightward,
}

impl Heading {
    /// Unit sign along +x
    pub fn sign(self) -> f32 {
        match self {
            Heading::Leftward => -1.0,
            Heading::Rightward => 1.0,
        }
    }
}

/// The two obstacle kinds, differing in motion axis and lane exclusivity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    GroundVehicle,
    AerialHazard,
}

/// A live obstacle. Immutable after creation except for `pos`.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub heading: Heading,
    /// Own-axis speed: horizontal for vehicles, downward for hazards
    pub speed: f32,
    /// Visual size (used for cull bounds)
    pub size: Vec2,
    /// Collision size, strictly smaller than `size`
    pub hitbox: Vec2,
    /// Owning lane slot; vehicles only
    pub lane_slot: Option<usize>,
}

/// The player avatar
#[derive(Debug, Clone)]
pub struct Avatar {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Why the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Avatar overlapped an obstacle hitbox
    Collision,
    /// Avatar was scrolled past the visible bottom edge
    FellBehind,
}

/// Session state machine. `Ended` is terminal; there is no resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    Running,
    Ended(EndReason),
}

/// Rejected session command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `start()` on a session that already ran
    AlreadyStarted,
    /// A move issued while the session is not running
    NotRunning,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::AlreadyStarted => write!(f, "session was already started"),
            SessionError::NotRunning => write!(f, "session is not running"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Read-only per-tick view for the presentation layer
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub lanes: &'a [super::lanes::Lane],
    pub obstacles: &'a [Obstacle],
    pub avatar_pos: Vec2,
    pub score: i32,
    pub phase: SessionPhase,
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: SessionPhase,
    /// Signed distance score; Up moves add, Down moves subtract
    pub score: i32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub lanes: LaneRing,
    /// Live obstacles, ordered by creation id
    pub obstacles: Vec<Obstacle>,
    pub avatar: Avatar,
    pub(crate) spawners: Spawners,
    pub(crate) rng: Pcg32,
    pub(crate) next_id: u32,
}

impl GameState {
    /// Build a session in `NotStarted`. The configuration is validated here;
    /// a session with a bad configuration never exists.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;

        let avatar = Avatar {
            pos: Vec2::ZERO,
            size: tuning.avatar_size,
        };
        // Ring is built up-front but only becomes live on start()
        let lanes = LaneRing::new(&tuning);

        Ok(Self {
            seed,
            tuning,
            phase: SessionPhase::NotStarted,
            score: 0,
            time_ticks: 0,
            lanes,
            obstacles: Vec::new(),
            avatar,
            spawners: Spawners::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        })
    }

    /// Transition `NotStarted -> Running` and prime the spawn burst.
    /// Rejected on a session that already ran.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }

        self.phase = SessionPhase::Running;
        let vehicle_interval =
            super::difficulty::difficulty_for_score(self.score, &self.tuning).vehicle_interval;
        let (burst, jitter) = (self.tuning.burst_count, self.tuning.spawn_jitter);
        self.spawners
            .prime(burst, vehicle_interval, jitter, &mut self.rng);

        log::info!("session started, seed {}", self.seed);
        Ok(())
    }

    /// Apply one discrete directional command immediately.
    /// Up and Down adjust the score; the horizontal clamp runs on the next
    /// tick, so the step itself is never blocked.
    pub fn apply_move(&mut self, direction: Direction) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Running {
            return Err(SessionError::NotRunning);
        }

        let step = self.tuning.move_step;
        match direction {
            Direction::Left => self.avatar.pos.x -= step,
            Direction::Right => self.avatar.pos.x += step,
            Direction::Up => {
                self.avatar.pos.y += step;
                self.score += 1;
            }
            Direction::Down => {
                self.avatar.pos.y -= step;
                self.score -= 1;
            }
        }
        Ok(())
    }

    /// Allocate a new entity id
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Terminate the run: cancel all scheduled spawns, freeze the state
    pub(crate) fn end(&mut self, reason: EndReason) {
        self.spawners.cancel();
        self.phase = SessionPhase::Ended(reason);
        log::info!("session ended ({reason:?}), final score {}", self.score);
    }

    /// Read-only view for presentation layers
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            lanes: self.lanes.lanes(),
            obstacles: &self.obstacles,
            avatar_pos: self.avatar.pos,
            score: self.score,
            phase: self.phase,
        }
    }

    /// `(final_score, outcome)` once the session has ended
    pub fn final_result(&self) -> Option<(i32, EndReason)> {
        match self.phase {
            SessionPhase::Ended(reason) => Some((self.score, reason)),
            _ => None,
        }
    }
}
