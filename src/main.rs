//! Road Hopper entry point
//!
//! Headless demo run: drives the simulation at a fixed 60 Hz behind a
//! 30 fps frame accumulator, steers with a small scripted pilot, and
//! records the result on the local leaderboard.
//!
//! Usage: `road-hopper [seed]` — omit the seed for a clock-derived one.

use std::error::Error;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use road_hopper::HighScores;
use road_hopper::Tuning;
use road_hopper::consts::{MAX_SUBSTEPS, SIM_DT};
use road_hopper::sim::{Direction, GameState, SessionPhase, tick};

/// Demo length cap, seconds of simulated time
const DEMO_CAP_SECS: f32 = 180.0;
/// Seconds between pilot commands
const PILOT_CADENCE: f32 = 0.3;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
    };

    let mut state = GameState::new(Tuning::default(), seed)?;
    state.start()?;
    println!("running demo, seed {seed}");

    let frame_dt = 1.0 / 30.0;
    let mut accumulator = 0.0f32;
    let mut elapsed = 0.0f32;
    let mut since_command = PILOT_CADENCE;

    while state.phase == SessionPhase::Running && elapsed < DEMO_CAP_SECS {
        accumulator += frame_dt;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            if since_command >= PILOT_CADENCE && state.phase == SessionPhase::Running {
                state.apply_move(pilot_move(&state))?;
                since_command = 0.0;
            }
            tick(&mut state, SIM_DT);
            accumulator -= SIM_DT;
            elapsed += SIM_DT;
            since_command += SIM_DT;
            substeps += 1;
        }
    }

    match state.final_result() {
        Some((distance, reason)) => {
            println!("run over after {elapsed:.1}s: {reason:?}, distance {distance}");

            let path = PathBuf::from("highscores.json");
            let mut scores = HighScores::load(&path);
            let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
            match scores.add_score(distance, now) {
                Some(rank) => println!("made the leaderboard at rank {rank}"),
                None => println!("did not qualify for the leaderboard"),
            }
            scores.save(&path)?;
            if let Some(top) = scores.top_score() {
                println!("longest distance: {top}");
            }
        }
        None => println!("pilot survived the full demo, distance {}", state.score),
    }

    Ok(())
}

/// One command per cadence window: sidestep the nearest converging obstacle,
/// otherwise keep pace with the scroll by moving up.
fn pilot_move(state: &GameState) -> Direction {
    let avatar = state.avatar.pos;
    for o in &state.obstacles {
        let converging_y =
            (o.pos.y - avatar.y).abs() < (o.hitbox.y + state.avatar.size.y) / 2.0 + 40.0;
        let near_x = (o.pos.x - avatar.x).abs() < (o.hitbox.x + state.avatar.size.x) / 2.0 + 120.0;
        if converging_y && near_x {
            return if o.pos.x > avatar.x {
                Direction::Left
            } else {
                Direction::Right
            };
        }
    }
    Direction::Up
}
