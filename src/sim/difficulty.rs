//! Score-driven pacing
//!
//! A pure mapping from the current score to scroll speed and spawn
//! intervals. Recomputed every tick from the live score, so a score drop
//! relaxes difficulty rather than ratcheting.

use crate::tuning::Tuning;

/// Pacing parameters derived from the current score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// World scroll speed, units per second
    pub scroll_speed: f32,
    /// Vehicle spawner period, seconds
    pub vehicle_interval: f32,
    /// Aerial spawner period, seconds
    pub bird_interval: f32,
}

/// Evaluate the difficulty curve at `score`.
///
/// Both ramps step once per 10 points and only engage at score 10; the
/// vehicle interval is floored so congestion never goes unbounded.
pub fn difficulty_for_score(score: i32, tuning: &Tuning) -> Difficulty {
    let steps = if score >= 10 { (score / 10) as f32 } else { 0.0 };

    Difficulty {
        scroll_speed: tuning.base_scroll_speed + tuning.scroll_increment * steps,
        vehicle_interval: (tuning.base_vehicle_interval
            - tuning.vehicle_interval_decrement * steps)
            .max(tuning.vehicle_interval_floor),
        bird_interval: tuning.base_bird_interval / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_uses_base_values() {
        let t = Tuning::default();
        for score in [-15, -1, 0, 5, 9] {
            let d = difficulty_for_score(score, &t);
            assert_eq!(d.scroll_speed, t.base_scroll_speed);
            assert_eq!(d.vehicle_interval, t.base_vehicle_interval);
        }
    }

    #[test]
    fn interval_matches_curve_exactly() {
        let t = Tuning::default();
        // base 3.0, decrement 0.2 per 10 points
        assert!((difficulty_for_score(20, &t).vehicle_interval - 2.6).abs() < 1e-6);
        assert!((difficulty_for_score(90, &t).vehicle_interval - 1.2).abs() < 1e-6);
    }

    #[test]
    fn interval_hits_floor_and_stays() {
        let t = Tuning::default();
        // 3.0 - 0.2 * 13 = 0.4 -> floored
        assert_eq!(difficulty_for_score(130, &t).vehicle_interval, 0.5);
        assert_eq!(difficulty_for_score(500, &t).vehicle_interval, 0.5);
    }

    #[test]
    fn ramps_are_monotone_over_the_curve() {
        let t = Tuning::default();
        let d10 = difficulty_for_score(10, &t);
        let d20 = difficulty_for_score(20, &t);
        let d30 = difficulty_for_score(30, &t);
        assert!(d10.vehicle_interval > d20.vehicle_interval);
        assert!(d20.vehicle_interval > d30.vehicle_interval);
        assert!(d10.scroll_speed < d20.scroll_speed);
        assert!(d20.scroll_speed < d30.scroll_speed);
    }

    #[test]
    fn bird_interval_is_half_the_baseline() {
        let t = Tuning::default();
        assert_eq!(difficulty_for_score(0, &t).bird_interval, 2.5);
        assert_eq!(difficulty_for_score(100, &t).bird_interval, 2.5);
    }

    #[test]
    fn partial_steps_round_down() {
        let t = Tuning::default();
        // 15 and 19 sit on the same step as 10
        let d10 = difficulty_for_score(10, &t);
        assert_eq!(difficulty_for_score(15, &t), d10);
        assert_eq!(difficulty_for_score(19, &t), d10);
    }
}
