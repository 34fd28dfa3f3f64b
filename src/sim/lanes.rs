//! Scrolling lane ring
//!
//! The corridor is a fixed set of lanes that scroll downward and get
//! relocated to the top once fully off-screen. Lanes are never destroyed;
//! a lane's kind belongs to its ring slot and survives relocation, which is
//! what keeps the road/grass pattern alternating on screen.

use crate::tuning::Tuning;

/// What a lane is made of. Road lanes carry vehicles, grass lanes are safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneKind {
    Road,
    Grass,
}

/// One horizontal strip of the corridor
#[derive(Debug, Clone)]
pub struct Lane {
    /// Stable arena slot, assigned at creation and never reused
    pub slot: usize,
    pub kind: LaneKind,
    /// Vertical center in world units (viewport center is y = 0)
    pub y: f32,
    /// True iff exactly one live vehicle owns this lane
    pub occupied: bool,
}

/// The ordered set of visible lanes plus one margin lane on each edge
#[derive(Debug, Clone)]
pub struct LaneRing {
    lanes: Vec<Lane>,
    lane_height: f32,
    viewport_height: f32,
}

impl LaneRing {
    /// Build `ceil(height / lane_height) + 2` lanes, kinds alternating by
    /// slot parity, stacked from one lane-height below the bottom edge.
    pub fn new(tuning: &Tuning) -> Self {
        let count = tuning.lane_count();
        let lanes = (0..count)
            .map(|slot| Lane {
                slot,
                kind: if slot % 2 == 0 {
                    LaneKind::Road
                } else {
                    LaneKind::Grass
                },
                y: slot as f32 * tuning.lane_height - tuning.viewport.y / 2.0,
                occupied: false,
            })
            .collect();

        Self {
            lanes,
            lane_height: tuning.lane_height,
            viewport_height: tuning.viewport.y,
        }
    }

    /// Shift every lane down by `distance`
    pub fn scroll(&mut self, distance: f32) {
        for lane in &mut self.lanes {
            lane.y -= distance;
        }
    }

    /// Relocate every fully off-screen lane to the top of the ring.
    /// Loops until no lane is out of bounds, so a single oversized scroll
    /// delta cannot leave a gap. Returns the number of lanes relocated.
    pub fn recycle(&mut self) -> usize {
        let cutoff = -self.lane_height / 2.0 - self.viewport_height / 2.0;
        let mut relocated = 0;

        loop {
            let Some(front) = self
                .lanes
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| a.y.total_cmp(&b.y))
                .map(|(i, _)| i)
            else {
                return relocated;
            };
            if self.lanes[front].y >= cutoff {
                return relocated;
            }

            let max_y = self
                .lanes
                .iter()
                .map(|l| l.y)
                .fold(f32::NEG_INFINITY, f32::max);
            self.lanes[front].y = max_y + self.lane_height;
            relocated += 1;
        }
    }

    /// Slots of road lanes with no live vehicle
    pub fn available_road_slots(&self) -> Vec<usize> {
        self.lanes
            .iter()
            .filter(|l| l.kind == LaneKind::Road && !l.occupied)
            .map(|l| l.slot)
            .collect()
    }

    pub fn set_occupied(&mut self, slot: usize, occupied: bool) {
        if let Some(lane) = self.lanes.get_mut(slot) {
            lane.occupied = occupied;
        }
    }

    pub fn lane(&self, slot: usize) -> Option<&Lane> {
        self.lanes.get(slot)
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Lowest and highest lane centers, for coverage checks
    pub fn y_range(&self) -> (f32, f32) {
        let min = self.lanes.iter().map(|l| l.y).fold(f32::INFINITY, f32::min);
        let max = self
            .lanes
            .iter()
            .map(|l| l.y)
            .fold(f32::NEG_INFINITY, f32::max);
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ring() -> LaneRing {
        LaneRing::new(&Tuning::default())
    }

    #[test]
    fn initial_layout_alternates_and_covers() {
        let ring = ring();
        // ceil(1334 / 250) + 2
        assert_eq!(ring.len(), 8);
        for lane in ring.lanes() {
            let expected = if lane.slot % 2 == 0 {
                LaneKind::Road
            } else {
                LaneKind::Grass
            };
            assert_eq!(lane.kind, expected);
            assert!((lane.y - (lane.slot as f32 * 250.0 - 667.0)).abs() < 1e-3);
            assert!(!lane.occupied);
        }
    }

    #[test]
    fn scroll_moves_every_lane_down() {
        let mut ring = ring();
        let before: Vec<f32> = ring.lanes().iter().map(|l| l.y).collect();
        ring.scroll(40.0);
        for (lane, y0) in ring.lanes().iter().zip(before) {
            assert!((lane.y - (y0 - 40.0)).abs() < 1e-3);
        }
    }

    #[test]
    fn recycle_relocates_front_lane_to_top() {
        let mut ring = ring();
        // Push slot 0 just past the cutoff
        let cutoff = -125.0 - 667.0;
        ring.scroll(ring.lanes()[0].y - cutoff + 1.0);
        let (_, max_before) = ring.y_range();

        assert_eq!(ring.recycle(), 1);
        let relocated = ring.lane(0).unwrap();
        assert!((relocated.y - (max_before + 250.0)).abs() < 1e-3);
        // Kind belongs to the slot, not the position
        assert_eq!(relocated.kind, LaneKind::Road);
    }

    #[test]
    fn oversized_scroll_recycles_in_a_loop() {
        let mut ring = ring();
        // Three lane-heights at once would strand three lanes below the cutoff
        ring.scroll(3.0 * 250.0 + 10.0);
        let relocated = ring.recycle();
        assert!(relocated >= 3, "relocated only {relocated} lanes");

        let cutoff = -125.0 - 667.0;
        for lane in ring.lanes() {
            assert!(lane.y >= cutoff);
        }
    }

    #[test]
    fn availability_respects_kind_and_occupancy() {
        let mut ring = ring();
        let road_slots = ring.available_road_slots();
        assert!(road_slots.iter().all(|&s| s % 2 == 0));

        ring.set_occupied(road_slots[0], true);
        let after = ring.available_road_slots();
        assert_eq!(after.len(), road_slots.len() - 1);
        assert!(!after.contains(&road_slots[0]));
    }

    proptest! {
        /// After any scroll/recycle sequence the ring covers the viewport
        /// plus a lane of margin, with no gap of a lane-height or more.
        #[test]
        fn coverage_invariant(deltas in proptest::collection::vec(0.0f32..900.0, 1..60)) {
            let mut ring = ring();
            for d in deltas {
                ring.scroll(d);
                ring.recycle();

                let mut ys: Vec<f32> = ring.lanes().iter().map(|l| l.y).collect();
                ys.sort_by(f32::total_cmp);
                prop_assert!(ys[0] <= -667.0 + 125.0 + 1e-2);
                prop_assert!(*ys.last().unwrap() >= 667.0 - 125.0 - 1e-2);
                for pair in ys.windows(2) {
                    prop_assert!(pair[1] - pair[0] < 250.0 + 1e-2);
                }
            }
        }
    }
}
