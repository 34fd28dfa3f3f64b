//! Collision and termination checks
//!
//! Axis-aligned box tests only: every entity is a rectangle and motion is
//! constant-velocity, so there is no need for swept or substepped queries.
//! Obstacle hitboxes are strictly smaller than their sprites, which gives
//! the player perceptual leeway on near misses.

use glam::Vec2;

use super::state::{Avatar, Obstacle};

/// Overlap test between two centered axis-aligned boxes
#[inline]
pub fn aabb_overlap(center_a: Vec2, size_a: Vec2, center_b: Vec2, size_b: Vec2) -> bool {
    (center_a.x - center_b.x).abs() * 2.0 < size_a.x + size_b.x
        && (center_a.y - center_b.y).abs() * 2.0 < size_a.y + size_b.y
}

/// First obstacle (in creation order) whose hitbox overlaps the avatar.
/// One hit is enough to end the session, so the scan stops there.
pub fn first_collision(avatar: &Avatar, obstacles: &[Obstacle]) -> Option<u32> {
    obstacles
        .iter()
        .find(|o| aabb_overlap(avatar.pos, avatar.size, o.pos, o.hitbox))
        .map(|o| o.id)
}

/// True when the avatar has been scrolled below the visible bottom edge
#[inline]
pub fn fell_behind(avatar: &Avatar, viewport_height: f32) -> bool {
    avatar.pos.y < -viewport_height / 2.0 + avatar.size.y / 2.0
}
