//! Axis-aligned bounding box overlap
//!
//! Both the actor and obstacles are plain rectangles, so contact is a
//! strict interval overlap on each axis. Touching edges do not count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangle anchored at `min` extending by `size` along +x and +y
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// True if the boxes share any area, however small
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        aabb_overlap(self.min, self.size, other.min, other.size)
    }
}

/// `ax < bx+bw && ax+aw > bx && ay < by+bh && ay+ah > by`
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn actor_box() -> Aabb {
        Aabb::new(Vec2::new(50.0, 200.0), Vec2::new(50.0, 70.0))
    }

    #[test]
    fn test_overlap_hit() {
        let obstacle = Aabb::new(Vec2::new(60.0, 210.0), Vec2::new(50.0, 30.0));
        assert!(actor_box().overlaps(&obstacle));
    }

    #[test]
    fn test_overlap_miss_horizontal() {
        let obstacle = Aabb::new(Vec2::new(200.0, 210.0), Vec2::new(50.0, 30.0));
        assert!(!actor_box().overlaps(&obstacle));
    }

    #[test]
    fn test_overlap_miss_vertical() {
        // Directly above the actor
        let obstacle = Aabb::new(Vec2::new(60.0, 100.0), Vec2::new(50.0, 30.0));
        assert!(!actor_box().overlaps(&obstacle));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        // Right edge of actor at x=100
        let right = Aabb::new(Vec2::new(100.0, 210.0), Vec2::new(50.0, 30.0));
        assert!(!actor_box().overlaps(&right));
        // Bottom edge of actor at y=270
        let below = Aabb::new(Vec2::new(60.0, 270.0), Vec2::new(50.0, 30.0));
        assert!(!actor_box().overlaps(&below));
        // Top edge: obstacle ends exactly at y=200
        let above = Aabb::new(Vec2::new(60.0, 170.0), Vec2::new(50.0, 30.0));
        assert!(!actor_box().overlaps(&above));
    }

    #[test]
    fn test_sliver_overlap_hits() {
        let obstacle = Aabb::new(Vec2::new(99.9, 269.9), Vec2::new(50.0, 30.0));
        assert!(actor_box().overlaps(&obstacle));
    }

    #[test]
    fn test_containment_hits() {
        let inner = Aabb::new(Vec2::new(60.0, 210.0), Vec2::new(5.0, 5.0));
        assert!(actor_box().overlaps(&inner));
        assert!(inner.overlaps(&actor_box()));
    }

    #[test]
    fn test_max_corner() {
        assert_eq!(actor_box().max(), Vec2::new(100.0, 270.0));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Aabb::new(Vec2::new(ax, ay), Vec2::new(aw, ah));
            let b = Aabb::new(Vec2::new(bx, by), Vec2::new(bw, bh));
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_box_overlaps_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..200.0, h in 1.0f32..200.0,
        ) {
            let a = Aabb::new(Vec2::new(x, y), Vec2::new(w, h));
            prop_assert!(a.overlaps(&a));
        }

        #[test]
        fn prop_far_boxes_never_overlap(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..200.0, h in 1.0f32..200.0,
            gap in 0.0f32..100.0,
        ) {
            let a = Aabb::new(Vec2::new(x, y), Vec2::new(w, h));
            let b = Aabb::new(Vec2::new(x + w + gap, y), Vec2::new(w, h));
            prop_assert!(!a.overlaps(&b));
        }
    }
}
