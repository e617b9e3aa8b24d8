//! Axis-aligned collision detection between the craft and hazards
//!
//! Everything in the field is a sprite-sized rectangle, so a plain
//! non-empty-intersection test is all the geometry the game needs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Hazard;

/// Axis-aligned bounding box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// True when the two rectangles share a region of positive area.
    ///
    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Find the first hazard (in collection order) overlapping the craft
///
/// Hazards are kept in spawn order, so the earliest-spawned hazard wins when
/// several overlap in the same tick.
pub fn detect(craft: &Rect, hazards: &[Hazard]) -> Option<u32> {
    hazards
        .iter()
        .find(|hazard| craft.intersects(&hazard.bbox()))
        .map(|hazard| hazard.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hazard(id: u32, x: f32, y: f32) -> Hazard {
        Hazard::new(id, Vec2::new(x, y), Vec2::new(40.0, 40.0))
    }

    #[test]
    fn test_no_hazards_no_collision() {
        let craft = Rect::new(10.0, 150.0, 40.0, 40.0);
        assert_eq!(detect(&craft, &[]), None);
    }

    #[test]
    fn test_identical_boxes_collide() {
        let craft = Rect::new(10.0, 150.0, 40.0, 40.0);
        let hazards = [hazard(7, 10.0, 150.0)];
        assert_eq!(detect(&craft, &hazards), Some(7));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let craft = Rect::new(10.0, 150.0, 40.0, 40.0);
        // Right edge of craft at 50, hazard starts at 50
        let hazards = [hazard(1, 50.0, 150.0), hazard(2, 10.0, 190.0)];
        assert_eq!(detect(&craft, &hazards), None);
    }

    #[test]
    fn test_partial_overlap_collides() {
        let craft = Rect::new(10.0, 150.0, 40.0, 40.0);
        let hazards = [hazard(3, 49.5, 189.5)];
        assert_eq!(detect(&craft, &hazards), Some(3));
    }

    #[test]
    fn test_first_in_collection_order_wins() {
        let craft = Rect::new(10.0, 150.0, 40.0, 40.0);
        let hazards = [
            hazard(1, 300.0, 0.0),
            hazard(2, 20.0, 160.0),
            hazard(3, 15.0, 155.0),
        ];
        assert_eq!(detect(&craft, &hazards), Some(2));
    }

    #[test]
    fn test_center() {
        let r = Rect::new(10.0, 20.0, 40.0, 60.0);
        assert_eq!(r.center(), Vec2::new(30.0, 50.0));
    }
}
