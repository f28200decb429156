//! Hitboxes and the small amount of math shared by every entity.

use crate::entities::Lane;

/// Axis-aligned rectangle in world pixels; `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Horizontal centre of `lane`: `centerX + (lane - 1) * laneWidth`.
pub fn lane_x(lane: Lane, world_width: f32, lane_width: f32) -> f32 {
    let offset = lane.index() as f32 - 1.0;
    world_width / 2.0 + offset * lane_width
}
