use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Accumulated canvas transform: an origin offset plus a uniform scale.
///
/// Operations compound the way a drawing context's CTM does. A translation is
/// expressed in the current (already scaled) user space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    /// Device position of the user-space origin.
    pub offset: Point,
    /// Cumulative uniform scale.
    pub scale: f64,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            offset: Point::new(0.0, 0.0),
            scale: 1.0,
        }
    }
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.offset.x += dx * self.scale;
        self.offset.y += dy * self.scale;
    }

    pub fn scale_uniform(&mut self, factor: f64) {
        self.scale *= factor;
    }

    /// Map a user-space point to device space.
    pub fn apply(&self, point: &Point) -> Point {
        Point::new(
            point.x * self.scale + self.offset.x,
            point.y * self.scale + self.offset.y,
        )
    }

    /// Map a user-space length to device space.
    pub fn apply_length(&self, length: f64) -> f64 {
        length * self.scale
    }
}
