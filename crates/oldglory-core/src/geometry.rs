use serde::{Deserialize, Serialize};

/// Page position in points, y-up from the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle given by its lower-left corner and size, the way the drawing
/// surface receives it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A filled polygonal subpath; the last vertex joins back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedPath {
    pub vertices: Vec<Point>,
}

impl ClosedPath {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }
}
