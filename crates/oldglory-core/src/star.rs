//! Star glyph built from two overlapping filled polygons.
//!
//! An inverted triangle supplies the two upper arms and a notched upright
//! triangle supplies the top point and the two feet. Filled in the same color
//! they read as one five-pointed star. The divisors are empirical.

use crate::geometry::{ClosedPath, Point};

const ARM_SPAN: f64 = 1.1;
const ARM_HEIGHT: f64 = 3.5;
const NOTCH_DEPTH: f64 = 2.6;
const FOOT_SPAN: f64 = 1.6;
const FOOT_DROP: f64 = 1.3;

/// Subpaths for a star of `diameter` centred on `center`.
///
/// A zero diameter collapses both subpaths onto the centre point.
pub fn star_path(center: Point, diameter: f64) -> [ClosedPath; 2] {
    let Point { x, y } = center;
    let r = diameter / 2.0;

    let arms = ClosedPath::new(vec![
        Point::new(x - r / ARM_SPAN, y + r / ARM_HEIGHT),
        Point::new(x + r / ARM_SPAN, y + r / ARM_HEIGHT),
        Point::new(x, y - r / NOTCH_DEPTH),
    ]);

    let body = ClosedPath::new(vec![
        Point::new(x, y + r),
        Point::new(x - r / FOOT_SPAN, y - r / FOOT_DROP),
        Point::new(x, y - r / NOTCH_DEPTH),
        Point::new(x + r / FOOT_SPAN, y - r / FOOT_DROP),
    ]);

    [arms, body]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_vertices() {
        let [arms, body] = star_path(Point::new(10.0, 20.0), 4.0);
        assert_eq!(arms.vertices.len(), 3);
        assert_eq!(body.vertices.len(), 4);

        let r = 2.0;
        assert!((arms.vertices[0].x - (10.0 - r / 1.1)).abs() < 1e-12);
        assert!((arms.vertices[1].y - (20.0 + r / 3.5)).abs() < 1e-12);
        assert!((arms.vertices[2].y - (20.0 - r / 2.6)).abs() < 1e-12);

        assert_eq!(body.vertices[0], Point::new(10.0, 22.0));
        assert!((body.vertices[1].x - (10.0 - r / 1.6)).abs() < 1e-12);
        assert!((body.vertices[3].y - (20.0 - r / 1.3)).abs() < 1e-12);
        // Both shapes share the notch vertex.
        assert_eq!(arms.vertices[2], body.vertices[2]);
    }

    #[test]
    fn test_star_is_symmetric() {
        let center = Point::new(3.0, -7.0);
        let [arms, body] = star_path(center, 10.0);
        assert!(((arms.vertices[0].x + arms.vertices[1].x) / 2.0 - center.x).abs() < 1e-12);
        assert!(((body.vertices[1].x + body.vertices[3].x) / 2.0 - center.x).abs() < 1e-12);
        let top = body.vertices.iter().map(|p| p.y).fold(f64::MIN, f64::max);
        assert!((top - (center.y + 5.0)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_diameter_is_degenerate() {
        let center = Point::new(1.0, 1.0);
        for path in star_path(center, 0.0) {
            assert!(path.vertices.iter().all(|p| *p == center));
        }
    }
}
