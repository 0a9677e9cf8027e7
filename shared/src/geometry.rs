//! Screen-space primitives shared by the gesture detector and the radial selector
//!
//! Coordinates follow the hosting viewport: x grows to the right and y grows
//! downward, so geometry stays valid regardless of how the host scrolls.

use serde::{Deserialize, Serialize};

/// A position in viewport (client) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Offset of this point relative to `origin` as (dx, dy)
    pub fn offset_from(self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Axis-aligned bounding box of an element in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Geometric midpoint of the box
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }
}

/// Where the picker should be anchored for a session
///
/// An explicit press position always wins over the trigger's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchor {
    /// Press coordinates supplied by the caller
    pub explicit: Option<Point>,
    /// Bounding box of the trigger element
    pub trigger: Option<Rect>,
}

impl Anchor {
    pub fn at(point: Point) -> Self {
        Self {
            explicit: Some(point),
            trigger: None,
        }
    }

    pub fn from_trigger(bounds: Rect) -> Self {
        Self {
            explicit: None,
            trigger: Some(bounds),
        }
    }

    /// Resolve the session center, explicit coordinates first
    pub fn resolve(&self) -> Option<Point> {
        self.explicit.or_else(|| self.trigger.map(|r| r.center()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(100.0, 100.0);
        let b = Point::new(100.0, 40.0);
        assert!((a.distance_to(b) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_rect_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(r.center(), Point::new(60.0, 40.0));
        assert!(r.contains(Point::new(10.0, 60.0)));
        assert!(!r.contains(Point::new(9.9, 30.0)));
    }

    #[test]
    fn test_anchor_explicit_wins() {
        let anchor = Anchor {
            explicit: Some(Point::new(5.0, 5.0)),
            trigger: Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
        };
        assert_eq!(anchor.resolve(), Some(Point::new(5.0, 5.0)));

        let anchor = Anchor::from_trigger(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(anchor.resolve(), Some(Point::new(50.0, 50.0)));

        assert_eq!(Anchor::default().resolve(), None);
    }
}
