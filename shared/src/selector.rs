//! Radial selector - pure sector hit-testing for the reaction wheel
//!
//! Angles are measured in degrees clockwise from 12 o'clock. With viewport
//! coordinates (y down) the raw `atan2` angle points at 3 o'clock and already
//! sweeps clockwise, so rotating by +90° puts 0° at the top.

use crate::geometry::Point;

/// Reference dead-zone radius in pixels
pub const DEFAULT_ACTIVATION_RADIUS: f64 = 30.0;

/// Result of evaluating one pointer position against the wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorHit {
    /// Distance from the wheel center
    pub distance: f64,
    /// Normalized angle in `[0, 360)`, clockwise from the top
    pub angle: f64,
    /// Sector under the pointer, `None` inside the dead zone
    pub sector: Option<usize>,
}

/// Sector geometry for a wheel of `sector_count` equal slices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialSelector {
    sector_count: usize,
    activation_radius: f64,
}

impl RadialSelector {
    /// Create a selector; `sector_count` is clamped to at least one slice
    pub fn new(sector_count: usize, activation_radius: f64) -> Self {
        Self {
            sector_count: sector_count.max(1),
            activation_radius: activation_radius.max(0.0),
        }
    }

    pub fn sector_count(&self) -> usize {
        self.sector_count
    }

    pub fn activation_radius(&self) -> f64 {
        self.activation_radius
    }

    /// Angular width of one sector in degrees
    pub fn sector_width(&self) -> f64 {
        360.0 / self.sector_count as f64
    }

    /// Evaluate `current` against a wheel centered at `center`
    pub fn evaluate(&self, center: Point, current: Point) -> SectorHit {
        let (dx, dy) = current.offset_from(center);
        let distance = dx.hypot(dy);
        let angle = normalized_angle(dx, dy);

        // NaN distances fail this comparison too, so they never select
        let sector = if distance.is_finite() && distance >= self.activation_radius {
            Some(sector_for_angle(angle, self.sector_count))
        } else {
            None
        };

        SectorHit {
            distance,
            angle,
            sector,
        }
    }

    /// Sector under `current`, or `None` inside the dead zone
    pub fn hit_test(&self, center: Point, current: Point) -> Option<usize> {
        self.evaluate(center, current).sector
    }

    /// Start and end angles of a sector in degrees
    pub fn sector_span(&self, index: usize) -> (f64, f64) {
        let width = self.sector_width();
        let start = (index % self.sector_count) as f64 * width;
        (start, start + width)
    }

    /// Center angle of a sector, used to place its glyph on the ring
    pub fn sector_midpoint(&self, index: usize) -> f64 {
        let (start, end) = self.sector_span(index);
        (start + end) / 2.0
    }
}

/// Convert a (dx, dy) offset to degrees in `[0, 360)`, 0° at the top, clockwise
pub fn normalized_angle(dx: f64, dy: f64) -> f64 {
    let raw = dy.atan2(dx).to_degrees();
    (raw + 90.0 + 360.0) % 360.0
}

/// Floor-bucket a normalized angle into one of `count` sectors
///
/// An angle exactly on a boundary belongs to the sector that starts there.
/// Rounding that lands on 360° wraps back to sector 0.
pub fn sector_for_angle(angle: f64, count: usize) -> usize {
    let count = count.max(1);
    let width = 360.0 / count as f64;
    let index = (angle.rem_euclid(360.0) / width).floor();
    if !index.is_finite() || index < 0.0 {
        return 0;
    }
    let index = index as usize;
    if index >= count {
        0
    } else {
        index
    }
}

/// Tracks the hovered sector and reports only transitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: Option<usize>,
}

/// A change of hovered sector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverChange {
    pub previous: Option<usize>,
    pub current: Option<usize>,
}

impl HoverTracker {
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Record the latest hit; returns a change only when the sector differs
    pub fn update(&mut self, sector: Option<usize>) -> Option<HoverChange> {
        if sector == self.hovered {
            return None;
        }
        let change = HoverChange {
            previous: self.hovered,
            current: sector,
        };
        self.hovered = sector;
        Some(change)
    }

    pub fn reset(&mut self) {
        self.hovered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel() -> RadialSelector {
        RadialSelector::new(9, DEFAULT_ACTIVATION_RADIUS)
    }

    /// Point at `radius` from `center` along a clockwise-from-top angle
    fn polar(center: Point, radius: f64, angle_deg: f64) -> Point {
        let theta = (angle_deg - 90.0).to_radians();
        Point::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
    }

    #[test]
    fn test_cardinal_angles() {
        assert!((normalized_angle(0.0, -1.0) - 0.0).abs() < 1e-9);
        assert!((normalized_angle(1.0, 0.0) - 90.0).abs() < 1e-9);
        assert!((normalized_angle(0.0, 1.0) - 180.0).abs() < 1e-9);
        assert!((normalized_angle(-1.0, 0.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_coverage() {
        for n in 1..=12 {
            let mut tenth = 0;
            while tenth < 3600 {
                let angle = tenth as f64 / 10.0;
                let index = sector_for_angle(angle, n);
                assert!(index < n, "angle {} gave {} of {}", angle, index, n);
                let width = 360.0 / n as f64;
                let start = index as f64 * width;
                assert!(angle >= start - 1e-9 && angle < start + width + 1e-9);
                tenth += 1;
            }
        }
    }

    #[test]
    fn test_boundary_floor() {
        assert_eq!(sector_for_angle(40.0, 9), 1);
        assert_eq!(sector_for_angle(39.999, 9), 0);
        assert_eq!(sector_for_angle(0.0, 9), 0);
        assert_eq!(sector_for_angle(360.0, 9), 0);
        assert_eq!(sector_for_angle(359.9999, 9), 8);
        for _ in 0..10 {
            assert_eq!(sector_for_angle(40.0, 9), 1);
        }
    }

    #[test]
    fn test_dead_zone() {
        let center = Point::new(100.0, 100.0);
        for step in 0..72 {
            let angle = step as f64 * 5.0;
            for radius in [0.0, 1.0, 15.0, 29.99] {
                assert_eq!(wheel().hit_test(center, polar(center, radius, angle)), None);
            }
        }
        // Exactly on the radius is outside the dead zone
        assert_eq!(wheel().hit_test(center, Point::new(100.0, 70.0)), Some(0));
    }

    #[test]
    fn test_sector_at_midpoints() {
        let w = wheel();
        let center = Point::new(0.0, 0.0);
        for i in 0..9 {
            let p = polar(center, 60.0, w.sector_midpoint(i));
            assert_eq!(w.hit_test(center, p), Some(i));
        }
    }

    #[test]
    fn test_deterministic() {
        let w = wheel();
        let center = Point::new(12.5, -3.0);
        let p = Point::new(80.25, 44.0);
        let first = w.evaluate(center, p);
        for _ in 0..5 {
            assert_eq!(w.evaluate(center, p), first);
        }
    }

    #[test]
    fn test_nan_never_selects() {
        let hit = wheel().evaluate(Point::new(0.0, 0.0), Point::new(f64::NAN, 50.0));
        assert_eq!(hit.sector, None);
    }

    #[test]
    fn test_hover_tracker_transitions() {
        let mut tracker = HoverTracker::default();
        assert_eq!(tracker.update(None), None);
        assert_eq!(
            tracker.update(Some(2)),
            Some(HoverChange {
                previous: None,
                current: Some(2)
            })
        );
        assert_eq!(tracker.update(Some(2)), None);
        assert_eq!(
            tracker.update(Some(3)),
            Some(HoverChange {
                previous: Some(2),
                current: Some(3)
            })
        );
        tracker.reset();
        assert_eq!(tracker.hovered(), None);
    }
}
