//! Wheel layout - where each option control sits around the center
//!
//! Controls are placed on a ring at the middle of their sector, so what the
//! user sees lines up with what the selector hit-tests.

use crate::config::PickerConfig;
use crate::geometry::Point;
use crate::selector::RadialSelector;

/// Placement of one option control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionSlot {
    pub index: usize,
    /// Control center in viewport coordinates
    pub position: Point,
    /// Sector start angle, degrees clockwise from the top
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Computed wheel geometry for one session
#[derive(Debug, Clone)]
pub struct WheelLayout {
    pub center: Point,
    /// Radius of the wheel background
    pub radius: f64,
    pub ring_radius: f64,
    pub option_radius: f64,
    /// Dead-zone radius
    pub activation_radius: f64,
    pub slots: Vec<OptionSlot>,
}

impl WheelLayout {
    pub fn compute(center: Point, selector: &RadialSelector, config: &PickerConfig) -> Self {
        let slots = (0..selector.sector_count())
            .map(|index| {
                let (start_angle, end_angle) = selector.sector_span(index);
                let mid = selector.sector_midpoint(index);
                OptionSlot {
                    index,
                    position: point_on_circle(center, config.option_ring_radius, mid),
                    start_angle,
                    end_angle,
                }
            })
            .collect();

        Self {
            center,
            radius: config.menu_diameter / 2.0,
            ring_radius: config.option_ring_radius,
            option_radius: config.option_size / 2.0,
            activation_radius: selector.activation_radius(),
            slots,
        }
    }
}

/// Point at `radius` from `center`, `angle` degrees clockwise from the top
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    let theta = angle.to_radians();
    Point::new(center.x + radius * theta.sin(), center.y - radius * theta.cos())
}
