//! Stage geometry for the Dream Reactions screen
//!
//! Places the dream card and its "drag to react" trigger, and converts
//! between nannou's centered y-up coordinates and the viewport coordinates
//! (top-left origin, y down) the picker works in.

use nannou::prelude::*;
use nannou::winit::dpi::PhysicalPosition;
use shared::Point as ViewPoint;
use shared::Rect as ViewRect;

/// Stage geometry with all calculated positions
#[derive(Debug, Clone)]
pub struct StageGeometry {
    /// Window bounds in nannou coordinates
    pub window: Rect,
    /// Dream card bounds
    pub card: Rect,
    /// Trigger region at the bottom of the card
    pub trigger: Rect,
    /// Trigger region in viewport coordinates
    pub trigger_viewport: ViewRect,
}

impl StageGeometry {
    /// Calculate geometry from window dimensions, leaving room for the side panel
    pub fn calculate(window_rect: Rect, panel_width: f32) -> Self {
        let available_w = (window_rect.w() - panel_width).max(200.0);
        let card_w = (available_w * 0.8).min(460.0);
        let card_h = (window_rect.h() * 0.45).clamp(180.0, 320.0);

        let card_x = window_rect.left() + available_w / 2.0;
        let card_y = window_rect.y() - 40.0;
        let card = Rect::from_x_y_w_h(card_x, card_y, card_w, card_h);

        let trigger_w = 150.0;
        let trigger_h = 36.0;
        let trigger = Rect::from_x_y_w_h(
            card.left() + 20.0 + trigger_w / 2.0,
            card.bottom() + 16.0 + trigger_h / 2.0,
            trigger_w,
            trigger_h,
        );

        let top_left = to_viewport(window_rect, pt2(trigger.left(), trigger.top()));
        let trigger_viewport = ViewRect::new(
            top_left.x,
            top_left.y,
            trigger.w() as f64,
            trigger.h() as f64,
        );

        Self {
            window: window_rect,
            card,
            trigger,
            trigger_viewport,
        }
    }

    pub fn to_viewport(&self, p: Point2) -> ViewPoint {
        to_viewport(self.window, p)
    }

    pub fn to_stage(&self, p: ViewPoint) -> Point2 {
        to_stage(self.window, p)
    }
}

/// nannou (centered, y up) to viewport (top-left, y down)
pub fn to_viewport(window_rect: Rect, p: Point2) -> ViewPoint {
    ViewPoint::new(
        (p.x - window_rect.left()) as f64,
        (window_rect.top() - p.y) as f64,
    )
}

/// Viewport (top-left, y down) to nannou (centered, y up)
pub fn to_stage(window_rect: Rect, p: ViewPoint) -> Point2 {
    pt2(
        p.x as f32 + window_rect.left(),
        window_rect.top() - p.y as f32,
    )
}

/// Raw touch location (physical pixels, top-left, y down) to viewport points
///
/// Mouse samples and the trigger bounds are in logical points, so touches
/// must be scaled down before hit-testing.
pub fn touch_to_viewport(location: PhysicalPosition<f64>, scale_factor: f64) -> ViewPoint {
    let logical = location.to_logical::<f64>(scale_factor);
    ViewPoint::new(logical.x, logical.y)
}
