//! Drawing module for the Dream Reactions screen
//!
//! Renders the dream card, the trigger, the reaction wheel with its hovered
//! sector, and toasts.

use std::time::Instant;

use nannou::prelude::*;
use shared::layout::point_on_circle;
use shared::WheelLayout;

use crate::stage::StageGeometry;
use crate::Model;

const SAMPLE_DREAM: &str = "I dreamt I was flying over a magical forest filled with glowing \
butterflies. Every time I looked down the trees rearranged themselves into words I almost \
understood.";

/// Color palette
pub mod colors {
    use nannou::prelude::*;

    /// Deep background
    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 14,
        green: 12,
        blue: 24,
        standard: std::marker::PhantomData,
    };

    pub const CARD: Srgb<u8> = Srgb {
        red: 32,
        green: 28,
        blue: 50,
        standard: std::marker::PhantomData,
    };

    /// Trigger button, idle
    pub const TRIGGER: Srgb<u8> = Srgb {
        red: 52,
        green: 46,
        blue: 78,
        standard: std::marker::PhantomData,
    };

    /// Trigger button while pressed
    pub const TRIGGER_ACTIVE: Srgb<u8> = Srgb {
        red: 96,
        green: 80,
        blue: 150,
        standard: std::marker::PhantomData,
    };

    pub fn wheel_bg() -> Srgba<u8> {
        srgba(24, 22, 38, 240)
    }

    pub fn option_bg() -> Srgba<u8> {
        srgba(255, 255, 255, 26)
    }

    pub fn option_border() -> Srgba<u8> {
        srgba(255, 255, 255, 51)
    }

    pub fn sector_highlight() -> Srgba<u8> {
        srgba(170, 140, 255, 60)
    }

    /// Hovered option control
    pub const OPTION_HOVER: Srgb<u8> = Srgb {
        red: 170,
        green: 140,
        blue: 255,
        standard: std::marker::PhantomData,
    };

    pub fn dead_zone() -> Srgba<u8> {
        srgba(255, 255, 255, 60)
    }

    /// Primary text
    pub const TEXT_PRIMARY: Srgb<u8> = Srgb {
        red: 228,
        green: 224,
        blue: 240,
        standard: std::marker::PhantomData,
    };

    /// Secondary text
    pub const TEXT_SECONDARY: Srgb<u8> = Srgb {
        red: 150,
        green: 144,
        blue: 172,
        standard: std::marker::PhantomData,
    };
}

/// Draw the dream card with its trigger and reaction tally
pub fn draw_card(draw: &Draw, geometry: &StageGeometry, model: &Model) {
    let card = geometry.card;

    draw.rect().xy(card.xy()).wh(card.wh()).color(colors::CARD);

    draw.text("Sample Dream Post")
        .x_y(card.x(), card.top() - 24.0)
        .color(colors::TEXT_PRIMARY)
        .font_size(16)
        .w(card.w() - 40.0);

    // Body text scrolls with the page unless the wheel holds the scroll lock
    draw.text(SAMPLE_DREAM)
        .x_y(card.x(), card.y() + 20.0 + model.card_scroll * 0.25)
        .color(colors::TEXT_SECONDARY)
        .font_size(13)
        .w(card.w() - 40.0)
        .left_justify();

    let trigger = geometry.trigger;
    let trigger_color = if model.surface.detector().is_active() {
        colors::TRIGGER_ACTIVE
    } else {
        colors::TRIGGER
    };
    draw.rect()
        .xy(trigger.xy())
        .wh(trigger.wh())
        .color(trigger_color);
    draw.text("Drag to react")
        .xy(trigger.xy())
        .color(colors::TEXT_PRIMARY)
        .font_size(13)
        .w(trigger.w());

    // Tally, right of the trigger
    let tally: Vec<String> = model
        .options
        .iter()
        .zip(&model.tally)
        .filter(|(_, &count)| count > 0)
        .map(|(option, count)| format!("{} {}", option.glyph, count))
        .collect();
    if !tally.is_empty() {
        let width = card.right() - trigger.right() - 30.0;
        draw.text(&tally.join("  "))
            .x_y(trigger.right() + 15.0 + width / 2.0, trigger.y())
            .color(colors::TEXT_SECONDARY)
            .font_size(13)
            .w(width.max(40.0))
            .right_justify();
    }
}

/// Draw the open reaction wheel around the session center
pub fn draw_wheel(draw: &Draw, geometry: &StageGeometry, model: &Model) {
    let picker = model.surface.picker();
    let Some(center) = picker.center() else {
        return;
    };
    let layout = WheelLayout::compute(center, picker.selector(), &model.config);
    let hovered = picker.hovered_index();
    let now = Instant::now();
    let center_xy = geometry.to_stage(center);

    draw.ellipse()
        .xy(center_xy)
        .radius(layout.radius as f32)
        .color(colors::wheel_bg());

    if let Some(index) = hovered {
        if let Some(slot) = layout.slots.get(index) {
            draw_sector(draw, geometry, &layout, slot.start_angle, slot.end_angle);
        }
    }

    if model.show_dead_zone {
        draw.ellipse()
            .xy(center_xy)
            .radius(layout.activation_radius as f32)
            .no_fill()
            .stroke(colors::dead_zone())
            .stroke_weight(1.0);
    }

    for slot in &layout.slots {
        let xy = geometry.to_stage(slot.position);
        let is_hovered = hovered == Some(slot.index);
        let scale = if is_hovered {
            1.1 * pulse_scale(model, slot.index, now)
        } else {
            1.0
        };
        let radius = layout.option_radius as f32 * scale;

        if is_hovered {
            draw.ellipse()
                .xy(xy)
                .radius(radius)
                .color(colors::OPTION_HOVER);
        } else {
            draw.ellipse()
                .xy(xy)
                .radius(radius)
                .color(colors::option_bg())
                .stroke(colors::option_border())
                .stroke_weight(1.0);
        }

        if let Some(option) = picker.options().get(slot.index) {
            draw.text(&option.glyph)
                .xy(xy)
                .color(colors::TEXT_PRIMARY)
                .font_size((22.0 * scale) as u32)
                .w(radius * 2.0);
        }
    }

    // Center label: hovered option, or a hint in the dead zone
    let label = picker
        .hovered_option()
        .map(|o| o.label.as_str())
        .unwrap_or("Release to cancel");
    draw.text(label)
        .xy(center_xy)
        .color(colors::TEXT_PRIMARY)
        .font_size(12)
        .w(layout.ring_radius as f32);

    if let Some(current) = picker.current() {
        draw.line()
            .start(center_xy)
            .end(geometry.to_stage(current))
            .stroke_weight(1.5)
            .color(colors::dead_zone());
        draw.ellipse()
            .xy(center_xy)
            .radius(3.0)
            .color(colors::dead_zone());
    }
}

/// Fill the wedge between two clockwise-from-top angles
fn draw_sector(draw: &Draw, geometry: &StageGeometry, layout: &WheelLayout, start: f64, end: f64) {
    let steps = 16;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(geometry.to_stage(layout.center));
    for i in 0..=steps {
        let angle = start + (end - start) * i as f64 / steps as f64;
        let p = point_on_circle(layout.center, layout.radius, angle);
        points.push(geometry.to_stage(p));
    }
    draw.polygon()
        .color(colors::sector_highlight())
        .points(points);
}

/// Scale of the hover pulse for an option
fn pulse_scale(model: &Model, index: usize, now: Instant) -> f32 {
    let Some(start) = model.pulse_start else {
        return 1.0;
    };
    if index != model.pulse_index {
        return 1.0;
    }
    let elapsed_ms = now.duration_since(start).as_secs_f32() * 1000.0;
    if elapsed_ms < 80.0 {
        1.0 + 0.25 * (elapsed_ms / 80.0)
    } else if elapsed_ms < 240.0 {
        // Ease back to rest
        let t = (elapsed_ms - 80.0) / 160.0;
        let eased = 1.0 - (1.0 - t).powi(2);
        1.25 - 0.25 * eased
    } else {
        1.0
    }
}

/// Draw toast notifications
pub fn draw_toasts(draw: &Draw, geometry: &StageGeometry, toasts: &[crate::Toast]) {
    let toast_width = 300.0;
    let toast_height = 40.0;
    let padding = 10.0;
    let start_y = geometry.window.bottom() + 40.0;
    let x = geometry.card.x();

    for (i, toast) in toasts.iter().enumerate() {
        let y = start_y + (i as f32) * (toast_height + padding);
        let alpha = (toast.alpha() * 220.0) as u8;

        draw.rect()
            .x_y(x, y)
            .w_h(toast_width, toast_height)
            .color(srgba(40u8, 36u8, 60u8, alpha));

        draw.rect()
            .x_y(x, y)
            .w_h(toast_width, toast_height)
            .no_fill()
            .stroke(srgba(90u8, 80u8, 120u8, alpha))
            .stroke_weight(1.0);

        let text_alpha = (toast.alpha() * 255.0) as u8;
        draw.text(&toast.message)
            .x_y(x, y)
            .color(srgba(228u8, 224u8, 240u8, text_alpha))
            .font_size(12)
            .w(toast_width - 20.0);
    }
}
