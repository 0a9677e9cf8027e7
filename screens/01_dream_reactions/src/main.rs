//! Dream Reactions
//!
//! A dream card with a press-and-drag reaction wheel: hold the trigger, drag
//! toward a reaction and release to react. Releasing near the center, tapping
//! or pressing Escape closes the wheel without reacting.

mod drawing;
mod stage;
mod ui;

use std::time::Instant;

use chrono::{DateTime, Local};
use nannou::prelude::*;
use nannou_egui::{self, Egui};
use serde::{Deserialize, Serialize};
use shared::{
    default_reactions, find_reaction, PickerCall, PickerConfig, PointerSample, PointerSource,
    ReactionOption, ReactionSurface, SharedChrome, SurfaceEvent,
};

use crate::stage::StageGeometry;

const SCREEN_NAME: &str = "dream_reactions";
const SIDE_PANEL_WIDTH: f32 = 280.0;
const ACTIVITY_LIMIT: usize = 50;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

/// Toast notification for short status messages
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub created: Instant,
    pub duration_secs: f32,
}

impl Toast {
    pub fn new(message: String, duration_secs: f32) -> Self {
        Self {
            message,
            created: Instant::now(),
            duration_secs,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed().as_secs_f32() > self.duration_secs
    }

    pub fn alpha(&self) -> f32 {
        let elapsed = self.created.elapsed().as_secs_f32();
        if elapsed > self.duration_secs - 0.5 {
            // Fade out in last 0.5s
            ((self.duration_secs - elapsed) / 0.5).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// One committed reaction, kept in memory only
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub reaction_id: String,
    pub at: DateTime<Local>,
}

/// Persisted configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct Config {
    picker: PickerConfig,
    show_dead_zone: bool,
}

/// Application state
pub struct Model {
    /// Picker tuning currently shown in the panel
    pub config: PickerConfig,
    /// Tuning edited but not yet applied (a gesture was in progress)
    pub config_pending: bool,
    pub show_dead_zone: bool,

    /// Press-and-drag surface around the trigger
    pub surface: ReactionSurface<SharedChrome>,
    /// Page chrome the surface locks while the wheel is open
    pub chrome: SharedChrome,
    pub options: Vec<ReactionOption>,
    /// Touch id currently driving the surface, if any
    pub active_touch: Option<u64>,

    /// Reaction counts in option order
    pub tally: Vec<u32>,
    /// Most recent reactions first
    pub activity: Vec<ActivityEntry>,
    /// Scroll offset of the card text, frozen while the wheel is open
    pub card_scroll: f32,

    /// Hover pulse animation
    pub pulse_start: Option<Instant>,
    pub pulse_index: usize,

    pub toasts: Vec<Toast>,

    /// egui integration
    egui: Egui,
}

impl Model {
    /// Show a toast notification
    pub fn show_toast(&mut self, message: String) {
        self.toasts.push(Toast::new(message, 3.0));
    }

    /// Prune expired toasts
    pub fn prune_toasts(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// Apply outbound picker calls collected during one event
    fn apply_calls(&mut self, calls: Vec<PickerCall>) {
        for call in calls {
            match call {
                PickerCall::React(id) => self.record_reaction(&id),
                PickerCall::Close => log::debug!("reaction wheel closed"),
            }
        }
    }

    fn record_reaction(&mut self, id: &str) {
        let Some(index) = self.options.iter().position(|o| o.id == id) else {
            log::warn!("unknown reaction id: {}", id);
            return;
        };
        self.tally[index] += 1;
        self.activity.insert(
            0,
            ActivityEntry {
                reaction_id: id.to_string(),
                at: Local::now(),
            },
        );
        self.activity.truncate(ACTIVITY_LIMIT);

        if let Some(option) = find_reaction(&self.options, id) {
            log::info!("reacted with {}", option.id);
            let message = format!("Reacted with {} {}", option.glyph, option.label);
            self.show_toast(message);
        }
    }

    /// React to surface events (feedback, hints)
    fn apply_events(&mut self, events: Vec<SurfaceEvent>) {
        for event in events {
            match event {
                SurfaceEvent::Opened { center } => {
                    log::info!("wheel opened at ({:.0}, {:.0})", center.x, center.y);
                }
                SurfaceEvent::HoverChanged { change, pulse } => {
                    if let (true, Some(index)) = (pulse, change.current) {
                        self.pulse_start = Some(Instant::now());
                        self.pulse_index = index;
                    }
                }
                SurfaceEvent::Closed { reaction: None } => {
                    self.pulse_start = None;
                }
                SurfaceEvent::Closed { reaction: Some(_) } => {}
                SurfaceEvent::Tapped => {
                    self.show_toast("Hold and drag to react".to_string());
                }
                SurfaceEvent::Abandoned => log::debug!("press interrupted before the wheel opened"),
            }
        }
    }

    fn pointer_down(&mut self, sample: PointerSample) {
        if self.surface.press(sample, Instant::now()) {
            if let PointerSource::Touch { id } = sample.source {
                self.active_touch = Some(id);
            }
        }
    }

    fn pointer_moved(&mut self, sample: PointerSample) {
        let mut calls: Vec<PickerCall> = Vec::new();
        let events = self.surface.pointer_moved(sample, Instant::now(), &mut calls);
        self.apply_calls(calls);
        self.apply_events(events);
    }

    fn pointer_up(&mut self, sample: PointerSample) {
        let mut calls: Vec<PickerCall> = Vec::new();
        let events = self.surface.release(sample, Instant::now(), &mut calls);
        if !self.surface.detector().is_active() {
            self.active_touch = None;
        }
        self.apply_calls(calls);
        self.apply_events(events);
    }

    /// Touch cancel, focus loss or Escape
    fn interrupt(&mut self) {
        let mut calls: Vec<PickerCall> = Vec::new();
        let events = self.surface.interrupt(&mut calls);
        self.active_touch = None;
        self.apply_calls(calls);
        self.apply_events(events);
    }

    /// Push panel edits into the surface once no gesture is running
    fn apply_config(&mut self) {
        if let Err(e) = self.config.validate() {
            self.show_toast(format!("{}", e));
            self.config_pending = false;
            return;
        }
        if self.surface.apply_config(&self.config) {
            self.config_pending = false;
            save_config(self);
        } else {
            self.config_pending = true;
        }
    }

    /// Reset tuning to defaults and drop the saved file
    ///
    /// Nothing is written back unless a running gesture delays the reset.
    fn reset_config(&mut self) {
        self.config = PickerConfig::default();
        self.show_dead_zone = false;
        if let Err(e) = shared::delete_config(SCREEN_NAME) {
            log::warn!("failed to delete config: {}", e);
        }
        self.config_pending = !self.surface.apply_config(&self.config);
    }
}

fn save_config(model: &Model) {
    let config = Config {
        picker: model.config.clone(),
        show_dead_zone: model.show_dead_zone,
    };
    if let Err(e) = shared::save_config(SCREEN_NAME, &config) {
        log::error!("failed to save config: {}", e);
    }
}

/// Load saved tuning, falling back to defaults on any problem
fn load_config() -> (Config, Option<String>) {
    match shared::load_config::<Config>(SCREEN_NAME) {
        Ok(Some(config)) => match config.picker.validate() {
            Ok(()) => (config, None),
            Err(e) => {
                log::warn!("ignoring saved config: {}", e);
                (Config::default(), Some(format!("{}. Using defaults.", e)))
            }
        },
        Ok(None) => (Config::default(), None),
        Err(e) => {
            log::warn!("failed to load config: {}", e);
            (Config::default(), Some(format!("{}. Using defaults.", e)))
        }
    }
}

fn model(app: &App) -> Model {
    // Disable default escape-to-exit behavior
    app.set_exit_on_escape(false);

    let window_id = app
        .new_window()
        .title("Dream Reactions")
        .size(1000, 720)
        .min_size(640, 480)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_moved(mouse_moved)
        .mouse_wheel(mouse_wheel)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let (config, load_error) = load_config();
    let options = default_reactions();
    let chrome = SharedChrome::default();
    let surface = ReactionSurface::new(options.clone(), &config.picker, chrome.clone())
        .expect("default reactions are not empty");

    let mut model = Model {
        config: config.picker,
        config_pending: false,
        show_dead_zone: config.show_dead_zone,
        surface,
        chrome,
        tally: vec![0; options.len()],
        options,
        active_touch: None,
        activity: Vec::new(),
        card_scroll: 0.0,
        pulse_start: None,
        pulse_index: 0,
        toasts: Vec::new(),
        egui,
    };

    if let Some(message) = load_error {
        model.show_toast(message);
    }
    model
}

fn update(app: &App, model: &mut Model, update: Update) {
    let geometry = StageGeometry::calculate(app.window_rect(), SIDE_PANEL_WIDTH);
    model.surface.set_trigger(Some(geometry.trigger_viewport));

    // Hold timer
    let mut calls: Vec<PickerCall> = Vec::new();
    let events = model.surface.tick(Instant::now(), &mut calls);
    model.apply_calls(calls);
    model.apply_events(events);

    if model.config_pending {
        model.apply_config();
    }

    model.prune_toasts();

    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let panel_result = ui::draw_side_panel(
        &ctx,
        &mut model.config,
        &mut model.show_dead_zone,
        &model.options,
        &model.tally,
        &model.activity,
        model.chrome.is_locked(),
        SIDE_PANEL_WIDTH,
    );

    drop(ctx);

    if panel_result.config_changed {
        model.apply_config();
    }
    if panel_result.dead_zone_changed {
        save_config(model);
    }
    if panel_result.reset {
        model.reset_config();
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();
    let geometry = StageGeometry::calculate(window_rect, SIDE_PANEL_WIDTH);

    draw.background().color(drawing::colors::BACKGROUND);

    drawing::draw_card(&draw, &geometry, model);

    if model.surface.is_open() {
        drawing::draw_wheel(&draw, &geometry, model);
    }

    draw.text("DREAM REACTIONS")
        .x_y(geometry.card.x(), window_rect.top() - 25.0)
        .color(drawing::colors::TEXT_PRIMARY)
        .font_size(18)
        .w(300.0);

    drawing::draw_toasts(&draw, &geometry, &model.toasts);

    draw.to_frame(app, &frame).unwrap();

    model.egui.draw_to_frame(&frame).unwrap();
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // Escape - close the wheel without reacting
        Key::Escape => {
            if model.surface.detector().is_active() {
                model.interrupt();
            }
        }
        // D - toggle dead zone outline
        Key::D => {
            model.show_dead_zone = !model.show_dead_zone;
            save_config(model);
        }
        _ => {}
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        let geometry = StageGeometry::calculate(app.window_rect(), SIDE_PANEL_WIDTH);
        let pos = geometry.to_viewport(app.mouse.position());
        model.pointer_down(PointerSample::mouse(pos));
    }
}

fn mouse_released(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        let geometry = StageGeometry::calculate(app.window_rect(), SIDE_PANEL_WIDTH);
        let pos = geometry.to_viewport(app.mouse.position());
        model.pointer_up(PointerSample::mouse(pos));
    }
}

fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let geometry = StageGeometry::calculate(app.window_rect(), SIDE_PANEL_WIDTH);
    model.pointer_moved(PointerSample::mouse(geometry.to_viewport(pos)));
}

fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    // Scrolling is part of the chrome the wheel locks
    if model.chrome.is_locked() {
        return;
    }
    let scroll_y = match delta {
        MouseScrollDelta::LineDelta(_, y) => y * 20.0,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
    };
    model.card_scroll = (model.card_scroll - scroll_y).clamp(0.0, 200.0);
}

fn raw_window_event(app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);

    match event {
        nannou::winit::event::WindowEvent::Focused(false) => {
            if model.surface.detector().is_active() {
                model.interrupt();
            }
        }
        nannou::winit::event::WindowEvent::Touch(touch) => {
            let scale_factor = app.main_window().scale_factor() as f64;
            let sample = PointerSample::touch(
                touch.id,
                stage::touch_to_viewport(touch.location, scale_factor),
            );

            match touch.phase {
                nannou::winit::event::TouchPhase::Started => {
                    if model.active_touch.is_none() {
                        model.pointer_down(sample);
                    }
                }
                nannou::winit::event::TouchPhase::Moved => {
                    model.pointer_moved(sample);
                }
                nannou::winit::event::TouchPhase::Ended => {
                    model.pointer_up(sample);
                }
                nannou::winit::event::TouchPhase::Cancelled => {
                    if model.active_touch == Some(touch.id) {
                        model.interrupt();
                    }
                }
            }
        }
        _ => {}
    }
}
