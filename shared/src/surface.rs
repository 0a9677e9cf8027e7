//! Reaction surface - the hosting screen's wiring between detector and picker
//!
//! Raw pointer samples go to the gesture detector; its drag events open,
//! steer and close the picker. The viewport chrome stays locked for as long
//! as the picker is open.

use std::time::Instant;

use crate::chrome::{ChromeGuard, ViewportChrome};
use crate::config::PickerConfig;
use crate::geometry::{Anchor, Point, Rect};
use crate::gesture::{GestureDetector, GestureEvent, PointerSample};
use crate::picker::{PickerError, ReactionPicker, ReactionSink};
use crate::reactions::ReactionOption;
use crate::selector::HoverChange;

/// What the host should react to after feeding a sample
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The wheel opened around `center`
    Opened { center: Point },
    /// Hovered sector changed; `pulse` gates feedback to sector entries
    HoverChanged { change: HoverChange, pulse: bool },
    /// The wheel closed, with the committed reaction if any
    Closed { reaction: Option<String> },
    /// Released before the hold delay; the wheel never opened
    Tapped,
    /// Interrupted before the hold delay; the wheel never opened
    Abandoned,
}

/// One press-and-drag reaction surface
pub struct ReactionSurface<C: ViewportChrome + Clone> {
    detector: GestureDetector,
    picker: ReactionPicker,
    chrome: C,
    guard: Option<ChromeGuard<C>>,
    trigger: Option<Rect>,
    anchor_on_press: bool,
    haptics: bool,
}

impl<C: ViewportChrome + Clone> ReactionSurface<C> {
    pub fn new(
        options: Vec<ReactionOption>,
        config: &PickerConfig,
        chrome: C,
    ) -> Result<Self, PickerError> {
        Ok(Self {
            detector: GestureDetector::new(config.hold_delay()),
            picker: ReactionPicker::new(options, config.activation_radius)?,
            chrome,
            guard: None,
            trigger: None,
            anchor_on_press: config.anchor_on_press,
            haptics: config.haptics,
        })
    }

    pub fn picker(&self) -> &ReactionPicker {
        &self.picker
    }

    pub fn detector(&self) -> &GestureDetector {
        &self.detector
    }

    pub fn is_open(&self) -> bool {
        self.picker.is_open()
    }

    /// Bounding box of the trigger element; presses outside it are ignored
    pub fn set_trigger(&mut self, trigger: Option<Rect>) {
        self.trigger = trigger;
    }

    /// Apply new tuning. Refused while a gesture is in progress.
    pub fn apply_config(&mut self, config: &PickerConfig) -> bool {
        if self.detector.is_active() || !self.picker.set_activation_radius(config.activation_radius)
        {
            return false;
        }
        self.detector.set_hold_delay(config.hold_delay());
        self.anchor_on_press = config.anchor_on_press;
        self.haptics = config.haptics;
        true
    }

    /// Pointer/touch down. Returns whether a session was started.
    pub fn press(&mut self, sample: PointerSample, now: Instant) -> bool {
        if self.detector.is_active() {
            return false;
        }
        let Some(pos) = sample.position else {
            return false;
        };
        if let Some(trigger) = self.trigger {
            if !trigger.contains(pos) {
                return false;
            }
        }
        self.detector.start(sample, now);
        true
    }

    /// Per-frame timer check
    pub fn tick(&mut self, now: Instant, sink: &mut dyn ReactionSink) -> Vec<SurfaceEvent> {
        let events = self.detector.poll(now);
        self.handle(events, sink, false)
    }

    pub fn pointer_moved(
        &mut self,
        sample: PointerSample,
        now: Instant,
        sink: &mut dyn ReactionSink,
    ) -> Vec<SurfaceEvent> {
        let events = self.detector.moved(sample, now);
        self.handle(events, sink, false)
    }

    pub fn release(
        &mut self,
        sample: PointerSample,
        now: Instant,
        sink: &mut dyn ReactionSink,
    ) -> Vec<SurfaceEvent> {
        let events = self.detector.end(sample, now);
        self.handle(events, sink, false)
    }

    /// Touch cancel, focus loss or an explicit close request
    pub fn interrupt(&mut self, sink: &mut dyn ReactionSink) -> Vec<SurfaceEvent> {
        let events = self.detector.cancel();
        self.handle(events, sink, true)
    }

    fn handle(
        &mut self,
        events: Vec<GestureEvent>,
        sink: &mut dyn ReactionSink,
        interrupted: bool,
    ) -> Vec<SurfaceEvent> {
        let mut out = Vec::new();
        for event in events {
            match event {
                GestureEvent::DragStart(origin) => {
                    let anchor = Anchor {
                        explicit: self.anchor_on_press.then_some(origin),
                        trigger: self.trigger,
                    };
                    let center = anchor.resolve().unwrap_or(origin);
                    if self.picker.open(center) {
                        self.guard = Some(ChromeGuard::acquire(self.chrome.clone()));
                        out.push(SurfaceEvent::Opened { center });
                        self.track(origin, &mut out);
                    }
                }
                GestureEvent::DragMove(pos) => self.track(pos, &mut out),
                GestureEvent::DragEnd(pos) => {
                    if self.picker.is_open() {
                        let reaction = self.picker.release(pos, sink);
                        self.guard = None;
                        out.push(SurfaceEvent::Closed { reaction });
                    }
                }
                GestureEvent::Cancel => {
                    if self.picker.is_open() {
                        self.picker.dismiss(sink);
                        self.guard = None;
                        out.push(SurfaceEvent::Closed { reaction: None });
                    } else if interrupted {
                        out.push(SurfaceEvent::Abandoned);
                    } else {
                        out.push(SurfaceEvent::Tapped);
                    }
                }
            }
        }
        out
    }

    fn track(&mut self, pos: Point, out: &mut Vec<SurfaceEvent>) {
        if let Some(change) = self.picker.track(pos) {
            let pulse = self.haptics && change.current.is_some();
            out.push(SurfaceEvent::HoverChanged { change, pulse });
        }
    }
}
