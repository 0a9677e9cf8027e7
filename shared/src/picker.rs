//! Reaction picker - hover state and commit rules around the radial selector
//!
//! `Closed -> OpenNeutral -> OpenHovering(i) -> ... -> Closed`. Every open
//! session ends with exactly one `on_close`, preceded by at most one
//! `on_react` when the release lands in a sector.

use crate::geometry::Point;
use crate::reactions::ReactionOption;
use crate::selector::{HoverChange, HoverTracker, RadialSelector};

/// Error type for picker construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The option list was empty
    NoOptions,
}

impl std::fmt::Display for PickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickerError::NoOptions => write!(f, "Reaction picker needs at least one option"),
        }
    }
}

impl std::error::Error for PickerError {}

/// Outbound callbacks to the hosting screen
pub trait ReactionSink {
    /// A reaction was committed
    fn on_react(&mut self, option_id: &str);
    /// The picker closed, with or without a reaction
    ///
    /// Only sent for sessions that opened. A tap released before the hold
    /// delay never opens the picker, so it produces no `on_close`; hosts see
    /// it as `SurfaceEvent::Tapped` instead.
    fn on_close(&mut self);
}

/// Recorded sink call, for hosts that process outcomes after the event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerCall {
    React(String),
    Close,
}

impl ReactionSink for Vec<PickerCall> {
    fn on_react(&mut self, option_id: &str) {
        self.push(PickerCall::React(option_id.to_string()));
    }

    fn on_close(&mut self) {
        self.push(PickerCall::Close);
    }
}

/// Observable picker state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPhase {
    Closed,
    /// Open, pointer inside the dead zone
    OpenNeutral,
    /// Open, pointer over sector `i`
    OpenHovering(usize),
}

#[derive(Debug, Clone)]
struct OpenSession {
    center: Point,
    current: Option<Point>,
    hover: HoverTracker,
}

/// Radial reaction picker for one gesture surface
#[derive(Debug, Clone)]
pub struct ReactionPicker {
    options: Vec<ReactionOption>,
    selector: RadialSelector,
    session: Option<OpenSession>,
}

impl ReactionPicker {
    pub fn new(options: Vec<ReactionOption>, activation_radius: f64) -> Result<Self, PickerError> {
        if options.is_empty() {
            return Err(PickerError::NoOptions);
        }
        let selector = RadialSelector::new(options.len(), activation_radius);
        Ok(Self {
            options,
            selector,
            session: None,
        })
    }

    pub fn options(&self) -> &[ReactionOption] {
        &self.options
    }

    pub fn selector(&self) -> &RadialSelector {
        &self.selector
    }

    /// Replace the dead-zone radius; only allowed while closed
    pub fn set_activation_radius(&mut self, radius: f64) -> bool {
        if self.is_open() {
            return false;
        }
        self.selector = RadialSelector::new(self.options.len(), radius);
        true
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn phase(&self) -> PickerPhase {
        match &self.session {
            None => PickerPhase::Closed,
            Some(s) => match s.hover.hovered() {
                Some(i) => PickerPhase::OpenHovering(i),
                None => PickerPhase::OpenNeutral,
            },
        }
    }

    /// Wheel center for the open session
    pub fn center(&self) -> Option<Point> {
        self.session.as_ref().map(|s| s.center)
    }

    /// Latest tracked pointer position
    pub fn current(&self) -> Option<Point> {
        self.session.as_ref().and_then(|s| s.current)
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.session.as_ref().and_then(|s| s.hover.hovered())
    }

    pub fn hovered_option(&self) -> Option<&ReactionOption> {
        self.hovered_index().and_then(|i| self.options.get(i))
    }

    /// Open a session around `center`. Returns false if already open.
    ///
    /// The center stays fixed until the session closes.
    pub fn open(&mut self, center: Point) -> bool {
        if self.session.is_some() {
            return false;
        }
        log::debug!("picker opened at ({:.1}, {:.1})", center.x, center.y);
        self.session = Some(OpenSession {
            center,
            current: None,
            hover: HoverTracker::default(),
        });
        true
    }

    /// Feed a new pointer position; reports hover transitions only
    pub fn track(&mut self, pos: Point) -> Option<HoverChange> {
        let session = self.session.as_mut()?;
        session.current = Some(pos);
        let sector = self.selector.hit_test(session.center, pos);
        let change = session.hover.update(sector);
        if let Some(change) = change {
            log::trace!("hover {:?} -> {:?}", change.previous, change.current);
        }
        change
    }

    /// Release at `pos`: react if it lands in a sector, then always close
    ///
    /// Returns the committed option id. No-op when closed.
    pub fn release(&mut self, pos: Point, sink: &mut dyn ReactionSink) -> Option<String> {
        let session = self.session.take()?;
        let committed = self
            .selector
            .hit_test(session.center, pos)
            .and_then(|i| self.options.get(i))
            .map(|option| option.id.clone());

        if let Some(id) = &committed {
            log::debug!("reaction committed: {}", id);
            sink.on_react(id);
        } else {
            log::debug!("released without a sector, closing");
        }
        sink.on_close();
        committed
    }

    /// Close without reacting. No-op when closed.
    pub fn dismiss(&mut self, sink: &mut dyn ReactionSink) {
        if self.session.take().is_some() {
            log::debug!("picker dismissed");
            sink.on_close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactions::default_reactions;

    fn picker() -> ReactionPicker {
        ReactionPicker::new(default_reactions(), 30.0).unwrap()
    }

    #[test]
    fn test_empty_options_rejected() {
        assert_eq!(
            ReactionPicker::new(Vec::new(), 30.0).unwrap_err(),
            PickerError::NoOptions
        );
    }

    #[test]
    fn test_state_machine() {
        let mut p = picker();
        assert_eq!(p.phase(), PickerPhase::Closed);

        p.open(Point::new(100.0, 100.0));
        assert_eq!(p.phase(), PickerPhase::OpenNeutral);

        assert!(p.track(Point::new(105.0, 100.0)).is_none());
        assert_eq!(p.phase(), PickerPhase::OpenNeutral);

        // Straight up: sector 0
        let change = p.track(Point::new(100.0, 40.0)).unwrap();
        assert_eq!(change.current, Some(0));
        assert_eq!(p.phase(), PickerPhase::OpenHovering(0));
        assert_eq!(p.hovered_option().map(|o| o.id.as_str()), Some("heart"));

        // Same sector again: no transition
        assert!(p.track(Point::new(101.0, 40.0)).is_none());

        // Straight right: 90 degrees, sector 2
        let change = p.track(Point::new(160.0, 100.0)).unwrap();
        assert_eq!(change.previous, Some(0));
        assert_eq!(p.phase(), PickerPhase::OpenHovering(2));

        let mut calls: Vec<PickerCall> = Vec::new();
        p.dismiss(&mut calls);
        assert_eq!(calls, vec![PickerCall::Close]);
        assert_eq!(p.phase(), PickerPhase::Closed);
    }

    #[test]
    fn test_center_fixed_while_open() {
        let mut p = picker();
        assert!(p.open(Point::new(10.0, 10.0)));
        assert!(!p.open(Point::new(50.0, 50.0)));
        assert_eq!(p.center(), Some(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_release_in_sector_reacts_then_closes() {
        let mut p = picker();
        p.open(Point::new(100.0, 100.0));
        let mut calls: Vec<PickerCall> = Vec::new();
        let committed = p.release(Point::new(100.0, 40.0), &mut calls);
        assert_eq!(committed.as_deref(), Some("heart"));
        assert_eq!(
            calls,
            vec![PickerCall::React("heart".to_string()), PickerCall::Close]
        );
    }

    #[test]
    fn test_release_in_dead_zone_only_closes() {
        let mut p = picker();
        p.open(Point::new(100.0, 100.0));
        let mut calls: Vec<PickerCall> = Vec::new();
        assert!(p.release(Point::new(110.0, 105.0), &mut calls).is_none());
        assert_eq!(calls, vec![PickerCall::Close]);
    }

    #[test]
    fn test_closed_picker_is_silent() {
        let mut p = picker();
        let mut calls: Vec<PickerCall> = Vec::new();
        assert!(p.release(Point::new(100.0, 40.0), &mut calls).is_none());
        p.dismiss(&mut calls);
        assert!(p.track(Point::new(0.0, 0.0)).is_none());
        assert!(calls.is_empty());
    }

    #[test]
    fn test_activation_radius_locked_while_open() {
        let mut p = picker();
        p.open(Point::new(0.0, 0.0));
        assert!(!p.set_activation_radius(10.0));
        p.dismiss(&mut Vec::<PickerCall>::new());
        assert!(p.set_activation_radius(10.0));
        assert_eq!(p.selector().activation_radius(), 10.0);
    }
}
