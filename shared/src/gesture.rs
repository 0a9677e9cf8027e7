//! Gesture detector - press-and-hold-then-drag classification
//!
//! Raw pointer samples go in, high-level drag events come out. A press only
//! becomes a drag once the hold delay has elapsed; releasing earlier is a tap
//! and reports `Cancel`. The hold deadline lives inside the `PendingDrag`
//! state, so leaving that state is what disarms the timer.

use std::time::{Duration, Instant};

use crate::geometry::Point;

/// Reference hold delay before a press is promoted to a drag
pub const DEFAULT_HOLD_DELAY: Duration = Duration::from_millis(50);

/// Which device produced a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    /// A single touch contact, identified by the platform touch id
    Touch { id: u64 },
}

/// One raw pointer sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub source: PointerSource,
    /// `None` when the platform event carried no coordinates
    pub position: Option<Point>,
}

impl PointerSample {
    pub fn mouse(position: Point) -> Self {
        Self {
            source: PointerSource::Mouse,
            position: Some(position),
        }
    }

    pub fn touch(id: u64, position: Point) -> Self {
        Self {
            source: PointerSource::Touch { id },
            position: Some(position),
        }
    }

    /// A sample with no usable coordinates
    pub fn without_position(source: PointerSource) -> Self {
        Self {
            source,
            position: None,
        }
    }
}

/// Position of `sample` if it belongs to the session's primary pointer
///
/// Mouse and touch go through the same path; any touch other than the one
/// that started the session is ignored.
pub fn primary_position(sample: &PointerSample, primary: PointerSource) -> Option<Point> {
    if sample.source != primary {
        return None;
    }
    sample.position
}

/// High-level events emitted by the detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Hold delay elapsed; carries the press-down position
    DragStart(Point),
    DragMove(Point),
    /// Release after a confirmed drag
    DragEnd(Point),
    /// Tap release, explicit cancel or interruption
    Cancel,
}

/// Detector state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    Idle,
    /// Pressed, waiting for the hold deadline
    PendingDrag {
        pointer: PointerSource,
        origin: Point,
        deadline: Instant,
    },
    Dragging {
        pointer: PointerSource,
        origin: Point,
        last: Point,
    },
}

/// Classifies one pointer interaction at a time
#[derive(Debug, Clone)]
pub struct GestureDetector {
    hold_delay: Duration,
    phase: GesturePhase,
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_DELAY)
    }
}

impl GestureDetector {
    pub fn new(hold_delay: Duration) -> Self {
        Self {
            hold_delay,
            phase: GesturePhase::Idle,
        }
    }

    pub fn hold_delay(&self) -> Duration {
        self.hold_delay
    }

    /// Change the hold delay; takes effect on the next press
    pub fn set_hold_delay(&mut self, hold_delay: Duration) {
        self.hold_delay = hold_delay;
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, GesturePhase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// Pointer/touch down. Arms the hold timer; emits nothing.
    ///
    /// Ignored while another session is active or without coordinates.
    pub fn start(&mut self, sample: PointerSample, now: Instant) {
        if self.is_active() {
            log::trace!("press ignored, session already active");
            return;
        }
        let Some(origin) = sample.position else {
            return;
        };
        self.phase = GesturePhase::PendingDrag {
            pointer: sample.source,
            origin,
            deadline: now + self.hold_delay,
        };
        log::debug!("press at ({:.1}, {:.1}), hold pending", origin.x, origin.y);
    }

    /// Timer check. Promotes a pending press once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.promote_if_due(now, &mut events);
        events
    }

    /// Pointer/touch move
    pub fn moved(&mut self, sample: PointerSample, now: Instant) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.promote_if_due(now, &mut events);

        if let GesturePhase::Dragging { pointer, last, .. } = &mut self.phase {
            if let Some(pos) = primary_position(&sample, *pointer) {
                *last = pos;
                events.push(GestureEvent::DragMove(pos));
            }
        }
        events
    }

    /// Pointer/touch up. Ends the session exactly once.
    pub fn end(&mut self, sample: PointerSample, now: Instant) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.promote_if_due(now, &mut events);

        match self.phase {
            GesturePhase::Idle => {}
            GesturePhase::PendingDrag { pointer, .. } => {
                if sample.source == pointer {
                    self.phase = GesturePhase::Idle;
                    log::debug!("released before hold delay, treating as tap");
                    events.push(GestureEvent::Cancel);
                }
            }
            GesturePhase::Dragging { pointer, last, .. } => {
                if sample.source == pointer {
                    let pos = sample.position.unwrap_or(last);
                    self.phase = GesturePhase::Idle;
                    log::debug!("drag released at ({:.1}, {:.1})", pos.x, pos.y);
                    events.push(GestureEvent::DragEnd(pos));
                }
            }
        }
        events
    }

    /// Interruption (touch cancel, focus loss). Never reports `DragEnd`.
    pub fn cancel(&mut self) -> Vec<GestureEvent> {
        if !self.is_active() {
            return Vec::new();
        }
        self.phase = GesturePhase::Idle;
        log::debug!("gesture cancelled");
        vec![GestureEvent::Cancel]
    }

    fn promote_if_due(&mut self, now: Instant, events: &mut Vec<GestureEvent>) {
        if let GesturePhase::PendingDrag {
            pointer,
            origin,
            deadline,
        } = self.phase
        {
            if now >= deadline {
                self.phase = GesturePhase::Dragging {
                    pointer,
                    origin,
                    last: origin,
                };
                log::debug!("hold delay elapsed, drag started");
                events.push(GestureEvent::DragStart(origin));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn at(x: f64, y: f64) -> PointerSample {
        PointerSample::mouse(Point::new(x, y))
    }

    #[test]
    fn test_press_emits_nothing_until_deadline() {
        let t0 = Instant::now();
        let mut detector = GestureDetector::default();
        detector.start(at(10.0, 10.0), t0);
        assert!(detector.poll(t0 + ms(49)).is_empty());
        assert_eq!(
            detector.poll(t0 + ms(50)),
            vec![GestureEvent::DragStart(Point::new(10.0, 10.0))]
        );
        // DragStart fires once
        assert!(detector.poll(t0 + ms(500)).is_empty());
        assert!(detector.is_dragging());
    }

    #[test]
    fn test_quick_tap_cancels() {
        let t0 = Instant::now();
        let mut detector = GestureDetector::default();
        detector.start(at(50.0, 50.0), t0);
        assert!(detector.moved(at(50.0, 10.0), t0 + ms(10)).is_empty());
        assert_eq!(detector.end(at(50.0, 10.0), t0 + ms(30)), vec![GestureEvent::Cancel]);
        // A stale timer check after teardown is swallowed
        assert!(detector.poll(t0 + ms(100)).is_empty());
        assert_eq!(detector.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_drag_lifecycle() {
        let t0 = Instant::now();
        let mut detector = GestureDetector::default();
        detector.start(at(0.0, 0.0), t0);
        detector.poll(t0 + ms(60));
        assert_eq!(
            detector.moved(at(5.0, 0.0), t0 + ms(70)),
            vec![GestureEvent::DragMove(Point::new(5.0, 0.0))]
        );
        assert_eq!(
            detector.moved(at(6.0, 0.0), t0 + ms(71)),
            vec![GestureEvent::DragMove(Point::new(6.0, 0.0))]
        );
        assert_eq!(
            detector.end(at(7.0, 0.0), t0 + ms(80)),
            vec![GestureEvent::DragEnd(Point::new(7.0, 0.0))]
        );
        assert!(detector.moved(at(8.0, 0.0), t0 + ms(90)).is_empty());
        assert!(detector.end(at(8.0, 0.0), t0 + ms(95)).is_empty());
    }

    #[test]
    fn test_late_release_promotes_before_end() {
        let t0 = Instant::now();
        let mut detector = GestureDetector::default();
        detector.start(at(0.0, 0.0), t0);
        assert_eq!(
            detector.end(at(0.0, -40.0), t0 + ms(200)),
            vec![
                GestureEvent::DragStart(Point::new(0.0, 0.0)),
                GestureEvent::DragEnd(Point::new(0.0, -40.0)),
            ]
        );
    }

    #[test]
    fn test_release_without_coordinates_uses_last_position() {
        let t0 = Instant::now();
        let mut detector = GestureDetector::default();
        detector.start(at(0.0, 0.0), t0);
        detector.poll(t0 + ms(50));
        detector.moved(at(3.0, 4.0), t0 + ms(55));
        assert!(detector
            .moved(PointerSample::without_position(PointerSource::Mouse), t0 + ms(56))
            .is_empty());
        assert_eq!(
            detector.end(PointerSample::without_position(PointerSource::Mouse), t0 + ms(60)),
            vec![GestureEvent::DragEnd(Point::new(3.0, 4.0))]
        );
    }

    #[test]
    fn test_cancel_while_dragging() {
        let t0 = Instant::now();
        let mut detector = GestureDetector::default();
        detector.start(at(0.0, 0.0), t0);
        detector.poll(t0 + ms(50));
        assert_eq!(detector.cancel(), vec![GestureEvent::Cancel]);
        assert!(detector.moved(at(1.0, 1.0), t0 + ms(60)).is_empty());
        assert!(detector.cancel().is_empty());
    }

    #[test]
    fn test_cancel_while_pending_disarms_timer() {
        let t0 = Instant::now();
        let mut detector = GestureDetector::default();
        detector.start(at(0.0, 0.0), t0);
        assert_eq!(detector.cancel(), vec![GestureEvent::Cancel]);
        assert!(detector.poll(t0 + ms(100)).is_empty());
    }

    #[test]
    fn test_second_press_ignored() {
        let t0 = Instant::now();
        let mut detector = GestureDetector::default();
        detector.start(at(0.0, 0.0), t0);
        detector.start(at(99.0, 99.0), t0 + ms(10));
        assert_eq!(
            detector.poll(t0 + ms(50)),
            vec![GestureEvent::DragStart(Point::new(0.0, 0.0))]
        );
    }

    #[test]
    fn test_secondary_touch_ignored() {
        let t0 = Instant::now();
        let mut detector = GestureDetector::default();
        detector.start(PointerSample::touch(1, Point::new(0.0, 0.0)), t0);
        detector.poll(t0 + ms(50));
        assert!(detector
            .moved(PointerSample::touch(2, Point::new(40.0, 0.0)), t0 + ms(60))
            .is_empty());
        assert!(detector
            .end(PointerSample::touch(2, Point::new(40.0, 0.0)), t0 + ms(61))
            .is_empty());
        assert!(detector.is_dragging());
        assert_eq!(
            detector.end(PointerSample::touch(1, Point::new(0.0, 40.0)), t0 + ms(70)),
            vec![GestureEvent::DragEnd(Point::new(0.0, 40.0))]
        );
    }

    #[test]
    fn test_press_without_coordinates_is_noop() {
        let mut detector = GestureDetector::default();
        detector.start(PointerSample::without_position(PointerSource::Mouse), Instant::now());
        assert!(!detector.is_active());
    }
}
