//! End-to-end press/drag/release scenarios through the reaction surface

use std::time::{Duration, Instant};

use shared::selector::sector_for_angle;
use shared::{
    default_reactions, PickerCall, PickerConfig, Point, PointerSample, RadialSelector,
    ReactionSurface, SharedChrome, SurfaceEvent,
};

fn surface() -> ReactionSurface<SharedChrome> {
    ReactionSurface::new(
        default_reactions(),
        &PickerConfig::default(),
        SharedChrome::default(),
    )
    .unwrap()
}

fn at(x: f64, y: f64) -> PointerSample {
    PointerSample::mouse(Point::new(x, y))
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn release_above_center_commits_first_option() {
    let mut s = surface();
    let mut calls: Vec<PickerCall> = Vec::new();
    let t0 = Instant::now();

    s.press(at(100.0, 100.0), t0);
    s.tick(t0 + ms(50), &mut calls);
    s.pointer_moved(at(100.0, 70.0), t0 + ms(60), &mut calls);
    let events = s.release(at(100.0, 40.0), t0 + ms(80), &mut calls);

    assert_eq!(
        events,
        vec![SurfaceEvent::Closed {
            reaction: Some("heart".to_string())
        }]
    );
    assert_eq!(
        calls,
        vec![PickerCall::React("heart".to_string()), PickerCall::Close]
    );
}

#[test]
fn release_in_dead_zone_only_closes() {
    let mut s = surface();
    let mut calls: Vec<PickerCall> = Vec::new();
    let t0 = Instant::now();

    s.press(at(100.0, 100.0), t0);
    s.tick(t0 + ms(50), &mut calls);
    s.release(at(110.0, 105.0), t0 + ms(90), &mut calls);

    assert_eq!(calls, vec![PickerCall::Close]);
    assert!(!s.is_open());
}

#[test]
fn quick_tap_with_move_never_opens() {
    let mut s = surface();
    let mut calls: Vec<PickerCall> = Vec::new();
    let t0 = Instant::now();

    s.press(at(50.0, 50.0), t0);
    assert!(s.pointer_moved(at(50.0, 10.0), t0 + ms(20), &mut calls).is_empty());
    let events = s.release(at(50.0, 10.0), t0 + ms(40), &mut calls);

    assert_eq!(events, vec![SurfaceEvent::Tapped]);
    assert!(calls.is_empty());
    // The disarmed hold timer cannot open the wheel later
    assert!(s.tick(t0 + ms(500), &mut calls).is_empty());
    assert!(!s.is_open());
}

#[test]
fn chrome_restored_after_committed_reaction() {
    let chrome = SharedChrome::default();
    let mut s = ReactionSurface::new(default_reactions(), &PickerConfig::default(), chrome.clone())
        .unwrap();
    let mut calls: Vec<PickerCall> = Vec::new();
    let t0 = Instant::now();

    s.press(at(100.0, 100.0), t0);
    s.tick(t0 + ms(50), &mut calls);
    assert!(chrome.is_locked());

    s.release(at(100.0, 40.0), t0 + ms(80), &mut calls);
    assert!(!chrome.is_locked());
    assert_eq!(
        calls,
        vec![PickerCall::React("heart".to_string()), PickerCall::Close]
    );
}

#[test]
fn boundary_angle_floors_into_next_sector() {
    for _ in 0..3 {
        assert_eq!(sector_for_angle(40.0, 9), 1);
    }

    // 40 degrees has no exact f64 direction, so the 9-way drag only has to
    // agree with the bucketing of whatever angle it measured
    let center = Point::new(100.0, 100.0);
    let rad = (40.0_f64 - 90.0).to_radians();
    let edge = Point::new(center.x + 60.0 * rad.cos(), center.y + 60.0 * rad.sin());
    let edge_hit = RadialSelector::new(9, 30.0).evaluate(center, edge);
    assert!((edge_hit.angle - 40.0).abs() < 1e-9);
    assert_eq!(edge_hit.sector, Some(sector_for_angle(edge_hit.angle, 9)));

    // Straight right is exactly 90 degrees: the edge between sectors 0 and 1
    // of a four-way wheel, and it belongs to sector 1
    let right = Point::new(160.0, 100.0);
    let hit = RadialSelector::new(4, 30.0).evaluate(center, right);
    assert_eq!(hit.angle, 90.0);
    assert_eq!(hit.sector, Some(1));

    let mut s = surface();
    let mut calls: Vec<PickerCall> = Vec::new();
    let t0 = Instant::now();
    s.press(at(100.0, 100.0), t0);
    s.tick(t0 + ms(50), &mut calls);
    s.pointer_moved(at(edge.x, edge.y), t0 + ms(60), &mut calls);
    assert_eq!(s.picker().hovered_index(), edge_hit.sector);
}

#[test]
fn nothing_delivered_after_teardown() {
    let mut s = surface();
    let mut calls: Vec<PickerCall> = Vec::new();
    let t0 = Instant::now();

    s.press(at(0.0, 0.0), t0);
    s.tick(t0 + ms(50), &mut calls);
    s.interrupt(&mut calls);
    assert_eq!(calls, vec![PickerCall::Close]);

    assert!(s.pointer_moved(at(0.0, -60.0), t0 + ms(60), &mut calls).is_empty());
    assert!(s.release(at(0.0, -60.0), t0 + ms(70), &mut calls).is_empty());
    assert!(s.tick(t0 + ms(80), &mut calls).is_empty());
    assert_eq!(calls, vec![PickerCall::Close]);
}

#[test]
fn sessions_are_independent() {
    let mut s = surface();
    let mut calls: Vec<PickerCall> = Vec::new();
    let t0 = Instant::now();

    s.press(at(100.0, 100.0), t0);
    s.tick(t0 + ms(50), &mut calls);
    s.release(at(160.0, 100.0), t0 + ms(60), &mut calls);

    let t1 = t0 + ms(1000);
    s.press(at(300.0, 300.0), t1);
    s.tick(t1 + ms(50), &mut calls);
    assert_eq!(s.picker().center(), Some(Point::new(300.0, 300.0)));
    assert_eq!(s.picker().hovered_index(), None);
    s.release(at(300.0, 360.0), t1 + ms(70), &mut calls);

    assert_eq!(
        calls,
        vec![
            PickerCall::React("shocking".to_string()),
            PickerCall::Close,
            PickerCall::React("gross".to_string()),
            PickerCall::Close,
        ]
    );
}
