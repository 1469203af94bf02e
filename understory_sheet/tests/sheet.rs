// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_sheet` crate.
//!
//! These drive a three-state sheet (100 / 300 / 600) end to end: configuration
//! ordering, nearest-height snapping, the drag boundary guards, over-scroll
//! coupling, and how state changes interact with a drag in flight.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Vec2};
use understory_event_state::pan::{PanPhase, PanRecognizer, PanSample};
use understory_sheet::{
    DragIgnored, DragOutcome, FixedSurface, Sheet, SheetConfig, SheetContent, SheetController,
    SheetState, SheetSurface,
};

const UP: f64 = -1_000.0;
const DOWN: f64 = 1_000.0;

#[derive(Debug, Clone, PartialEq)]
struct Rows(usize);

impl SheetContent for Rows {
    fn row_count(&self) -> usize {
        self.0
    }
}

fn three_states() -> [SheetState<Rows>; 3] {
    [
        SheetState::new(Rows(3), 300.0),
        SheetState::new(Rows(20), 600.0),
        SheetState::new(Rows(1), 100.0),
    ]
}

type Log = Rc<RefCell<Vec<(f64, bool)>>>;

fn sheet_with_log() -> (Sheet<Rows>, Log) {
    let mut sheet = Sheet::from_states(three_states()).unwrap();
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    sheet.set_on_state_change(move |state, allow| sink.borrow_mut().push((state.height(), allow)));
    (sheet, log)
}

fn pan(phase: PanPhase, y: f64, translation_y: f64, velocity_y: f64) -> PanSample {
    PanSample::new(
        phase,
        Point::new(12.0, y),
        Vec2::new(0.0, translation_y),
        Vec2::new(0.0, velocity_y),
    )
}

/// Render adapter that counts live updates and applies committed heights.
#[derive(Debug, Default)]
struct CountingSurface {
    height: f64,
    live_updates: usize,
}

impl SheetSurface for CountingSurface {
    fn rendered_height(&self) -> f64 {
        self.height
    }

    fn set_live_height(&mut self, height: f64) {
        self.height = height;
        self.live_updates += 1;
    }
}

#[test]
fn construction_sorts_and_starts_at_zero() {
    let config = SheetConfig::new(three_states()).unwrap();
    let heights: Vec<f64> = config.heights().collect();
    assert!(heights.windows(2).all(|w| w[0] <= w[1]));

    let controller = SheetController::new(config);
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.current_state().height(), 100.0);
    assert_eq!(controller.current_state().content(), Some(&Rows(1)));
}

#[test]
fn resolve_nearest_matches_brute_force_minimum() {
    let mut controller = SheetController::from_states(three_states()).unwrap();
    let heights: Vec<f64> = controller.config().heights().collect();

    for step in -20..=140 {
        let target = f64::from(step) * 5.0;
        let best = heights
            .iter()
            .map(|h| (h - target).abs())
            .fold(f64::INFINITY, f64::min);
        let expected = heights
            .iter()
            .position(|h| (h - target).abs() == best)
            .unwrap();
        assert_eq!(controller.resolve_nearest(target), expected, "target {target}");
        assert_eq!(controller.current_index(), expected);
    }
}

#[test]
fn inner_scroll_iff_last_state() {
    let (mut sheet, log) = sheet_with_log();
    for index in [1, 2, 0, 2] {
        sheet.set_position(index);
        assert_eq!(sheet.should_allow_inner_scroll(), index == 2);
    }
    assert!(log.borrow().iter().all(|&(h, allow)| allow == (h == 600.0)));
}

#[test]
fn set_position_fires_only_on_change() {
    let (mut sheet, log) = sheet_with_log();

    sheet.set_position(0);
    assert!(log.borrow().is_empty());

    sheet.set_position(1);
    sheet.set_position(1);
    assert_eq!(*log.borrow(), [(300.0, false)]);
}

#[test]
fn release_at_250_snaps_to_300() {
    let (mut sheet, log) = sheet_with_log();
    let mut surface = FixedSurface::new(250.0);

    let out = sheet.handle_pan(&mut surface, &pan(PanPhase::Ended, 0.0, -150.0, UP));
    assert_eq!(out, DragOutcome::Snapped { index: 1, changed: true });
    assert_eq!(*log.borrow(), [(300.0, false)]);
}

#[test]
fn release_at_200_ties_toward_smaller_height() {
    let (mut sheet, log) = sheet_with_log();
    let mut surface = FixedSurface::new(200.0);

    let out = sheet.handle_pan(&mut surface, &pan(PanPhase::Ended, 0.0, -100.0, UP));
    assert_eq!(out, DragOutcome::Snapped { index: 0, changed: false });
    assert_eq!(sheet.current_index(), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn upward_release_at_last_state_is_left_to_inner_scroll() {
    let (mut sheet, log) = sheet_with_log();
    sheet.set_position(2);
    log.borrow_mut().clear();
    let mut surface = FixedSurface::new(480.0);

    let out = sheet.handle_pan(&mut surface, &pan(PanPhase::Ended, 0.0, -30.0, UP));
    assert_eq!(out, DragOutcome::Ignored(DragIgnored::InnerScrollOwnsRelease));
    assert_eq!(sheet.current_index(), 2);
    assert!(log.borrow().is_empty());
}

#[test]
fn ceiling_guard_holds_for_any_number_of_samples() {
    let (mut sheet, _log) = sheet_with_log();
    sheet.set_position(2);
    let mut surface = CountingSurface {
        height: 600.0,
        ..CountingSurface::default()
    };

    sheet.handle_pan(&mut surface, &pan(PanPhase::Began, 50.0, -2.0, UP));
    for i in 1..100 {
        let y = 50.0 - f64::from(i);
        sheet.handle_pan(&mut surface, &pan(PanPhase::Changed, y, y - 52.0, UP));
    }
    sheet.handle_pan(&mut surface, &pan(PanPhase::Ended, -49.0, -101.0, UP));

    assert_eq!(surface.live_updates, 0);
    assert_eq!(surface.height, 600.0);
    assert_eq!(sheet.current_index(), 2);
}

#[test]
fn floor_guard_suppresses_live_updates() {
    let (mut sheet, _log) = sheet_with_log();
    let mut surface = CountingSurface {
        height: 100.0,
        ..CountingSurface::default()
    };

    sheet.handle_pan(&mut surface, &pan(PanPhase::Began, 10.0, 2.0, DOWN));
    sheet.handle_pan(&mut surface, &pan(PanPhase::Changed, 40.0, 32.0, DOWN));
    assert_eq!(surface.live_updates, 0);
    assert_eq!(surface.height, 100.0);
}

#[test]
fn repeated_overscroll_never_goes_below_zero() {
    let (mut sheet, log) = sheet_with_log();
    sheet.set_position(2);

    for _ in 0..10 {
        sheet.handle_overscroll(300.0, 600.0);
    }
    assert_eq!(sheet.current_index(), 0);
    assert_eq!(
        *log.borrow(),
        [(600.0, true), (300.0, false), (100.0, false)]
    );
}

#[test]
fn overscroll_below_threshold_keeps_state() {
    let (mut sheet, _log) = sheet_with_log();
    sheet.set_position(2);
    assert!(!sheet.handle_overscroll(60.0, 600.0));
    assert_eq!(sheet.current_index(), 2);
}

#[test]
fn full_drag_from_peek_to_full() {
    let (mut sheet, log) = sheet_with_log();
    let mut surface = FixedSurface::new(sheet.initial_height());
    let mut recognizer = PanRecognizer::default();

    // Sheet-local coordinates: as the sheet grows its origin moves up, so a
    // finger that moves 10 up on screen reports a location 10 lower than it
    // would on a fixed sheet. Model that by offsetting with the growth.
    recognizer.begin(Point::new(0.0, 40.0), 0);

    let mut t = 0;
    for screen_y in (-440..=30).rev().step_by(10) {
        t += 16;
        let growth = surface.rendered_height() - 100.0;
        let local = Point::new(0.0, f64::from(screen_y) + growth);
        let sample = recognizer.update(local, t).unwrap();
        if screen_y == 30 {
            assert_eq!(sample.phase, PanPhase::Began);
        }
        sheet.handle_pan(&mut surface, &sample);
    }
    // The finger travelled 480 up from the press; the sheet followed all of it.
    assert_eq!(surface.rendered_height(), 580.0);

    // Lift where the last move was reported, 10 above the press in sheet-local terms.
    let ended = recognizer.end(Point::new(0.0, 30.0), t + 16).unwrap();
    let out = sheet.handle_pan(&mut surface, &ended);
    assert_eq!(out, DragOutcome::Snapped { index: 2, changed: true });
    assert_eq!(*log.borrow(), [(600.0, true)]);
    assert_eq!(sheet.current_state().content().map(SheetContent::row_count), Some(20));
}

#[test]
fn overscroll_during_drag_cancels_it() {
    let (mut sheet, log) = sheet_with_log();
    sheet.set_position(2);
    let mut surface = FixedSurface::new(600.0);

    sheet.handle_pan(&mut surface, &pan(PanPhase::Began, 20.0, 4.0, DOWN));
    assert!(sheet.is_dragging());
    assert!(sheet.handle_overscroll(200.0, 600.0));

    let out = sheet.handle_pan(&mut surface, &pan(PanPhase::Changed, 120.0, 104.0, DOWN));
    assert_eq!(out, DragOutcome::Ignored(DragIgnored::Cancelled));
    let out = sheet.handle_pan(&mut surface, &pan(PanPhase::Ended, 120.0, 104.0, DOWN));
    assert_eq!(out, DragOutcome::Ignored(DragIgnored::Cancelled));

    assert_eq!(sheet.current_index(), 1);
    assert_eq!(log.borrow().last(), Some(&(300.0, false)));
}
