// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture helper: turn raw pointer positions into phased pan samples.
//!
//! Platform gesture recognizers report a pan as a stream of samples, each with a
//! phase, the current location, the translation since the gesture began, and an
//! instantaneous velocity. Hosts that only see raw pointer events (winit, web, a
//! test harness) can use [`PanRecognizer`] to derive the same stream.
//!
//! ## Usage
//!
//! 1) Call [`PanRecognizer::begin`] with the press position and a timestamp in milliseconds.
//!    This only arms the recognizer; nothing is reported until the pointer moves.
//! 2) On each move call [`PanRecognizer::update`]. The first move yields a
//!    [`PanPhase::Began`] sample whose translation is measured from the press;
//!    later moves yield [`PanPhase::Changed`].
//! 3) Finish with [`PanRecognizer::end`], or abort with [`PanRecognizer::cancel`].
//!    A press that never moved reports neither.
//!
//! Velocities are expressed in units per second. A positive `y` velocity means the
//! pointer is moving down the screen.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::pan::{PanPhase, PanRecognizer};
//!
//! let mut pan = PanRecognizer::default();
//!
//! pan.begin(Point::new(10.0, 200.0), 0);
//! assert_eq!(pan.update(Point::new(10.0, 200.0), 8), None);
//!
//! // Move up by 50 over 100ms.
//! let began = pan.update(Point::new(10.0, 150.0), 100).unwrap();
//! assert_eq!(began.phase, PanPhase::Began);
//! assert_eq!(began.translation.y, -50.0);
//! assert_eq!(began.velocity.y, -500.0);
//!
//! let moved = pan.update(Point::new(10.0, 140.0), 110).unwrap();
//! assert_eq!(moved.phase, PanPhase::Changed);
//! assert_eq!(moved.translation.y, -60.0);
//!
//! let ended = pan.end(Point::new(10.0, 140.0), 120).unwrap();
//! assert_eq!(ended.phase, PanPhase::Ended);
//! assert!(!pan.is_active());
//! ```

use kurbo::{Point, Vec2};

/// Lifecycle phase of a pan sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanPhase {
    /// First sample of a gesture.
    Began,
    /// The pointer moved while the gesture is active.
    Changed,
    /// The pointer was released.
    Ended,
    /// The gesture was aborted; no release should be interpreted.
    Cancelled,
}

/// A single pan gesture sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanSample {
    /// Phase of this sample.
    pub phase: PanPhase,
    /// Current pointer location.
    pub location: Point,
    /// Offset of `location` from the location at [`PanPhase::Began`].
    pub translation: Vec2,
    /// Instantaneous velocity in units per second; positive `y` is downward.
    pub velocity: Vec2,
}

impl PanSample {
    /// Creates a sample from its parts.
    #[must_use]
    pub const fn new(phase: PanPhase, location: Point, translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase,
            location,
            translation,
            velocity,
        }
    }

    /// Velocity along the vertical axis with the sign flipped, so positive means "upward".
    #[must_use]
    pub fn upward_velocity(&self) -> f64 {
        -self.velocity.y
    }
}

/// Derives [`PanSample`]s from raw pointer positions and timestamps.
#[derive(Debug, Clone, Default, Copy)]
pub struct PanRecognizer {
    /// Location where the pointer was pressed.
    pub start_pos: Option<Point>,
    /// Whether the pointer has moved since the press, so a `Began` sample was emitted.
    pub panning: bool,
    /// Last recorded location and its timestamp in milliseconds.
    pub last: Option<(Point, u64)>,
    /// Most recently computed velocity.
    pub velocity: Vec2,
}

impl PanRecognizer {
    /// Arm the recognizer at the press position `pos`, discarding any gesture in flight.
    pub fn begin(&mut self, pos: Point, time_ms: u64) {
        self.start_pos = Some(pos);
        self.panning = false;
        self.last = Some((pos, time_ms));
        self.velocity = Vec2::ZERO;
    }

    /// Record a move.
    ///
    /// The first move away from the press returns a [`PanPhase::Began`] sample,
    /// later ones [`PanPhase::Changed`]. Returns `None` when not armed, or when
    /// the pointer has not yet left the press position.
    pub fn update(&mut self, pos: Point, time_ms: u64) -> Option<PanSample> {
        let start = self.start_pos?;
        if self.panning {
            return self.advance(PanPhase::Changed, pos, time_ms);
        }
        if pos == start {
            return None;
        }
        self.panning = true;
        self.advance(PanPhase::Began, pos, time_ms)
    }

    /// Release the gesture at `pos`.
    ///
    /// Returns `None` when not armed, or when the pointer never moved.
    pub fn end(&mut self, pos: Point, time_ms: u64) -> Option<PanSample> {
        let sample = if self.panning {
            self.advance(PanPhase::Ended, pos, time_ms)
        } else {
            None
        };
        self.reset();
        sample
    }

    /// Abort the active gesture.
    ///
    /// Returns a [`PanPhase::Cancelled`] sample at the last known location, or
    /// `None` if no pan was in flight.
    pub fn cancel(&mut self) -> Option<PanSample> {
        if !self.panning {
            self.reset();
            return None;
        }
        let start = self.start_pos?;
        let (last, _) = self.last.unwrap_or((start, 0));
        let sample = PanSample::new(PanPhase::Cancelled, last, last - start, self.velocity);
        self.reset();
        Some(sample)
    }

    /// Returns `true` between [`PanRecognizer::begin`] and the end of the gesture.
    pub fn is_active(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once the pointer has moved and `Began` was reported.
    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Translation of `pos` from the gesture start.
    pub fn translation(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    fn advance(&mut self, phase: PanPhase, pos: Point, time_ms: u64) -> Option<PanSample> {
        let start = self.start_pos?;
        if let Some((last_pos, last_time)) = self.last {
            let elapsed_ms = time_ms.saturating_sub(last_time);
            // Coalesced events share a timestamp; keep the previous estimate.
            if elapsed_ms > 0 {
                self.velocity = (pos - last_pos) * 1000.0 / elapsed_ms as f64;
            }
        }
        self.last = Some((pos, time_ms));
        Some(PanSample::new(phase, pos, pos - start, self.velocity))
    }

    fn reset(&mut self) {
        self.start_pos = None;
        self.panning = false;
        self.last = None;
        self.velocity = Vec2::ZERO;
    }
}
