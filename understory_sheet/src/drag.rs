// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag interpreter: turn a pan sample stream into live resizes and a final snap.
//!
//! [`DragInterpreter::handle`] consumes one [`PanSample`] at a time. While the
//! finger moves it proposes live heights to the [`SheetSurface`]; when it lifts,
//! it asks the [`SheetController`] to snap to the nearest configured state.
//!
//! ## Rules
//!
//! With `swipe = -velocity.y` (positive means the finger moves up):
//!
//! 1. Samples without vertical translation are ignored.
//! 2. At the tallest state, samples that keep pulling up are ignored on
//!    `Began`/`Changed`; the inner list owns that motion.
//! 3. On `Began`/`Changed`, the sheet does not shrink below its smallest height
//!    or grow above its largest by direct manipulation. Otherwise the proposed
//!    height is `rendered + (start.y - current.y)`, where `start` is the press
//!    point of a `Began` sample (`location - translation`).
//! 4. On `Ended`, if the inner list may scroll and the swipe is upward, the
//!    release is left to the list. Otherwise the rendered height is snapped.
//!
//! Locations are expected in sheet-local coordinates (origin at the sheet's top
//! edge). Because that origin moves as the sheet resizes, `rendered + delta`
//! keeps the sheet's top edge under the finger.
//!
//! ## Cancellation
//!
//! The interpreter remembers [`SheetController::revision`] when a gesture
//! starts. If the controller commits a state change mid-gesture (over-scroll
//! coupling, a programmatic jump), every further sample of that gesture is
//! ignored as [`DragIgnored::Cancelled`] until the next `Began`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_event_state::pan::{PanPhase, PanSample};
//! use understory_sheet::{DragInterpreter, DragOutcome, FixedSurface, SheetController, SheetState};
//!
//! let mut sheet = SheetController::from_states([
//!     SheetState::without_content(100.0),
//!     SheetState::without_content(300.0),
//!     SheetState::<()>::without_content(600.0),
//! ])
//! .unwrap();
//! let mut surface = FixedSurface::new(100.0);
//! let mut drag = DragInterpreter::new();
//!
//! // Finger moving up the screen, in sheet-local coordinates.
//! let up = Vec2::new(0.0, -800.0);
//! let at = |phase, y: f64, dy: f64| {
//!     PanSample::new(phase, Point::new(0.0, y), Vec2::new(0.0, dy), up)
//! };
//!
//! // Pressed at 40; `Began` reports the first 5 of movement.
//! let began = drag.handle(&mut sheet, &mut surface, &at(PanPhase::Began, 35.0, -5.0));
//! assert_eq!(began, DragOutcome::Resized { height: 105.0 });
//!
//! // 150 above the press on screen; the grown sheet shifts the local y down by 5.
//! let moved = drag.handle(&mut sheet, &mut surface, &at(PanPhase::Changed, -105.0, -145.0));
//! assert_eq!(moved, DragOutcome::Resized { height: 250.0 });
//!
//! let ended = drag.handle(&mut sheet, &mut surface, &at(PanPhase::Ended, -105.0, -145.0));
//! assert_eq!(ended, DragOutcome::Snapped { index: 1, changed: true });
//! ```

use kurbo::Point;
use understory_event_state::pan::{PanPhase, PanSample};

use crate::controller::SheetController;
use crate::surface::SheetSurface;

/// Why a sample produced no resize and no snap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragIgnored {
    /// The gesture has not moved vertically since it began.
    NoVerticalTranslation,
    /// Still pulling up while at the tallest state, or rendered at the largest height.
    AtCeiling,
    /// Pulling down while rendered at the smallest height.
    AtFloor,
    /// Released with an upward swipe while the inner list may scroll.
    InnerScrollOwnsRelease,
    /// The gesture was cancelled, explicitly or by a state change.
    Cancelled,
}

/// Result of feeding one sample to [`DragInterpreter::handle`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragOutcome {
    /// Nothing happened.
    Ignored(DragIgnored),
    /// A live, uncommitted height was pushed to the surface.
    Resized {
        /// The height passed to [`SheetSurface::set_live_height`].
        height: f64,
    },
    /// The drag ended and was snapped to a configured state.
    Snapped {
        /// The selected state index.
        index: usize,
        /// Whether the index differs from the one before the drag.
        changed: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Gesture {
    Idle,
    Active {
        revision: u64,
        start: Option<Point>,
        current: Option<Point>,
    },
    Cancelled,
}

/// Tracks one drag gesture at a time and applies the sheet's boundary rules.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragInterpreter {
    gesture: Gesture,
}

impl Default for DragInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl DragInterpreter {
    /// Creates an idle interpreter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
        }
    }

    /// Interpret `sample` against `controller`, resizing `surface` or snapping as needed.
    pub fn handle<P, S: SheetSurface + ?Sized>(
        &mut self,
        controller: &mut SheetController<P>,
        surface: &mut S,
        sample: &PanSample,
    ) -> DragOutcome {
        let revision = controller.revision();
        match sample.phase {
            PanPhase::Cancelled => {
                self.gesture = Gesture::Idle;
                return ignore(DragIgnored::Cancelled);
            }
            PanPhase::Began => {
                self.gesture = Gesture::Active {
                    revision,
                    start: None,
                    current: None,
                };
            }
            PanPhase::Changed | PanPhase::Ended => match self.gesture {
                Gesture::Idle => {
                    self.gesture = Gesture::Active {
                        revision,
                        start: None,
                        current: None,
                    };
                }
                Gesture::Active { revision: opened, .. } if opened != revision => {
                    self.gesture = Gesture::Cancelled;
                }
                Gesture::Active { .. } | Gesture::Cancelled => {}
            },
        }

        if self.gesture == Gesture::Cancelled {
            if sample.phase == PanPhase::Ended {
                self.gesture = Gesture::Idle;
            }
            return ignore(DragIgnored::Cancelled);
        }

        if sample.phase == PanPhase::Ended {
            self.gesture = Gesture::Idle;
        }

        if sample.translation.y == 0.0 {
            return ignore(DragIgnored::NoVerticalTranslation);
        }

        let swipe = sample.upward_velocity();
        match sample.phase {
            PanPhase::Began | PanPhase::Changed => {
                if controller.is_at_last() && swipe > 0.0 {
                    return ignore(DragIgnored::AtCeiling);
                }
                self.track(controller, surface, sample, swipe)
            }
            PanPhase::Ended => {
                if controller.should_allow_inner_scroll() && swipe > 0.0 {
                    return ignore(DragIgnored::InnerScrollOwnsRelease);
                }
                let before = controller.current_index();
                let index = controller.resolve_nearest(surface.rendered_height());
                DragOutcome::Snapped {
                    index,
                    changed: index != before,
                }
            }
            PanPhase::Cancelled => ignore(DragIgnored::Cancelled),
        }
    }

    fn track<P, S: SheetSurface + ?Sized>(
        &mut self,
        controller: &SheetController<P>,
        surface: &mut S,
        sample: &PanSample,
        swipe: f64,
    ) -> DragOutcome {
        let Gesture::Active { start, current, .. } = &mut self.gesture else {
            return ignore(DragIgnored::Cancelled);
        };
        let location = sample.location;
        // `Began` arrives after the first move; its translation leads back to the press.
        let start = if sample.phase == PanPhase::Began {
            *start.insert(location - sample.translation)
        } else {
            *start.get_or_insert(location)
        };
        *current = Some(location);

        let rendered = surface.rendered_height();
        if rendered == controller.min_height() && swipe < 0.0 {
            return ignore(DragIgnored::AtFloor);
        }
        if rendered == controller.max_height() && swipe > 0.0 {
            return ignore(DragIgnored::AtCeiling);
        }

        let height = rendered + (start.y - location.y);
        surface.set_live_height(height);
        DragOutcome::Resized { height }
    }

    /// Abandon the gesture in flight, if any.
    ///
    /// Further `Changed`/`Ended` samples are ignored until the next `Began`.
    pub fn cancel(&mut self) {
        if matches!(self.gesture, Gesture::Active { .. }) {
            self.gesture = Gesture::Cancelled;
        }
    }

    /// Returns `true` while a gesture is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self.gesture, Gesture::Active { .. })
    }

    /// Location the current gesture's height offsets are measured from.
    #[must_use]
    pub fn start_location(&self) -> Option<Point> {
        match self.gesture {
            Gesture::Active { start, .. } => start,
            Gesture::Idle | Gesture::Cancelled => None,
        }
    }

    /// Most recent location accepted for the current gesture.
    #[must_use]
    pub fn current_location(&self) -> Option<Point> {
        match self.gesture {
            Gesture::Active { current, .. } => current,
            Gesture::Idle | Gesture::Cancelled => None,
        }
    }
}

fn ignore(reason: DragIgnored) -> DragOutcome {
    #[cfg(feature = "tracing")]
    tracing::trace!(?reason, "pan sample ignored");
    DragOutcome::Ignored(reason)
}
