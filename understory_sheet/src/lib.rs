// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sheet --heading-base-level=0

//! Understory Sheet: a headless drag-to-snap state machine for bottom sheets.
//!
//! A bottom sheet rests at one of several configured heights ("states"). The user
//! drags it between them, and on release it snaps to the nearest one. Each state
//! can carry its own list content, and only the tallest state lets that list
//! scroll; at smaller heights a vertical pan resizes the sheet instead.
//!
//! This crate models exactly that decision logic:
//!
//! - [`SheetConfig`]: the states, sorted ascending by height.
//! - [`SheetController`]: the current state, nearest-height snapping, and a
//!   single state-change callback.
//! - [`DragInterpreter`]: consumes [`PanSample`](understory_event_state::pan::PanSample)s,
//!   proposes live heights while dragging, and snaps on release.
//! - [`OverscrollCoupling`]: steps the sheet down one state when its inner list
//!   is pulled past the top.
//! - [`Sheet`]: the three above bundled for hosts that want one value per sheet.
//!
//! The crate does not draw, animate, or lay anything out. A host's render adapter
//! implements [`SheetSurface`] so the drag interpreter can read and live-update
//! the rendered height, and applies committed changes (animated height, content
//! swap, scroll enablement) from the state-change callback.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use understory_event_state::pan::PanRecognizer;
//! use understory_sheet::{DragOutcome, FixedSurface, Sheet, SheetState};
//!
//! let mut sheet = Sheet::from_states([
//!     SheetState::new("peek", 100.0),
//!     SheetState::new("half", 300.0),
//!     SheetState::new("full", 600.0),
//! ])
//! .unwrap();
//!
//! // The render adapter learns about committed states through the callback.
//! let committed = Rc::new(Cell::new(None));
//! let sink = committed.clone();
//! sheet.set_on_state_change(move |state, _allow_inner_scroll| {
//!     sink.set(Some(state.height()));
//! });
//! let mut surface = FixedSurface::new(sheet.initial_height());
//!
//! // Drag the sheet up; locations are sheet-local.
//! let mut pan = PanRecognizer::default();
//! pan.begin(Point::new(0.0, 10.0), 0);
//!
//! // The first move is reported as `Began` and already follows the finger.
//! let began = pan.update(Point::new(0.0, -20.0), 50).unwrap();
//! assert_eq!(sheet.handle_pan(&mut surface, &began), DragOutcome::Resized { height: 130.0 });
//!
//! // 180 above the press on screen; the sheet grew by 30, so locally that is -140.
//! let moved = pan.update(Point::new(0.0, -140.0), 100).unwrap();
//! assert_eq!(sheet.handle_pan(&mut surface, &moved), DragOutcome::Resized { height: 280.0 });
//!
//! let ended = pan.end(Point::new(0.0, -140.0), 140).unwrap();
//! let out = sheet.handle_pan(&mut surface, &ended);
//!
//! assert_eq!(out, DragOutcome::Snapped { index: 1, changed: true });
//! assert_eq!(committed.get(), Some(300.0));
//! assert_eq!(sheet.current_state().content(), Some(&"half"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to Kurbo.
//! - `libm`: forwards `libm` to Kurbo for `no_std` builds.
//! - `tracing`: emit [`tracing`](https://docs.rs/tracing) events for committed
//!   state changes, over-scroll steps, and ignored pan samples.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod content;
mod controller;
mod drag;
mod overscroll;
mod sheet;
mod surface;

pub use config::{ConfigError, INLINE_STATES, SheetConfig, SheetState};
pub use content::{DEFAULT_ROW_EXTENT, SheetContent};
pub use controller::{PositionError, SheetController};
pub use drag::{DragIgnored, DragInterpreter, DragOutcome};
pub use overscroll::{DEFAULT_OVERSCROLL_FRACTION, OverscrollCoupling, amount_from_content_offset};
pub use sheet::Sheet;
pub use surface::{FixedSurface, SheetSurface};
