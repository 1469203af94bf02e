// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sheet state machine: current state, nearest-height snapping, and change notification.
//!
//! [`SheetController`] owns a [`SheetConfig`] and the index of the state the sheet
//! currently rests at. It starts at index `0` (the smallest height) and only
//! moves through [`SheetController::set_position`], which every other operation
//! funnels into.
//!
//! ## Notification
//!
//! A single callback slot receives `(new_state, should_allow_inner_scroll)` each
//! time the index actually changes. Registering a new callback replaces the old
//! one. Setting the index to its current value never notifies.
//!
//! ## Revision
//!
//! Every committed change bumps [`SheetController::revision`]. Gesture consumers
//! record the revision when a drag begins and treat any later mismatch as a
//! cancellation; see [`DragInterpreter`](crate::DragInterpreter).
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_sheet::{SheetController, SheetState};
//!
//! let mut sheet = SheetController::from_states([
//!     SheetState::without_content(100.0),
//!     SheetState::without_content(300.0),
//!     SheetState::<()>::without_content(600.0),
//! ])
//! .unwrap();
//!
//! let seen = Rc::new(Cell::new(None));
//! let sink = seen.clone();
//! sheet.set_on_state_change(move |state, allow_scroll| {
//!     sink.set(Some((state.height(), allow_scroll)));
//! });
//!
//! // Released at 250: 300 is the closest height.
//! assert_eq!(sheet.resolve_nearest(250.0), 1);
//! assert_eq!(seen.get(), Some((300.0, false)));
//!
//! // Only the tallest state lets the inner list scroll.
//! sheet.set_position(2);
//! assert_eq!(seen.get(), Some((600.0, true)));
//! ```

use alloc::boxed::Box;
use core::fmt;

use thiserror::Error;

use crate::config::{ConfigError, SheetConfig, SheetState};

/// Error returned by [`SheetController::try_set_position`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum PositionError {
    /// The index does not name a configured state.
    #[error("state index {index} is out of range for {len} states")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of configured states.
        len: usize,
    },
}

type StateChangeFn<P> = Box<dyn FnMut(&SheetState<P>, bool)>;

/// Owns the configured states and the index of the current one.
pub struct SheetController<P> {
    config: SheetConfig<P>,
    current: usize,
    revision: u64,
    on_state_change: Option<StateChangeFn<P>>,
}

impl<P: fmt::Debug> fmt::Debug for SheetController<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetController")
            .field("config", &self.config)
            .field("current", &self.current)
            .field("revision", &self.revision)
            .field("on_state_change", &self.on_state_change.is_some())
            .finish()
    }
}

impl<P> SheetController<P> {
    /// Creates a controller resting at the smallest state.
    #[must_use]
    pub fn new(config: SheetConfig<P>) -> Self {
        Self {
            config,
            current: 0,
            revision: 0,
            on_state_change: None,
        }
    }

    /// Builds the configuration from `states` and wraps it in a controller.
    ///
    /// # Errors
    ///
    /// Propagates the [`ConfigError`] from [`SheetConfig::new`].
    pub fn from_states(
        states: impl IntoIterator<Item = SheetState<P>>,
    ) -> Result<Self, ConfigError> {
        SheetConfig::new(states).map(Self::new)
    }

    /// Registers the state-change callback, replacing any previous one.
    pub fn set_on_state_change(&mut self, f: impl FnMut(&SheetState<P>, bool) + 'static) {
        self.on_state_change = Some(Box::new(f));
    }

    /// Removes the state-change callback.
    pub fn clear_on_state_change(&mut self) {
        self.on_state_change = None;
    }

    /// Returns `true` if a state-change callback is registered.
    #[must_use]
    pub fn has_state_change_callback(&self) -> bool {
        self.on_state_change.is_some()
    }

    /// Moves to state `index`.
    ///
    /// Returns `true` and notifies the callback exactly once if the index changed.
    /// Returns `false` without notifying if `index` is already current.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid state index. Use
    /// [`SheetController::try_set_position`] for unchecked input.
    pub fn set_position(&mut self, index: usize) -> bool {
        let len = self.config.len();
        assert!(
            index < len,
            "state index {index} is out of range for {len} states"
        );
        if index == self.current {
            return false;
        }
        self.current = index;
        self.revision += 1;

        let allow_inner_scroll = self.should_allow_inner_scroll();
        let state = &self.config.states()[index];
        #[cfg(feature = "tracing")]
        tracing::debug!(
            index,
            height = state.height(),
            allow_inner_scroll,
            revision = self.revision,
            "sheet state changed"
        );
        if let Some(f) = self.on_state_change.as_mut() {
            f(state, allow_inner_scroll);
        }
        true
    }

    /// Like [`SheetController::set_position`] but reports a bad index instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::OutOfRange`] if `index` is not a valid state index.
    pub fn try_set_position(&mut self, index: usize) -> Result<bool, PositionError> {
        let len = self.config.len();
        if index >= len {
            #[cfg(feature = "tracing")]
            tracing::warn!(index, len, "rejected out-of-range sheet state");
            return Err(PositionError::OutOfRange { index, len });
        }
        Ok(self.set_position(index))
    }

    /// Index of the state whose height is closest to `target`.
    ///
    /// Ties go to the earlier (smaller-height) state. A NaN `target` resolves to `0`.
    #[must_use]
    pub fn nearest_index(&self, target: f64) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (index, height) in self.config.heights().enumerate() {
            let distance = if height > target {
                height - target
            } else {
                target - height
            };
            // Strict comparison keeps the first of equally distant states.
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        best
    }

    /// Snaps to the state closest to `target` and returns its index.
    ///
    /// This is the commit step at the end of a drag: `target` is the height the
    /// sheet was left at.
    pub fn resolve_nearest(&mut self, target: f64) -> usize {
        let index = self.nearest_index(target);
        self.set_position(index);
        index
    }

    /// Moves one state toward the smaller height.
    ///
    /// Returns `false` (and does nothing) when already at the smallest state.
    pub fn step_back(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(previous) => self.set_position(previous),
            None => false,
        }
    }

    /// Index of the current state.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The current state.
    #[must_use]
    pub fn current_state(&self) -> &SheetState<P> {
        &self.config.states()[self.current]
    }

    /// Mutable access to the current state's content, if any.
    pub fn current_content_mut(&mut self) -> Option<&mut P> {
        self.config
            .get_mut(self.current)
            .and_then(SheetState::content_mut)
    }

    /// `true` only at the tallest state, where inner content may scroll.
    ///
    /// At any smaller height a vertical pan on the content must resize the sheet
    /// instead, since the two gestures cannot be told apart.
    #[must_use]
    pub fn should_allow_inner_scroll(&self) -> bool {
        self.current == self.config.last_index()
    }

    /// `true` at the smallest state.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current == 0
    }

    /// `true` at the tallest state.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.should_allow_inner_scroll()
    }

    /// Number of committed index changes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The configured states.
    #[must_use]
    pub fn config(&self) -> &SheetConfig<P> {
        &self.config
    }

    /// Number of configured states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.config.len()
    }

    /// Always `false`; see [`SheetConfig::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.config.is_empty()
    }

    /// Smallest configured height.
    #[must_use]
    pub fn min_height(&self) -> f64 {
        self.config.min_height()
    }

    /// Largest configured height.
    #[must_use]
    pub fn max_height(&self) -> f64 {
        self.config.max_height()
    }
}
