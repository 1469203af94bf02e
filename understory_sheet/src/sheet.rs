// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Sheet`]: controller, drag interpreter, and over-scroll coupling in one value.

use understory_event_state::pan::PanSample;

use crate::config::{ConfigError, SheetConfig, SheetState};
use crate::controller::SheetController;
use crate::drag::{DragInterpreter, DragOutcome};
use crate::overscroll::OverscrollCoupling;
use crate::surface::SheetSurface;

/// A bottom sheet's complete interaction state.
///
/// Hosts typically own one `Sheet` per visual sheet, route pan samples to
/// [`Sheet::handle_pan`] and inner-list over-scroll to
/// [`Sheet::handle_overscroll`], and react to committed changes in the callback
/// registered with [`Sheet::set_on_state_change`].
#[derive(Debug)]
pub struct Sheet<P> {
    controller: SheetController<P>,
    drag: DragInterpreter,
    overscroll: OverscrollCoupling,
}

impl<P> Sheet<P> {
    /// Creates a sheet resting at the smallest state of `config`.
    #[must_use]
    pub fn new(config: SheetConfig<P>) -> Self {
        Self {
            controller: SheetController::new(config),
            drag: DragInterpreter::new(),
            overscroll: OverscrollCoupling::new(),
        }
    }

    /// Builds the configuration from `states` and wraps it in a sheet.
    ///
    /// # Errors
    ///
    /// Propagates the [`ConfigError`] from [`SheetConfig::new`].
    pub fn from_states(
        states: impl IntoIterator<Item = SheetState<P>>,
    ) -> Result<Self, ConfigError> {
        SheetConfig::new(states).map(Self::new)
    }

    /// Replaces the over-scroll coupling.
    #[must_use]
    pub fn with_overscroll(mut self, overscroll: OverscrollCoupling) -> Self {
        self.overscroll = overscroll;
        self
    }

    /// Registers the state-change callback, replacing any previous one.
    pub fn set_on_state_change(&mut self, f: impl FnMut(&SheetState<P>, bool) + 'static) {
        self.controller.set_on_state_change(f);
    }

    /// Feeds one pan sample through the drag interpreter.
    pub fn handle_pan<S: SheetSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        sample: &PanSample,
    ) -> DragOutcome {
        self.drag.handle(&mut self.controller, surface, sample)
    }

    /// Reports that the inner list was pulled `amount` past its top edge.
    ///
    /// Returns `true` if the sheet stepped back one state.
    pub fn handle_overscroll(&mut self, amount: f64, container_height: f64) -> bool {
        self.overscroll
            .handle(&mut self.controller, amount, container_height)
    }

    /// See [`SheetController::set_position`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid state index.
    pub fn set_position(&mut self, index: usize) -> bool {
        self.controller.set_position(index)
    }

    /// See [`SheetController::resolve_nearest`].
    pub fn resolve_nearest(&mut self, target: f64) -> usize {
        self.controller.resolve_nearest(target)
    }

    /// Abandons the drag in flight, if any.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Height the host should lay the sheet out at before any interaction.
    #[must_use]
    pub fn initial_height(&self) -> f64 {
        self.controller.min_height()
    }

    /// Index of the current state.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.controller.current_index()
    }

    /// The current state.
    #[must_use]
    pub fn current_state(&self) -> &SheetState<P> {
        self.controller.current_state()
    }

    /// `true` only at the tallest state.
    #[must_use]
    pub fn should_allow_inner_scroll(&self) -> bool {
        self.controller.should_allow_inner_scroll()
    }

    /// `true` while a drag gesture is being tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_tracking()
    }

    /// The underlying controller.
    #[must_use]
    pub fn controller(&self) -> &SheetController<P> {
        &self.controller
    }

    /// Mutable access to the underlying controller.
    ///
    /// Committing a change through it still cancels an in-flight drag.
    pub fn controller_mut(&mut self) -> &mut SheetController<P> {
        &mut self.controller
    }

    /// The over-scroll coupling in use.
    #[must_use]
    pub fn overscroll(&self) -> &OverscrollCoupling {
        &self.overscroll
    }
}
