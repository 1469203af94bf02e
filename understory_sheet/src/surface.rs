// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render-side contract the drag interpreter drives.
//!
//! The sheet core never draws anything. During a drag it reads the height the
//! sheet is currently rendered at and pushes live, non-committing height updates
//! back to the renderer through [`SheetSurface`]. Committed changes arrive
//! separately through the controller's state-change callback, where a renderer
//! applies its own animation, swaps the content provider, and toggles whether the
//! inner list is scrollable.

/// Height read-back and live resize hooks implemented by a render adapter.
///
/// Implementations are borrowed for the duration of a single call; the sheet
/// never stores them.
pub trait SheetSurface {
    /// Height the sheet is rendered at right now, including any live drag offset.
    fn rendered_height(&self) -> f64;

    /// Apply an uncommitted height while a drag is in progress.
    ///
    /// This should take effect immediately, without animation.
    fn set_live_height(&mut self, height: f64);
}

impl<S: SheetSurface + ?Sized> SheetSurface for &mut S {
    fn rendered_height(&self) -> f64 {
        (**self).rendered_height()
    }

    fn set_live_height(&mut self, height: f64) {
        (**self).set_live_height(height);
    }
}

/// A surface that simply records the height it was last given.
///
/// Useful for headless hosts and tests: seed it with the first state's height,
/// and assign committed heights from the state-change callback.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FixedSurface {
    /// Current rendered height.
    pub height: f64,
}

impl FixedSurface {
    /// Creates a surface rendered at `height`.
    #[must_use]
    pub const fn new(height: f64) -> Self {
        Self { height }
    }
}

impl SheetSurface for FixedSurface {
    fn rendered_height(&self) -> f64 {
        self.height
    }

    fn set_live_height(&mut self, height: f64) {
        self.height = height;
    }
}
