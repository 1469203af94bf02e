// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Over-scroll coupling between the inner list and the sheet.
//!
//! Once the sheet rests at its tallest state the inner list owns vertical pans.
//! To get back out, the user scrolls the list to its top and keeps pulling. When
//! that pull exceeds a fraction of the container's height, [`OverscrollCoupling`]
//! steps the sheet down by exactly one state.

use crate::controller::SheetController;

/// Fraction of the container height the list must be pulled past its top edge.
pub const DEFAULT_OVERSCROLL_FRACTION: f64 = 0.12;

/// Converts a top-edge content offset (negative when pulled past the top) into a pull distance.
///
/// Platforms that report over-scroll as a negative content offset, such as
/// `UIKit`'s `contentOffset.y`, should pass their offset through this.
#[must_use]
pub fn amount_from_content_offset(offset_y: f64) -> f64 {
    -offset_y
}

/// Decides when an over-scrolled inner list should shrink the sheet.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverscrollCoupling {
    threshold_fraction: f64,
}

impl Default for OverscrollCoupling {
    fn default() -> Self {
        Self::new()
    }
}

impl OverscrollCoupling {
    /// Creates a coupling with [`DEFAULT_OVERSCROLL_FRACTION`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            threshold_fraction: DEFAULT_OVERSCROLL_FRACTION,
        }
    }

    /// Creates a coupling that triggers past `fraction` of the container height.
    ///
    /// # Panics
    ///
    /// Panics if `fraction` is negative or not finite.
    #[must_use]
    pub fn with_threshold(fraction: f64) -> Self {
        assert!(
            fraction.is_finite() && fraction >= 0.0,
            "over-scroll threshold must be finite and non-negative, got {fraction}"
        );
        Self {
            threshold_fraction: fraction,
        }
    }

    /// The configured fraction.
    #[must_use]
    pub fn threshold_fraction(&self) -> f64 {
        self.threshold_fraction
    }

    /// Returns `true` if pulling `amount` past the top of a `container_height`
    /// tall list crosses the threshold.
    #[must_use]
    pub fn exceeds(&self, amount: f64, container_height: f64) -> bool {
        amount > container_height * self.threshold_fraction
    }

    /// Steps `controller` back one state if `amount` crosses the threshold.
    ///
    /// Returns `true` if the state changed. At the smallest state this is always
    /// a no-op.
    pub fn handle<P>(
        &self,
        controller: &mut SheetController<P>,
        amount: f64,
        container_height: f64,
    ) -> bool {
        if !self.exceeds(amount, container_height) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            amount,
            container_height,
            from = controller.current_index(),
            "inner list over-scrolled"
        );
        controller.step_back()
    }
}
