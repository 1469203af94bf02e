// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet states and the sorted configuration they form.
//!
//! A [`SheetState`] pairs a resting height with an optional content provider.
//! A [`SheetConfig`] holds every state a sheet may rest at, sorted ascending by
//! height. Index `0` is always the smallest height and the last index the largest.
//!
//! ```
//! use understory_sheet::{SheetConfig, SheetState};
//!
//! let config = SheetConfig::new([
//!     SheetState::new("details", 600.0),
//!     SheetState::new("peek", 100.0),
//!     SheetState::new("summary", 300.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(config.heights().collect::<Vec<_>>(), [100.0, 300.0, 600.0]);
//! assert_eq!(config.first().content(), Some(&"peek"));
//! ```

use smallvec::SmallVec;
use thiserror::Error;

/// Inline capacity of a [`SheetConfig`]; most sheets have two to four states.
pub const INLINE_STATES: usize = 4;

/// One resting height of a sheet together with the content shown at that height.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetState<P> {
    content: Option<P>,
    height: f64,
}

impl<P> SheetState<P> {
    /// Creates a state showing `content` at `height`.
    #[must_use]
    pub const fn new(content: P, height: f64) -> Self {
        Self {
            content: Some(content),
            height,
        }
    }

    /// Creates a state with no content provider.
    #[must_use]
    pub const fn without_content(height: f64) -> Self {
        Self {
            content: None,
            height,
        }
    }

    /// Resting height of this state.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Content provider for this state, if any.
    #[must_use]
    pub const fn content(&self) -> Option<&P> {
        self.content.as_ref()
    }

    /// Mutable access to the content provider.
    ///
    /// Content providers are opaque to the sheet; render adapters may need to
    /// mutate them (for example to deliver row interactions).
    pub fn content_mut(&mut self) -> Option<&mut P> {
        self.content.as_mut()
    }
}

/// Errors produced while building a [`SheetConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No states were supplied.
    #[error("a sheet needs at least one state")]
    Empty,
    /// A state's height was NaN or infinite.
    #[error("state {index} has a non-finite height")]
    NonFiniteHeight {
        /// Position of the offending state in the caller's input.
        index: usize,
    },
}

/// The states of a sheet, sorted ascending by height.
///
/// Sorting is stable: states with equal heights keep the order the caller gave
/// them in. Duplicate heights are accepted, but only the first of a group of
/// equal heights can ever be selected by nearest-height resolution.
#[derive(Clone, Debug)]
pub struct SheetConfig<P> {
    states: SmallVec<[SheetState<P>; INLINE_STATES]>,
}

impl<P> SheetConfig<P> {
    /// Builds a configuration from states in any order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] if `states` yields nothing, and
    /// [`ConfigError::NonFiniteHeight`] if any height is NaN or infinite.
    pub fn new(states: impl IntoIterator<Item = SheetState<P>>) -> Result<Self, ConfigError> {
        let mut states: SmallVec<[SheetState<P>; INLINE_STATES]> = states.into_iter().collect();
        if states.is_empty() {
            return Err(ConfigError::Empty);
        }
        if let Some(index) = states.iter().position(|s| !s.height.is_finite()) {
            return Err(ConfigError::NonFiniteHeight { index });
        }
        states.sort_by(|a, b| a.height.total_cmp(&b.height));
        Ok(Self { states })
    }

    /// Number of states; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`; a configuration cannot be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Index of the largest-height state.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.states.len() - 1
    }

    /// Returns the state at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SheetState<P>> {
        self.states.get(index)
    }

    /// Mutable access to the state at `index`, if in range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut SheetState<P>> {
        self.states.get_mut(index)
    }

    /// All states in ascending height order.
    #[must_use]
    pub fn states(&self) -> &[SheetState<P>] {
        &self.states
    }

    /// The smallest-height state.
    #[must_use]
    pub fn first(&self) -> &SheetState<P> {
        &self.states[0]
    }

    /// The largest-height state.
    #[must_use]
    pub fn last(&self) -> &SheetState<P> {
        &self.states[self.last_index()]
    }

    /// Smallest configured height.
    #[must_use]
    pub fn min_height(&self) -> f64 {
        self.first().height
    }

    /// Largest configured height.
    #[must_use]
    pub fn max_height(&self) -> f64 {
        self.last().height
    }

    /// Iterates the configured heights in ascending order.
    pub fn heights(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.states.iter().map(|s| s.height)
    }
}
