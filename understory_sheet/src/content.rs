// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-state list content.
//!
//! Each [`SheetState`](crate::SheetState) may carry a content provider. The sheet
//! core only stores and forwards it; render adapters use it to populate the
//! list hosted inside the sheet. [`SheetContent`] bundles the data side (how many
//! rows, how tall) and the interaction side (what happens when a row is
//! activated) into one trait so a single value can back a whole state.
//!
//! ```
//! use understory_sheet::SheetContent;
//!
//! struct Stops {
//!     names: Vec<&'static str>,
//!     picked: Option<usize>,
//! }
//!
//! impl SheetContent for Stops {
//!     fn row_count(&self) -> usize {
//!         self.names.len()
//!     }
//!
//!     fn activate_row(&mut self, row: usize) {
//!         self.picked = Some(row);
//!     }
//! }
//!
//! let mut stops = Stops { names: vec!["Ferry", "Depot"], picked: None };
//! assert_eq!(stops.content_extent(), 88.0);
//! stops.activate_row(1);
//! assert_eq!(stops.picked, Some(1));
//! ```

use alloc::boxed::Box;

/// Default row extent used by [`SheetContent::row_extent`].
pub const DEFAULT_ROW_EXTENT: f64 = 44.0;

/// List data and row interaction for one sheet state.
pub trait SheetContent {
    /// Number of rows to show.
    fn row_count(&self) -> usize;

    /// Extent of `row` along the list axis.
    fn row_extent(&self, row: usize) -> f64 {
        let _ = row;
        DEFAULT_ROW_EXTENT
    }

    /// Called when the user activates `row`.
    fn activate_row(&mut self, row: usize) {
        let _ = row;
    }

    /// Sum of all row extents.
    fn content_extent(&self) -> f64 {
        (0..self.row_count()).map(|row| self.row_extent(row)).sum()
    }
}

impl<C: SheetContent + ?Sized> SheetContent for Box<C> {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn row_extent(&self, row: usize) -> f64 {
        (**self).row_extent(row)
    }

    fn activate_row(&mut self, row: usize) {
        (**self).activate_row(row);
    }

    fn content_extent(&self) -> f64 {
        (**self).content_extent()
    }
}
