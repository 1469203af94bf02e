// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the `understory_sheet` demos: a list content provider and
//! a render adapter that records what it would draw.

use std::cell::RefCell;
use std::rc::Rc;

use understory_sheet::{SheetContent, SheetSurface};

/// A named list of places; the data and interaction side of one sheet state.
#[derive(Debug)]
pub struct Places {
    /// Title shown above the list.
    pub title: &'static str,
    /// One row per place.
    pub names: Vec<&'static str>,
}

impl SheetContent for Places {
    fn row_count(&self) -> usize {
        self.names.len()
    }

    fn activate_row(&mut self, row: usize) {
        if let Some(name) = self.names.get(row) {
            println!("  [{}] tapped {name}", self.title);
        }
    }
}

/// Builds a [`Places`] list.
pub fn places(title: &'static str, names: &[&'static str]) -> Places {
    Places {
        title,
        names: names.to_vec(),
    }
}

/// What the renderer currently shows.
#[derive(Debug, Default)]
pub struct Screen {
    /// Rendered sheet height.
    pub height: f64,
    /// Title of the content on screen.
    pub title: &'static str,
    /// Whether the inner list accepts scrolling.
    pub scroll_enabled: bool,
}

/// Render adapter: live drag heights go straight to the screen; committed
/// states arrive through the sheet's callback.
#[derive(Debug, Clone)]
pub struct Renderer(pub Rc<RefCell<Screen>>);

impl SheetSurface for Renderer {
    fn rendered_height(&self) -> f64 {
        self.0.borrow().height
    }

    fn set_live_height(&mut self, height: f64) {
        self.0.borrow_mut().height = height;
        println!("  live height {height:.0}");
    }
}
