// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless bottom sheet.
//!
//! Drive a three-state sheet with synthetic pointer input and a render adapter
//! that just prints what it would draw. Set `RUST_LOG=understory_sheet=trace`
//! to see the sheet's own events.
//!
//! Run:
//! - `cargo run -p understory_sheet_demos --example sheet_headless`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_event_state::pan::PanRecognizer;
use understory_sheet::{Sheet, SheetContent, SheetState, SheetSurface};
use understory_sheet_demos::{Renderer, Screen, places};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut sheet = Sheet::from_states([
        SheetState::new(places("nearby", &["Harbor Cafe", "Pier 7"]), 120.0),
        SheetState::new(
            places("details", &["Harbor Cafe", "Pier 7", "Old Mill", "Station"]),
            320.0,
        ),
        SheetState::new(
            places(
                "everything",
                &["Harbor Cafe", "Pier 7", "Old Mill", "Station", "Lighthouse", "Market"],
            ),
            640.0,
        ),
    ])
    .expect("three finite heights");

    let screen = Rc::new(RefCell::new(Screen {
        height: sheet.initial_height(),
        title: "nearby",
        scroll_enabled: false,
    }));
    let committed = screen.clone();
    sheet.set_on_state_change(move |state, allow_inner_scroll| {
        // A real renderer would animate to the new height here.
        let mut screen = committed.borrow_mut();
        screen.height = state.height();
        screen.title = state.content().map_or("", |p| p.title);
        screen.scroll_enabled = allow_inner_scroll;
        println!(
            "  -> state {:?} at {:.0} (scroll {})",
            screen.title, screen.height, screen.scroll_enabled
        );
    });
    let mut renderer = Renderer(screen.clone());
    tracing::info!(states = sheet.controller().len(), "sheet ready");

    println!("drag up from the peek state");
    let mut pan = PanRecognizer::default();
    let mut t = 0;
    let mut y = 20.0;
    pan.begin(Point::new(0.0, y), t);
    for step in 1..=12 {
        t += 16;
        // Sheet-local: the finger stays near the top edge while the sheet grows.
        let growth = renderer.rendered_height() - 120.0;
        y = 20.0 - f64::from(step) * 20.0 + growth;
        if let Some(sample) = pan.update(Point::new(0.0, y), t) {
            sheet.handle_pan(&mut renderer, &sample);
        }
    }
    if let Some(sample) = pan.end(Point::new(0.0, y), t + 16) {
        let outcome = sheet.handle_pan(&mut renderer, &sample);
        println!("release: {outcome:?}");
    }

    if let Some(places) = sheet.controller_mut().current_content_mut() {
        places.activate_row(2);
    }

    println!("jump to the tallest state and over-scroll the list");
    sheet.set_position(2);
    for pull in [30.0, 90.0, 90.0, 90.0] {
        // Read the height first; the callback needs the screen mutably.
        let container_height = screen.borrow().height;
        let stepped = sheet.handle_overscroll(pull, container_height);
        println!("pull {pull:.0}: stepped back = {stepped}");
    }

    let screen = screen.borrow();
    println!(
        "final: {:?} at {:.0}, index {}, scroll {}",
        screen.title,
        screen.height,
        sheet.current_index(),
        screen.scroll_enabled
    );
}
