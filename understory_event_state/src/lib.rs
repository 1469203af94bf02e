// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for UI interactions that
//! require stateful tracking across multiple events. Each module handles a
//! specific interaction pattern:
//!
//! - [`pan`]: Derive phased pan samples (translation and velocity) from raw pointer positions
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event routing or spatial query system
//!
//! The crate does not assume any particular UI framework or event system. The
//! managers accept raw positions and timestamps and produce values that
//! higher-level controllers (for example `understory_sheet`) interpret.
//!
//! ### Pan Gestures
//!
//! Use [`pan::PanRecognizer`] when the host only delivers raw pointer events:
//!
//! ```rust
//! # #[cfg(feature = "pan")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::pan::{PanPhase, PanRecognizer};
//!
//! let mut pan = PanRecognizer::default();
//! pan.begin(Point::new(0.0, 300.0), 0);
//!
//! // The first move is reported as `Began`, measured from the press.
//! let sample = pan.update(Point::new(0.0, 280.0), 16).unwrap();
//! assert_eq!(sample.phase, PanPhase::Began);
//! assert_eq!(sample.translation.y, -20.0);
//!
//! let sample = pan.update(Point::new(0.0, 270.0), 32).unwrap();
//! assert_eq!(sample.phase, PanPhase::Changed);
//! # }
//! ```
//!
//! Hosts with a platform recognizer can build [`pan::PanSample`] values directly.
//!
//! ## Features
//!
//! - `pan`: Enable pan gesture tracking (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible and does not allocate.

#![no_std]

#[cfg(feature = "pan")]
pub mod pan;
