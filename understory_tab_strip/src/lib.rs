// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tab_strip --heading-base-level=0

//! Understory Tab Strip: page-transition tracking for pager indicator strips.
//!
//! A paged scroll container reports its position as a stream of
//! `(page index, fractional offset)` samples. An indicator strip (tab
//! underline, dot row, sliding highlight) wants something more useful: which
//! two pages it is moving between, in which direction, and how far along. This
//! crate derives exactly that, and nothing else. It does not draw, measure, or
//! recognize gestures.
//!
//! The pieces are:
//!
//! - [`tracker`]: the [`TransitionTracker`] state machine that classifies each
//!   sample as a left or right [`Transition`], resolving the ambiguity of
//!   offsets that sit exactly on a page boundary.
//! - [`jump`]: the [`JumpCoordinator`], which turns explicit selections into a
//!   reselect, an instant jump, or an animated scroll request.
//! - [`observer`]: the [`PageObserver`] trait and ordered fan-out.
//! - [`strip`]: the [`TabStrip`] façade that binds one [`ScrollSource`] and one
//!   [`PageDataset`], and routes host events through the other three.
//! - [`offset`]: small helpers for validating and snapping offsets.
//!
//! ## Minimal example
//!
//! The tracker can be used on its own:
//!
//! ```rust
//! use understory_tab_strip::{Sample, Transition, TransitionTracker};
//!
//! let mut tracker = TransitionTracker::new();
//! let samples = [(0, 0.0), (0, 0.3), (0, 0.7), (1, 0.0)];
//!
//! let transitions: Vec<Transition> = samples
//!     .into_iter()
//!     .filter_map(|(page, offset)| tracker.observe(Sample::new(page, offset).unwrap()))
//!     .collect();
//!
//! assert_eq!(
//!     transitions,
//!     [
//!         Transition::right(0, 0.3),
//!         Transition::right(0, 0.7),
//!         // Arriving on page 1 completes the 0 -> 1 pair.
//!         Transition::right(0, 1.0),
//!     ]
//! );
//! ```
//!
//! See [`strip`] for wiring a pager, a dataset and observers together.
//!
//! ## Threading
//!
//! Everything here is single threaded and synchronous. Observers run inline
//! and may queue further selections through [`Requests`]; those run after the
//! notification that queued them.
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `serde`: `Serialize`/`Deserialize` for [`SavedState`], [`ScrollState`],
//!   [`Transition`] and [`Direction`].
//!
//! Diagnostics are emitted through `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
pub mod jump;
pub mod observer;
pub mod offset;
pub mod strip;
pub mod tracker;

pub use error::TabStripError;
pub use jump::{JumpCoordinator, JumpDecision, SelectionRequest};
pub use observer::{ObserverId, Observers, PageObserver, Requests};
pub use strip::{
    ItemClickListener, PageDataset, SavedState, ScrollSource, ScrollState, TabStrip,
    TabStripConfig,
};
pub use tracker::{Direction, Sample, Transition, TransitionTracker};
