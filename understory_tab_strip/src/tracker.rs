// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition tracker: turn pager scroll samples into directed page transitions.
//!
//! ## Usage
//!
//! 1) Feed every `(position, offset)` pair reported by the pager into
//!    [`TransitionTracker::observe`].
//! 2) Forward the returned [`Transition`], if any, to whatever animates the
//!    indicator.
//! 3) Call [`TransitionTracker::jump_to`] when the pager changes page without
//!    scrolling, and [`TransitionTracker::reset`] when the pager is rebound.
//!
//! The first sample after a reset only primes the tracker; it never produces
//! a transition.
//!
//! ## Minimal example
//!
//! ```
//! use understory_tab_strip::tracker::{Direction, Sample, TransitionTracker};
//!
//! let mut tracker = TransitionTracker::new();
//!
//! // Primes the tracker.
//! assert!(tracker.observe(Sample::new(0, 0.0).unwrap()).is_none());
//!
//! // Dragging toward page 1.
//! let t = tracker.observe(Sample::new(0, 0.4).unwrap()).unwrap();
//! assert_eq!(t.direction, Direction::Right);
//! assert_eq!((t.current, t.next), (0, 1));
//! assert_eq!(t.progress, 0.4);
//! ```

use crate::TabStripError;
use crate::offset::{SNAP_THRESHOLD, check_offset, offset_or_one, snap_boundary};

/// Direction of a page transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Moving from a page toward the one before it.
    Left,
    /// Moving from a page toward the one after it.
    Right,
}

/// A directed transition between two adjacent pages.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Which way the indicator is moving.
    pub direction: Direction,
    /// Page the transition starts from.
    pub current: usize,
    /// Page the transition heads toward.
    pub next: usize,
    /// Raw pager offset within the pair, in `[0, 1]`.
    ///
    /// For [`Direction::Right`] this grows toward `1` as `next` comes into
    /// view. For [`Direction::Left`] it shrinks toward `0`.
    pub progress: f32,
}

impl Transition {
    /// Transition from `base` toward `base + 1`.
    #[must_use]
    pub fn right(base: usize, progress: f32) -> Self {
        Self {
            direction: Direction::Right,
            current: base,
            next: base + 1,
            progress,
        }
    }

    /// Transition from `base + 1` back toward `base`.
    #[must_use]
    pub fn left(base: usize, progress: f32) -> Self {
        Self {
            direction: Direction::Left,
            current: base + 1,
            next: base,
            progress,
        }
    }
}

/// One pager scroll sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Index of the page at the leading edge of the viewport.
    pub position: usize,
    /// Fraction of the way toward `position + 1`, in `[0, 1]`.
    pub offset: f32,
    /// Emit a transition even if the offset did not change.
    pub force: bool,
}

impl Sample {
    /// Creates a sample, validating the offset.
    pub fn new(position: usize, offset: f32) -> Result<Self, TabStripError> {
        Ok(Self {
            position,
            offset: check_offset(offset)?,
            force: false,
        })
    }

    /// Creates a sample that bypasses the unchanged-offset short circuit.
    pub fn forced(position: usize, offset: f32) -> Result<Self, TabStripError> {
        let mut sample = Self::new(position, offset)?;
        sample.force = true;
        Ok(sample)
    }
}

/// Remembers the last pager sample and classifies new ones.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionTracker {
    last_position: usize,
    /// `None` until the first sample after a reset.
    last_offset: Option<f32>,
    current: usize,
}

impl TransitionTracker {
    /// Creates a tracker with no remembered sample, positioned at page `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_position: 0,
            last_offset: None,
            current: 0,
        }
    }

    /// Last page index observed.
    #[must_use]
    pub fn last_position(&self) -> usize {
        self.last_position
    }

    /// Last raw offset observed, or `None` if nothing was observed since a reset.
    #[must_use]
    pub fn last_offset(&self) -> Option<f32> {
        self.last_offset
    }

    /// The `current` page of the most recent transition or jump.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Page the pager is closest to showing, judged from the remembered sample.
    ///
    /// A settled sample `(k, 0)` gives `k`; past [`SNAP_THRESHOLD`] the
    /// following page wins. `None` until a sample is remembered.
    #[must_use]
    pub fn nearest_page(&self) -> Option<usize> {
        let offset = self.last_offset?;
        if offset >= SNAP_THRESHOLD {
            Some(self.last_position + 1)
        } else {
            Some(self.last_position)
        }
    }

    /// Forgets the remembered sample.
    ///
    /// The next sample primes the tracker again. [`current`](Self::current)
    /// is kept so callers can tell whether the rebound pager sits elsewhere.
    pub fn reset(&mut self) {
        self.last_position = 0;
        self.last_offset = None;
    }

    /// Records an instant move to `position`, settled with offset `0`.
    pub fn jump_to(&mut self, position: usize) {
        self.current = position;
        self.last_position = position;
        self.last_offset = Some(0.0);
    }

    /// Classifies `sample` against the remembered state.
    ///
    /// Returns `None` for the priming sample after a reset and for samples
    /// whose offset matches the remembered one (unless `force` is set).
    pub fn observe(&mut self, sample: Sample) -> Option<Transition> {
        let remembered = *self.last_offset.get_or_insert(sample.offset);
        if !sample.force && sample.offset == remembered {
            return None;
        }

        let remembered = snap_boundary(remembered, sample.offset);
        let offset = sample.offset;
        let transition = if sample.position > self.last_position {
            let base = sample.position - 1;
            // An equal remembered offset can only come out of the boundary
            // snap here; keep moving the way the index moved.
            if remembered >= offset {
                if offset == 0.0 {
                    Transition::right(base, 1.0)
                } else {
                    Transition::right(sample.position, offset)
                }
            } else {
                Transition::left(base, offset)
            }
        } else {
            let base = sample.position;
            if remembered > offset {
                Transition::left(base, offset)
            } else {
                Transition::right(base, offset_or_one(offset))
            }
        };

        self.current = transition.current;
        self.last_position = sample.position;
        self.last_offset = Some(sample.offset);
        Some(transition)
    }
}
