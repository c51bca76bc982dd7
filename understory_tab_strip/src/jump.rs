// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jump coordinator: decide how an explicit page selection reaches the indicator.
//!
//! A selection either re-selects the page already shown, jumps there
//! instantly, or asks the pager to animate. Only the instant case touches the
//! [`TransitionTracker`]; an animated scroll produces samples of its own.
//!
//! ```
//! use understory_tab_strip::jump::{JumpCoordinator, JumpDecision, SelectionRequest};
//! use understory_tab_strip::tracker::TransitionTracker;
//!
//! let mut tracker = TransitionTracker::new();
//! let mut jumps = JumpCoordinator::new();
//!
//! let decision = jumps.request(SelectionRequest::instant(2), &mut tracker);
//! assert_eq!(decision, JumpDecision::Jump(2));
//! assert_eq!(tracker.current(), 2);
//!
//! let decision = jumps.request(SelectionRequest::instant(2), &mut tracker);
//! assert_eq!(decision, JumpDecision::Reselect(2));
//! ```

use crate::tracker::TransitionTracker;

/// An explicit request to show a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SelectionRequest {
    /// Page to show.
    pub index: usize,
    /// Let the pager animate through intermediate pages.
    pub animated: bool,
    /// Tell the item-click listener about the selection.
    pub notify: bool,
}

impl SelectionRequest {
    /// Non-animated request that notifies click listeners.
    #[must_use]
    pub const fn instant(index: usize) -> Self {
        Self {
            index,
            animated: false,
            notify: true,
        }
    }

    /// Animated request that notifies click listeners.
    #[must_use]
    pub const fn animated(index: usize) -> Self {
        Self {
            index,
            animated: true,
            notify: true,
        }
    }

    /// Non-animated request that stays silent, as used for restoring state.
    #[must_use]
    pub const fn silent(index: usize) -> Self {
        Self {
            index,
            animated: false,
            notify: false,
        }
    }
}

/// What a [`SelectionRequest`] turned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JumpDecision {
    /// The page was already selected. Nothing moves.
    Reselect(usize),
    /// Tracker memory was reset; announce a jump and scroll without animation.
    Jump(usize),
    /// Ask the pager for an animated scroll; its samples drive the transition.
    Scroll(usize),
}

impl JumpDecision {
    /// Target page of the decision.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Reselect(index) | Self::Jump(index) | Self::Scroll(index) => index,
        }
    }
}

/// Tracks the selected page and routes selections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JumpCoordinator {
    selected: Option<usize>,
    reselected: bool,
}

impl JumpCoordinator {
    /// Creates a coordinator with nothing selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: None,
            reselected: false,
        }
    }

    /// The selected page, if known.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the last [`request`](Self::request) hit the already selected page.
    #[must_use]
    pub fn last_was_reselect(&self) -> bool {
        self.reselected
    }

    /// Routes a selection.
    ///
    /// The caller is responsible for validating `request.index`.
    pub fn request(
        &mut self,
        request: SelectionRequest,
        tracker: &mut TransitionTracker,
    ) -> JumpDecision {
        let index = request.index;
        self.reselected = self.selected == Some(index);
        self.selected = Some(index);
        if self.reselected {
            JumpDecision::Reselect(index)
        } else if request.animated {
            JumpDecision::Scroll(index)
        } else {
            tracker.jump_to(index);
            JumpDecision::Jump(index)
        }
    }

    /// Records that the pager itself selected `index`.
    pub fn page_selected(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Resynchronizes with the pager after it was (re)bound.
    ///
    /// The tracker always ends up settled on `index`, so the next drag is
    /// measured from the pager's real page. Returns `true` if `index` differs
    /// from `shown`, the page the indicator displayed before.
    pub fn check_current(
        &mut self,
        index: usize,
        shown: usize,
        tracker: &mut TransitionTracker,
    ) -> bool {
        self.selected = Some(index);
        tracker.jump_to(index);
        index != shown
    }

    /// Resynchronizes after the dataset changed under the pager.
    ///
    /// Always resets the tracker onto `index`; pages between the old and new
    /// position may no longer exist.
    pub fn settle_at(&mut self, index: usize, tracker: &mut TransitionTracker) {
        self.selected = Some(index);
        tracker.jump_to(index);
    }

    /// Forgets the selection, as when the pager is unbound.
    pub fn clear(&mut self) {
        self.selected = None;
        self.reselected = false;
    }
}
