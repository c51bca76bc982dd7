// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tab strip: binds one pager and one dataset and drives page observers.
//!
//! ## Usage
//!
//! 1) Implement [`ScrollSource`] for your pager and [`PageDataset`] for its
//!    pages, then [`TabStrip::bind`] them.
//! 2) Register [`PageObserver`]s with [`TabStrip::add_observer`].
//! 3) Forward pager events: [`TabStrip::on_page_scrolled`],
//!    [`TabStrip::on_page_selected`], [`TabStrip::on_scroll_state_changed`] and
//!    [`TabStrip::on_dataset_changed`].
//! 4) Route explicit selections through [`TabStrip::select`], or recognized
//!    taps through [`TabStrip::tap`] and friends.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_tab_strip::{
//!     PageDataset, PageObserver, Requests, ScrollSource, SelectionRequest, TabStrip,
//! };
//!
//! struct Pager { current: usize }
//! impl ScrollSource for Pager {
//!     fn current_item(&self) -> Option<usize> { Some(self.current) }
//!     fn scroll_to(&mut self, index: usize, _animated: bool) { self.current = index; }
//! }
//!
//! struct Pages(usize);
//! impl PageDataset for Pages {
//!     fn item_count(&self) -> usize { self.0 }
//!     fn item_label(&self, index: usize) -> Option<String> { Some(format!("Tab {index}")) }
//! }
//!
//! #[derive(Default)]
//! struct Underline { at: Rc<RefCell<f32>> }
//! impl PageObserver for Underline {
//!     fn on_jump(&mut self, to: usize, _: &mut Requests) { *self.at.borrow_mut() = to as f32; }
//!     fn on_right(&mut self, current: usize, _: usize, progress: f32, _: &mut Requests) {
//!         *self.at.borrow_mut() = current as f32 + progress;
//!     }
//! }
//!
//! let at = Rc::new(RefCell::new(0.0));
//! let mut strip = TabStrip::new();
//! strip.bind(Pager { current: 0 }, Some(Pages(4)));
//! strip.add_observer(Underline { at: at.clone() });
//!
//! strip.on_page_scrolled(0, 0.0).unwrap();
//! strip.on_page_scrolled(0, 0.5).unwrap();
//! assert_eq!(*at.borrow(), 0.5);
//!
//! strip.select(SelectionRequest::instant(3)).unwrap();
//! assert_eq!(*at.borrow(), 3.0);
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use tracing::{debug, trace, warn};

use crate::TabStripError;
use crate::jump::{JumpCoordinator, JumpDecision, SelectionRequest};
use crate::observer::{ObserverId, Observers, PageObserver, Requests};
use crate::tracker::{Sample, Transition, TransitionTracker};

/// The pager the strip follows.
///
/// Scroll samples are not pulled from the source; the host forwards them to
/// the strip's `on_*` methods.
pub trait ScrollSource {
    /// The page the pager is settled on, or `None` if it has no pages.
    fn current_item(&self) -> Option<usize>;

    /// Moves the pager to `index`, animating through intermediate pages if
    /// `animated` is set.
    fn scroll_to(&mut self, index: usize, animated: bool);
}

/// The pages shown by the pager.
pub trait PageDataset {
    /// Number of pages.
    fn item_count(&self) -> usize;

    /// Label for the tab at `index`.
    fn item_label(&self, index: usize) -> Option<String>;
}

/// Receives clicks on tab items.
///
/// All methods default to doing nothing.
pub trait ItemClickListener {
    /// A tab was selected by a click or a notifying [`SelectionRequest`].
    fn on_item_click(&mut self, index: usize) {
        let _ = index;
    }

    /// A confirmed single tap landed on the tab that was already selected.
    fn on_selected_click(&mut self, index: usize) {
        let _ = index;
    }

    /// A double tap landed on the strip while `index` was selected.
    fn on_double_click(&mut self, index: usize) {
        let _ = index;
    }
}

/// Scroll phase reported by the pager.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollState {
    /// Not moving.
    #[default]
    Idle,
    /// Following the user's finger.
    Dragging,
    /// Animating toward a final page.
    Settling,
}

/// The part of the strip worth persisting across instance recreation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedState {
    /// Page the indicator was showing.
    pub current: usize,
}

/// Interaction settings for a [`TabStrip`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TabStripConfig {
    /// Whether taps on tab items select pages.
    pub clickable: bool,
    /// Whether tap selections animate the pager.
    pub click_animated: bool,
}

/// Follows a pager and turns its motion into indicator notifications.
pub struct TabStrip<S, D> {
    source: Option<S>,
    dataset: Option<D>,
    tracker: TransitionTracker,
    jumps: JumpCoordinator,
    observers: Observers,
    click_listener: Option<Box<dyn ItemClickListener>>,
    scroll_state: ScrollState,
    config: TabStripConfig,
    pending_restore: Option<usize>,
}

impl<S, D> fmt::Debug for TabStrip<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabStrip")
            .field("bound", &self.source.is_some())
            .field("has_dataset", &self.dataset.is_some())
            .field("tracker", &self.tracker)
            .field("jumps", &self.jumps)
            .field("observers", &self.observers)
            .field("scroll_state", &self.scroll_state)
            .field("config", &self.config)
            .field("pending_restore", &self.pending_restore)
            .finish_non_exhaustive()
    }
}

impl<S, D> Default for TabStrip<S, D> {
    fn default() -> Self {
        Self::with_config(TabStripConfig::default())
    }
}

impl<S, D> TabStrip<S, D> {
    /// Creates an unbound strip with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unbound strip with `config`.
    #[must_use]
    pub fn with_config(config: TabStripConfig) -> Self {
        Self {
            source: None,
            dataset: None,
            tracker: TransitionTracker::new(),
            jumps: JumpCoordinator::new(),
            observers: Observers::new(),
            click_listener: None,
            scroll_state: ScrollState::Idle,
            config,
            pending_restore: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> TabStripConfig {
        self.config
    }

    /// Sets whether taps select pages.
    pub fn set_clickable(&mut self, clickable: bool) {
        self.config.clickable = clickable;
    }

    /// Returns `true` if taps select pages.
    #[must_use]
    pub fn is_clickable(&self) -> bool {
        self.config.clickable
    }

    /// Sets whether tap selections animate the pager.
    pub fn set_click_animated(&mut self, animated: bool) {
        self.config.click_animated = animated;
    }

    /// Returns `true` if tap selections animate the pager.
    #[must_use]
    pub fn is_click_animated(&self) -> bool {
        self.config.click_animated
    }

    /// Returns `true` while a scroll source is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.source.is_some()
    }

    /// The bound scroll source.
    #[must_use]
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// The bound dataset.
    #[must_use]
    pub fn dataset(&self) -> Option<&D> {
        self.dataset.as_ref()
    }

    /// The transition tracker's current memory.
    #[must_use]
    pub fn tracker(&self) -> &TransitionTracker {
        &self.tracker
    }

    /// Page the indicator shows.
    ///
    /// This is the page the pager rests on (or is closest to mid-scroll),
    /// falling back to the last selection before any sample arrived.
    #[must_use]
    pub fn current(&self) -> usize {
        self.tracker
            .nearest_page()
            .or(self.jumps.selected())
            .unwrap_or(self.tracker.current())
    }

    /// Page last selected by a request or by the pager.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.jumps.selected()
    }

    /// Last scroll phase reported by the pager.
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    /// Captures the page the indicator shows.
    #[must_use]
    pub fn save_state(&self) -> SavedState {
        SavedState {
            current: self.current(),
        }
    }

    /// Unregisters the observer registered as `id`, handing it back.
    pub fn remove_observer(&mut self, id: ObserverId) -> Option<Box<dyn PageObserver>> {
        self.observers.remove(id)
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Sets or clears the item-click listener.
    pub fn set_click_listener(&mut self, listener: Option<Box<dyn ItemClickListener>>) {
        self.click_listener = listener;
    }

    /// Forgets any remembered pager state and drops the pager and dataset.
    ///
    /// Returns what was bound, if anything.
    pub fn unbind(&mut self) -> Option<(S, Option<D>)> {
        let source = self.source.take()?;
        let dataset = self.dataset.take();
        self.tracker.reset();
        self.jumps.clear();
        self.scroll_state = ScrollState::Idle;
        debug!("tab strip unbound");
        Some((source, dataset))
    }
}

impl<S, D> TabStrip<S, D>
where
    S: ScrollSource,
    D: PageDataset,
{
    /// Binds `source` and its `dataset`, replacing whatever was bound before.
    ///
    /// The tracker is settled on the pager's page. If that differs from the
    /// page the indicator showed, observers get a jump. A state restored before binding
    /// is applied now. Returns the previous binding.
    pub fn bind(&mut self, source: S, dataset: Option<D>) -> Option<(S, Option<D>)> {
        let shown = self.current();
        let previous = self.unbind();
        self.source = Some(source);
        self.dataset = dataset;
        debug!(items = self.item_count(), "tab strip bound");

        let mut requests = Requests::new();
        self.sync_with_source(shown, &mut requests);
        if let Some(index) = self.pending_restore.take()
            && let Err(err) = self.apply(SelectionRequest::silent(index), &mut requests)
        {
            warn!(index, %err, "dropping restored page");
        }
        self.drain(requests);
        previous
    }

    /// Swaps the dataset behind the bound pager, returning the old one.
    pub fn set_dataset(&mut self, dataset: Option<D>) -> Result<Option<D>, TabStripError> {
        if self.source.is_none() {
            return Err(TabStripError::NotBound);
        }
        let shown = self.current();
        let previous = core::mem::replace(&mut self.dataset, dataset);
        self.tracker.reset();
        debug!(items = self.item_count(), "dataset swapped");

        let mut requests = Requests::new();
        self.sync_with_source(shown, &mut requests);
        self.drain(requests);
        Ok(previous)
    }

    /// Registers `observer` and immediately tells it to jump to the current page.
    pub fn add_observer(&mut self, observer: impl PageObserver + 'static) -> ObserverId {
        let id = self.observers.add(Box::new(observer));
        let mut requests = Requests::new();
        let current = self.current();
        self.observers.jump_one(id, current, &mut requests);
        self.drain(requests);
        id
    }

    /// Forwards a pager scroll sample.
    ///
    /// Returns the transition announced to observers, if any.
    pub fn on_page_scrolled(
        &mut self,
        position: usize,
        offset: f32,
    ) -> Result<Option<Transition>, TabStripError> {
        self.check_bound_index(position)?;
        let sample = Sample::new(position, offset).inspect_err(|err| {
            warn!(position, %err, "rejected scroll sample");
        })?;
        Ok(self.observe(sample))
    }

    /// Forwards the pager's own page selection.
    ///
    /// While the pager is idle the selection arrives without scroll samples,
    /// so it is fed to the tracker with the last known offset.
    pub fn on_page_selected(&mut self, position: usize) -> Result<Option<Transition>, TabStripError> {
        self.check_bound_index(position)?;
        let transition = if self.scroll_state == ScrollState::Idle {
            let offset = self.tracker.last_offset().unwrap_or(0.0);
            self.observe(Sample::new(position, offset)?)
        } else {
            None
        };
        self.jumps.page_selected(position);
        Ok(transition)
    }

    /// Records the pager's scroll phase.
    pub fn on_scroll_state_changed(&mut self, state: ScrollState) {
        self.scroll_state = state;
    }

    /// Resynchronizes after the dataset's contents changed.
    ///
    /// The indicator jumps to wherever the pager now is, since pages between
    /// the old and new position may be gone. Returns that page.
    pub fn on_dataset_changed(&mut self) -> Result<Option<usize>, TabStripError> {
        let source = self.source.as_ref().ok_or(TabStripError::NotBound)?;
        let Some(index) = source.current_item() else {
            self.tracker.reset();
            self.jumps.clear();
            debug!("dataset emptied");
            return Ok(None);
        };

        self.jumps.settle_at(index, &mut self.tracker);
        debug!(index, items = self.item_count(), "dataset changed");
        let mut requests = Requests::new();
        self.observers.jump(index, &mut requests);
        self.drain(requests);
        Ok(Some(index))
    }

    /// Selects a page.
    ///
    /// Selecting the page already selected only notifies the click listener.
    /// A non-animated selection jumps the indicator before moving the pager; an
    /// animated one leaves the indicator to follow the pager's samples.
    pub fn select(&mut self, request: SelectionRequest) -> Result<JumpDecision, TabStripError> {
        let mut requests = Requests::new();
        let decision = self.apply(request, &mut requests)?;
        self.drain(requests);
        Ok(decision)
    }

    /// Handles a single tap recognized on tab `index`.
    ///
    /// Returns `Ok(None)` when the strip is not clickable.
    pub fn tap(&mut self, index: usize) -> Result<Option<JumpDecision>, TabStripError> {
        if !self.config.clickable {
            return Ok(None);
        }
        let request = SelectionRequest {
            index,
            animated: self.config.click_animated,
            notify: true,
        };
        self.select(request).map(Some)
    }

    /// Handles a confirmed single tap (no double tap followed) on tab `index`.
    ///
    /// `None` means the tap landed outside every tab. If the preceding
    /// [`tap`](Self::tap) hit the selected tab, the click listener hears about
    /// it. Returns `false` when the tap is not handled.
    pub fn tap_confirmed(&mut self, index: Option<usize>) -> bool {
        if !self.config.clickable || !self.hits_item(index) {
            return false;
        }
        if self.jumps.last_was_reselect()
            && let Some(selected) = self.jumps.selected()
            && let Some(listener) = &mut self.click_listener
        {
            listener.on_selected_click(selected);
        }
        true
    }

    /// Handles a double tap on tab `index`.
    ///
    /// The click listener is told the selected page. Returns `false` when the
    /// strip is not clickable or the tap missed every tab.
    pub fn double_tap(&mut self, index: Option<usize>) -> bool {
        if !self.config.clickable || !self.hits_item(index) {
            return false;
        }
        let Some(selected) = self.jumps.selected() else {
            return false;
        };
        if let Some(listener) = &mut self.click_listener {
            listener.on_double_click(selected);
        }
        true
    }

    /// Restores a [`SavedState`] as a silent, non-animated selection.
    ///
    /// If nothing is bound yet the restore waits for [`bind`](Self::bind).
    pub fn restore_state(&mut self, state: SavedState) -> Result<(), TabStripError> {
        if self.source.is_none() {
            debug!(index = state.current, "deferring restore until bound");
            self.pending_restore = Some(state.current);
            return Ok(());
        }
        self.select(SelectionRequest::silent(state.current))?;
        Ok(())
    }

    /// Returns the bound dataset's page count, or `0` without a dataset.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.dataset.as_ref().map_or(0, PageDataset::item_count)
    }

    /// Returns the label of page `index`, or `None` without a dataset.
    #[must_use]
    pub fn item_label(&self, index: usize) -> Option<String> {
        self.dataset.as_ref()?.item_label(index)
    }

    /// The page the bound pager is settled on.
    #[must_use]
    pub fn current_item(&self) -> Option<usize> {
        self.source.as_ref()?.current_item()
    }

    fn hits_item(&self, index: Option<usize>) -> bool {
        self.source.is_some() && index.is_some_and(|index| index < self.item_count())
    }

    fn check_bound_index(&self, index: usize) -> Result<(), TabStripError> {
        if self.source.is_none() {
            return Err(TabStripError::NotBound);
        }
        let count = self.item_count();
        if index < count {
            Ok(())
        } else {
            warn!(index, count, "page index out of range");
            Err(TabStripError::InvalidIndex { index, count })
        }
    }

    fn observe(&mut self, sample: Sample) -> Option<Transition> {
        let transition = self.tracker.observe(sample)?;
        trace!(
            direction = ?transition.direction,
            current = transition.current,
            next = transition.next,
            progress = transition.progress,
            "page transition"
        );
        let mut requests = Requests::new();
        self.observers.transition(transition, &mut requests);
        self.drain(requests);
        Some(transition)
    }

    fn sync_with_source(&mut self, shown: usize, requests: &mut Requests) {
        let Some(index) = self.current_item() else {
            return;
        };
        if self.jumps.check_current(index, shown, &mut self.tracker) {
            debug!(index, "indicator resynced to pager");
            self.observers.jump(index, requests);
        }
    }

    fn apply(
        &mut self,
        request: SelectionRequest,
        requests: &mut Requests,
    ) -> Result<JumpDecision, TabStripError> {
        self.check_bound_index(request.index)?;
        let Some(source) = self.source.as_mut() else {
            return Err(TabStripError::NotBound);
        };

        let decision = self.jumps.request(request, &mut self.tracker);
        match decision {
            JumpDecision::Reselect(_) => {}
            JumpDecision::Jump(index) => {
                debug!(index, "jump");
                self.observers.jump(index, requests);
                source.scroll_to(index, false);
            }
            JumpDecision::Scroll(index) => {
                debug!(index, "animated scroll");
                source.scroll_to(index, true);
            }
        }
        if request.notify
            && let Some(listener) = &mut self.click_listener
        {
            listener.on_item_click(request.index);
        }
        Ok(decision)
    }

    /// Runs selections queued by observers until none are left.
    fn drain(&mut self, mut requests: Requests) {
        while let Some(request) = requests.pop() {
            if let Err(err) = self.apply(request, &mut requests) {
                warn!(index = request.index, %err, "dropping queued selection");
            }
        }
    }
}
