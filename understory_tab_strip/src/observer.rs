// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page observers and their fan-out.
//!
//! A [`PageObserver`] is anything that animates from page transitions, such as
//! an underline renderer or a badge that slides with the selected tab. The
//! [`Observers`] registry calls them in registration order.
//!
//! Observers cannot borrow the strip while it is notifying them. Instead every
//! callback receives a [`Requests`] queue; selections pushed there run after
//! the current fan-out has finished.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use core::fmt;

use smallvec::SmallVec;

use crate::jump::SelectionRequest;
use crate::tracker::{Direction, Transition};

/// Receives indicator movement.
///
/// All methods default to doing nothing.
pub trait PageObserver {
    /// The indicator moved to `to` without animating.
    fn on_jump(&mut self, to: usize, requests: &mut Requests) {
        let _ = (to, requests);
    }

    /// The indicator is moving from `current` back toward `next` (`next < current`).
    fn on_left(&mut self, current: usize, next: usize, progress: f32, requests: &mut Requests) {
        let _ = (current, next, progress, requests);
    }

    /// The indicator is moving from `current` toward `next` (`next > current`).
    fn on_right(&mut self, current: usize, next: usize, progress: f32, requests: &mut Requests) {
        let _ = (current, next, progress, requests);
    }
}

/// Selections queued from inside observer callbacks.
#[derive(Clone, Debug, Default)]
pub struct Requests {
    queue: VecDeque<SelectionRequest>,
}

impl Requests {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a selection to run once the current notification completes.
    pub fn select(&mut self, request: SelectionRequest) {
        self.queue.push_back(request);
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Takes the oldest queued selection.
    pub fn pop(&mut self) -> Option<SelectionRequest> {
        self.queue.pop_front()
    }
}

/// Identity of a registered observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// Ordered set of boxed observers.
#[derive(Default)]
pub struct Observers {
    entries: SmallVec<[(ObserverId, Box<dyn PageObserver>); 2]>,
    next_id: u64,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("ids", &self.ids().collect::<SmallVec<[ObserverId; 2]>>())
            .finish_non_exhaustive()
    }
}

impl Observers {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no observer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered ids in notification order.
    pub fn ids(&self) -> impl Iterator<Item = ObserverId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    /// Appends `observer` and returns its id.
    pub fn add(&mut self, observer: Box<dyn PageObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, observer));
        id
    }

    /// Removes the observer registered as `id`, returning it.
    pub fn remove(&mut self, id: ObserverId) -> Option<Box<dyn PageObserver>> {
        let idx = self.entries.iter().position(|(existing, _)| *existing == id)?;
        Some(self.entries.remove(idx).1)
    }

    /// Sends a jump to one observer.
    pub fn jump_one(&mut self, id: ObserverId, to: usize, requests: &mut Requests) {
        if let Some((_, observer)) = self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            observer.on_jump(to, requests);
        }
    }

    /// Sends a jump to every observer.
    pub fn jump(&mut self, to: usize, requests: &mut Requests) {
        for (_, observer) in &mut self.entries {
            observer.on_jump(to, requests);
        }
    }

    /// Sends a transition to every observer.
    pub fn transition(&mut self, transition: Transition, requests: &mut Requests) {
        let Transition {
            direction,
            current,
            next,
            progress,
        } = transition;
        for (_, observer) in &mut self.entries {
            match direction {
                Direction::Left => observer.on_left(current, next, progress, requests),
                Direction::Right => observer.on_right(current, next, progress, requests),
            }
        }
    }
}
