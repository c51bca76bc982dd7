// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when the strip rejects a host call.
///
/// None of these leave the strip in a partially updated state; the rejected
/// call simply has no effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TabStripError {
    /// A page index outside `0..count` for the bound dataset.
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// Item count of the dataset at the time of the call.
        count: usize,
    },
    /// A fractional offset that is not finite or lies outside `[0, 1]`.
    InvalidOffset(f32),
    /// The call needs a bound scroll source and there is none.
    NotBound,
}

impl fmt::Display for TabStripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex { index, count } => {
                write!(f, "page index {index} out of range for {count} pages")
            }
            Self::InvalidOffset(offset) => {
                write!(f, "page offset {offset} is not within [0, 1]")
            }
            Self::NotBound => f.write_str("no scroll source is bound"),
        }
    }
}

impl core::error::Error for TabStripError {}
