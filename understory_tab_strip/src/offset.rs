// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalization helpers for fractional page offsets.
//!
//! Pager containers report scroll position as a page index plus an offset in
//! `[0, 1]` toward the following page. The values `0` and `1` are ambiguous on
//! their own: a remembered `0` may mean "settled on this page" or "about to
//! leave toward the previous page". These helpers resolve that ambiguity
//! against the next observed offset.

use crate::TabStripError;

/// Offset value the boundary snap splits on.
pub const SNAP_THRESHOLD: f32 = 0.5;

/// Validates that `offset` is finite and lies in `[0, 1]`.
pub fn check_offset(offset: f32) -> Result<f32, TabStripError> {
    if offset.is_finite() && (0.0..=1.0).contains(&offset) {
        Ok(offset)
    } else {
        Err(TabStripError::InvalidOffset(offset))
    }
}

/// Returns `true` if `offset` sits exactly on a page boundary.
#[must_use]
pub fn is_boundary(offset: f32) -> bool {
    offset == 0.0 || offset == 1.0
}

/// Resolves a remembered boundary offset against the `incoming` one.
///
/// A remembered `0` or `1` is reinterpreted as `1` when `incoming` is past
/// [`SNAP_THRESHOLD`] and as `0` otherwise. Offsets strictly inside the page
/// are returned unchanged.
///
/// ```
/// use understory_tab_strip::offset::snap_boundary;
///
/// assert_eq!(snap_boundary(0.0, 0.9), 1.0);
/// assert_eq!(snap_boundary(1.0, 0.2), 0.0);
/// assert_eq!(snap_boundary(0.4, 0.9), 0.4);
/// ```
#[must_use]
pub fn snap_boundary(remembered: f32, incoming: f32) -> f32 {
    if !is_boundary(remembered) {
        remembered
    } else if incoming > SNAP_THRESHOLD {
        1.0
    } else {
        0.0
    }
}

/// Substitutes `1` for a raw `0`, the "fully arrived at the next page" case.
#[must_use]
pub fn offset_or_one(offset: f32) -> f32 {
    if offset == 0.0 { 1.0 } else { offset }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_offset_accepts_closed_unit_range() {
        assert_eq!(check_offset(0.0), Ok(0.0));
        assert_eq!(check_offset(1.0), Ok(1.0));
        assert_eq!(check_offset(0.25), Ok(0.25));
    }

    #[test]
    fn check_offset_rejects_outside_and_non_finite() {
        assert!(matches!(
            check_offset(-0.1),
            Err(TabStripError::InvalidOffset(_))
        ));
        assert!(matches!(
            check_offset(1.5),
            Err(TabStripError::InvalidOffset(_))
        ));
        assert!(check_offset(f32::NAN).is_err());
        assert!(check_offset(f32::INFINITY).is_err());
    }

    #[test]
    fn snap_only_touches_boundaries() {
        assert_eq!(snap_boundary(0.0, 0.5), 0.0);
        assert_eq!(snap_boundary(0.0, 0.51), 1.0);
        assert_eq!(snap_boundary(1.0, 0.5), 0.0);
        assert_eq!(snap_boundary(1.0, 0.75), 1.0);
        assert_eq!(snap_boundary(0.3, 0.0), 0.3);
        assert_eq!(snap_boundary(0.99, 0.1), 0.99);
    }

    #[test]
    fn offset_or_one_only_replaces_zero() {
        assert_eq!(offset_or_one(0.0), 1.0);
        assert_eq!(offset_or_one(0.4), 0.4);
        assert_eq!(offset_or_one(1.0), 1.0);
    }
}
