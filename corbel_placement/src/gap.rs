// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gap between a trigger and its floating panel.

/// Offset between the trigger's edge and the panel's anchor, in pixels.
///
/// The horizontal component applies to [`Side::Left`](crate::Side::Left) /
/// [`Side::Right`](crate::Side::Right) placements, the vertical component to
/// [`Side::Top`](crate::Side::Top) / [`Side::Bottom`](crate::Side::Bottom).
/// Both default to `8.0`.
///
/// ```rust
/// use corbel_placement::Gap;
///
/// assert_eq!(Gap::default(), Gap::splat(8.0));
/// assert_eq!(Gap::from(12.0), Gap::new(12.0, 12.0));
/// assert_eq!(Gap::new(10.0, 5.0).y, 5.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gap {
    /// Horizontal trigger↔panel distance.
    pub x: f64,
    /// Vertical trigger↔panel distance.
    pub y: f64,
}

impl Gap {
    /// Creates a gap with independent horizontal and vertical distances.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a gap with the same distance on both axes.
    #[must_use]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }
}

impl Default for Gap {
    fn default() -> Self {
        Self::splat(8.0)
    }
}

impl From<f64> for Gap {
    fn from(v: f64) -> Self {
        Self::splat(v)
    }
}
