// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sides of a trigger element and sets of candidate sides.

use kurbo::Vec2;

/// The side of the trigger a floating panel is anchored to.
///
/// The default is [`Side::Top`]; side selection falls back from there when
/// the viewport leaves too little room (see
/// [`SideChooser`](crate::SideChooser)).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Side {
    /// Panel above the trigger.
    #[default]
    Top,
    /// Panel below the trigger.
    Bottom,
    /// Panel to the left of the trigger.
    Left,
    /// Panel to the right of the trigger.
    Right,
}

impl Side {
    /// Candidate order used when no side is forced: the first fitting side
    /// in this order wins.
    pub const PRIORITY: [Self; 4] = [Self::Top, Self::Bottom, Self::Right, Self::Left];

    /// Returns `true` for [`Side::Top`] and [`Side::Bottom`].
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// The fractional panel-size translation that aligns the panel to an
    /// anchor on this side.
    ///
    /// Units are fractions of the panel's own size, so `(-0.5, -1.0)` means
    /// "shift left by half the panel width and up by the full panel height"
    /// (the CSS `translate(-50%, -100%)` idiom). Combined with the anchors
    /// produced by [`placement`](crate::placement), this puts the panel's
    /// near edge-center at the anchor point:
    ///
    /// - `Top`: bottom-center at the anchor.
    /// - `Bottom`: top-center at the anchor.
    /// - `Left`: right-center at the anchor.
    /// - `Right`: left-center at the anchor.
    #[must_use]
    pub const fn shift(self) -> Vec2 {
        match self {
            Self::Top => Vec2::new(-0.5, -1.0),
            Self::Bottom => Vec2::new(-0.5, 0.0),
            Self::Left => Vec2::new(-1.0, -0.5),
            Self::Right => Vec2::new(0.0, -0.5),
        }
    }
}

bitflags::bitflags! {
    /// A set of candidate sides.
    ///
    /// Produced by [`fitting_sides`](crate::fitting_sides) ("which sides have
    /// enough room for a panel") and consumed by the priority scan in
    /// [`SideChooser::choose`](crate::SideChooser::choose).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SideSet: u8 {
        /// Room above the trigger.
        const TOP    = 0b0000_0001;
        /// Room below the trigger.
        const BOTTOM = 0b0000_0010;
        /// Room to the left of the trigger.
        const LEFT   = 0b0000_0100;
        /// Room to the right of the trigger.
        const RIGHT  = 0b0000_1000;
    }
}

impl SideSet {
    /// Returns `true` if the set contains the given side.
    #[must_use]
    pub fn contains_side(self, side: Side) -> bool {
        self.contains(Self::from(side))
    }
}

impl From<Side> for SideSet {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Self::TOP,
            Side::Bottom => Self::BOTTOM,
            Side::Left => Self::LEFT,
            Side::Right => Self::RIGHT,
        }
    }
}
