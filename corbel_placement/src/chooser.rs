// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side selection and anchor computation.
//!
//! ## Usage
//!
//! 1) Snapshot the trigger's frame (viewport coordinates) on each show event.
//! 2) Call [`SideChooser::choose`] with the frame, viewport size, and an
//!    optional forced side to pick where the panel goes.
//! 3) Call [`placement`] (or [`SideChooser::resolve`], which does both steps)
//!    to get the anchor point and fractional shift for rendering.

use kurbo::{Point, Rect, Size, Vec2};

use crate::gap::Gap;
use crate::side::{Side, SideSet};

/// Minimum free space a side must offer before a panel is placed there.
///
/// Vertical placements need less room than horizontal ones: a panel above or
/// below only consumes its own height, while a side panel needs enough width
/// for typical content.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitThresholds {
    /// Required free space above/below the trigger for `Top`/`Bottom`.
    pub vertical: f64,
    /// Required free space beside the trigger for `Left`/`Right`.
    pub horizontal: f64,
}

impl Default for FitThresholds {
    fn default() -> Self {
        Self {
            vertical: 60.0,
            horizontal: 120.0,
        }
    }
}

/// Returns the set of sides with enough free viewport space for a panel.
///
/// Free space per side is measured from the trigger's frame to the matching
/// viewport edge: `top = frame.y0`, `bottom = viewport.height - frame.y1`,
/// `left = frame.x0`, `right = viewport.width - frame.x1`. A side fits when
/// its free space meets the matching threshold.
///
/// A frame that (partially) overflows the viewport simply reports negative
/// free space on the overflowed sides; no special casing is needed.
#[must_use]
pub fn fitting_sides(frame: Rect, viewport: Size, thresholds: FitThresholds) -> SideSet {
    let mut fits = SideSet::empty();
    if frame.y0 >= thresholds.vertical {
        fits |= SideSet::TOP;
    }
    if viewport.height - frame.y1 >= thresholds.vertical {
        fits |= SideSet::BOTTOM;
    }
    if frame.x0 >= thresholds.horizontal {
        fits |= SideSet::LEFT;
    }
    if viewport.width - frame.x1 >= thresholds.horizontal {
        fits |= SideSet::RIGHT;
    }
    fits
}

/// A resolved panel placement: the chosen side, the anchor point in viewport
/// coordinates, and the fractional panel-size shift to apply at the anchor.
///
/// `Placement` is a pure function of its inputs (see [`placement`]); it holds
/// no independent lifecycle and should be recomputed, never patched.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Which side of the trigger the panel hangs off.
    pub side: Side,
    /// Anchor point in viewport coordinates.
    pub anchor: Point,
    /// Fractional panel-size translation applied at the anchor
    /// (see [`Side::shift`]).
    pub shift: Vec2,
}

/// Computes the anchor point and shift for a panel on the given side.
///
/// The anchor sits `gap` away from the trigger's edge, centered along it:
///
/// - `Top`: `(frame.center().x, frame.y0 - gap.y)`
/// - `Bottom`: `(frame.center().x, frame.y1 + gap.y)`
/// - `Left`: `(frame.x0 - gap.x, frame.center().y)`
/// - `Right`: `(frame.x1 + gap.x, frame.center().y)`
///
/// A degenerate (zero-area) frame still yields a valid placement at its
/// origin; placement never fails.
#[must_use]
pub fn placement(frame: Rect, side: Side, gap: Gap) -> Placement {
    let center = frame.center();
    let anchor = match side {
        Side::Top => Point::new(center.x, frame.y0 - gap.y),
        Side::Bottom => Point::new(center.x, frame.y1 + gap.y),
        Side::Left => Point::new(frame.x0 - gap.x, center.y),
        Side::Right => Point::new(frame.x1 + gap.x, center.y),
    };
    Placement {
        side,
        anchor,
        shift: side.shift(),
    }
}

/// Side-selection policy for one floating panel.
///
/// The chooser scans [`Side::PRIORITY`] and picks the first side whose free
/// space meets the thresholds. A forced side always wins, regardless of
/// available space — the caller is responsible for sane overrides. When no
/// side fits, the previously chosen side is kept, so a panel does not
/// oscillate in cramped viewports.
///
/// The only state carried between calls is that last chosen side,
/// initialized to [`Side::Top`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SideChooser {
    last: Side,
    thresholds: FitThresholds,
}

impl SideChooser {
    /// Creates a chooser with default thresholds and `Top` as the initial side.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chooser with explicit fit thresholds.
    #[must_use]
    pub fn with_thresholds(thresholds: FitThresholds) -> Self {
        Self {
            last: Side::default(),
            thresholds,
        }
    }

    /// Returns the side chosen by the most recent call (or the initial `Top`).
    #[must_use]
    pub fn last_side(&self) -> Side {
        self.last
    }

    /// Returns the current fit thresholds.
    #[must_use]
    pub fn thresholds(&self) -> FitThresholds {
        self.thresholds
    }

    /// Replaces the fit thresholds used by subsequent calls.
    pub fn set_thresholds(&mut self, thresholds: FitThresholds) {
        self.thresholds = thresholds;
    }

    /// Chooses the side for a panel anchored to `frame` inside `viewport`.
    ///
    /// A supplied `forced` side is returned unconditionally. Otherwise the
    /// first side in [`Side::PRIORITY`] that fits wins; if none fits, the
    /// previously chosen side is returned unchanged.
    pub fn choose(&mut self, frame: Rect, viewport: Size, forced: Option<Side>) -> Side {
        if let Some(side) = forced {
            self.last = side;
            return side;
        }
        let fits = fitting_sides(frame, viewport, self.thresholds);
        for side in Side::PRIORITY {
            if fits.contains_side(side) {
                self.last = side;
                return side;
            }
        }
        self.last
    }

    /// Chooses a side and computes its [`Placement`] in one step.
    pub fn resolve(
        &mut self,
        frame: Rect,
        viewport: Size,
        forced: Option<Side>,
        gap: Gap,
    ) -> Placement {
        let side = self.choose(frame, viewport, forced);
        placement(frame, side, gap)
    }

    /// Snapshot of the chooser state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SideChooserDebugInfo {
        SideChooserDebugInfo {
            last_side: self.last,
            thresholds: self.thresholds,
        }
    }
}

/// Debug snapshot of a [`SideChooser`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SideChooserDebugInfo {
    /// Side chosen by the most recent call.
    pub last_side: Side,
    /// Fit thresholds in effect.
    pub thresholds: FitThresholds,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    const VIEWPORT: Size = Size::new(1280.0, 720.0);

    fn frame_at(top: f64, left: f64, width: f64, height: f64) -> Rect {
        Rect::new(left, top, left + width, top + height)
    }

    // Room above and below: priority order says Top wins.
    #[test]
    fn prefers_top_when_room_on_both_vertical_sides() {
        let mut chooser = SideChooser::new();
        let frame = frame_at(300.0, 600.0, 50.0, 20.0);
        assert_eq!(chooser.choose(frame, VIEWPORT, None), Side::Top);
    }

    #[test]
    fn falls_back_to_bottom_when_top_is_tight() {
        let mut chooser = SideChooser::new();
        // 40px above (< 60), plenty below.
        let frame = frame_at(40.0, 600.0, 50.0, 20.0);
        assert_eq!(chooser.choose(frame, VIEWPORT, None), Side::Bottom);
    }

    #[test]
    fn falls_back_to_right_when_vertical_space_is_tight() {
        let mut chooser = SideChooser::new();
        // Short viewport: 40px above, 40px below, plenty to the right.
        let viewport = Size::new(1280.0, 100.0);
        let frame = frame_at(40.0, 100.0, 50.0, 20.0);
        assert_eq!(chooser.choose(frame, viewport, None), Side::Right);
    }

    #[test]
    fn falls_back_to_left_as_last_resort() {
        let mut chooser = SideChooser::new();
        // Only the left side offers 120px.
        let viewport = Size::new(300.0, 100.0);
        let frame = frame_at(40.0, 200.0, 60.0, 20.0);
        assert_eq!(chooser.choose(frame, viewport, None), Side::Left);
    }

    // Nothing fits: the previous side is retained, whatever it was.
    #[test]
    fn keeps_last_side_when_nothing_fits() {
        let mut chooser = SideChooser::new();
        let cramped = Size::new(100.0, 80.0);
        let frame = frame_at(30.0, 30.0, 40.0, 20.0);
        assert_eq!(chooser.choose(frame, cramped, None), Side::Top);

        // Establish Bottom, then shrink the viewport until nothing fits.
        let frame2 = frame_at(40.0, 600.0, 50.0, 20.0);
        assert_eq!(chooser.choose(frame2, VIEWPORT, None), Side::Bottom);
        assert_eq!(chooser.choose(frame, cramped, None), Side::Bottom);
        // Stable across repeated cramped calls: no oscillation.
        assert_eq!(chooser.choose(frame, cramped, None), Side::Bottom);
    }

    // Caller override always wins, even with zero space on that side.
    #[test]
    fn forced_side_wins_for_any_geometry() {
        let mut chooser = SideChooser::new();
        let frame = frame_at(0.0, 0.0, 50.0, 20.0);
        for side in Side::PRIORITY {
            assert_eq!(chooser.choose(frame, VIEWPORT, Some(side)), side);
            assert_eq!(chooser.last_side(), side);
        }
    }

    #[test]
    fn fitting_sides_measures_per_side_space() {
        let thresholds = FitThresholds::default();
        // 100px above, 600px below, 200px left, 1030px right.
        let frame = frame_at(100.0, 200.0, 50.0, 20.0);
        let fits = fitting_sides(frame, VIEWPORT, thresholds);
        assert_eq!(
            fits,
            SideSet::TOP | SideSet::BOTTOM | SideSet::LEFT | SideSet::RIGHT
        );

        // Pinned to the top-left corner: only bottom and right have room.
        let corner = frame_at(10.0, 10.0, 50.0, 20.0);
        let fits = fitting_sides(corner, VIEWPORT, thresholds);
        assert_eq!(fits, SideSet::BOTTOM | SideSet::RIGHT);
    }

    #[test]
    fn custom_thresholds_change_the_verdict() {
        let frame = frame_at(50.0, 600.0, 50.0, 20.0);
        let strict = FitThresholds {
            vertical: 60.0,
            horizontal: 120.0,
        };
        assert!(!fitting_sides(frame, VIEWPORT, strict).contains_side(Side::Top));

        let lax = FitThresholds {
            vertical: 40.0,
            horizontal: 120.0,
        };
        assert!(fitting_sides(frame, VIEWPORT, lax).contains_side(Side::Top));
    }

    // Concrete formula check: {top:100, left:200, width:50, height:20},
    // Top, gap 8 => anchor (225, 92), shift translate(-50%, -100%).
    #[test]
    fn top_placement_formula() {
        let frame = frame_at(100.0, 200.0, 50.0, 20.0);
        let p = placement(frame, Side::Top, Gap::default());
        assert_eq!(p.anchor, Point::new(225.0, 92.0));
        assert_eq!(p.shift, Vec2::new(-0.5, -1.0));
    }

    // Concrete formula check: gap {x:10, y:5}, Right,
    // {top:50, left:10, width:30, height:10} => anchor (50, 55).
    #[test]
    fn right_placement_with_asymmetric_gap() {
        let frame = frame_at(50.0, 10.0, 30.0, 10.0);
        let p = placement(frame, Side::Right, Gap::new(10.0, 5.0));
        assert_eq!(p.anchor, Point::new(50.0, 55.0));
        assert_eq!(p.shift, Vec2::new(0.0, -0.5));
    }

    #[test]
    fn bottom_and_left_placement_formulas() {
        let frame = frame_at(100.0, 200.0, 50.0, 20.0);
        let gap = Gap::default();

        let bottom = placement(frame, Side::Bottom, gap);
        assert_eq!(bottom.anchor, Point::new(225.0, 128.0));
        assert_eq!(bottom.shift, Vec2::new(-0.5, 0.0));

        let left = placement(frame, Side::Left, gap);
        assert_eq!(left.anchor, Point::new(192.0, 110.0));
        assert_eq!(left.shift, Vec2::new(-1.0, -0.5));
    }

    // A zeroed frame (missing trigger) degrades to a top-left placement
    // instead of failing.
    #[test]
    fn zero_frame_still_places() {
        let p = placement(Rect::ZERO, Side::Top, Gap::default());
        assert_eq!(p.anchor, Point::new(0.0, -8.0));

        let mut chooser = SideChooser::new();
        let side = chooser.choose(Rect::ZERO, VIEWPORT, None);
        assert_eq!(side, Side::Bottom);
    }

    #[test]
    fn resolve_chains_choice_and_placement() {
        let mut chooser = SideChooser::new();
        let frame = frame_at(40.0, 600.0, 50.0, 20.0);
        let p = chooser.resolve(frame, VIEWPORT, None, Gap::default());
        assert_eq!(p.side, Side::Bottom);
        assert_eq!(p.anchor, Point::new(625.0, 68.0));
        assert_eq!(chooser.debug_info().last_side, Side::Bottom);
    }
}
