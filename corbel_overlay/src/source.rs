// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host geometry access: query the current frame of a referenced element.

use kurbo::Rect;

/// Provides current element geometry from the hosting UI framework.
///
/// The overlay never measures anything itself; it asks the host for the
/// frame of the trigger (and optionally of a width-reference element) at the
/// moment of a show event. Implementations typically wrap whatever the host
/// already has: a layout tree, a box tree, or platform bounding boxes.
///
/// Frames are in viewport coordinates, the same space as the viewport size
/// handed to the overlay.
pub trait ElementSource<K> {
    /// Returns the element's current frame, or `None` if the element is
    /// unmounted or otherwise unmeasurable right now.
    fn frame_of(&self, key: &K) -> Option<Rect>;
}

impl<'a, K, S: ElementSource<K> + ?Sized> ElementSource<K> for &'a S {
    fn frame_of(&self, key: &K) -> Option<Rect> {
        (**self).frame_of(key)
    }
}

/// Snapshots an element's frame, degrading to [`Rect::ZERO`] when missing.
///
/// Placement is a cosmetic affordance: a trigger that unmounted between the
/// event and the query must never make the overlay fail, so it collapses to
/// a zeroed frame and the panel lands in the top-left corner region.
///
/// Call this at the moment of the show event; layout can shift between
/// events, so a cached frame may be stale.
#[must_use]
pub fn capture_frame<K, S: ElementSource<K>>(source: &S, key: &K) -> Rect {
    source.frame_of(key).unwrap_or(Rect::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Single(Option<Rect>);

    impl ElementSource<u32> for Single {
        fn frame_of(&self, key: &u32) -> Option<Rect> {
            (*key == 7).then_some(self.0).flatten()
        }
    }

    #[test]
    fn capture_returns_the_live_frame() {
        let rect = Rect::new(10.0, 20.0, 60.0, 40.0);
        let source = Single(Some(rect));
        assert_eq!(capture_frame(&source, &7), rect);
    }

    #[test]
    fn missing_element_degrades_to_zero() {
        let source = Single(None);
        assert_eq!(capture_frame(&source, &7), Rect::ZERO);
        // Unknown key behaves the same as an unmounted element.
        let source = Single(Some(Rect::new(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(capture_frame(&source, &8), Rect::ZERO);
    }
}
