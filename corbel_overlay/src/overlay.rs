// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-panel show/hide state machine with a debounced hide.
//!
//! ## Usage
//!
//! 1) Create one [`Overlay`] per trigger element, configured via
//!    [`OverlayConfig`].
//! 2) Route the host's pointer/touch events into [`Overlay::pointer_enter`]
//!    and [`Overlay::pointer_leave`] (touch-start and touch-end map to the
//!    same entry points).
//! 3) Drain the shared [`TimerQueue`] from the host's clock and hand each
//!    firing to [`Overlay::timer_fired`].
//! 4) Render the panel wherever [`Overlay::panel_frame`] says, or nothing
//!    when it returns `None`.

use corbel_placement::{FitThresholds, Gap, Placement, Side, SideChooser};
use corbel_timing::{TimerQueue, Ticket};
use kurbo::Size;

use crate::source::{ElementSource, capture_frame};

/// Visibility state of one floating panel.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Visibility {
    /// No panel; the trigger renders alone.
    #[default]
    Hidden,
    /// The panel is showing at its captured placement.
    Visible,
}

/// Static configuration for one [`Overlay`].
///
/// ```rust
/// use corbel_overlay::OverlayConfig;
/// use corbel_placement::{Gap, Side};
///
/// let config = OverlayConfig::default()
///     .hide_delay_ms(200)
///     .gap(Gap::new(10.0, 5.0))
///     .forced_side(Some(Side::Bottom));
/// assert_eq!(config.hide_delay_ms, 200);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    /// Debounce before a leave commits to hiding, in milliseconds
    /// (default 150). Tolerates the pointer briefly crossing the gap
    /// between trigger and panel.
    pub hide_delay_ms: u64,
    /// Trigger↔panel offset (default 8px on both axes).
    pub gap: Gap,
    /// Fixed side override; `None` selects automatically.
    pub forced_side: Option<Side>,
    /// Suppresses all show behavior regardless of other inputs. Used to
    /// disable a panel conditionally without unwiring its events.
    pub suppressed: bool,
    /// Free-space thresholds for automatic side selection.
    pub thresholds: FitThresholds,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: 150,
            gap: Gap::default(),
            forced_side: None,
            suppressed: false,
            thresholds: FitThresholds::default(),
        }
    }
}

impl OverlayConfig {
    /// Sets the hide debounce in milliseconds.
    #[must_use]
    pub fn hide_delay_ms(mut self, ms: u64) -> Self {
        self.hide_delay_ms = ms;
        self
    }

    /// Sets the trigger↔panel gap.
    #[must_use]
    pub fn gap(mut self, gap: Gap) -> Self {
        self.gap = gap;
        self
    }

    /// Forces a fixed side, or restores automatic selection with `None`.
    #[must_use]
    pub fn forced_side(mut self, side: Option<Side>) -> Self {
        self.forced_side = side;
        self
    }

    /// Sets the suppressed flag.
    #[must_use]
    pub fn suppressed(mut self, suppressed: bool) -> Self {
        self.suppressed = suppressed;
        self
    }

    /// Sets the free-space thresholds for side selection.
    #[must_use]
    pub fn thresholds(mut self, thresholds: FitThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}

/// Where and how to render the panel this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelFrame {
    /// Chosen side, anchor point, and fractional shift.
    pub placement: Placement,
    /// Pinned panel width, when a width-reference element is configured;
    /// `None` means the panel auto-sizes to its content.
    pub width: Option<f64>,
}

/// Show/hide lifecycle of one floating panel.
///
/// `K` is the host's element key type, used to look up the trigger (and the
/// optional width-reference element) through an [`ElementSource`].
///
/// The overlay owns no timer of its own. It schedules its debounced hide
/// into a host-owned [`TimerQueue`] and tracks at most one outstanding
/// [`Ticket`]; scheduling again cancels the previous one, so a stale hide
/// can never fire after a later show.
///
/// Placement is captured at show time and stays fixed while visible; it is
/// recomputed on the next show cycle, or explicitly via
/// [`Overlay::refresh`]. Scroll/resize do not reposition a visible panel by
/// themselves.
#[derive(Clone, Debug)]
pub struct Overlay<K> {
    trigger: K,
    width_reference: Option<K>,
    config: OverlayConfig,
    content_empty: bool,
    chooser: SideChooser,
    visibility: Visibility,
    placement: Option<Placement>,
    pinned_width: Option<f64>,
    pending_hide: Option<Ticket>,
}

impl<K> Overlay<K> {
    /// Creates a hidden overlay for the given trigger element.
    #[must_use]
    pub fn new(trigger: K) -> Self {
        Self::with_config(trigger, OverlayConfig::default())
    }

    /// Creates a hidden overlay with explicit configuration.
    #[must_use]
    pub fn with_config(trigger: K, config: OverlayConfig) -> Self {
        Self {
            trigger,
            width_reference: None,
            chooser: SideChooser::with_thresholds(config.thresholds),
            config,
            content_empty: false,
            visibility: Visibility::Hidden,
            placement: None,
            pinned_width: None,
            pending_hide: None,
        }
    }

    /// Pins the panel's width to another element's rendered width.
    ///
    /// Used when the panel must align exactly with a sibling control instead
    /// of auto-sizing. Pass `None` to restore auto-sizing. The width is read
    /// at show time, alongside the trigger frame.
    pub fn set_width_reference(&mut self, key: Option<K>) {
        self.width_reference = key;
    }

    /// Marks the panel content as empty or non-empty.
    ///
    /// An empty panel never mounts: [`Overlay::panel_frame`] returns `None`
    /// even in the `Visible` state, so the host renders nothing rather than
    /// an empty box.
    pub fn set_content_empty(&mut self, empty: bool) {
        self.content_empty = empty;
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> OverlayConfig {
        self.config
    }

    /// Replaces the trigger↔panel gap for subsequent placements.
    pub fn set_gap(&mut self, gap: Gap) {
        self.config.gap = gap;
    }

    /// Forces a fixed side for subsequent placements, or restores automatic
    /// selection with `None`.
    pub fn set_forced_side(&mut self, side: Option<Side>) {
        self.config.forced_side = side;
    }

    /// Replaces the hide debounce for subsequently scheduled hides.
    ///
    /// An already-pending hide keeps its original deadline.
    pub fn set_hide_delay_ms(&mut self, ms: u64) {
        self.config.hide_delay_ms = ms;
    }

    /// Suppresses or re-enables the panel.
    ///
    /// Suppressing while visible hides immediately and cancels any pending
    /// hide; enter events are ignored while suppressed.
    pub fn set_suppressed<T>(&mut self, suppressed: bool, queue: &mut TimerQueue<T>) {
        self.config.suppressed = suppressed;
        if suppressed {
            self.cancel_pending_hide(queue);
            self.go_hidden();
        }
    }

    /// Current visibility state.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns `true` while in the `Visible` state.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Where to render the panel, or `None` to render nothing.
    ///
    /// `None` while hidden, while suppressed, and while the content is
    /// empty — an empty tooltip is invisible, not an empty bordered box.
    #[must_use]
    pub fn panel_frame(&self) -> Option<PanelFrame> {
        if self.visibility == Visibility::Hidden || self.config.suppressed || self.content_empty {
            return None;
        }
        self.placement.map(|placement| PanelFrame {
            placement,
            width: self.pinned_width,
        })
    }

    /// Pointer entered (or touch started on) the trigger: show the panel.
    ///
    /// Cancels any pending hide, snapshots the trigger frame, and computes a
    /// fresh placement. Returns `true` when this transitioned the overlay
    /// from hidden to visible, `false` for a re-enter that only refreshed
    /// the placement or was suppressed.
    pub fn pointer_enter<S, T>(
        &mut self,
        source: &S,
        viewport: Size,
        queue: &mut TimerQueue<T>,
    ) -> bool
    where
        S: ElementSource<K>,
    {
        if self.config.suppressed {
            return false;
        }
        self.cancel_pending_hide(queue);
        self.capture(source, viewport);
        let shown = self.visibility == Visibility::Hidden;
        self.visibility = Visibility::Visible;
        shown
    }

    /// Pointer left (or touch ended on) the trigger or the panel: schedule a
    /// debounced hide.
    ///
    /// `timer_key` identifies this overlay in the host-owned queue, so the
    /// host can route the firing back via [`Overlay::timer_fired`]. A leave
    /// while already hidden is a no-op; a second leave replaces the pending
    /// deadline rather than stacking a duplicate.
    pub fn pointer_leave<T>(&mut self, now: u64, timer_key: T, queue: &mut TimerQueue<T>) {
        if self.visibility == Visibility::Hidden {
            return;
        }
        self.cancel_pending_hide(queue);
        let ticket = queue.schedule(now + self.config.hide_delay_ms, timer_key);
        self.pending_hide = Some(ticket);
    }

    /// Pointer entered the panel itself during the debounce window: keep the
    /// panel up by cancelling the pending hide.
    ///
    /// Unlike [`Overlay::pointer_enter`] this does not recapture geometry;
    /// the trigger has not changed.
    pub fn cancel_pending_hide<T>(&mut self, queue: &mut TimerQueue<T>) {
        if let Some(ticket) = self.pending_hide.take() {
            queue.cancel(ticket);
        }
    }

    /// A queue entry fired: commit the hide if it is ours and still current.
    ///
    /// Returns `true` when the overlay transitioned to hidden. A ticket that
    /// does not match the tracked pending hide is stale (superseded by a
    /// later show) and is ignored.
    pub fn timer_fired(&mut self, ticket: Ticket) -> bool {
        if self.pending_hide != Some(ticket) {
            return false;
        }
        self.pending_hide = None;
        self.go_hidden();
        true
    }

    /// Recomputes the placement in place while visible.
    ///
    /// This is the `Visible -> Visible` refresh: no state transition, just a
    /// fresh snapshot of geometry and side selection. Hosts that decide to
    /// reposition on scroll or resize call this from those events; nothing
    /// calls it automatically.
    pub fn refresh<S>(&mut self, source: &S, viewport: Size)
    where
        S: ElementSource<K>,
    {
        if self.visibility == Visibility::Visible {
            self.capture(source, viewport);
        }
    }

    /// Tears the overlay down: hides immediately and cancels any pending
    /// hide so no callback can observe this instance afterwards.
    pub fn release<T>(&mut self, queue: &mut TimerQueue<T>) {
        self.cancel_pending_hide(queue);
        self.go_hidden();
    }

    /// Snapshot of the overlay state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> OverlayDebugInfo {
        OverlayDebugInfo {
            visibility: self.visibility,
            suppressed: self.config.suppressed,
            content_empty: self.content_empty,
            pending_hide: self.pending_hide,
            last_side: self.chooser.last_side(),
            hide_delay_ms: self.config.hide_delay_ms,
        }
    }

    fn capture<S>(&mut self, source: &S, viewport: Size)
    where
        S: ElementSource<K>,
    {
        let frame = capture_frame(source, &self.trigger);
        self.placement = Some(self.chooser.resolve(
            frame,
            viewport,
            self.config.forced_side,
            self.config.gap,
        ));
        self.pinned_width = self
            .width_reference
            .as_ref()
            .and_then(|key| source.frame_of(key))
            .map(|frame| frame.width());
    }

    fn go_hidden(&mut self) {
        self.visibility = Visibility::Hidden;
        self.placement = None;
        self.pinned_width = None;
    }
}

/// Debug snapshot of an [`Overlay`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayDebugInfo {
    /// Current visibility state.
    pub visibility: Visibility,
    /// Whether show behavior is suppressed.
    pub suppressed: bool,
    /// Whether the content is flagged empty.
    pub content_empty: bool,
    /// Outstanding hide ticket, if a debounce is in flight.
    pub pending_hide: Option<Ticket>,
    /// Side chosen by the most recent placement.
    pub last_side: Side,
    /// Hide debounce in effect.
    pub hide_delay_ms: u64,
}
