// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=corbel_overlay --heading-base-level=0

//! Corbel Overlay: the show/hide lifecycle of a floating panel.
//!
//! This crate owns the stateful half of a tooltip/popover: one
//! [`Overlay`] per trigger element tracks whether its panel is hidden or
//! visible, captures the trigger's geometry at show time through a host
//! [`ElementSource`], and debounces hides through a host-owned
//! [`TimerQueue`](corbel_timing::TimerQueue) so a pointer briefly crossing
//! the trigger↔panel gap does not flicker the panel.
//!
//! The placement math itself lives in [`corbel_placement`]; this crate feeds
//! it fresh geometry on every show event and holds the result while visible.
//!
//! ## Event wiring
//!
//! The host routes its input events symmetrically:
//!
//! - pointer-enter / touch-start on the trigger → [`Overlay::pointer_enter`]
//! - pointer-leave / touch-end on the trigger or panel → [`Overlay::pointer_leave`]
//! - pointer-enter on the panel during the debounce → [`Overlay::cancel_pending_hide`]
//! - each drained timer firing → [`Overlay::timer_fired`]
//! - teardown → [`Overlay::release`]
//!
//! ## Minimal example
//!
//! ```rust
//! use corbel_overlay::{ElementSource, Overlay};
//! use corbel_placement::Side;
//! use corbel_timing::TimerQueue;
//! use kurbo::{Rect, Size};
//!
//! // The host's geometry lookup; here a single static element.
//! struct Scene;
//! impl ElementSource<u32> for Scene {
//!     fn frame_of(&self, key: &u32) -> Option<Rect> {
//!         (*key == 1).then(|| Rect::new(200.0, 100.0, 250.0, 120.0))
//!     }
//! }
//!
//! let viewport = Size::new(1280.0, 720.0);
//! let mut queue: TimerQueue<u32> = TimerQueue::new();
//! let mut tip = Overlay::new(1_u32);
//!
//! // Hover in: the panel shows above the trigger, 8px off its top-center.
//! tip.pointer_enter(&Scene, viewport, &mut queue);
//! let frame = tip.panel_frame().unwrap();
//! assert_eq!(frame.placement.side, Side::Top);
//!
//! // Hover out at t=1000ms: the hide commits once the 150ms debounce runs out.
//! tip.pointer_leave(1000, 1, &mut queue);
//! let (ticket, _key) = queue.pop_expired(1150).unwrap();
//! assert!(tip.timer_fired(ticket));
//! assert!(tip.panel_frame().is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod overlay;
mod source;

pub use overlay::{Overlay, OverlayConfig, OverlayDebugInfo, PanelFrame, Visibility};
pub use source::{ElementSource, capture_frame};
