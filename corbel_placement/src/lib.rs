// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=corbel_placement --heading-base-level=0

//! Corbel Placement: headless anchoring math for floating panels.
//!
//! This crate decides which side of a trigger element a floating panel
//! (tooltip, popover, dropdown) should be anchored to, and computes the exact
//! anchor point for rendering. It is pure geometry over [`kurbo`] types:
//!
//! - [`Side`]: which side of the trigger the panel hangs off.
//! - [`SideSet`]: the set of sides with enough viewport room for a panel.
//! - [`Gap`]: the configurable trigger↔panel offset, per axis.
//! - [`Placement`]: the derived anchor point plus the fractional panel-size
//!   shift that aligns the panel's near edge-center to that anchor.
//! - [`SideChooser`]: the side-selection policy — priority scan over fitting
//!   sides, with caller override and a keep-last fallback when nothing fits.
//!
//! The crate does **not** measure anything itself. Callers are expected to:
//!
//! - Snapshot the trigger's frame in viewport coordinates at the moment the
//!   panel is requested to show (layout can shift between events).
//! - Pass the current viewport size in the same coordinate space.
//! - Apply the returned anchor and shift in their own rendering layer.
//!
//! A [`Placement`] is a pure function of (trigger frame, side, gap). It has
//! no lifecycle of its own: recompute it whenever its inputs change, never
//! patch it incrementally.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use corbel_placement::{Gap, Side, SideChooser};
//!
//! let mut chooser = SideChooser::new();
//!
//! // Trigger frame in viewport coordinates: 50x20 at (200, 100).
//! let frame = Rect::new(200.0, 100.0, 250.0, 120.0);
//! let viewport = Size::new(1280.0, 720.0);
//!
//! let placement = chooser.resolve(frame, viewport, None, Gap::default());
//! assert_eq!(placement.side, Side::Top);
//! // Panel bottom-center lands 8px above the trigger's top-center.
//! assert_eq!(placement.anchor.x, 225.0);
//! assert_eq!(placement.anchor.y, 92.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod chooser;
mod gap;
mod side;

pub use chooser::{
    FitThresholds, Placement, SideChooser, SideChooserDebugInfo, fitting_sides, placement,
};
pub use gap::Gap;
pub use side::{Side, SideSet};
