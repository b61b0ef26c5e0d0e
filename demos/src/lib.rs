// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Corbel demo programs.

use std::collections::HashMap;

use corbel_overlay::ElementSource;
use kurbo::Rect;

/// A static scene of keyed rectangles standing in for a host layout tree.
#[derive(Clone, Debug, Default)]
pub struct StaticScene {
    frames: HashMap<u32, Rect>,
}

impl StaticScene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) an element's frame.
    pub fn insert(&mut self, key: u32, frame: Rect) {
        self.frames.insert(key, frame);
    }

    /// Removes an element, as if it unmounted.
    pub fn remove(&mut self, key: u32) {
        self.frames.remove(&key);
    }
}

impl ElementSource<u32> for StaticScene {
    fn frame_of(&self, key: &u32) -> Option<Rect> {
        self.frames.get(key).copied()
    }
}
