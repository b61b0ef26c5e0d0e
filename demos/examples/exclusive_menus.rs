// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One dropdown open at a time across a menu bar.
//!
//! Three menu overlays share one exclusivity scope: opening any of them
//! evicts whichever was open, and the host closes the evicted one.
//!
//! Run:
//! - `cargo run -p corbel_demos --example exclusive_menus`

use std::collections::HashMap;

use corbel_demos::StaticScene;
use corbel_exclusive::OwnerRegister;
use corbel_overlay::Overlay;
use corbel_timing::TimerQueue;
use kurbo::{Rect, Size};

fn main() {
    let viewport = Size::new(1280.0, 720.0);
    let mut scene = StaticScene::new();
    for key in 1..=3_u32 {
        let x = 100.0 * f64::from(key);
        scene.insert(key, Rect::new(x, 0.0, x + 80.0, 28.0));
    }

    let mut queue: TimerQueue<u32> = TimerQueue::new();
    let mut register: OwnerRegister<&str, u32> = OwnerRegister::new();
    let mut menus: HashMap<u32, Overlay<u32>> = (1..=3).map(|k| (k, Overlay::new(k))).collect();

    for key in [1_u32, 2, 3, 2] {
        if let Some(evicted) = register.claim("menubar", key) {
            println!("open menu {key}: evicts menu {evicted}");
            menus.get_mut(&evicted).unwrap().release(&mut queue);
        } else {
            println!("open menu {key}: nothing to evict");
        }
        menus
            .get_mut(&key)
            .unwrap()
            .pointer_enter(&scene, viewport, &mut queue);

        let mut open: Vec<u32> = menus
            .iter()
            .filter(|(_, m)| m.is_visible())
            .map(|(k, _)| *k)
            .collect();
        open.sort_unstable();
        println!("  open menus: {open:?}");
    }
}
