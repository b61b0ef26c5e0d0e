// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full hover cycle against a simulated clock.
//!
//! Shows the debounced hide in action: a leave only commits after 150ms, and
//! a re-enter inside that window keeps the panel up.
//!
//! Run:
//! - `cargo run -p corbel_demos --example overlay_hover`

use corbel_demos::StaticScene;
use corbel_overlay::Overlay;
use corbel_timing::TimerQueue;
use kurbo::{Rect, Size};

fn main() {
    let viewport = Size::new(1280.0, 720.0);
    let mut scene = StaticScene::new();
    scene.insert(1, Rect::new(200.0, 100.0, 250.0, 120.0));

    let mut queue: TimerQueue<u32> = TimerQueue::new();
    let mut tip = Overlay::new(1_u32);

    // t=0: hover in.
    tip.pointer_enter(&scene, viewport, &mut queue);
    let frame = tip.panel_frame().expect("panel is up");
    println!(
        "t=0    show: {:?} anchor ({:.0}, {:.0})",
        frame.placement.side, frame.placement.anchor.x, frame.placement.anchor.y
    );

    // t=1000: hover out; t=1100: back in before the debounce runs out.
    tip.pointer_leave(1000, 1, &mut queue);
    println!("t=1000 leave: hide due at {:?}", queue.next_deadline());
    tip.pointer_enter(&scene, viewport, &mut queue);
    println!("t=1100 re-enter: pending hides = {}", queue.len());

    // t=2000: hover out for good; drain the queue past the deadline.
    tip.pointer_leave(2000, 1, &mut queue);
    let mut now = 2000;
    while tip.is_visible() {
        now += 50;
        while let Some((ticket, _key)) = queue.pop_expired(now) {
            tip.timer_fired(ticket);
        }
    }
    println!("t={now} hidden: panel_frame = {:?}", tip.panel_frame());
}
