// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side selection across a viewport.
//!
//! This example walks a trigger through the four corners and the center of a
//! viewport and prints which side the chooser picks and where the panel's
//! anchor lands.
//!
//! Run:
//! - `cargo run -p corbel_demos --example placement_basics`

use corbel_placement::{Gap, SideChooser};
use kurbo::{Rect, Size};

fn main() {
    let viewport = Size::new(1280.0, 720.0);
    let mut chooser = SideChooser::new();

    let spots = [
        ("center", Rect::new(615.0, 350.0, 665.0, 370.0)),
        ("top-left", Rect::new(10.0, 10.0, 60.0, 30.0)),
        ("top-right", Rect::new(1220.0, 10.0, 1270.0, 30.0)),
        ("bottom-left", Rect::new(10.0, 690.0, 60.0, 710.0)),
        ("bottom-right", Rect::new(1220.0, 690.0, 1270.0, 710.0)),
    ];

    for (name, frame) in spots {
        let p = chooser.resolve(frame, viewport, None, Gap::default());
        println!(
            "{name:>12}: side {:?}, anchor ({:.0}, {:.0}), shift ({:+.1}, {:+.1})",
            p.side, p.anchor.x, p.anchor.y, p.shift.x, p.shift.y
        );
    }

    // A forced side wins regardless of room.
    let forced = chooser.resolve(
        spots[1].1,
        viewport,
        Some(corbel_placement::Side::Top),
        Gap::default(),
    );
    println!("      forced: side {:?} with 10px above the trigger", forced.side);
}
