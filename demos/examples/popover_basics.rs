// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover lifecycle against a simulated host.
//!
//! This example opens a popover, scrolls the page until the trigger nears the
//! top edge (the content flips below), then dismisses it with an outside click.
//! Several scroll events between frames collapse into one recomputation.
//!
//! Set `RUST_LOG=overlook_placement=trace` to watch the recomputations.
//!
//! Run:
//! - `cargo run -p overlook_demos --example popover_basics`

use kurbo::{Point, Rect, Size, Vec2};
use overlook_placement::popover::{Popover, PopoverEvent, PopoverOptions, PopoverTransition};
use overlook_placement::types::{Geometry, Side, YAlign};
use tracing_subscriber::EnvFilter;

/// A page whose trigger moves as it scrolls.
///
/// Content is drawn at the trigger's corner plus the last applied translation.
struct Page {
    trigger_at_rest: Rect,
    content_size: Size,
    content_offset: Vec2,
    scroll_y: f64,
    viewport: Rect,
}

impl Page {
    fn trigger(&self) -> Rect {
        self.trigger_at_rest - Vec2::new(0.0, self.scroll_y)
    }
}

impl Geometry for Page {
    fn trigger_rect(&self) -> Option<Rect> {
        Some(self.trigger())
    }

    fn content_rect(&self) -> Option<Rect> {
        let origin = self.trigger().origin() + self.content_offset;
        Some(Rect::from_origin_size(origin, self.content_size))
    }

    fn viewport_rect(&self) -> Rect {
        self.viewport
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Options arrive as JSON; missing fields take their defaults.
    let options: PopoverOptions =
        serde_json::from_str(r#"{ "side": "top", "side_offset": 8.0 }"#).unwrap();
    let mut popover = Popover::new(options).unwrap();
    println!("options: {:?}", popover.options());

    let mut page = Page {
        trigger_at_rest: Rect::new(360.0, 300.0, 440.0, 332.0),
        content_size: Size::new(200.0, 120.0),
        content_offset: Vec2::ZERO,
        scroll_y: 0.0,
        viewport: Rect::new(0.0, 0.0, 800.0, 600.0),
    };

    // Click the trigger.
    let t = popover.handle(PopoverEvent::TriggerClick, &page);
    assert_eq!(t, Some(PopoverTransition::Opened));
    println!("listeners after open: {:?}", popover.listeners());

    let placement = popover.on_animation_frame(&page).unwrap();
    println!(
        "frame 1: placement={} translation={:?}",
        placement.resolved, placement.translation
    );
    assert_eq!(placement.resolved.y_align, YAlign::Top);
    assert_eq!(placement.translation, Vec2::new(-60.0, -128.0));
    page.content_offset = placement.translation;

    // Scroll until only 100px remain above the trigger; several events, one frame.
    for step in 1..=4 {
        page.scroll_y = 50.0 * f64::from(step);
        popover.handle(PopoverEvent::Scroll, &page);
    }
    assert!(popover.needs_frame());
    let placement = popover.on_animation_frame(&page).unwrap();
    println!(
        "frame 2: placement={} translation={:?}",
        placement.resolved, placement.translation
    );
    assert_eq!(placement.resolved.y_align, YAlign::Bottom);
    assert_eq!(placement.translation, Vec2::new(-60.0, 40.0));
    page.content_offset = placement.translation;
    assert!(popover.on_animation_frame(&page).is_none());

    let style = popover.content_style(page.viewport);
    println!(
        "content style: visible={} max_size={:?} data-placement={}",
        style.visible, style.max_size, style.placement
    );

    // Pointer down inside the content keeps it open; outside closes it.
    let inside = Point::new(380.0, 150.0);
    assert_eq!(popover.handle(PopoverEvent::PointerDown(inside), &page), None);
    let outside = Point::new(20.0, 580.0);
    let t = popover.handle(PopoverEvent::PointerDown(outside), &page);
    assert_eq!(t, Some(PopoverTransition::Closed));
    assert!(popover.listeners().is_empty());
    println!("closed; listeners: {:?}", popover.listeners());

    // The preferred side is a hint only: a right-side popover near the right edge flips left.
    let mut right = Popover::new(PopoverOptions {
        side: Side::Right,
        ..Default::default()
    })
    .unwrap();
    page.trigger_at_rest = Rect::new(700.0, 500.0, 760.0, 520.0);
    page.content_offset = Vec2::ZERO;
    right.open();
    let placement = right.on_animation_frame(&page).unwrap();
    println!("right-side popover near edge: {}", placement.resolved);
    assert_eq!(placement.resolved.to_string(), "center-left");
}
