// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement engine.
//!
//! ## Overview
//!
//! Measures the room around the trigger, resolves an alignment, and emits the
//! translation that places content next to the trigger.
//!
//! ## Side resolution
//!
//! - The preferred side is kept when the content fits there.
//! - Otherwise the opposite side is used when the content fits there.
//! - Otherwise the side with more room wins; ties keep the preferred side.
//!
//! There is no "does not fit" outcome. Content may overflow, but a placement
//! is always produced.
//!
//! ## Cross-axis alignment
//!
//! For vertical placements, content is centered over the trigger unless that
//! would push it past the left or right viewport edge, in which case it is
//! aligned with the trigger's left or right edge. Horizontal placements are
//! always vertically centered.

use kurbo::{Rect, Vec2};

use crate::types::{Axis, Placement, ResolvedPlacement, Side, XAlign, YAlign};

/// Room available on each side of the trigger, measured to the viewport edges.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spaces {
    /// Room above the trigger.
    pub above: f64,
    /// Room below the trigger.
    pub below: f64,
    /// Room left of the trigger.
    pub left: f64,
    /// Room right of the trigger.
    pub right: f64,
}

impl Spaces {
    /// Measure the room around `trigger` inside `viewport`.
    pub fn measure(trigger: Rect, viewport: Rect) -> Self {
        Self {
            above: trigger.y0 - viewport.y0,
            below: viewport.y1 - trigger.y1,
            left: trigger.x0 - viewport.x0,
            right: viewport.x1 - trigger.x1,
        }
    }

    /// Room on the given side.
    pub fn on(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.above,
            Side::Bottom => self.below,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// True when `trigger` overlaps `viewport` with non-zero area on both axes.
pub fn is_on_screen(trigger: Rect, viewport: Rect) -> bool {
    trigger.y0 < viewport.y1
        && trigger.y1 > viewport.y0
        && trigger.x0 < viewport.x1
        && trigger.x1 > viewport.x0
}

/// Pick the side content goes on along the preferred side's axis.
///
/// `needed` is the content's extent along that axis.
pub fn resolve_side(preferred: Side, spaces: &Spaces, needed: f64) -> Side {
    let preferred_room = spaces.on(preferred);
    let opposite_room = spaces.on(preferred.opposite());
    if preferred_room >= needed {
        return preferred;
    }
    // Flip when the other side fits, or when neither fits and it has strictly more room.
    if opposite_room >= needed || opposite_room > preferred_room {
        preferred.opposite()
    } else {
        preferred
    }
}

/// Compute where to draw `content` relative to `trigger`.
///
/// Only the size of `content` is consulted; its position is irrelevant.
/// `offset` is the gap kept between trigger and content along the placement axis.
///
/// Returns a hidden placement when the trigger is entirely outside the viewport.
///
/// ```
/// use kurbo::Rect;
/// use overlook_placement::engine::compute_placement;
/// use overlook_placement::types::{Side, YAlign};
///
/// let viewport = Rect::new(0.0, 0.0, 1024.0, 768.0);
/// let trigger = Rect::new(500.0, 750.0, 600.0, 768.0);
/// let content = Rect::new(0.0, 0.0, 200.0, 100.0);
///
/// // No room below the trigger, so the content flips above it.
/// let p = compute_placement(trigger, content, viewport, Side::Bottom, 5.0);
/// assert!(p.visible);
/// assert_eq!(p.resolved.y_align, YAlign::Top);
/// assert_eq!(p.translation.y, -105.0);
/// ```
pub fn compute_placement(
    trigger: Rect,
    content: Rect,
    viewport: Rect,
    preferred: Side,
    offset: f64,
) -> Placement {
    debug_assert!(
        is_finite_rect(trigger) && is_finite_rect(content) && is_finite_rect(viewport),
        "placement geometry must be finite"
    );

    if !is_on_screen(trigger, viewport) {
        tracing::trace!(?preferred, "trigger off-screen; hiding content");
        return Placement::hidden(preferred);
    }

    let spaces = Spaces::measure(trigger, viewport);
    let resolved = match preferred.axis() {
        Axis::Horizontal => {
            let side = resolve_side(preferred, &spaces, content.width());
            ResolvedPlacement {
                x_align: if side == Side::Left {
                    XAlign::Left
                } else {
                    XAlign::Right
                },
                y_align: YAlign::Center,
            }
        }
        Axis::Vertical => {
            let side = resolve_side(preferred, &spaces, content.height());
            ResolvedPlacement {
                x_align: cross_align(trigger, content, viewport),
                y_align: if side == Side::Top {
                    YAlign::Top
                } else {
                    YAlign::Bottom
                },
            }
        }
    };

    if resolved != ResolvedPlacement::initial(preferred) {
        tracing::debug!(?preferred, %resolved, "adjusted placement to fit viewport");
    }

    Placement {
        visible: true,
        translation: translation(trigger, content, preferred.axis(), resolved, offset),
        resolved,
    }
}

/// Horizontal alignment for a vertical placement.
fn cross_align(trigger: Rect, content: Rect, viewport: Rect) -> XAlign {
    let width = content.width();
    let centered = trigger.x0 + trigger.width() / 2.0 - width / 2.0;
    if centered < viewport.x0 {
        XAlign::Left
    } else if centered + width > viewport.x1 {
        XAlign::Right
    } else {
        XAlign::Center
    }
}

fn translation(
    trigger: Rect,
    content: Rect,
    axis: Axis,
    resolved: ResolvedPlacement,
    offset: f64,
) -> Vec2 {
    let (tw, th) = (trigger.width(), trigger.height());
    let (cw, ch) = (content.width(), content.height());

    let dy = match resolved.y_align {
        YAlign::Top => -(ch + offset),
        YAlign::Bottom => th + offset,
        YAlign::Center => (th - ch) / 2.0,
    };
    let dx = match (axis, resolved.x_align) {
        (Axis::Horizontal, XAlign::Left) => -(cw + offset),
        (Axis::Horizontal, XAlign::Right) => tw + offset,
        (Axis::Vertical, XAlign::Left) => 0.0,
        (Axis::Vertical, XAlign::Right) => tw - cw,
        (_, XAlign::Center) => (tw - cw) / 2.0,
    };
    Vec2::new(dx, dy)
}

fn is_finite_rect(r: Rect) -> bool {
    r.x0.is_finite() && r.y0.is_finite() && r.x1.is_finite() && r.y1.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: f64, h: f64) -> Rect {
        Rect::new(0.0, 0.0, w, h)
    }

    // Near the bottom edge: no room below, plenty above.
    #[test]
    fn flips_bottom_to_top_near_bottom_edge() {
        let viewport = size(1024.0, 768.0);
        let trigger = Rect::new(500.0, 750.0, 600.0, 768.0);
        let p = compute_placement(trigger, size(200.0, 100.0), viewport, Side::Bottom, 5.0);
        assert!(p.visible);
        assert_eq!(p.resolved.y_align, YAlign::Top);
        assert_eq!(p.resolved.x_align, XAlign::Center);
        assert_eq!(p.translation, Vec2::new(-50.0, -105.0));
    }

    // Centering would put the left edge at -115, so align with the trigger's left edge.
    #[test]
    fn aligns_left_when_centering_overflows_left_edge() {
        let viewport = size(800.0, 600.0);
        let trigger = Rect::new(10.0, 100.0, 60.0, 130.0);
        let p = compute_placement(trigger, size(300.0, 50.0), viewport, Side::Top, 5.0);
        assert_eq!(p.resolved.y_align, YAlign::Top);
        assert_eq!(p.resolved.x_align, XAlign::Left);
        assert_eq!(p.translation, Vec2::new(0.0, -55.0));
    }

    #[test]
    fn aligns_right_when_centering_overflows_right_edge() {
        let viewport = size(800.0, 600.0);
        let trigger = Rect::new(700.0, 300.0, 780.0, 330.0);
        let p = compute_placement(trigger, size(200.0, 50.0), viewport, Side::Top, 5.0);
        assert_eq!(p.resolved.x_align, XAlign::Right);
        assert_eq!(p.translation.x, -120.0);
        let bounds = p.content_bounds(trigger, size(200.0, 50.0));
        assert_eq!(bounds.x1, trigger.x1);
    }

    #[test]
    fn keeps_preferred_side_when_it_fits() {
        let viewport = size(800.0, 600.0);
        let trigger = Rect::new(300.0, 300.0, 360.0, 330.0);
        let content = size(100.0, 40.0);
        let p = compute_placement(trigger, content, viewport, Side::Bottom, 8.0);
        assert_eq!(p.resolved, ResolvedPlacement::initial(Side::Bottom));
        assert_eq!(p.translation, Vec2::new(-20.0, 38.0));
    }

    // Preferred left lacks room; right has room. Translation uses the resolved side.
    #[test]
    fn flips_left_to_right_and_offsets_past_trigger() {
        let viewport = size(800.0, 600.0);
        let trigger = Rect::new(20.0, 200.0, 80.0, 230.0);
        let p = compute_placement(trigger, size(150.0, 40.0), viewport, Side::Left, 5.0);
        assert_eq!(p.resolved.x_align, XAlign::Right);
        assert_eq!(p.resolved.y_align, YAlign::Center);
        assert_eq!(p.translation, Vec2::new(65.0, -5.0));
    }

    #[test]
    fn flips_right_to_left() {
        let viewport = size(800.0, 600.0);
        let trigger = Rect::new(700.0, 200.0, 760.0, 230.0);
        let p = compute_placement(trigger, size(150.0, 30.0), viewport, Side::Right, 4.0);
        assert_eq!(p.resolved.x_align, XAlign::Left);
        assert_eq!(p.translation, Vec2::new(-154.0, 0.0));
    }

    // Neither side fits: the larger space wins.
    #[test]
    fn neither_fits_picks_larger_space() {
        let viewport = size(300.0, 600.0);
        let trigger = Rect::new(100.0, 200.0, 180.0, 230.0);
        // left = 100, right = 120
        let p = compute_placement(trigger, size(200.0, 30.0), viewport, Side::Left, 5.0);
        assert_eq!(p.resolved.x_align, XAlign::Right);
    }

    // Neither side fits and both have equal room: keep the preferred side.
    #[test]
    fn neither_fits_tie_keeps_preferred() {
        let viewport = size(1024.0, 200.0);
        let trigger = Rect::new(400.0, 80.0, 500.0, 120.0);
        let p = compute_placement(trigger, size(100.0, 100.0), viewport, Side::Bottom, 5.0);
        assert_eq!(p.resolved.y_align, YAlign::Bottom);
        assert_eq!(p.translation.y, 45.0);

        let p = compute_placement(trigger, size(100.0, 100.0), viewport, Side::Top, 5.0);
        assert_eq!(p.resolved.y_align, YAlign::Top);
    }

    #[test]
    fn off_screen_trigger_is_hidden() {
        let viewport = size(800.0, 600.0);
        let trigger = Rect::new(-200.0, -50.0, -100.0, -10.0);
        let p = compute_placement(trigger, size(10.0, 10.0), viewport, Side::Right, 5.0);
        assert_eq!(p, Placement::hidden(Side::Right));
    }

    // Touching the viewport edge without overlap counts as off-screen.
    #[test]
    fn edge_touching_trigger_is_hidden() {
        let viewport = size(800.0, 600.0);
        let trigger = Rect::new(100.0, 600.0, 200.0, 640.0);
        let p = compute_placement(trigger, size(10.0, 10.0), viewport, Side::Top, 5.0);
        assert!(!p.visible);
    }

    // A viewport that does not start at the origin is measured from its own edges.
    #[test]
    fn viewport_origin_is_respected() {
        let viewport = Rect::new(0.0, 1000.0, 800.0, 1600.0);
        let trigger = Rect::new(300.0, 1020.0, 360.0, 1050.0);
        let p = compute_placement(trigger, size(100.0, 50.0), viewport, Side::Top, 5.0);
        // Only 20px above, 550px below.
        assert_eq!(p.resolved.y_align, YAlign::Bottom);
        assert_eq!(p.translation.y, 35.0);
    }

    #[test]
    fn spaces_measure_each_edge() {
        let s = Spaces::measure(Rect::new(10.0, 20.0, 30.0, 50.0), size(100.0, 200.0));
        assert_eq!(
            s,
            Spaces {
                above: 20.0,
                below: 150.0,
                left: 10.0,
                right: 70.0
            }
        );
        assert_eq!(s.on(Side::Right), 70.0);
    }
}
