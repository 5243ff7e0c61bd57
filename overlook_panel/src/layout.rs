// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout metrics derived from panel state.
//!
//! Docked panels take horizontal space from main content. Overlay panels
//! (mobile) slide in over it and take none.

use crate::types::{
    COLLAPSED_ICON_WIDTH, OVERLAY_WIDTH_FRACTION, RenderMode, Side, VisibilityState,
};

/// Sizes and flags a renderer needs to draw one panel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelLayout {
    /// Docked beside content or overlaid on it.
    pub render_mode: RenderMode,
    /// Rendered width of the panel.
    pub width: f64,
    /// Minimum width; pinned panels never shrink below their open width.
    pub min_width: f64,
    /// Horizontal space taken from main content.
    pub docked_width: f64,
    /// Horizontal translation of an overlay panel; non-zero slides it off-screen.
    pub overlay_translation: f64,
    /// Whether to draw a backdrop behind the panel.
    pub backdrop: bool,
    /// Whether item labels are shown (false on an icon rail).
    pub show_labels: bool,
    /// Whether the panel body is rendered at all.
    pub show_content: bool,
    /// Whether a toggle button is offered.
    pub show_toggle: bool,
}

impl PanelLayout {
    /// Compute the layout for `state` at the given viewport width.
    pub fn compute(state: &VisibilityState, viewport_width: f64) -> Self {
        let show_labels = state.is_open || state.always_visible;
        let show_content = show_labels || state.collapsed_shows_icons;
        let show_toggle = !state.always_visible;

        if state.is_mobile {
            let width = (viewport_width * OVERLAY_WIDTH_FRACTION).min(state.max_width);
            let overlay_translation = match (state.is_open, state.side) {
                (true, _) => 0.0,
                (false, Side::Left) => -width,
                (false, Side::Right) => width,
            };
            return Self {
                render_mode: RenderMode::Overlay,
                width,
                min_width: 0.0,
                docked_width: 0.0,
                overlay_translation,
                backdrop: state.is_open && !state.always_visible,
                show_labels,
                show_content,
                show_toggle,
            };
        }

        let width = if state.is_open {
            state.max_width
        } else if state.collapsed_shows_icons && !state.always_visible {
            COLLAPSED_ICON_WIDTH
        } else {
            0.0
        };
        let min_width = if state.always_visible {
            state.max_width
        } else {
            width
        };
        Self {
            render_mode: RenderMode::Docked,
            width,
            min_width,
            docked_width: width.max(min_width),
            overlay_translation: 0.0,
            backdrop: false,
            show_labels,
            show_content,
            show_toggle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(is_open: bool, is_mobile: bool) -> VisibilityState {
        VisibilityState {
            is_open,
            side: Side::Left,
            max_width: 280.0,
            is_mobile,
            collapsed_shows_icons: true,
            always_visible: false,
        }
    }

    #[test]
    fn desktop_open_uses_max_width() {
        let l = PanelLayout::compute(&state(true, false), 1280.0);
        assert_eq!(l.render_mode, RenderMode::Docked);
        assert_eq!(l.width, 280.0);
        assert_eq!(l.docked_width, 280.0);
        assert!(l.show_labels);
        assert!(!l.backdrop);
    }

    #[test]
    fn desktop_collapsed_shows_icon_rail() {
        let l = PanelLayout::compute(&state(false, false), 1280.0);
        assert_eq!(l.width, COLLAPSED_ICON_WIDTH);
        assert!(!l.show_labels);
        assert!(l.show_content);
    }

    #[test]
    fn desktop_collapsed_without_icons_is_zero_width() {
        let s = VisibilityState {
            collapsed_shows_icons: false,
            ..state(false, false)
        };
        let l = PanelLayout::compute(&s, 1280.0);
        assert_eq!(l.width, 0.0);
        assert_eq!(l.docked_width, 0.0);
        assert!(!l.show_content);
    }

    #[test]
    fn pinned_panel_keeps_min_width() {
        let s = VisibilityState {
            always_visible: true,
            ..state(true, false)
        };
        let l = PanelLayout::compute(&s, 1280.0);
        assert_eq!(l.min_width, 280.0);
        assert!(!l.show_toggle);
    }

    // Mobile overlay width: min(85% of viewport, max width).
    #[test]
    fn mobile_overlay_width_is_clamped() {
        let narrow = PanelLayout::compute(&state(true, true), 320.0);
        assert_eq!(narrow.width, 272.0);
        let wide = PanelLayout::compute(&state(true, true), 700.0);
        assert_eq!(wide.width, 280.0);
        let small_max = VisibilityState {
            max_width: 200.0,
            ..state(true, true)
        };
        assert_eq!(PanelLayout::compute(&small_max, 700.0).width, 200.0);
    }

    // The configured width is the only cap; wide panels are not held to 300.
    #[test]
    fn mobile_overlay_honors_wide_max_width() {
        let wide_max = VisibilityState {
            max_width: 320.0,
            ..state(true, true)
        };
        assert_eq!(PanelLayout::compute(&wide_max, 390.0).width, 320.0);
        assert_eq!(PanelLayout::compute(&wide_max, 340.0).width, 289.0);
    }

    #[test]
    fn mobile_open_has_backdrop_and_takes_no_space() {
        let l = PanelLayout::compute(&state(true, true), 400.0);
        assert_eq!(l.render_mode, RenderMode::Overlay);
        assert!(l.backdrop);
        assert_eq!(l.docked_width, 0.0);
        assert_eq!(l.overlay_translation, 0.0);
    }

    // Closed overlays slide out past their own edge.
    #[test]
    fn mobile_closed_slides_off_screen() {
        let left = PanelLayout::compute(&state(false, true), 400.0);
        assert_eq!(left.overlay_translation, -left.width);
        assert!(!left.backdrop);

        let right_state = VisibilityState {
            side: Side::Right,
            ..state(false, true)
        };
        let right = PanelLayout::compute(&right_state, 400.0);
        assert_eq!(right.overlay_translation, right.width);
    }
}
