// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for panels: sides, configuration, modes, and observable state.

/// Viewport widths below this are treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Default open width of a panel, in pixels.
pub const DEFAULT_MAX_WIDTH: f64 = 280.0;

/// Width of the icon rail shown by a collapsed panel (4rem).
pub const COLLAPSED_ICON_WIDTH: f64 = 64.0;

/// Mobile overlays take this fraction of the viewport width, at most.
pub const OVERLAY_WIDTH_FRACTION: f64 = 0.85;

/// Edge of the screen a panel is docked to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    /// Docked to the left edge.
    #[default]
    Left,
    /// Docked to the right edge.
    Right,
}

/// Panel configuration, fixed for the panel's mounted lifetime.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    /// Edge the panel is docked to.
    pub side: Side,
    /// Width when open, in pixels.
    pub max_width: f64,
    /// Keep an icon rail visible when collapsed on desktop.
    pub show_icons_on_collapse: bool,
    /// Pin the panel open; toggling does nothing.
    pub always_visible: bool,
    /// Whether the panel starts open.
    pub default_open: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            side: Side::Left,
            max_width: DEFAULT_MAX_WIDTH,
            show_icons_on_collapse: true,
            always_visible: false,
            default_open: true,
        }
    }
}

impl PanelConfig {
    /// Configuration for a panel on `side` with defaults elsewhere.
    pub fn on(side: Side) -> Self {
        Self {
            side,
            ..Self::default()
        }
    }

    /// Check that the configuration describes a usable panel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_width.is_finite() || self.max_width <= 0.0 {
            return Err(ConfigError::InvalidMaxWidth(self.max_width));
        }
        Ok(())
    }
}

/// Invalid [`PanelConfig`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `max_width` was zero, negative, infinite, or NaN.
    #[error("panel max width must be finite and positive, got {0}")]
    InvalidMaxWidth(f64),
}

/// What a panel currently shows.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PanelMode {
    /// Hidden.
    Closed,
    /// Open at full width.
    Open,
    /// Collapsed to an icon rail (desktop only).
    CollapsedIcons,
    /// Pinned open.
    AlwaysVisible,
}

/// How a panel is rendered at the current viewport width.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RenderMode {
    /// Docked beside main content, which is squeezed to make room.
    Docked,
    /// Fixed overlay above main content, with a backdrop while open.
    Overlay,
}

/// Observable panel state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisibilityState {
    /// Whether the panel is open. Always true when `always_visible`.
    pub is_open: bool,
    /// Edge the panel is docked to.
    pub side: Side,
    /// Width when open, in pixels.
    pub max_width: f64,
    /// Whether the viewport is below [`MOBILE_BREAKPOINT`].
    pub is_mobile: bool,
    /// Whether a collapsed desktop panel keeps its icon rail.
    pub collapsed_shows_icons: bool,
    /// Whether the panel is pinned open.
    pub always_visible: bool,
}

impl VisibilityState {
    /// The mode implied by this state.
    pub fn mode(&self) -> PanelMode {
        if self.always_visible {
            PanelMode::AlwaysVisible
        } else if self.is_open {
            PanelMode::Open
        } else if !self.is_mobile && self.collapsed_shows_icons {
            PanelMode::CollapsedIcons
        } else {
            PanelMode::Closed
        }
    }

    /// The render mode implied by this state.
    pub fn render_mode(&self) -> RenderMode {
        if self.is_mobile {
            RenderMode::Overlay
        } else {
            RenderMode::Docked
        }
    }
}

/// True if a viewport of `width` pixels is mobile-sized.
pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}
