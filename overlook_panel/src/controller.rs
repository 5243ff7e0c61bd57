// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel visibility controller.
//!
//! ## State machine
//!
//! - [`toggle`](PanelController::toggle) flips open and closed.
//! - The toggle shortcut (Ctrl/Cmd+B) calls `toggle`.
//! - An always-visible panel is pinned open; every transition is a no-op.
//! - [`on_resize`](PanelController::on_resize) re-derives the mobile flag. Crossing the
//!   breakpoint switches the render mode but never opens or closes the panel.
//! - On mobile, clicking the backdrop closes the panel.
//!
//! ```
//! use overlook_panel::controller::PanelController;
//! use overlook_panel::shortcut::{KeyEvent, KeyOutcome, Modifiers};
//! use overlook_panel::types::{PanelConfig, PanelMode};
//!
//! let mut panel = PanelController::new(PanelConfig::default()).unwrap();
//! assert!(panel.is_open());
//!
//! let ctrl_b = KeyEvent::new('b', Modifiers::CTRL);
//! assert_eq!(panel.handle_key(&ctrl_b), KeyOutcome::Handled);
//! assert_eq!(panel.mode(), PanelMode::CollapsedIcons);
//! ```

use crate::layout::PanelLayout;
use crate::shortcut::{KeyEvent, KeyOutcome, Shortcut};
use crate::types::{
    ConfigError, PanelConfig, PanelMode, RenderMode, Side, VisibilityState, is_mobile_width,
};

/// Open/closed state of one docked panel.
///
/// Each instance owns its state; a left and a right panel never share anything.
#[derive(Clone, Debug)]
pub struct PanelController {
    config: PanelConfig,
    open: bool,
    mobile: bool,
    shortcut: Shortcut,
}

impl PanelController {
    /// Create a panel from validated configuration.
    ///
    /// The panel starts in desktop mode; call [`on_resize`](Self::on_resize)
    /// with the viewport width once mounted.
    pub fn new(config: PanelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            open: config.default_open || config.always_visible,
            mobile: false,
            shortcut: Shortcut::TOGGLE_PANEL,
        })
    }

    /// Replace the toggle shortcut.
    pub fn with_shortcut(mut self, shortcut: Shortcut) -> Self {
        self.shortcut = shortcut;
        self
    }

    /// The panel's configuration.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Edge the panel is docked to.
    pub fn side(&self) -> Side {
        self.config.side
    }

    /// True while open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True when the last reported viewport was mobile-sized.
    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// True if the panel is pinned open.
    pub fn is_always_visible(&self) -> bool {
        self.config.always_visible
    }

    /// Snapshot of the observable state.
    pub fn state(&self) -> VisibilityState {
        VisibilityState {
            is_open: self.open,
            side: self.config.side,
            max_width: self.config.max_width,
            is_mobile: self.mobile,
            collapsed_shows_icons: self.config.show_icons_on_collapse,
            always_visible: self.config.always_visible,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> PanelMode {
        self.state().mode()
    }

    /// Current render mode.
    pub fn render_mode(&self) -> RenderMode {
        self.state().render_mode()
    }

    /// Layout metrics at the given viewport width.
    ///
    /// The render mode follows `viewport_width`, not the last width passed to
    /// [`on_resize`](Self::on_resize).
    pub fn layout(&self, viewport_width: f64) -> PanelLayout {
        let state = VisibilityState {
            is_mobile: is_mobile_width(viewport_width),
            ..self.state()
        };
        PanelLayout::compute(&state, viewport_width)
    }

    /// Flip between open and closed. Returns true if the state changed.
    pub fn toggle(&mut self) -> bool {
        let open = !self.open;
        self.set_open(open)
    }

    /// Open the panel. Returns true if the state changed.
    pub fn open(&mut self) -> bool {
        self.set_open(true)
    }

    /// Close the panel. Returns true if the state changed.
    pub fn close(&mut self) -> bool {
        self.set_open(false)
    }

    /// Set the open flag. Returns true if the state changed.
    ///
    /// Always-visible panels stay open.
    pub fn set_open(&mut self, open: bool) -> bool {
        if self.config.always_visible || self.open == open {
            return false;
        }
        self.open = open;
        tracing::debug!(side = ?self.config.side, open, "panel visibility changed");
        true
    }

    /// Re-derive the mobile flag from the viewport width.
    ///
    /// Returns true if the panel crossed the breakpoint.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        let mobile = is_mobile_width(viewport_width);
        if mobile == self.mobile {
            return false;
        }
        self.mobile = mobile;
        tracing::debug!(side = ?self.config.side, mobile, viewport_width, "panel crossed mobile breakpoint");
        true
    }

    /// Handle a global key press.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        if self.config.always_visible || !self.shortcut.matches(event) {
            return KeyOutcome::Ignored;
        }
        self.toggle();
        KeyOutcome::Handled
    }

    /// Whether a backdrop is drawn behind the panel.
    pub fn has_backdrop(&self) -> bool {
        self.mobile && self.open && !self.config.always_visible
    }

    /// Handle a click on the mobile backdrop. Returns true if the panel closed.
    pub fn backdrop_click(&mut self) -> bool {
        if !self.has_backdrop() {
            return false;
        }
        self.close()
    }
}
