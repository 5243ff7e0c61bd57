// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A left/right pair of independent panels.

use crate::controller::PanelController;
use crate::shortcut::{KeyEvent, KeyOutcome};
use crate::types::Side;

/// Horizontal space main content loses to docked panels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContentInsets {
    /// Space taken on the left.
    pub left: f64,
    /// Space taken on the right.
    pub right: f64,
}

/// Up to one panel per side, each with its own state.
#[derive(Clone, Debug, Default)]
pub struct PanelSet {
    left: Option<PanelController>,
    right: Option<PanelController>,
}

impl PanelSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self {
            left: None,
            right: None,
        }
    }

    /// Mount a panel on its configured side, returning any panel it replaces.
    pub fn mount(&mut self, panel: PanelController) -> Option<PanelController> {
        let side = panel.side();
        tracing::debug!(?side, "mounting panel");
        self.slot_mut(side).replace(panel)
    }

    /// Unmount the panel on `side`.
    pub fn unmount(&mut self, side: Side) -> Option<PanelController> {
        self.slot_mut(side).take()
    }

    /// The panel on `side`, if mounted.
    pub fn get(&self, side: Side) -> Option<&PanelController> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    /// The panel on `side`, mutably, if mounted.
    pub fn get_mut(&mut self, side: Side) -> Option<&mut PanelController> {
        self.slot_mut(side).as_mut()
    }

    /// The panel on `side`.
    ///
    /// # Panics
    ///
    /// Panics if no panel is mounted on `side`. Reaching for a panel that was
    /// never mounted means the layout was composed incorrectly.
    #[track_caller]
    pub fn panel(&self, side: Side) -> &PanelController {
        match self.get(side) {
            Some(p) => p,
            None => panic!("no panel mounted on the {side:?} side"),
        }
    }

    /// The panel on `side`, mutably.
    ///
    /// # Panics
    ///
    /// Panics if no panel is mounted on `side`.
    #[track_caller]
    pub fn panel_mut(&mut self, side: Side) -> &mut PanelController {
        match self.slot_mut(side) {
            Some(p) => p,
            None => panic!("no panel mounted on the {side:?} side"),
        }
    }

    /// Mounted panels, left first.
    pub fn iter(&self) -> impl Iterator<Item = &PanelController> {
        self.left.iter().chain(self.right.iter())
    }

    /// Forward a key press to every mounted panel.
    ///
    /// Returns [`KeyOutcome::Handled`] if any panel consumed it.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        let mut outcome = KeyOutcome::Ignored;
        for panel in self.left.iter_mut().chain(self.right.iter_mut()) {
            if panel.handle_key(event) == KeyOutcome::Handled {
                outcome = KeyOutcome::Handled;
            }
        }
        outcome
    }

    /// Forward a viewport resize to every mounted panel.
    pub fn on_resize(&mut self, viewport_width: f64) {
        for panel in self.left.iter_mut().chain(self.right.iter_mut()) {
            panel.on_resize(viewport_width);
        }
    }

    /// Space taken from main content at the given viewport width.
    pub fn content_insets(&self, viewport_width: f64) -> ContentInsets {
        let docked = |p: Option<&PanelController>| {
            p.map_or(0.0, |p| p.layout(viewport_width).docked_width)
        };
        ContentInsets {
            left: docked(self.left.as_ref()),
            right: docked(self.right.as_ref()),
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<PanelController> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcut::Modifiers;
    use crate::types::{COLLAPSED_ICON_WIDTH, PanelConfig};

    fn pair() -> PanelSet {
        let mut set = PanelSet::new();
        set.mount(PanelController::new(PanelConfig::on(Side::Left)).unwrap());
        set.mount(
            PanelController::new(PanelConfig {
                side: Side::Right,
                max_width: 240.0,
                show_icons_on_collapse: false,
                ..Default::default()
            })
            .unwrap(),
        );
        set
    }

    // Toggling one side leaves the other untouched.
    #[test]
    fn sides_are_independent() {
        let mut set = pair();
        set.panel_mut(Side::Left).toggle();
        assert!(!set.panel(Side::Left).is_open());
        assert!(set.panel(Side::Right).is_open());
        assert_eq!(set.panel(Side::Right).config().max_width, 240.0);
    }

    #[test]
    fn mount_replaces_same_side() {
        let mut set = pair();
        let old = set.mount(PanelController::new(PanelConfig::on(Side::Left)).unwrap());
        assert!(old.is_some());
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    #[should_panic(expected = "no panel mounted on the Right side")]
    fn missing_panel_panics() {
        let mut set = pair();
        set.unmount(Side::Right);
        let _ = set.panel(Side::Right);
    }

    #[test]
    fn fresh_set_below_breakpoint_takes_no_space() {
        let set = pair();
        assert_eq!(set.content_insets(400.0), ContentInsets::default());
    }

    #[test]
    fn get_on_missing_side_is_none() {
        let set = PanelSet::new();
        assert!(set.get(Side::Left).is_none());
    }

    #[test]
    fn shortcut_fans_out_except_pinned() {
        let mut set = pair();
        set.mount(
            PanelController::new(PanelConfig {
                side: Side::Right,
                always_visible: true,
                ..Default::default()
            })
            .unwrap(),
        );
        let ctrl_b = KeyEvent::new('b', Modifiers::CTRL);
        assert_eq!(set.handle_key(&ctrl_b), KeyOutcome::Handled);
        assert!(!set.panel(Side::Left).is_open());
        assert!(set.panel(Side::Right).is_open());
    }

    #[test]
    fn insets_follow_docked_widths() {
        let mut set = pair();
        assert_eq!(
            set.content_insets(1280.0),
            ContentInsets {
                left: 280.0,
                right: 240.0
            }
        );
        set.panel_mut(Side::Left).close();
        set.panel_mut(Side::Right).close();
        assert_eq!(
            set.content_insets(1280.0),
            ContentInsets {
                left: COLLAPSED_ICON_WIDTH,
                right: 0.0
            }
        );
    }

    // Mobile overlays take no space from content.
    #[test]
    fn mobile_insets_are_zero() {
        let mut set = pair();
        set.on_resize(480.0);
        assert!(set.iter().all(PanelController::is_mobile));
        assert_eq!(set.content_insets(480.0), ContentInsets::default());
    }
}
