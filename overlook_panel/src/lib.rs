// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overlook_panel --heading-base-level=0

//! Overlook Panel: visibility state for docked side panels.
//!
//! Overlook Panel tracks whether a sidebar is open, collapsed to an icon rail, or pinned,
//! and how it should be laid out at the current viewport width.
//!
//! - [`controller::PanelController`]: open/closed state, the Ctrl/Cmd+B shortcut, the mobile breakpoint, and backdrop dismissal.
//! - [`layout::PanelLayout`]: widths, overlay translation, and visibility flags derived from state.
//! - [`set::PanelSet`]: a left and a right panel composed side by side with no shared state.
//! - [`shortcut`]: modifier flags and key matching.
//!
//! ## Responsive behavior
//!
//! Below [`types::MOBILE_BREAKPOINT`] panels switch from squeezing main content to a fixed overlay with a backdrop.
//! Crossing the breakpoint never opens or closes a panel by itself.
//!
//! # Example
//!
//! ```rust
//! use overlook_panel::controller::PanelController;
//! use overlook_panel::set::PanelSet;
//! use overlook_panel::types::{PanelConfig, Side};
//!
//! let mut panels = PanelSet::new();
//! panels.mount(PanelController::new(PanelConfig::on(Side::Left)).unwrap());
//! panels.mount(PanelController::new(PanelConfig {
//!     side: Side::Right,
//!     always_visible: true,
//!     ..Default::default()
//! }).unwrap());
//!
//! panels.on_resize(1280.0);
//! let insets = panels.content_insets(1280.0);
//! assert_eq!(insets.left, 280.0);
//!
//! // The pinned right panel ignores toggles.
//! assert!(!panels.panel_mut(Side::Right).toggle());
//! assert!(panels.panel(Side::Right).is_open());
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

pub mod controller;
pub mod layout;
pub mod set;
pub mod shortcut;
pub mod types;

pub use controller::PanelController;
pub use layout::PanelLayout;
pub use set::{ContentInsets, PanelSet};
pub use types::{ConfigError, PanelConfig, PanelMode, RenderMode, Side, VisibilityState};
