// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overlook_placement --heading-base-level=0

//! Overlook Placement: Kurbo-native placement for floating content.
//!
//! Overlook Placement decides where a popover, tooltip, or menu is drawn relative to the element that triggered it.
//!
//! - Keeps content on the preferred side of the trigger when it fits.
//! - Flips to the opposite side when it does not, or picks the side with more room when neither fits.
//! - Keeps vertically placed content inside the viewport's left and right edges.
//! - Hides content whose trigger has scrolled entirely off-screen.
//!
//! ## Not a renderer
//!
//! This crate does not measure or draw anything.
//! The host reads screen rectangles for the trigger, the content, and the viewport, and applies the resulting translation.
//! The only contract is geometric: rectangles in, a translation and an alignment out.
//!
//! ## API overview
//!
//! - [`engine::compute_placement`]: the pure placement function.
//! - [`popover::Popover`]: open/close state, outside-click and Escape dismissal, and frame-coalesced recomputation.
//! - [`frame::FrameScheduler`]: last-write-wins batching of resize, scroll, and mutation events.
//! - [`indicator::TabIndicator`]: selection underline geometry for a tab strip.
//! - [`types::Geometry`]: the source of live rectangles, with [`types::StaticGeometry`] for snapshots.
//!
//! ## Recomputation
//!
//! Placement is never cached across frames.
//! Hosts report viewport resizes, capture-phase scrolls on any ancestor, and content mutations to the [`popover::Popover`],
//! which recomputes at most once per animation frame using the most recent request.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use overlook_placement::engine::compute_placement;
//! use overlook_placement::types::{Side, XAlign};
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let trigger = Rect::new(10.0, 100.0, 60.0, 130.0);
//! let content = Rect::new(0.0, 0.0, 300.0, 50.0);
//!
//! // Centering over the trigger would cross the left edge, so align with the trigger instead.
//! let p = compute_placement(trigger, content, viewport, Side::Top, 5.0);
//! assert_eq!(p.resolved.x_align, XAlign::Left);
//! assert_eq!(p.translation.x, 0.0);
//! assert_eq!(p.translation.y, -55.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod engine;
pub mod frame;
pub mod indicator;
pub mod popover;
pub mod types;

pub use engine::compute_placement;
pub use popover::{OptionsError, Popover, PopoverOptions};
pub use types::{Geometry, Placement, ResolvedPlacement, Side, StaticGeometry, XAlign, YAlign};
