// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover controller: open state, dismissal, and frame-driven placement.
//!
//! ## Usage
//!
//! 1) Register the host listeners named by [`Popover::listeners`]; re-sync the
//!    registration after every transition (the set is empty while closed).
//! 2) Forward host events with [`Popover::handle`].
//! 3) On each animation frame call [`Popover::on_animation_frame`] and apply
//!    [`Popover::content_style`] to the content element.
//!
//! ```
//! use kurbo::Rect;
//! use overlook_placement::popover::{Listeners, Popover, PopoverEvent};
//! use overlook_placement::types::StaticGeometry;
//!
//! let geometry = StaticGeometry::new(
//!     Rect::new(100.0, 100.0, 140.0, 120.0),
//!     Rect::new(0.0, 0.0, 80.0, 40.0),
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//! );
//!
//! let mut popover = Popover::default();
//! assert!(popover.listeners().is_empty());
//!
//! popover.handle(PopoverEvent::TriggerClick, &geometry);
//! assert!(popover.listeners().contains(Listeners::SCROLL_CAPTURE));
//!
//! let placement = popover.on_animation_frame(&geometry).unwrap();
//! assert!(placement.visible);
//! assert_eq!(placement.resolved.to_string(), "top-center");
//! ```

use kurbo::{Point, Rect, Size, Vec2};

use crate::engine::compute_placement;
use crate::frame::{FrameScheduler, Recompute};
use crate::types::{Geometry, Placement, ResolvedPlacement, Side};

/// Gap kept between popover content and the viewport edges when sizing content.
pub const CONTENT_VIEWPORT_MARGIN: f64 = 16.0;

/// Default gap between trigger and content.
pub const DEFAULT_SIDE_OFFSET: f64 = 5.0;

/// Popover configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PopoverOptions {
    /// Preferred side for the content.
    pub side: Side,
    /// Gap between trigger and content along the placement axis, in pixels.
    pub side_offset: f64,
    /// Close when a pointer goes down outside both trigger and content.
    pub close_on_outside_click: bool,
    /// Close on the Escape key.
    pub close_on_escape: bool,
}

impl Default for PopoverOptions {
    fn default() -> Self {
        Self {
            side: Side::Top,
            side_offset: DEFAULT_SIDE_OFFSET,
            close_on_outside_click: true,
            close_on_escape: true,
        }
    }
}

impl PopoverOptions {
    /// Check that the options describe a usable popover.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.side_offset.is_finite() || self.side_offset < 0.0 {
            return Err(OptionsError::InvalidSideOffset(self.side_offset));
        }
        Ok(())
    }
}

/// Invalid [`PopoverOptions`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    /// The side offset was negative, infinite, or NaN.
    #[error("side offset must be finite and non-negative, got {0}")]
    InvalidSideOffset(f64),
}

bitflags::bitflags! {
    /// Host event listeners a popover needs while it is open.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Viewport resize.
        const RESIZE           = 0b0000_0001;
        /// Scroll on any ancestor; must be observed in the capture phase.
        const SCROLL_CAPTURE   = 0b0000_0010;
        /// Subtree mutation of the content element.
        const CONTENT_MUTATION = 0b0000_0100;
        /// Document pointer-down, for outside-click dismissal.
        const POINTER_DOWN     = 0b0000_1000;
        /// Document key-down, for Escape dismissal.
        const KEY_DOWN         = 0b0001_0000;
    }
}

/// Host events forwarded to a popover.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PopoverEvent {
    /// The trigger was clicked.
    TriggerClick,
    /// The viewport was resized.
    Resize,
    /// Some ancestor of the trigger scrolled.
    Scroll,
    /// The content subtree changed.
    ContentMutated,
    /// A pointer went down at the given screen position.
    PointerDown(Point),
    /// The Escape key was pressed.
    Escape,
}

/// A change in open state reported to the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PopoverTransition {
    /// The popover opened.
    Opened,
    /// The popover closed; hosts run their close callback here.
    Closed,
}

/// Style values for the floating content element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContentStyle {
    /// Whether to show the content. Hidden content keeps its last translation.
    pub visible: bool,
    /// Translation from the trigger's top-left corner.
    pub translation: Vec2,
    /// Maximum content size, keeping a margin from the viewport edges.
    pub max_size: Size,
    /// Alignment used for the `data-placement` attribute.
    pub placement: ResolvedPlacement,
}

/// A popover anchored to a trigger element.
#[derive(Clone, Debug)]
pub struct Popover {
    options: PopoverOptions,
    open: bool,
    visible: bool,
    frame: FrameScheduler,
    last: Option<Placement>,
}

impl Default for Popover {
    fn default() -> Self {
        Self::with_valid_options(PopoverOptions::default())
    }
}

impl Popover {
    /// Create a closed popover.
    pub fn new(options: PopoverOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::with_valid_options(options))
    }

    fn with_valid_options(options: PopoverOptions) -> Self {
        Self {
            options,
            open: false,
            visible: false,
            frame: FrameScheduler::new(),
            last: None,
        }
    }

    /// The popover's options.
    pub fn options(&self) -> &PopoverOptions {
        &self.options
    }

    /// True while open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True when open and the last recomputation placed the content on screen.
    pub fn is_visible(&self) -> bool {
        self.open && self.visible
    }

    /// The most recent on-screen placement since opening.
    pub fn placement(&self) -> Option<Placement> {
        self.last
    }

    /// True if a recomputation is waiting for the next frame.
    pub fn needs_frame(&self) -> bool {
        self.open && self.frame.is_pending()
    }

    /// Listeners the host must have registered right now.
    pub fn listeners(&self) -> Listeners {
        if !self.open {
            return Listeners::empty();
        }
        let mut l = Listeners::RESIZE | Listeners::SCROLL_CAPTURE | Listeners::CONTENT_MUTATION;
        if self.options.close_on_outside_click {
            l |= Listeners::POINTER_DOWN;
        }
        if self.options.close_on_escape {
            l |= Listeners::KEY_DOWN;
        }
        l
    }

    /// Open the popover.
    ///
    /// Always schedules a recomputation, even if already open.
    pub fn open(&mut self) -> Option<PopoverTransition> {
        self.frame.request(Recompute::Open);
        if self.open {
            return None;
        }
        self.open = true;
        tracing::debug!(side = ?self.options.side, "popover opened");
        Some(PopoverTransition::Opened)
    }

    /// Close the popover. Closing a closed popover does nothing.
    pub fn close(&mut self) -> Option<PopoverTransition> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.visible = false;
        self.last = None;
        self.frame.cancel();
        tracing::debug!("popover closed");
        Some(PopoverTransition::Closed)
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) -> Option<PopoverTransition> {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }

    /// Follow an externally controlled open flag.
    pub fn set_open(&mut self, open: bool) -> Option<PopoverTransition> {
        if open {
            self.open()
        } else {
            self.close()
        }
    }

    /// Handle a host event.
    ///
    /// Events other than [`PopoverEvent::TriggerClick`] are ignored while closed.
    pub fn handle<G: Geometry + ?Sized>(
        &mut self,
        event: PopoverEvent,
        geometry: &G,
    ) -> Option<PopoverTransition> {
        match event {
            PopoverEvent::TriggerClick => return self.toggle(),
            _ if !self.open => return None,
            PopoverEvent::Resize => self.frame.request(Recompute::Resize),
            PopoverEvent::Scroll => self.frame.request(Recompute::Scroll),
            PopoverEvent::ContentMutated => self.frame.request(Recompute::ContentMutated),
            PopoverEvent::PointerDown(pt) => {
                if self.options.close_on_outside_click && is_outside(pt, geometry) {
                    tracing::trace!(x = pt.x, y = pt.y, "pointer down outside popover");
                    return self.close();
                }
            }
            PopoverEvent::Escape => {
                if self.options.close_on_escape {
                    return self.close();
                }
            }
        }
        None
    }

    /// Run the pending recomputation, if any.
    ///
    /// Returns the freshly computed placement. When the trigger or content is
    /// not mounted the request is kept for the next frame and `None` is returned.
    pub fn on_animation_frame<G: Geometry + ?Sized>(&mut self, geometry: &G) -> Option<Placement> {
        if !self.open {
            self.frame.cancel();
            return None;
        }
        let reason = self.frame.take()?;
        let (Some(trigger), Some(content)) = (geometry.trigger_rect(), geometry.content_rect())
        else {
            tracing::trace!(?reason, "popover elements not mounted; retrying next frame");
            self.frame.request(reason);
            return None;
        };

        let placement = compute_placement(
            trigger,
            content,
            geometry.viewport_rect(),
            self.options.side,
            self.options.side_offset,
        );
        tracing::trace!(?reason, visible = placement.visible, resolved = %placement.resolved, "recomputed placement");

        self.visible = placement.visible;
        if placement.visible {
            self.last = Some(placement);
        }
        Some(placement)
    }

    /// Style for the content element given the current viewport.
    pub fn content_style(&self, viewport: Rect) -> ContentStyle {
        let (translation, placement) = match self.last {
            Some(p) => (p.translation, p.resolved),
            None => (Vec2::ZERO, ResolvedPlacement::initial(self.options.side)),
        };
        ContentStyle {
            visible: self.is_visible(),
            translation,
            max_size: Size::new(
                (viewport.width() - CONTENT_VIEWPORT_MARGIN).max(0.0),
                (viewport.height() - CONTENT_VIEWPORT_MARGIN).max(0.0),
            ),
            placement,
        }
    }
}

/// A pointer is outside when it hits neither the trigger nor the content.
///
/// With neither element mounted there is nothing to be outside of.
fn is_outside<G: Geometry + ?Sized>(pt: Point, geometry: &G) -> bool {
    let trigger = geometry.trigger_rect();
    let content = geometry.content_rect();
    if trigger.is_none() && content.is_none() {
        return false;
    }
    !trigger.is_some_and(|r| r.contains(pt)) && !content.is_some_and(|r| r.contains(pt))
}
