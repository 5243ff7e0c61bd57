// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for placement: sides, alignments, placements, and geometry sources.
//!
//! ## Overview
//!
//! These types describe the inputs and outputs of the placement engine.
//! They are consumed by [`compute_placement`](crate::engine::compute_placement)
//! and by the [`Popover`](crate::popover::Popover) controller.

use core::fmt;

use kurbo::{Affine, Rect, Vec2};

/// The side of the trigger the caller would like content to appear on.
///
/// This is intent, not a guarantee: the engine flips to the opposite side when
/// the preferred one lacks room.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    /// Above the trigger.
    #[default]
    Top,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
    /// Right of the trigger.
    Right,
}

impl Side {
    /// The side across the trigger from this one.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The axis along which content is offset from the trigger.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }
}

/// Placement axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Content sits left or right of the trigger.
    Horizontal,
    /// Content sits above or below the trigger.
    Vertical,
}

/// Horizontal alignment of content relative to the trigger.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum XAlign {
    /// Left-aligned, or placed on the left side for horizontal placements.
    Left,
    /// Centered over the trigger.
    Center,
    /// Right-aligned, or placed on the right side for horizontal placements.
    Right,
}

impl XAlign {
    /// Lowercase name, as used in `data-placement` attributes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical alignment of content relative to the trigger.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum YAlign {
    /// Above the trigger.
    Top,
    /// Below the trigger.
    Bottom,
    /// Vertically centered on the trigger.
    Center,
}

impl YAlign {
    /// Lowercase name, as used in `data-placement` attributes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Center => "center",
        }
    }
}

/// The alignment pair the engine actually chose after collision checks.
///
/// Formats as `"{y}-{x}"`, e.g. `top-center`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedPlacement {
    /// Horizontal alignment.
    pub x_align: XAlign,
    /// Vertical alignment.
    pub y_align: YAlign,
}

impl ResolvedPlacement {
    /// The alignment implied by a preferred side before any collision checks.
    pub const fn initial(side: Side) -> Self {
        match side {
            Side::Top => Self {
                x_align: XAlign::Center,
                y_align: YAlign::Top,
            },
            Side::Bottom => Self {
                x_align: XAlign::Center,
                y_align: YAlign::Bottom,
            },
            Side::Left => Self {
                x_align: XAlign::Left,
                y_align: YAlign::Center,
            },
            Side::Right => Self {
                x_align: XAlign::Right,
                y_align: YAlign::Center,
            },
        }
    }
}

impl fmt::Display for ResolvedPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.y_align.as_str(), self.x_align.as_str())
    }
}

/// Result of one placement computation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// False when the trigger is entirely outside the viewport.
    pub visible: bool,
    /// Translation to apply to content anchored at the trigger's top-left corner.
    pub translation: Vec2,
    /// The alignment that was chosen.
    pub resolved: ResolvedPlacement,
}

impl Placement {
    /// A hidden placement for a trigger that is off-screen.
    pub const fn hidden(side: Side) -> Self {
        Self {
            visible: false,
            translation: Vec2::ZERO,
            resolved: ResolvedPlacement::initial(side),
        }
    }

    /// The translation as an affine transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translation)
    }

    /// World-space content bounds, given the trigger and the content's size.
    ///
    /// Content is anchored at the trigger's top-left corner and then translated.
    pub fn content_bounds(&self, trigger: Rect, content: Rect) -> Rect {
        let origin = trigger.origin() + self.translation;
        Rect::from_origin_size(origin, content.size())
    }
}

/// Live geometry read by the popover on every recomputation.
///
/// Trigger and content rectangles are optional: an element that is not yet
/// mounted has no rectangle, and the recomputation is retried later.
pub trait Geometry {
    /// Screen rectangle of the trigger, if mounted.
    fn trigger_rect(&self) -> Option<Rect>;
    /// Screen rectangle of the floating content, if mounted.
    fn content_rect(&self) -> Option<Rect>;
    /// Screen rectangle of the viewport.
    fn viewport_rect(&self) -> Rect;
}

/// A snapshot of measured rectangles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StaticGeometry {
    /// Trigger rectangle, if mounted.
    pub trigger: Option<Rect>,
    /// Content rectangle, if mounted.
    pub content: Option<Rect>,
    /// Viewport rectangle.
    pub viewport: Rect,
}

impl StaticGeometry {
    /// Snapshot with both elements mounted.
    pub const fn new(trigger: Rect, content: Rect, viewport: Rect) -> Self {
        Self {
            trigger: Some(trigger),
            content: Some(content),
            viewport,
        }
    }
}

impl Geometry for StaticGeometry {
    #[inline]
    fn trigger_rect(&self) -> Option<Rect> {
        self.trigger
    }

    #[inline]
    fn content_rect(&self) -> Option<Rect> {
        self.content
    }

    #[inline]
    fn viewport_rect(&self) -> Rect {
        self.viewport
    }
}
