// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection indicator for a tab strip.
//!
//! Tracks registered tabs and the selected value, and positions an underline
//! under the selected tab relative to the tab list.

use alloc::vec::Vec;

use kurbo::Rect;

/// Size and position of the selection indicator, relative to the tab list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndicatorGeometry {
    /// Indicator width; equals the selected tab's width.
    pub width: f64,
    /// Horizontal offset from the tab list's left edge.
    pub offset_x: f64,
}

/// Tab selection state and indicator geometry.
///
/// Works in both uncontrolled mode (seeded with a default, updated by
/// [`select`](Self::select)) and controlled mode (driven by
/// [`set_value`](Self::set_value)).
#[derive(Clone, Debug)]
pub struct TabIndicator<K> {
    list: Rect,
    tabs: Vec<(K, Rect)>,
    selected: Option<K>,
}

impl<K: Eq> TabIndicator<K> {
    /// Create an indicator with an optional initially selected value.
    pub fn new(default_value: Option<K>) -> Self {
        Self {
            list: Rect::ZERO,
            tabs: Vec::new(),
            selected: default_value,
        }
    }

    /// Update the tab list's rectangle.
    pub fn set_list_rect(&mut self, rect: Rect) {
        self.list = rect;
    }

    /// Register a tab, or update its rectangle if already registered.
    pub fn register(&mut self, value: K, rect: Rect) {
        match self.tabs.iter_mut().find(|(k, _)| *k == value) {
            Some((_, r)) => *r = rect,
            None => self.tabs.push((value, rect)),
        }
    }

    /// Forget a tab.
    pub fn unregister(&mut self, value: &K) {
        self.tabs.retain(|(k, _)| k != value);
    }

    /// The selected value, if any.
    pub fn selected(&self) -> Option<&K> {
        self.selected.as_ref()
    }

    /// True if `value` is the selected tab.
    pub fn is_selected(&self, value: &K) -> bool {
        self.selected.as_ref() == Some(value)
    }

    /// Select a tab in response to a click. Returns true if the selection changed.
    pub fn select(&mut self, value: K) -> bool {
        if self.is_selected(&value) {
            return false;
        }
        self.selected = Some(value);
        true
    }

    /// Follow an externally controlled value.
    pub fn set_value(&mut self, value: Option<K>) {
        self.selected = value;
    }

    /// Geometry for the indicator, or `None` if the selected tab is not registered.
    pub fn indicator(&self) -> Option<IndicatorGeometry> {
        let selected = self.selected.as_ref()?;
        let (_, rect) = self.tabs.iter().find(|(k, _)| k == selected)?;
        Some(IndicatorGeometry {
            width: rect.width(),
            offset_x: rect.x0 - self.list.x0,
        })
    }
}

impl<K: Eq> Default for TabIndicator<K> {
    fn default() -> Self {
        Self::new(None)
    }
}
