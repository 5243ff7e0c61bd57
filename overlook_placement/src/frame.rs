// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation-frame coalescing for placement recomputation.
//!
//! Resize, scroll, and mutation events can arrive many times per frame.
//! [`FrameScheduler`] collapses them into at most one pending recomputation,
//! consumed once per frame with [`FrameScheduler::take`].

/// Why a recomputation was requested.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Recompute {
    /// The popover was opened (or re-opened while open).
    Open,
    /// The viewport was resized.
    Resize,
    /// Some ancestor of the trigger scrolled.
    Scroll,
    /// The content subtree changed and may have a new size.
    ContentMutated,
}

/// Single-slot, last-write-wins recomputation request.
///
/// Stale frames are never queued: a request made before the frame fires
/// replaces any earlier one, except that [`Recompute::Open`] is not
/// downgraded by events arriving in the same frame.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FrameScheduler {
    pending: Option<Recompute>,
}

impl FrameScheduler {
    /// Create a scheduler with nothing pending.
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Request a recomputation on the next frame.
    pub fn request(&mut self, reason: Recompute) {
        if self.pending == Some(Recompute::Open) {
            return;
        }
        self.pending = Some(reason);
    }

    /// The pending request, if any.
    pub fn pending(&self) -> Option<Recompute> {
        self.pending
    }

    /// True if a recomputation is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the pending request for this frame.
    pub fn take(&mut self) -> Option<Recompute> {
        self.pending.take()
    }

    /// Drop any pending request.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
