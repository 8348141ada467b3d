#![forbid(unsafe_code)]

//! Scroll compensation.
//!
//! When the editor's root scrolls on its own, the popup (positioned against
//! content) would drift as the user scrolls. The host forwards root scroll
//! events and the popup's top margin mirrors the negated offset, so the
//! on-screen position is `top + margin_top` with `top` computed at placement
//! time from the same offset.

use crate::host::Overflow;

/// Whether root scroll events are mirrored into the popup's margin.
///
/// Decided once from the root's overflow policy; it does not follow later
/// policy changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSync {
    enabled: bool,
}

impl ScrollSync {
    /// Decide from the root's vertical overflow policy.
    #[must_use]
    pub const fn detect(overflow: Overflow) -> Self {
        Self {
            enabled: overflow.is_scrollable(),
        }
    }

    /// Whether scroll events are mirrored.
    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Margin to apply for a root scroll offset, or `None` when disabled.
    #[inline]
    #[must_use]
    pub fn margin_for(&self, root_scroll_top: f64) -> Option<f64> {
        self.enabled.then_some(-root_scroll_top)
    }
}
