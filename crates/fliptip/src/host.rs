#![forbid(unsafe_code)]

//! The capability surface a host editor provides to the tooltip.

use std::fmt;

use fliptip_core::geometry::Bounds;

use crate::style::PopupStyle;

/// Geometry and rendering services supplied by the host editor.
///
/// `measure` stands in for reading layout after a style write: it must
/// report where the popup would render if `style` were applied, without
/// requiring `apply_style` to have been called first.
pub trait OverlayHost {
    /// Rendered rectangle of the popup for the given style.
    fn measure(&self, style: &PopupStyle) -> Bounds;

    /// Rectangle the popup must stay inside.
    fn container_bounds(&self) -> Bounds;

    /// Current vertical scroll offset of the editor's root.
    ///
    /// Zero when the bounding container is not the root itself.
    fn root_scroll_top(&self) -> f64;

    /// Vertical overflow policy of the editor's root.
    fn root_overflow_y(&self) -> Overflow;

    /// Rectangle of the designated editor container, used by the maximum-left
    /// bound. May fail; the failure never aborts placement.
    fn editor_container_bounds(&self) -> Result<Bounds, HostError>;

    /// Push the popup's style to the rendering surface.
    fn apply_style(&mut self, style: &PopupStyle);
}

/// Vertical overflow policy (`overflow-y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Content spills out; the element does not scroll.
    #[default]
    Visible,
    /// Content is clipped with no scrolling at all.
    Clip,
    /// Content is clipped but scrollable programmatically.
    Hidden,
    /// Scrollbars always present.
    Scroll,
    /// Scrollbars when needed.
    Auto,
}

impl Overflow {
    /// Parse a CSS keyword (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "visible" => Some(Self::Visible),
            "clip" => Some(Self::Clip),
            "hidden" => Some(Self::Hidden),
            "scroll" => Some(Self::Scroll),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// Whether an element with this policy has its own scroll frame.
    #[inline]
    #[must_use]
    pub const fn is_scrollable(self) -> bool {
        !matches!(self, Self::Visible | Self::Clip)
    }
}

/// Where the bounding container comes from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BoundsContainer {
    /// No container was designated; the whole document bounds the popup.
    #[default]
    Document,
    /// An explicitly designated container.
    Designated(Bounds),
}

impl BoundsContainer {
    /// Resolve to a rectangle, given the document's rectangle.
    #[must_use]
    pub fn resolve(&self, document: Bounds) -> Bounds {
        match self {
            Self::Document => document,
            Self::Designated(bounds) => *bounds,
        }
    }
}

/// Host-side failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host has no editor container configured.
    EditorContainerUnavailable,
    /// The element exists but is not attached to the document.
    Detached,
    /// Any other host failure.
    Other(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EditorContainerUnavailable => write!(f, "editor container not available"),
            Self::Detached => write!(f, "element is detached from the document"),
            Self::Other(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for HostError {}
