#![forbid(unsafe_code)]

//! Popup style state: offsets plus presentation markers.

use bitflags::bitflags;

/// Base class every tooltip carries.
pub const TOOLTIP_CLASS: &str = "ql-tooltip";

bitflags! {
    /// Presentation markers, rendered as class names.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Markers: u8 {
        /// Not rendered.
        const HIDDEN  = 0b0000_0001;
        /// Placed above the reference instead of below.
        const FLIP    = 0b0000_0010;
        /// Showing an edit form rather than a preview.
        const EDITING = 0b0000_0100;
    }
}

impl Markers {
    /// Class name for each marker, in render order.
    const CLASS_NAMES: [(Markers, &'static str); 3] = [
        (Markers::HIDDEN, "ql-hidden"),
        (Markers::FLIP, "ql-flip"),
        (Markers::EDITING, "ql-editing"),
    ];
}

/// The popup's mutable style, owned by the tooltip.
///
/// `left` and `top` are offsets relative to the popup's offset parent;
/// `margin_top` carries the scroll compensation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopupStyle {
    pub left: f64,
    pub top: f64,
    pub margin_top: f64,
    pub markers: Markers,
}

impl PopupStyle {
    /// Whether the popup is hidden.
    #[inline]
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.markers.contains(Markers::HIDDEN)
    }

    /// Whether the popup is flipped above its reference.
    #[inline]
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.markers.contains(Markers::FLIP)
    }

    /// Class list: the base class followed by one class per set marker.
    #[must_use]
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut names = vec![TOOLTIP_CLASS];
        names.extend(
            Markers::CLASS_NAMES
                .iter()
                .filter(|(marker, _)| self.markers.contains(*marker))
                .map(|(_, name)| *name),
        );
        names
    }

    /// Class list joined with spaces.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.class_names().join(" ")
    }
}
