#![forbid(unsafe_code)]

//! Simulated page layout.
//!
//! Layout model: the popup is absolutely positioned inside an offset parent
//! whose top-left corner sits at `offset_parent` in viewport coordinates, so
//! its rendered rectangle is
//!
//! ```text
//! left = offset_parent.x + style.left
//! top  = offset_parent.y + style.top + style.margin_top
//! ```
//!
//! with the popup's intrinsic size. A hidden popup measures as zero-sized
//! when `hidden_collapses` is set (display-none semantics); otherwise hidden
//! popups keep their layout box (opacity semantics).

use std::cell::Cell;

use fliptip::host::{BoundsContainer, HostError, Overflow, OverlayHost};
use fliptip::style::PopupStyle;
use fliptip_core::geometry::{Bounds, Point, Size};

/// Editor-container lookup behavior.
#[derive(Debug, Clone, PartialEq)]
enum EditorContainer {
    Missing,
    Detached,
    Attached(Bounds),
}

/// An in-memory page implementing [`OverlayHost`].
#[derive(Debug, Clone)]
pub struct SimulatedPage {
    document: Bounds,
    bounds_container: BoundsContainer,
    offset_parent: Point,
    popup_size: Size,
    root_scroll_top: f64,
    root_overflow: Overflow,
    editor: EditorContainer,
    hidden_collapses: bool,
    applied: Vec<PopupStyle>,
    measurements: Cell<usize>,
}

impl SimulatedPage {
    /// A page whose document (and default bounding container) is `document`.
    #[must_use]
    pub fn new(document: Bounds) -> Self {
        Self {
            document,
            bounds_container: BoundsContainer::Document,
            offset_parent: Point::ORIGIN,
            popup_size: Size::ZERO,
            root_scroll_top: 0.0,
            root_overflow: Overflow::Visible,
            editor: EditorContainer::Missing,
            hidden_collapses: false,
            applied: Vec::new(),
            measurements: Cell::new(0),
        }
    }

    /// Set the popup's intrinsic size.
    #[must_use]
    pub fn with_popup_size(mut self, size: Size) -> Self {
        self.popup_size = size;
        self
    }

    /// Designate a bounding container other than the document.
    #[must_use]
    pub fn with_bounds_container(mut self, container: Bounds) -> Self {
        self.bounds_container = BoundsContainer::Designated(container);
        self
    }

    /// Move the popup's offset parent.
    #[must_use]
    pub fn with_offset_parent(mut self, origin: Point) -> Self {
        self.offset_parent = origin;
        self
    }

    /// Set the editor root's overflow policy.
    #[must_use]
    pub fn with_root_overflow(mut self, overflow: Overflow) -> Self {
        self.root_overflow = overflow;
        self
    }

    /// Set the editor root's initial scroll offset.
    #[must_use]
    pub fn with_root_scroll(mut self, scroll_top: f64) -> Self {
        self.root_scroll_top = scroll_top;
        self
    }

    /// Provide an editor container for the maximum-left bound.
    #[must_use]
    pub fn with_editor_container(mut self, bounds: Bounds) -> Self {
        self.editor = EditorContainer::Attached(bounds);
        self
    }

    /// Make the editor-container lookup fail as if the element were detached.
    #[must_use]
    pub fn with_detached_editor(mut self) -> Self {
        self.editor = EditorContainer::Detached;
        self
    }

    /// Measure hidden popups as zero-sized.
    #[must_use]
    pub fn with_hidden_collapse(mut self, collapses: bool) -> Self {
        self.hidden_collapses = collapses;
        self
    }

    /// Scroll the editor root. The caller forwards the event to the tooltip.
    pub fn scroll_root_to(&mut self, scroll_top: f64) {
        self.root_scroll_top = scroll_top;
    }

    /// Resize the popup, e.g. after its content changed.
    pub fn resize_popup(&mut self, size: Size) {
        self.popup_size = size;
    }

    /// Every style pushed so far, oldest first.
    #[must_use]
    pub fn applied(&self) -> &[PopupStyle] {
        &self.applied
    }

    /// Forget recorded styles and measurement counts.
    pub fn clear_history(&mut self) {
        self.applied.clear();
        self.measurements.set(0);
    }

    /// The most recently pushed style.
    #[must_use]
    pub fn current_style(&self) -> Option<&PopupStyle> {
        self.applied.last()
    }

    /// Where the popup currently renders, in viewport coordinates.
    #[must_use]
    pub fn rendered_bounds(&self) -> Option<Bounds> {
        self.current_style().map(|style| self.layout(style))
    }

    /// Number of `measure` calls so far.
    #[must_use]
    pub fn measure_count(&self) -> usize {
        self.measurements.get()
    }

    fn layout(&self, style: &PopupStyle) -> Bounds {
        let size = if self.hidden_collapses && style.is_hidden() {
            Size::ZERO
        } else {
            self.popup_size
        };
        Bounds::new(
            self.offset_parent.x + style.left,
            self.offset_parent.y + style.top + style.margin_top,
            size.width,
            size.height,
        )
    }
}

impl OverlayHost for SimulatedPage {
    fn measure(&self, style: &PopupStyle) -> Bounds {
        self.measurements.set(self.measurements.get() + 1);
        self.layout(style)
    }

    fn container_bounds(&self) -> Bounds {
        self.bounds_container.resolve(self.document)
    }

    fn root_scroll_top(&self) -> f64 {
        self.root_scroll_top
    }

    fn root_overflow_y(&self) -> Overflow {
        self.root_overflow
    }

    fn editor_container_bounds(&self) -> Result<Bounds, HostError> {
        match &self.editor {
            EditorContainer::Missing => Err(HostError::EditorContainerUnavailable),
            EditorContainer::Detached => Err(HostError::Detached),
            EditorContainer::Attached(bounds) => Ok(*bounds),
        }
    }

    fn apply_style(&mut self, style: &PopupStyle) {
        self.applied.push(*style);
    }
}
