#![forbid(unsafe_code)]

//! Tooltip component: visibility, placement, and scroll compensation.
//!
//! # Invariants
//!
//! 1. A new tooltip starts hidden.
//! 2. `show`/`hide`/`edit` only touch markers, never offsets.
//! 3. Orientation is recomputed on every [`Tooltip::position`] call.
//! 4. Scroll notifications only affect `margin_top`, and only when the
//!    editor root was scrollable at construction.
//!
//! # Example
//!
//! ```ignore
//! use fliptip::{Tooltip, TooltipConfig};
//!
//! let mut tooltip = Tooltip::new(&mut host, TooltipConfig::from_env())
//!     .with_template("<a class=\"ql-preview\"></a>");
//! tooltip.show();
//! let shift = tooltip.position(&mut host, &selection_bounds);
//! arrow.set_margin_left(-shift);
//! ```

use fliptip_core::debug;
use fliptip_core::geometry::Bounds;

use crate::config::TooltipConfig;
use crate::host::OverlayHost;
use crate::placement::{self, Orientation, Placement};
use crate::scroll::ScrollSync;
use crate::style::{Markers, PopupStyle};

/// A single floating tooltip attached to an editor.
#[derive(Debug, Clone)]
pub struct Tooltip {
    style: PopupStyle,
    config: TooltipConfig,
    scroll: ScrollSync,
    template: String,
    last_placement: Option<Placement>,
}

impl Tooltip {
    /// Create a hidden tooltip and push its initial style to the host.
    ///
    /// Scroll compensation is enabled if the host's root is scrollable now.
    pub fn new<H>(host: &mut H, config: TooltipConfig) -> Self
    where
        H: OverlayHost + ?Sized,
    {
        let scroll = ScrollSync::detect(host.root_overflow_y());
        if scroll.is_enabled() {
            debug!("editor root is scrollable; mirroring scroll offset into tooltip margin");
        }
        let mut tooltip = Self {
            style: PopupStyle::default(),
            config,
            scroll,
            template: String::new(),
            last_placement: None,
        };
        tooltip.hide();
        tooltip.apply(host);
        tooltip
    }

    /// Set the static inner content rendered by the host.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Static inner content.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Hide the tooltip.
    pub fn hide(&mut self) {
        self.style.markers.insert(Markers::HIDDEN);
    }

    /// Show the tooltip, leaving editing mode.
    pub fn show(&mut self) {
        self.style.markers.remove(Markers::EDITING);
        self.style.markers.remove(Markers::HIDDEN);
    }

    /// Enter editing mode. Cleared by the next [`show`](Self::show).
    pub fn edit(&mut self) {
        self.style.markers.insert(Markers::EDITING);
    }

    /// Whether the tooltip is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.style.is_hidden()
    }

    /// Whether the tooltip is in editing mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.style.markers.contains(Markers::EDITING)
    }

    /// Orientation from the most recent placement.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.style.is_flipped() {
            Orientation::Above
        } else {
            Orientation::Below
        }
    }

    /// Place the tooltip against `reference` and push the result to the host.
    ///
    /// Returns the horizontal shift applied by container clamping.
    pub fn position<H>(&mut self, host: &mut H, reference: &Bounds) -> f64
    where
        H: OverlayHost + ?Sized,
    {
        let placement = placement::place(&*host, &mut self.style, reference, &self.config);
        let shift = placement.shift;
        self.last_placement = Some(placement);
        self.apply(host);
        shift
    }

    /// Handle a scroll event on the editor root.
    ///
    /// Returns whether the margin was updated.
    pub fn on_root_scroll<H>(&mut self, host: &mut H) -> bool
    where
        H: OverlayHost + ?Sized,
    {
        match self.scroll.margin_for(host.root_scroll_top()) {
            Some(margin) => {
                self.style.margin_top = margin;
                self.apply(host);
                true
            }
            None => false,
        }
    }

    /// Push the current style to the host.
    pub fn apply<H>(&self, host: &mut H)
    where
        H: OverlayHost + ?Sized,
    {
        host.apply_style(&self.style);
    }

    /// Current style.
    #[must_use]
    pub fn style(&self) -> &PopupStyle {
        &self.style
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Replace the configuration; takes effect on the next placement.
    pub fn set_config(&mut self, config: TooltipConfig) {
        self.config = config;
    }

    /// Scroll compensation decided at construction.
    #[must_use]
    pub fn scroll_sync(&self) -> ScrollSync {
        self.scroll
    }

    /// Record of the most recent placement.
    #[must_use]
    pub fn last_placement(&self) -> Option<&Placement> {
        self.last_placement.as_ref()
    }
}
