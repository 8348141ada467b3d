#![forbid(unsafe_code)]

//! Placement engine: center below, clamp into the container, apply absolute
//! left limits, flip above on bottom overflow.
//!
//! # Algorithm
//!
//! Each step reads geometry produced by the previous style write, so the host
//! is asked to [`measure`](OverlayHost::measure) at fixed points:
//!
//! 1. `left = ref.left + ref.width/2 − popup.width/2`
//! 2. `top = ref.bottom + root_scroll_top`, flip marker cleared
//! 3. measure; if the popup's right edge passes the container's, shift left by
//!    the overflow; then, independently, if its left edge precedes the
//!    container's, shift right by the underflow. Both checks read the same
//!    measurement, so when both fire the second replaces the first.
//! 4. `min_left`: if the clamped left is below it, left = `min_left`
//! 5. `enforce_max_left`: `limit = editor.width − popup.width`; if the
//!    clamped left exceeds it, left = `limit`. Lookup failures are logged and
//!    skipped.
//! 6. measure; if the popup's bottom passes the container's, move it up by
//!    `ref.height + popup.height` and set the flip marker.
//!
//! # Invariants
//!
//! 1. With no overrides and a popup no wider than its container, the popup
//!    ends horizontally inside the container.
//! 2. A flipped popup's bottom edge sits on the reference's top edge.
//! 3. An unflipped popup's top is `ref.bottom + root_scroll_top`.
//!
//! Steps 4 and 5 both compare against the step-3 left. When both fire the
//! maximum wins because it runs last.

use fliptip_core::geometry::Bounds;
use fliptip_core::{debug, debug_span, error, trace};

use crate::config::TooltipConfig;
use crate::host::{HostError, OverlayHost};
use crate::style::{Markers, PopupStyle};

/// Which side of the reference the popup ended on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Below the reference (preferred).
    #[default]
    Below,
    /// Flipped above the reference.
    Above,
}

impl Orientation {
    /// Whether the popup was flipped.
    #[inline]
    #[must_use]
    pub const fn is_flipped(self) -> bool {
        matches!(self, Self::Above)
    }
}

/// What the maximum-left bound did during a placement.
#[derive(Debug, Clone, PartialEq)]
pub enum MaxLeftOutcome {
    /// Not configured.
    Disabled,
    /// Checked; the popup already respected `limit`.
    Within { limit: f64 },
    /// The popup was moved to `limit`.
    Clamped { limit: f64 },
    /// The editor-container lookup failed; left unchanged.
    Failed(HostError),
}

/// Result of one placement run.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Final left offset.
    pub left: f64,
    /// Final top offset.
    pub top: f64,
    /// Horizontal shift applied by container clamping (0 if none). Callers
    /// use it to keep an arrow pointing at the reference.
    pub shift: f64,
    /// Final orientation.
    pub orientation: Orientation,
    /// Left offset after container clamping, before absolute limits.
    pub clamped_left: f64,
    /// Whether `min_left` replaced the clamped left.
    pub min_left_applied: bool,
    /// Maximum-left step result.
    pub max_left: MaxLeftOutcome,
}

/// Run the placement algorithm, mutating `style` in place.
///
/// `style.margin_top` and the non-flip markers are left untouched.
pub fn place<H>(
    host: &H,
    style: &mut PopupStyle,
    reference: &Bounds,
    config: &TooltipConfig,
) -> Placement
where
    H: OverlayHost + ?Sized,
{
    let span = debug_span!("tooltip.position");
    let _guard = span.enter();

    // 1-2. Tentative placement, centered below.
    let popup_width = host.measure(style).width;
    let left = reference.center_x() - popup_width / 2.0;
    let top = reference.bottom() + host.root_scroll_top();
    style.left = left;
    style.top = top;
    style.markers.remove(Markers::FLIP);
    trace!(left, top, "tentative placement");

    // 3. Clamp into the container.
    let container = host.container_bounds();
    let popup = host.measure(style);
    let mut shift = 0.0;
    let mut clamped_left = left;
    if popup.right() > container.right() {
        shift = container.right() - popup.right();
        clamped_left = left + shift;
        style.left = clamped_left;
        trace!(shift, "clamped against container right edge");
    }
    if popup.left < container.left {
        shift = container.left - popup.left;
        clamped_left = left + shift;
        style.left = clamped_left;
        trace!(shift, "clamped against container left edge");
    }

    // 4. Absolute minimum.
    let mut min_left_applied = false;
    if let Some(min_left) = config.min_left
        && clamped_left < min_left
    {
        style.left = min_left;
        min_left_applied = true;
        trace!(min_left, "raised to minimum left");
    }

    // 5. Absolute maximum, best effort.
    let max_left = if config.enforce_max_left {
        match host.editor_container_bounds() {
            Ok(editor) => {
                let limit = editor.width - popup.width;
                if clamped_left > limit {
                    style.left = limit;
                    trace!(limit, "lowered to maximum left");
                    MaxLeftOutcome::Clamped { limit }
                } else {
                    MaxLeftOutcome::Within { limit }
                }
            }
            Err(e) => {
                error!(error = %e, "editor container lookup failed; skipping maximum-left bound");
                MaxLeftOutcome::Failed(e)
            }
        }
    } else {
        MaxLeftOutcome::Disabled
    };

    // 6. Flip above on bottom overflow.
    let popup = host.measure(style);
    let mut orientation = Orientation::Below;
    if popup.bottom() > container.bottom() {
        let vertical_shift = (reference.bottom() - reference.top) + popup.height;
        style.top = top - vertical_shift;
        style.markers.insert(Markers::FLIP);
        orientation = Orientation::Above;
    }

    debug!(
        left = style.left,
        top = style.top,
        shift,
        flipped = orientation.is_flipped(),
        "tooltip placed"
    );

    Placement {
        left: style.left,
        top: style.top,
        shift,
        orientation,
        clamped_left,
        min_left_applied,
        max_left,
    }
}
