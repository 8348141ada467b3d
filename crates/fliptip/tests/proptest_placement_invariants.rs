//! Property-based invariant tests for tooltip placement.
//!
//! 1. A popup no wider than its container ends inside it horizontally.
//! 2. `min_left` wins over the container clamp when the clamp lands below it.
//! 3. `enforce_max_left` pins the left offset to `editor.width − popup.width`.
//! 4. Bottom overflow flips the popup so its bottom meets the reference top;
//!    otherwise its top is `ref.bottom + scroll`.
//! 5. The returned shift is the distance moved by the container clamp.
//! 6. hide/show never change geometry.

use fliptip::{MaxLeftOutcome, Orientation, Overflow, Tooltip, TooltipConfig};
use fliptip_harness::{Bounds, SimulatedPage, Size};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

// Integer-valued inputs keep every intermediate (halves included) exact.
#[derive(Debug, Clone, Copy)]
struct Case {
    container: Bounds,
    reference: Bounds,
    popup: Size,
}

fn case_strategy() -> impl Strategy<Value = Case> {
    (
        0i32..=200,   // container left
        100i32..=800, // container width
        200i32..=900, // container height
        0i32..=1000,  // reference left
        0i32..=200,   // reference width
        0i32..=900,   // reference top
        0i32..=40,    // reference height
        1i32..=100,   // popup width as percent of container width
        1i32..=400,   // popup height
    )
        .prop_map(|(cl, cw, ch, rl, rw, rt, rh, pct, ph)| {
            let pw = (cw * pct / 100).max(1);
            Case {
                container: Bounds::new(f64::from(cl), 0.0, f64::from(cw), f64::from(ch)),
                reference: Bounds::new(f64::from(rl), f64::from(rt), f64::from(rw), f64::from(rh)),
                popup: Size::new(f64::from(pw), f64::from(ph)),
            }
        })
}

fn page_for(case: &Case) -> SimulatedPage {
    SimulatedPage::new(Bounds::new(0.0, 0.0, 2000.0, 2000.0))
        .with_bounds_container(case.container)
        .with_popup_size(case.popup)
}

fn place(page: &mut SimulatedPage, case: &Case, config: TooltipConfig) -> Tooltip {
    let mut tooltip = Tooltip::new(page, config);
    tooltip.show();
    tooltip.position(page, &case.reference);
    tooltip
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Horizontal containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn popup_stays_inside_container(case in case_strategy()) {
        let mut page = page_for(&case);
        place(&mut page, &case, TooltipConfig::default());
        let rendered = page.rendered_bounds().unwrap();
        prop_assert!(
            case.container.contains_horizontally(&rendered),
            "popup {:?} escaped container {:?}",
            rendered, case.container
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Minimum left override
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn min_left_overrides_clamp(case in case_strategy(), min_left in 0i32..=1200) {
        let min_left = f64::from(min_left);
        let mut page = page_for(&case);
        let tooltip = place(&mut page, &case, TooltipConfig::default().min_left(min_left));
        let placement = tooltip.last_placement().unwrap();
        if placement.clamped_left < min_left {
            prop_assert!(placement.min_left_applied);
            prop_assert_eq!(tooltip.style().left, min_left);
        } else {
            prop_assert!(!placement.min_left_applied);
            prop_assert_eq!(tooltip.style().left, placement.clamped_left);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Maximum left override
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn max_left_pins_to_editor_width(case in case_strategy(), editor_width in 0i32..=1200) {
        let editor_width = f64::from(editor_width);
        let mut page = page_for(&case)
            .with_editor_container(Bounds::new(0.0, 0.0, editor_width, 500.0));
        let tooltip = place(&mut page, &case, TooltipConfig::default().enforce_max_left(true));
        let placement = tooltip.last_placement().unwrap();
        let limit = editor_width - case.popup.width;
        if placement.clamped_left > limit {
            prop_assert_eq!(&placement.max_left, &MaxLeftOutcome::Clamped { limit });
            prop_assert_eq!(tooltip.style().left, limit);
        } else {
            prop_assert_eq!(&placement.max_left, &MaxLeftOutcome::Within { limit });
            prop_assert_eq!(tooltip.style().left, placement.clamped_left);
        }
    }
}

proptest! {
    #[test]
    fn max_left_runs_after_min_left(case in case_strategy(), min_left in 0i32..=1200, editor_width in 0i32..=1200) {
        let (min_left, editor_width) = (f64::from(min_left), f64::from(editor_width));
        let mut page = page_for(&case)
            .with_editor_container(Bounds::new(0.0, 0.0, editor_width, 500.0));
        let config = TooltipConfig::default().min_left(min_left).enforce_max_left(true);
        let tooltip = place(&mut page, &case, config);
        let placement = tooltip.last_placement().unwrap();
        if matches!(placement.max_left, MaxLeftOutcome::Clamped { .. }) {
            prop_assert_eq!(tooltip.style().left, editor_width - case.popup.width);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Vertical flip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn flip_places_bottom_on_reference_top(case in case_strategy()) {
        let mut page = page_for(&case);
        let tooltip = place(&mut page, &case, TooltipConfig::default());
        let rendered = page.rendered_bounds().unwrap();
        let below_bottom = case.reference.bottom() + case.popup.height;
        if below_bottom > case.container.bottom() {
            prop_assert_eq!(tooltip.orientation(), Orientation::Above);
            prop_assert_eq!(rendered.bottom(), case.reference.top);
        } else {
            prop_assert_eq!(tooltip.orientation(), Orientation::Below);
            prop_assert_eq!(tooltip.style().top, case.reference.bottom());
        }
    }
}

proptest! {
    #[test]
    fn unflipped_top_includes_scroll_offset(case in case_strategy(), scroll in 0i32..=500) {
        let scroll = f64::from(scroll);
        let mut page = page_for(&case)
            .with_root_overflow(Overflow::Scroll)
            .with_root_scroll(scroll);
        let mut tooltip = Tooltip::new(&mut page, TooltipConfig::default());
        tooltip.on_root_scroll(&mut page);
        tooltip.show();
        tooltip.position(&mut page, &case.reference);
        if tooltip.orientation() == Orientation::Below {
            prop_assert_eq!(tooltip.style().top, case.reference.bottom() + scroll);
            prop_assert_eq!(page.rendered_bounds().unwrap().top, case.reference.bottom());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Shift accounting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn shift_matches_clamp_distance(case in case_strategy()) {
        let mut page = page_for(&case);
        let tooltip = place(&mut page, &case, TooltipConfig::default());
        let placement = tooltip.last_placement().unwrap();
        let tentative = case.reference.center_x() - case.popup.width / 2.0;
        prop_assert_eq!(placement.clamped_left, tentative + placement.shift);
        prop_assert_eq!(tooltip.style().left, placement.clamped_left);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Visibility is geometry-neutral
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hide_show_geometry_neutral(case in case_strategy(), toggles in 0usize..6) {
        let mut page = page_for(&case);
        let mut tooltip = place(&mut page, &case, TooltipConfig::default());
        let before = *tooltip.style();
        for i in 0..toggles {
            if i % 2 == 0 { tooltip.hide() } else { tooltip.show() }
        }
        tooltip.show();
        let after = *tooltip.style();
        prop_assert_eq!(after.left, before.left);
        prop_assert_eq!(after.top, before.top);
        prop_assert_eq!(after.margin_top, before.margin_top);
        prop_assert_eq!(after.markers, before.markers);
    }
}
