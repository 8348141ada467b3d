//! Property-based invariant tests for `Bounds`.
//!
//! 1. Right/bottom edges are consistent with left+width, top+height.
//! 2. `from_edges` reproduces the edges it was built from.
//! 3. Translation preserves size and shifts every edge by the same delta.
//! 4. Containment is reflexive.
//! 5. Full containment implies horizontal containment.

use fliptip_core::geometry::{Bounds, Size};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

// Integer-valued coordinates keep float arithmetic exact.
fn bounds_strategy() -> impl Strategy<Value = Bounds> {
    (-2000i32..=2000, -2000i32..=2000, 0i32..=1000, 0i32..=1000).prop_map(|(l, t, w, h)| {
        Bounds::new(f64::from(l), f64::from(t), f64::from(w), f64::from(h))
    })
}

proptest! {
    #[test]
    fn edges_consistent(b in bounds_strategy()) {
        prop_assert_eq!(b.right(), b.left + b.width);
        prop_assert_eq!(b.bottom(), b.top + b.height);
        prop_assert_eq!(b.size(), Size::new(b.width, b.height));
    }
}

proptest! {
    #[test]
    fn from_edges_reproduces_edges(b in bounds_strategy()) {
        let rebuilt = Bounds::from_edges(b.left, b.top, b.right(), b.bottom());
        prop_assert_eq!(rebuilt, b);
    }
}

proptest! {
    #[test]
    fn translate_shifts_all_edges(b in bounds_strategy(), dx in -500i32..=500, dy in -500i32..=500) {
        let (dx, dy) = (f64::from(dx), f64::from(dy));
        let moved = b.translate(dx, dy);
        prop_assert_eq!(moved.size(), b.size());
        prop_assert_eq!(moved.left, b.left + dx);
        prop_assert_eq!(moved.right(), b.right() + dx);
        prop_assert_eq!(moved.top, b.top + dy);
        prop_assert_eq!(moved.bottom(), b.bottom() + dy);
    }
}

proptest! {
    #[test]
    fn containment_reflexive(b in bounds_strategy()) {
        prop_assert!(b.contains_horizontally(&b));
        prop_assert!(b.contains_bounds(&b));
    }
}

proptest! {
    #[test]
    fn full_containment_implies_horizontal(a in bounds_strategy(), b in bounds_strategy()) {
        if a.contains_bounds(&b) {
            prop_assert!(a.contains_horizontally(&b));
        }
    }
}
