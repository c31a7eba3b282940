//! Property tests for rectangle arithmetic.

use faultline_core::geometry::Rect;
use proptest::prelude::*;

fn arb_rect() -> impl Strategy<Value = Rect> {
    (0u16..200, 0u16..200, 0u16..100, 0u16..100)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn intersection_is_commutative(a in arb_rect(), b in arb_rect()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn intersection_is_contained_in_both(a in arb_rect(), b in arb_rect()) {
        if let Some(i) = a.intersection(&b) {
            prop_assert!(i.x >= a.x && i.right() <= a.right());
            prop_assert!(i.x >= b.x && i.right() <= b.right());
            prop_assert!(i.y >= a.y && i.bottom() <= a.bottom());
            prop_assert!(i.y >= b.y && i.bottom() <= b.bottom());
            prop_assert!(!i.is_empty());
        }
    }

    #[test]
    fn contains_agrees_with_intersection(a in arb_rect(), b in arb_rect()) {
        let overlap = a.intersects(&b);
        let shared_point = (a.x.max(b.x), a.y.max(b.y));
        if overlap {
            prop_assert!(a.contains(shared_point.0, shared_point.1));
            prop_assert!(b.contains(shared_point.0, shared_point.1));
        }
    }

    #[test]
    fn self_intersection_is_identity(a in arb_rect()) {
        if a.is_empty() {
            prop_assert_eq!(a.intersection(&a), None);
        } else {
            prop_assert_eq!(a.intersection(&a), Some(a));
        }
    }

    #[test]
    fn inset_stays_inside(a in arb_rect(), margin in 0u16..10) {
        let inner = a.inset(margin);
        if !inner.is_empty() {
            prop_assert!(inner.x >= a.x);
            prop_assert!(inner.y >= a.y);
            prop_assert!(inner.right() <= a.right());
            prop_assert!(inner.bottom() <= a.bottom());
        }
    }

    #[test]
    fn split_top_partitions_area(a in arb_rect(), rows in 0u16..120) {
        let (top, rest) = a.split_top(rows);
        prop_assert_eq!(top.area() + rest.area(), a.area());
        prop_assert!(!top.intersects(&rest));
    }
}
