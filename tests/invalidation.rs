use std::cell::Cell;

use lento::testing::last_was_recompute;

#[test]
fn test_recompute_tracking() {
    let input = Cell::new(1);
    let mut node = lento::lazy!(|x: i32| x * 10, || input.get());

    assert_eq!(node.call(), 10); // [Recompute] The cache is empty.
    assert!(last_was_recompute());

    assert_eq!(node.call(), 10); // [Reuse] Nothing changed.
    assert!(!last_was_recompute());

    input.set(2);
    assert_eq!(node.call(), 20); // [Recompute] The input changed.
    assert!(last_was_recompute());

    input.set(2);
    assert_eq!(node.call(), 20); // [Reuse] Same input as before.
    assert!(!last_was_recompute());
}

#[test]
fn test_nested_tracking_reports_outermost() {
    let input = Cell::new(0);
    let inner = lento::lazy!(|x: i32| x / 2, || input.get());
    let mut outer = lento::lazy!(|x: i32| x + 1, inner);

    assert_eq!(outer.call(), 1); // [Recompute] First evaluation.
    assert!(last_was_recompute());

    // The inner node recomputes (0 / 2 == 1 / 2), but its unchanged
    // result lets the outer node reuse its cache.
    input.set(1);
    assert_eq!(outer.call(), 1); // [Reuse] Change was absorbed below.
    assert!(!last_was_recompute());
}
