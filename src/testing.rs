use std::cell::Cell;

thread_local! {
    /// Whether the last pull ran its node's computation.
    static LAST_WAS_RECOMPUTE: Cell<bool> = const { Cell::new(false) };
}

/// Whether the last evaluation recomputed instead of reusing its cache.
///
/// With nested nodes, the outermost node registers last, so this reports
/// on the node that was invoked directly.
pub fn last_was_recompute() -> bool {
    LAST_WAS_RECOMPUTE.with(|cell| cell.get())
}

/// Marks the last evaluation as a recomputation.
pub(crate) fn register_recompute() {
    LAST_WAS_RECOMPUTE.with(|cell| cell.set(true))
}

/// Marks the last evaluation as a cache reuse.
pub(crate) fn register_reuse() {
    LAST_WAS_RECOMPUTE.with(|cell| cell.set(false))
}
