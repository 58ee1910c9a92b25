use std::cell::Cell;
use std::rc::Rc;

use lento::{Hashed, lazy};

#[test]
fn test_cached() {
    let counter = Cell::new(0);
    let mut foo = lazy!(|| {
        counter.set(counter.get() + 1);
        42
    });

    assert_eq!(counter.get(), 0);
    assert_eq!(foo.call(), 42);
    assert_eq!(counter.get(), 1);

    assert_eq!(foo.call(), 42);
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_dependencies() {
    let bar_counter = Cell::new(0);
    let bar_result = Cell::new(40);
    let bar = || {
        bar_counter.set(bar_counter.get() + 1);
        bar_result.get()
    };

    let foo_counter = Cell::new(0);
    let mut foo = lazy!(
        |bar: i32| {
            foo_counter.set(foo_counter.get() + 1);
            bar + 2
        },
        bar
    );

    assert_eq!(foo_counter.get(), 0);
    assert_eq!(bar_counter.get(), 0);

    assert_eq!(foo.call(), 42);
    assert_eq!(foo_counter.get(), 1);
    assert_eq!(bar_counter.get(), 1);

    // The dependency is pulled again, the computation is not rerun.
    assert_eq!(foo.call(), 42);
    assert_eq!(foo_counter.get(), 1);
    assert_eq!(bar_counter.get(), 2);

    bar_result.set(41);
    assert_eq!(foo.call(), 43);
    assert_eq!(foo_counter.get(), 2);
    assert_eq!(bar_counter.get(), 3);
}

#[test]
fn test_chained_dependencies() {
    let baz_counter = Cell::new(0);
    let baz_result = Cell::new(0);
    let baz = || {
        baz_counter.set(baz_counter.get() + 1);
        baz_result.get()
    };

    let bar_counter = Cell::new(0);
    let bar = lazy!(
        |baz: i32| {
            bar_counter.set(bar_counter.get() + 1);
            baz + 2
        },
        baz
    );

    let foo_counter = Cell::new(0);
    let mut foo = lazy!(
        |bar: i32| {
            foo_counter.set(foo_counter.get() + 1);
            bar + 40
        },
        bar
    );

    assert_eq!(foo_counter.get(), 0);
    assert_eq!(bar_counter.get(), 0);
    assert_eq!(baz_counter.get(), 0);

    assert_eq!(foo.call(), 42);
    assert_eq!(foo_counter.get(), 1);
    assert_eq!(bar_counter.get(), 1);
    assert_eq!(baz_counter.get(), 1);

    // The whole chain is pulled, nothing is recomputed.
    assert_eq!(foo.call(), 42);
    assert_eq!(foo_counter.get(), 1);
    assert_eq!(bar_counter.get(), 1);
    assert_eq!(baz_counter.get(), 2);

    // A change at the bottom propagates through both levels.
    baz_result.set(1);
    assert_eq!(foo.call(), 43);
    assert_eq!(foo_counter.get(), 2);
    assert_eq!(bar_counter.get(), 2);
    assert_eq!(baz_counter.get(), 3);

    assert_eq!(foo.call(), 43);
    assert_eq!(foo_counter.get(), 2);
    assert_eq!(bar_counter.get(), 2);
    assert_eq!(baz_counter.get(), 4);
}

#[test]
fn test_raw_value_dependency() {
    let eval_count = Cell::new(0);
    let mut f = lazy!(
        |x: i32| {
            eval_count.set(eval_count.get() + 1);
            x + 40
        },
        2
    );

    assert_eq!(f.call(), 42);
    assert_eq!(f.call(), 42);
    assert_eq!(eval_count.get(), 1);
}

#[test]
fn test_void_result() {
    let runs = Cell::new(0);
    let mut f = lazy!(|| {
        runs.set(runs.get() + 1);
    });

    // No observable return value at the outer boundary.
    let () = f.call();
    let () = f.call();

    // The cache still gates recomputation.
    assert_eq!(runs.get(), 1);
    assert_eq!(size_of_val(&f), size_of::<Option<()>>());
}

/// A value that counts how often it is compared for equality.
#[derive(Clone)]
struct Spy {
    value: i32,
    comparisons: Rc<Cell<u32>>,
}

impl PartialEq for Spy {
    fn eq(&self, other: &Self) -> bool {
        self.comparisons.set(self.comparisons.get() + 1);
        self.value == other.value
    }
}

#[test]
fn test_equality_based_suppression() {
    let f_comparisons = Rc::new(Cell::new(0));
    let f_value = Cell::new(0);
    let f = || Spy { value: f_value.get(), comparisons: f_comparisons.clone() };

    let g_comparisons = Rc::new(Cell::new(0));
    let g = {
        let g_comparisons = g_comparisons.clone();
        lazy!(move |_f: Spy| Spy { value: 0, comparisons: g_comparisons.clone() }, f)
    };
    let mut h = lazy!(|_g: Spy| 0, g);

    // First evaluation: empty caches compare as changed without invoking
    // any equality.
    assert_eq!(h.call(), 0);
    assert_eq!(f_comparisons.get(), 0);
    assert_eq!(g_comparisons.get(), 0);

    // Unchanged pull: only the volatile bottom source is compared.
    assert_eq!(h.call(), 0);
    assert_eq!(f_comparisons.get(), 1);
    assert_eq!(g_comparisons.get(), 0);

    // The bottom value changes, so the middle node recomputes; its equal
    // result stops the propagation there.
    f_value.set(1);
    assert_eq!(h.call(), 0);
    assert_eq!(f_comparisons.get(), 2);
    assert_eq!(g_comparisons.get(), 1);
}

#[test]
fn test_variadic_dependency_count() {
    let mut sum0 = lazy!(|| 0);
    let mut sum1 = lazy!(|a: i32| a, 1);
    let mut sum2 = lazy!(|a: i32, b: i32| a + b, 1, 2);

    assert_eq!(sum0.call(), 0);
    assert_eq!(sum1.call(), 1);
    assert_eq!(sum2.call(), 3);
}

#[test]
fn test_memory_footprint() {
    let unit = lazy!(|| {});
    assert_eq!(size_of_val(&unit), size_of::<Option<()>>());

    let number = lazy!(|| 0);
    assert_eq!(size_of_val(&number), size_of::<Option<i32>>());

    // A by-value capture is carried in the closure.
    let x = 7;
    let capture = lazy!(move || x);
    assert_eq!(size_of_val(&capture), size_of::<Option<i32>>() + size_of::<i32>());

    // A raw value dependency contributes exactly its own size.
    let raw = lazy!(|x: i32| x, 2);
    assert_eq!(size_of_val(&raw), size_of::<Option<i32>>() + size_of::<i32>());

    // A nested node contributes its own already-minimal footprint.
    let nested = lazy!(|x: i32| x, lazy!(|| 0));
    assert_eq!(size_of_val(&nested), 2 * size_of::<Option<i32>>());
}

#[test]
fn test_by_reference_dependency() {
    let calls = Cell::new(0);
    let mut base = lazy!(|| {
        calls.set(calls.get() + 1);
        10
    });

    {
        let mut scaled = lazy!(|x: i32| x * 3, &mut base);
        assert_eq!(scaled.call(), 30);
    }

    // The borrowed node kept its cache.
    assert_eq!(base.call(), 10);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_hashed_results() {
    let revision = Cell::new(0);
    let runs = Cell::new(0);
    let mut document = lazy!(
        |rev: i32| {
            runs.set(runs.get() + 1);
            Hashed::new(format!("document at revision {rev}"))
        },
        || revision.get()
    );

    assert_eq!(*document.call(), "document at revision 0");
    assert_eq!(*document.call(), "document at revision 0");
    assert_eq!(runs.get(), 1);

    revision.set(1);
    assert_eq!(*document.call(), "document at revision 1");
    assert_eq!(runs.get(), 2);
}
