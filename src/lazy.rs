use crate::call::CallWith;
use crate::slot::Stored;
use crate::source::{IntoSource, LazyResult, Source};
use crate::tuple::CompressedTuple;

/// A bundle of sources pulled together on every evaluation.
///
/// Implemented for compressed tuples of up to twelve [`Stored`] sources.
/// Keeping the bundle in a [`CompressedTuple`] means zero-sized sources
/// (captureless closures, unit constants) contribute nothing to the
/// owning node's footprint.
pub trait Sources {
    /// The tuple of values produced by pulling every source once.
    type Values;

    /// Pull every source unconditionally, in positional order, and
    /// combine their change flags.
    fn pull_all(&mut self) -> LazyResult<Self::Values>;
}

macro_rules! sources {
    ($($T:ident $idx:tt),*) => {
        #[allow(unused_variables)]
        impl<$($T: Source),*> Sources for CompressedTuple<($(Stored<$T>,)*)> {
            type Values = ($($T::Output,)*);

            #[allow(clippy::unused_unit)]
            fn pull_all(&mut self) -> LazyResult<Self::Values> {
                // Every source is pulled, even when an earlier one already
                // reported a change.
                let results = ($(self.get_mut::<$idx>().pull(),)*);
                LazyResult {
                    changed: false $(| results.$idx.changed)*,
                    value: ($(results.$idx.value,)*),
                }
            }
        }
    };
}

sources! {}
sources! { A 0 }
sources! { A 0, B 1 }
sources! { A 0, B 1, C 2 }
sources! { A 0, B 1, C 2, D 3 }
sources! { A 0, B 1, C 2, D 3, E 4 }
sources! { A 0, B 1, C 2, D 3, E 4, F 5 }
sources! { A 0, B 1, C 2, D 3, E 4, F 5, G 6 }
sources! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7 }
sources! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8 }
sources! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9 }
sources! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10 }
sources! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11 }

/// Normalizes a tuple of heterogeneous dependencies into a compressed
/// bundle of sources.
///
/// Each element goes through [`IntoSource`]; `M` is the inferred tuple of
/// per-element markers.
pub trait IntoSources<M> {
    /// The normalized bundle.
    type Sources: Sources;

    /// Normalize every dependency.
    fn into_sources(self) -> Self::Sources;
}

macro_rules! into_sources {
    ($($T:ident $M:ident $idx:tt),+) => {
        impl<$($T, $M,)+> IntoSources<($($M,)+)> for ($($T,)+)
        where
            $($T: IntoSource<$M>,)+
        {
            type Sources = CompressedTuple<($(Stored<$T::Source>,)+)>;

            fn into_sources(self) -> Self::Sources {
                CompressedTuple::new(($(Stored::new(self.$idx.into_source()),)+))
            }
        }
    };
}

impl IntoSources<()> for () {
    type Sources = CompressedTuple<()>;

    fn into_sources(self) -> Self::Sources {
        CompressedTuple::new(())
    }
}
into_sources! { A MA 0 }
into_sources! { A MA 0, B MB 1 }
into_sources! { A MA 0, B MB 1, C MC 2 }
into_sources! { A MA 0, B MB 1, C MC 2, D MD 3 }
into_sources! { A MA 0, B MB 1, C MC 2, D MD 3, E ME 4 }
into_sources! { A MA 0, B MB 1, C MC 2, D MD 3, E ME 4, F MF 5 }
into_sources! { A MA 0, B MB 1, C MC 2, D MD 3, E ME 4, F MF 5, G MG 6 }
into_sources! { A MA 0, B MB 1, C MC 2, D MD 3, E ME 4, F MF 5, G MG 6, H MH 7 }
into_sources! { A MA 0, B MB 1, C MC 2, D MD 3, E ME 4, F MF 5, G MG 6, H MH 7, I MI 8 }
into_sources! { A MA 0, B MB 1, C MC 2, D MD 3, E ME 4, F MF 5, G MG 6, H MH 7, I MI 8, J MJ 9 }
into_sources! { A MA 0, B MB 1, C MC 2, D MD 3, E ME 4, F MF 5, G MG 6, H MH 7, I MI 8, J MJ 9, K MK 10 }
into_sources! { A MA 0, B MB 1, C MC 2, D MD 3, E ME 4, F MF 5, G MG 6, H MH 7, I MI 8, J MJ 9, K MK 10, L ML 11 }

/// A memoizing node: a computation together with the sources it depends
/// on and a cache of the most recent result.
///
/// Created by [`lazy`] or the [`lazy!`](crate::lazy!) macro, or from an
/// explicit bundle with [`Lazy::new`]. Invoking [`call`](Self::call)
/// pulls every source, recomputes when any of them changed and otherwise
/// reuses the cache.
///
/// A node is itself a [`Source`], so nodes compose into dependency
/// graphs; the graph is a DAG by construction because ownership (or a
/// `&mut` borrow) of every dependency is exclusive.
pub struct Lazy<F, S, T> {
    f: F,
    sources: S,
    cache: Option<T>,
}

impl<F, S, T> Lazy<F, S, T>
where
    S: Sources,
    F: CallWith<S::Values, Output = T>,
    T: Clone + PartialEq,
{
    /// Compose a node from a computation and a prepared source bundle.
    ///
    /// The cache starts out empty; nothing is computed until the first
    /// [`call`](Self::call) or pull.
    pub fn new(f: F, sources: S) -> Self {
        Self { f, sources, cache: None }
    }

    /// Evaluate the node and return only the current value.
    ///
    /// This is the outer boundary: the change flag is consumed
    /// internally. To observe the flag, use the node as a dependency of
    /// another node.
    #[inline]
    pub fn call(&mut self) -> T {
        self.pull().value
    }
}

impl<F, S, T> Source for Lazy<F, S, T>
where
    S: Sources,
    F: CallWith<S::Values, Output = T>,
    T: Clone + PartialEq,
{
    type Output = T;

    fn pull(&mut self) -> LazyResult<T> {
        let deps = self.sources.pull_all();
        match &self.cache {
            Some(cached) if !deps.changed => {
                #[cfg(feature = "testing")]
                crate::testing::register_reuse();

                LazyResult { value: cached.clone(), changed: false }
            }
            _ => {
                let fresh = self.f.call_with(deps.value);

                // An empty cache compares as unequal, so the first result
                // always propagates as changed.
                let changed = self.cache.as_ref() != Some(&fresh);
                let value = fresh.clone();
                self.cache = Some(fresh);

                #[cfg(feature = "testing")]
                crate::testing::register_recompute();

                LazyResult { value, changed }
            }
        }
    }
}

/// Compose a memoizing node from a computation and its dependencies.
///
/// `deps` is a tuple mixing sources (other nodes), plain zero-argument
/// closures and raw values in any combination; each element is normalized
/// through [`IntoSource`]. The [`lazy!`](crate::lazy!) macro provides the
/// variadic call shape.
///
/// ```
/// use std::cell::Cell;
///
/// let runs = Cell::new(0);
/// let mut answer = lento::lazy(
///     |x: i32| {
///         runs.set(runs.get() + 1);
///         x + 40
///     },
///     (2,),
/// );
///
/// assert_eq!(answer.call(), 42);
/// assert_eq!(answer.call(), 42);
/// assert_eq!(runs.get(), 1);
/// ```
pub fn lazy<F, D, M>(
    f: F,
    deps: D,
) -> Lazy<F, D::Sources, <F as CallWith<<D::Sources as Sources>::Values>>::Output>
where
    D: IntoSources<M>,
    F: CallWith<<D::Sources as Sources>::Values>,
    F::Output: Clone + PartialEq,
{
    Lazy::new(f, deps.into_sources())
}

/// Compose a memoizing node with a variadic dependency list.
///
/// `lazy!(f, a, b)` is shorthand for [`lazy(f, (a, b))`](lazy).
#[macro_export]
macro_rules! lazy {
    ($f:expr $(, $dep:expr)* $(,)?) => {
        $crate::lazy($f, ($($dep,)*))
    };
}
