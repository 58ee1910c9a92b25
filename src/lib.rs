//! Demand-driven memoization with change propagation.
//!
//! Two building blocks: a compressed heterogeneous tuple that elides
//! storage for zero-sized elements, and a memoizing [`Lazy`] evaluator
//! built on top of it. A node composed with [`lazy`] pulls all of its
//! dependencies on every invocation, recomputes only when one of them
//! reports a change and compares the fresh result against its cache to
//! decide whether to propagate a change of its own.
//!
//! ```
//! use std::cell::Cell;
//!
//! let temperature = Cell::new(20);
//! let conversions = Cell::new(0);
//!
//! let mut fahrenheit = lento::lazy!(
//!     |celsius: i32| {
//!         conversions.set(conversions.get() + 1);
//!         celsius * 9 / 5 + 32
//!     },
//!     || temperature.get()
//! );
//!
//! assert_eq!(fahrenheit.call(), 68);
//! assert_eq!(fahrenheit.call(), 68); // Cached, no reconversion.
//! assert_eq!(conversions.get(), 1);
//!
//! temperature.set(25);
//! assert_eq!(fahrenheit.call(), 77); // The dependency changed.
//! assert_eq!(conversions.get(), 2);
//! ```

mod call;
mod hashed;
mod lazy;
mod slot;
mod source;
mod tuple;

#[cfg(feature = "testing")]
pub mod testing;

pub use crate::call::CallWith;
pub use crate::hashed::Hashed;
pub use crate::lazy::{IntoSources, Lazy, Sources, lazy};
pub use crate::slot::{Phantom, Slot, Stateless, Stored};
pub use crate::source::{Constant, IntoSource, LazyResult, Source, Volatile, marker};
pub use crate::tuple::{CompressedTuple, Get, TupleLike};
