use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use siphasher::sip128::{Hasher128, SipHasher13};

/// A value paired with its precomputed 128-bit hash.
///
/// Change detection in [`Lazy`](crate::Lazy) nodes compares each freshly
/// computed result against the cached one by value equality. For large
/// results that comparison can dominate the evaluation; wrapping them in
/// `Hashed` turns it into a single 128-bit integer comparison.
///
/// # `Hash` and `Eq`
/// When implementing both `Hash` and `Eq`, `a == b` must imply
/// `hash(a) == hash(b)`. The reverse does not follow, but with a
/// high-quality 128-bit hash the collision risk is negligible, so the
/// provided `PartialEq` and `Eq` compare by hash instead of by value.
#[derive(Copy, Clone)]
pub struct Hashed<T> {
    /// The precomputed hash.
    hash: u128,
    /// The wrapped value.
    value: T,
}

impl<T: Hash> Hashed<T> {
    /// Compute a value's hash and wrap it.
    #[inline]
    pub fn new(value: T) -> Self {
        let mut state = SipHasher13::new();
        value.hash(&mut state);
        Self { hash: state.finish128().as_u128(), value }
    }

    /// Return the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Hash> From<T> for Hashed<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Deref for Hashed<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> Hash for Hashed<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u128(self.hash);
    }
}

impl<T: PartialEq> PartialEq for Hashed<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl<T: Eq> Eq for Hashed<T> {}

impl<T: Default + Hash> Default for Hashed<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Debug> Debug for Hashed<T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_hash() {
        let a = Hashed::new(String::from("incremental"));
        let b = Hashed::new(String::from("incremental"));
        let c = Hashed::new(String::from("from scratch"));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(*a, "incremental");
        assert_eq!(c.into_inner(), "from scratch");
    }
}
