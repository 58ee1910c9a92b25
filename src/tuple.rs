use crate::slot::{Slot, Stored};

/// A fixed-arity heterogeneous container that elides storage for
/// stateless elements.
///
/// `S` is a tuple of [`Slot`]s. [`Stored`] slots occupy exactly the size
/// of their value; [`Phantom`] slots occupy nothing, so the whole tuple is
/// as small as the sum of its stored parts. A tuple of only phantom slots
/// is zero-sized.
///
/// Positional access goes through [`get`](Self::get),
/// [`get_mut`](Self::get_mut) and [`into_element`](Self::into_element);
/// arity and element types are exposed through [`TupleLike`] and [`Get`].
///
/// [`Phantom`]: crate::Phantom
#[derive(Debug, Clone, Copy, Default)]
pub struct CompressedTuple<S>(S);

impl<S> CompressedTuple<S> {
    /// Assemble a tuple from an explicit tuple of slots.
    #[inline]
    pub fn new(slots: S) -> Self {
        Self(slots)
    }

    /// Shared access to the element at position `I`.
    ///
    /// Stored slots yield a reference into the tuple, phantom slots a
    /// fresh value.
    #[inline]
    pub fn get<const I: usize>(&self) -> <<Self as Get<I>>::Slot as Slot>::Ref<'_>
    where
        Self: Get<I>,
    {
        self.slot().get()
    }

    /// Exclusive access to the element at position `I`.
    #[inline]
    pub fn get_mut<const I: usize>(&mut self) -> <<Self as Get<I>>::Slot as Slot>::Mut<'_>
    where
        Self: Get<I>,
    {
        self.slot_mut().get_mut()
    }

    /// Move the element at position `I` out of the tuple.
    #[inline]
    pub fn into_element<const I: usize>(self) -> <<Self as Get<I>>::Slot as Slot>::Value
    where
        Self: Get<I>,
    {
        self.into_slot().into_value()
    }
}

/// Positional slot access into a [`CompressedTuple`].
///
/// Implemented for every position of tuples with up to twelve slots. The
/// element type at position `I` is `<T as Get<I>>::Slot::Value`.
pub trait Get<const I: usize> {
    /// The slot at position `I`.
    type Slot: Slot;

    /// Borrow the slot.
    fn slot(&self) -> &Self::Slot;

    /// Borrow the slot exclusively.
    fn slot_mut(&mut self) -> &mut Self::Slot;

    /// Move the slot out.
    fn into_slot(self) -> Self::Slot
    where
        Self: Sized;
}

/// Arity and value introspection for tuple-like containers.
///
/// Implemented for compressed tuples of up to twelve slots.
pub trait TupleLike {
    /// The number of elements.
    const LEN: usize;

    /// The plain tuple of element values.
    type Values;

    /// Convert into a plain tuple, materializing phantom slots.
    ///
    /// Reference elements stay references, so the result is suitable for
    /// generic tuple algorithms without losing aliasing.
    fn into_values(self) -> Self::Values;
}

macro_rules! tuple_like {
    ($len:literal; $($T:ident $idx:tt),*) => {
        impl<$($T: Slot),*> TupleLike for CompressedTuple<($($T,)*)> {
            const LEN: usize = $len;
            type Values = ($($T::Value,)*);

            #[allow(unused_variables, clippy::unused_unit)]
            fn into_values(self) -> Self::Values {
                let slots = self.0;
                ($(slots.$idx.into_value(),)*)
            }
        }

        #[allow(unused_variables)]
        impl<$($T),*> CompressedTuple<($(Stored<$T>,)*)> {
            /// Build a tuple that stores every value in place.
            pub fn from_values(values: ($($T,)*)) -> Self {
                Self(($(Stored::new(values.$idx),)*))
            }
        }
    };
}

tuple_like! { 0; }
tuple_like! { 1; A 0 }
tuple_like! { 2; A 0, B 1 }
tuple_like! { 3; A 0, B 1, C 2 }
tuple_like! { 4; A 0, B 1, C 2, D 3 }
tuple_like! { 5; A 0, B 1, C 2, D 3, E 4 }
tuple_like! { 6; A 0, B 1, C 2, D 3, E 4, F 5 }
tuple_like! { 7; A 0, B 1, C 2, D 3, E 4, F 5, G 6 }
tuple_like! { 8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7 }
tuple_like! { 9; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8 }
tuple_like! { 10; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9 }
tuple_like! { 11; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10 }
tuple_like! { 12; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11 }

macro_rules! get_at {
    ($I:tt $S:ident; $($T:ident),*) => {
        impl<$($T: Slot),*> Get<$I> for CompressedTuple<($($T,)*)> {
            type Slot = $S;

            #[inline]
            fn slot(&self) -> &$S {
                &(self.0).$I
            }

            #[inline]
            fn slot_mut(&mut self) -> &mut $S {
                &mut (self.0).$I
            }

            #[inline]
            fn into_slot(self) -> $S {
                (self.0).$I
            }
        }
    };
}

get_at! { 0 A; A }
get_at! { 0 A; A, B }
get_at! { 1 B; A, B }
get_at! { 0 A; A, B, C }
get_at! { 1 B; A, B, C }
get_at! { 2 C; A, B, C }
get_at! { 0 A; A, B, C, D }
get_at! { 1 B; A, B, C, D }
get_at! { 2 C; A, B, C, D }
get_at! { 3 D; A, B, C, D }
get_at! { 0 A; A, B, C, D, E }
get_at! { 1 B; A, B, C, D, E }
get_at! { 2 C; A, B, C, D, E }
get_at! { 3 D; A, B, C, D, E }
get_at! { 4 E; A, B, C, D, E }
get_at! { 0 A; A, B, C, D, E, F }
get_at! { 1 B; A, B, C, D, E, F }
get_at! { 2 C; A, B, C, D, E, F }
get_at! { 3 D; A, B, C, D, E, F }
get_at! { 4 E; A, B, C, D, E, F }
get_at! { 5 F; A, B, C, D, E, F }
get_at! { 0 A; A, B, C, D, E, F, G }
get_at! { 1 B; A, B, C, D, E, F, G }
get_at! { 2 C; A, B, C, D, E, F, G }
get_at! { 3 D; A, B, C, D, E, F, G }
get_at! { 4 E; A, B, C, D, E, F, G }
get_at! { 5 F; A, B, C, D, E, F, G }
get_at! { 6 G; A, B, C, D, E, F, G }
get_at! { 0 A; A, B, C, D, E, F, G, H }
get_at! { 1 B; A, B, C, D, E, F, G, H }
get_at! { 2 C; A, B, C, D, E, F, G, H }
get_at! { 3 D; A, B, C, D, E, F, G, H }
get_at! { 4 E; A, B, C, D, E, F, G, H }
get_at! { 5 F; A, B, C, D, E, F, G, H }
get_at! { 6 G; A, B, C, D, E, F, G, H }
get_at! { 7 H; A, B, C, D, E, F, G, H }
get_at! { 0 A; A, B, C, D, E, F, G, H, I }
get_at! { 1 B; A, B, C, D, E, F, G, H, I }
get_at! { 2 C; A, B, C, D, E, F, G, H, I }
get_at! { 3 D; A, B, C, D, E, F, G, H, I }
get_at! { 4 E; A, B, C, D, E, F, G, H, I }
get_at! { 5 F; A, B, C, D, E, F, G, H, I }
get_at! { 6 G; A, B, C, D, E, F, G, H, I }
get_at! { 7 H; A, B, C, D, E, F, G, H, I }
get_at! { 8 I; A, B, C, D, E, F, G, H, I }
get_at! { 0 A; A, B, C, D, E, F, G, H, I, J }
get_at! { 1 B; A, B, C, D, E, F, G, H, I, J }
get_at! { 2 C; A, B, C, D, E, F, G, H, I, J }
get_at! { 3 D; A, B, C, D, E, F, G, H, I, J }
get_at! { 4 E; A, B, C, D, E, F, G, H, I, J }
get_at! { 5 F; A, B, C, D, E, F, G, H, I, J }
get_at! { 6 G; A, B, C, D, E, F, G, H, I, J }
get_at! { 7 H; A, B, C, D, E, F, G, H, I, J }
get_at! { 8 I; A, B, C, D, E, F, G, H, I, J }
get_at! { 9 J; A, B, C, D, E, F, G, H, I, J }
get_at! { 0 A; A, B, C, D, E, F, G, H, I, J, K }
get_at! { 1 B; A, B, C, D, E, F, G, H, I, J, K }
get_at! { 2 C; A, B, C, D, E, F, G, H, I, J, K }
get_at! { 3 D; A, B, C, D, E, F, G, H, I, J, K }
get_at! { 4 E; A, B, C, D, E, F, G, H, I, J, K }
get_at! { 5 F; A, B, C, D, E, F, G, H, I, J, K }
get_at! { 6 G; A, B, C, D, E, F, G, H, I, J, K }
get_at! { 7 H; A, B, C, D, E, F, G, H, I, J, K }
get_at! { 8 I; A, B, C, D, E, F, G, H, I, J, K }
get_at! { 9 J; A, B, C, D, E, F, G, H, I, J, K }
get_at! { 10 K; A, B, C, D, E, F, G, H, I, J, K }
get_at! { 0 A; A, B, C, D, E, F, G, H, I, J, K, L }
get_at! { 1 B; A, B, C, D, E, F, G, H, I, J, K, L }
get_at! { 2 C; A, B, C, D, E, F, G, H, I, J, K, L }
get_at! { 3 D; A, B, C, D, E, F, G, H, I, J, K, L }
get_at! { 4 E; A, B, C, D, E, F, G, H, I, J, K, L }
get_at! { 5 F; A, B, C, D, E, F, G, H, I, J, K, L }
get_at! { 6 G; A, B, C, D, E, F, G, H, I, J, K, L }
get_at! { 7 H; A, B, C, D, E, F, G, H, I, J, K, L }
get_at! { 8 I; A, B, C, D, E, F, G, H, I, J, K, L }
get_at! { 9 J; A, B, C, D, E, F, G, H, I, J, K, L }
get_at! { 10 K; A, B, C, D, E, F, G, H, I, J, K, L }
get_at! { 11 L; A, B, C, D, E, F, G, H, I, J, K, L }
