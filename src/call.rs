/// Calls a function with arguments unpacked positionally from a tuple.
///
/// This is how a [`Lazy`](crate::Lazy) node feeds the values pulled from
/// its dependency bundle into the user computation. Implemented for
/// `FnMut` closures of up to twelve arguments.
pub trait CallWith<Args> {
    /// The function's return type.
    type Output;

    /// Invoke the function with the unpacked arguments.
    fn call_with(&mut self, args: Args) -> Self::Output;
}

macro_rules! call_with {
    ($($T:ident $idx:tt),*) => {
        impl<Func, Out, $($T),*> CallWith<($($T,)*)> for Func
        where
            Func: FnMut($($T),*) -> Out,
        {
            type Output = Out;

            #[allow(unused_variables)]
            #[inline]
            fn call_with(&mut self, args: ($($T,)*)) -> Out {
                self($(args.$idx),*)
            }
        }
    };
}

call_with! {}
call_with! { A 0 }
call_with! { A 0, B 1 }
call_with! { A 0, B 1, C 2 }
call_with! { A 0, B 1, C 2, D 3 }
call_with! { A 0, B 1, C 2, D 3, E 4 }
call_with! { A 0, B 1, C 2, D 3, E 4, F 5 }
call_with! { A 0, B 1, C 2, D 3, E 4, F 5, G 6 }
call_with! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7 }
call_with! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8 }
call_with! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9 }
call_with! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10 }
call_with! { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, I 8, J 9, K 10, L 11 }
