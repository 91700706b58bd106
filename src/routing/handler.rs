//! Typed route handlers.
//!
//! Any `Fn(A, B, ..) -> R` whose argument list matches a template's
//! placeholder tuple is a handler for that template. A handler with the
//! wrong arity or argument types is rejected by the compiler.

/// A function invoked with the decoded placeholder values of a match.
pub trait Handler<Args, R>: Send + Sync + 'static {
    fn call(&self, args: Args) -> R;
}

macro_rules! impl_handler {
    ($($ty:ident => $idx:tt),*) => {
        impl<Func, R, $($ty,)*> Handler<($($ty,)*), R> for Func
        where
            Func: Fn($($ty),*) -> R + Send + Sync + 'static,
        {
            #[allow(unused_variables)]
            fn call(&self, args: ($($ty,)*)) -> R {
                (self)($(args.$idx),*)
            }
        }
    };
}

impl_handler!();
impl_handler!(A => 0);
impl_handler!(A => 0, B => 1);
impl_handler!(A => 0, B => 1, C => 2);
impl_handler!(A => 0, B => 1, C => 2, D => 3);
impl_handler!(A => 0, B => 1, C => 2, D => 3, E => 4);
impl_handler!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5);
impl_handler!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6);
impl_handler!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7);
impl_handler!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8);
impl_handler!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7, I => 8, J => 9);
