//! Type-level functions.
//!
//! A type-level function is a marker type with a [`Func`] (or [`Func2`]) impl for every argument
//! it accepts. Applying it outside of that domain is a compile error, which is how sequence
//! combinators constrain what they may be given.
//!
//! ```
//! use typeseq::func::*;
//! use static_assertions::assert_type_eq_all;
//!
//! /// Wraps its argument in a `Vec`.
//! struct Vecced;
//!
//! impl<X> Func<X> for Vecced {
//!     type Output = Vec<X>;
//! }
//!
//! assert_type_eq_all!(Apply<Vecced, u8>, Vec<u8>);
//! assert_type_eq_all!(Apply<Compose<Vecced, Vecced>, u8>, Vec<Vec<u8>>);
//! ```

use std::marker::PhantomData;

/// A type-level function of one argument, defined on `X`.
pub trait Func<X> {
    /// The result of applying this function to `X`.
    type Output;
}

/// A type-level function of two arguments, defined on `A` and `B`.
pub trait Func2<A, B> {
    /// The result of applying this function to `A` and `B`.
    type Output;
}

/// Apply the function `F` to `X`.
pub type Apply<F, X> = <F as Func<X>>::Output;

/// Apply the binary function `F` to `A` and `B`.
pub type Apply2<F, A, B> = <F as Func2<A, B>>::Output;

/// The identity function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Id;

impl<X> Func<X> for Id {
    type Output = X;
}

/// Composition of functions: first `G`, then `F`.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Compose<F, G>(PhantomData<fn() -> (F, G)>);

impl<F, G, X> Func<X> for Compose<F, G>
where
    G: Func<X>,
    F: Func<G::Output>,
{
    type Output = Apply<F, Apply<G, X>>;
}

/// The function which ignores its argument and returns `K`.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Const<K>(PhantomData<fn() -> K>);

impl<K, X> Func<X> for Const<K> {
    type Output = K;
}

/// Partially apply the binary function `F` to its first argument `A`, yielding a unary function.
///
/// This is how a relation such as the one given to [`GroupBy`](crate::GroupBy) becomes a predicate
/// over the rest of a group.
///
/// ```
/// use typeseq::func::*;
/// use static_assertions::assert_type_eq_all;
///
/// struct Pair;
///
/// impl<A, B> Func2<A, B> for Pair {
///     type Output = (A, B);
/// }
///
/// assert_type_eq_all!(Apply<Bind<Pair, u8>, char>, (u8, char));
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Bind<F, A>(PhantomData<fn() -> (F, A)>);

impl<F, A, X> Func<X> for Bind<F, A>
where
    F: Func2<A, X>,
{
    type Output = Apply2<F, A, X>;
}

/// Flip the arguments of a binary function.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Flip<F>(PhantomData<fn() -> F>);

impl<F, A, B> Func2<A, B> for Flip<F>
where
    F: Func2<B, A>,
{
    type Output = Apply2<F, B, A>;
}
