use super::*;

/// The infinite sequence `X, F(X), F(F(X)), ...`.
///
/// `F` is applied only once the element it produces is demanded, so `F` need only be defined on
/// as many iterates as are actually consumed.
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// struct Starred;
///
/// impl<X> Func<X> for Starred {
///     type Output = *const X;
/// }
///
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<4>, Iterate<Starred, i32>>>,
///     (i32, *const i32, *const *const i32, *const *const *const i32),
/// );
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Iterate<F, X>(PhantomData<fn() -> (F, X)>);

impl<F, X> Seq for Iterate<F, X> {
    type Next = (X, Successors<F, X>);
}

/// The iterates of `F` strictly after `X`: `F(X), F(F(X)), ...`.
///
/// This is the tail of [`Iterate<F, X>`](Iterate).
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Successors<F, X>(PhantomData<fn() -> (F, X)>);

impl<F, X> Seq for Successors<F, X>
where
    F: Func<X>,
{
    type Next = (Apply<F, X>, Successors<F, Apply<F, X>>);
}
