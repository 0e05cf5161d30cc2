use super::*;

/// The infinite sequence `X, X, X, ...`.
///
/// Only ever consume it through something bounded, such as [`Take`] or [`Zip2`] against a finite
/// sequence.
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<5>, Repeat<i32>>>, (i32, i32, i32, i32, i32));
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Repeat<X>(PhantomData<fn() -> X>);

impl<X> Seq for Repeat<X> {
    type Next = (X, Repeat<X>);
}
