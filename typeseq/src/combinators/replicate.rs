use super::*;

/// `N` copies of `X`.
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ToTuple<Replicate<UnaryOf<3>, i32>>, (i32, i32, i32));
/// assert_type_eq_all!(ToTuple<Replicate<UnaryOf<0>, i32>>, ());
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Replicate<N, X>(PhantomData<fn() -> (N, X)>);

impl<X> Seq for Replicate<Z, X> {
    type Next = ();
}

impl<N, X> Seq for Replicate<S<N>, X> {
    type Next = (X, Replicate<N, X>);
}
