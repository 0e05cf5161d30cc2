use super::*;

/// The first `N` elements of `L`, or all of `L` if it is shorter.
///
/// `Take<Z, L>` is empty for any `L` whatsoever, so it can be used to cut off a sequence which has
/// no elements left to give.
///
/// # Examples
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// type Four = FromTuple<(i32, bool, f32, f64)>;
///
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<2>, Four>>, (i32, bool));
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<10>, Four>>, (i32, bool, f32, f64));
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<0>, Repeat<i32>>>, ());
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Take<N, L>(PhantomData<fn() -> (N, L)>);

impl<L> Seq for Take<Z, L> {
    type Next = ();
}

impl<N, L> Seq for Take<S<N>, L>
where
    L: Seq,
    L::Next: step::TakeNext<N>,
{
    type Next = <L::Next as step::TakeNext<N>>::Output;
}

mod step {
    use super::*;

    pub trait TakeNext<N> {
        type Output;
    }

    impl<N> TakeNext<N> for () {
        type Output = ();
    }

    impl<N, H, T> TakeNext<N> for (H, T) {
        type Output = (H, Take<N, T>);
    }
}
