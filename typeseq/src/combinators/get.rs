use super::*;

/// The element of `L` at index `I`, or [`NotFound`] if `L` is too short.
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// type Three = FromTuple<(i32, f32, f64)>;
///
/// assert_type_eq_all!(Get<Three, UnaryOf<1>>, f32);
/// assert_type_eq_all!(Get<Three, UnaryOf<3>>, NotFound);
/// assert_type_eq_all!(Get<Repeat<u8>, UnaryOf<9>>, u8);
/// ```
pub type Get<L, I> = <L as At<I>>::Output;

/// Index into a sequence; see [`Get`].
pub trait At<I> {
    /// The element at `I`, or [`NotFound`].
    type Output;
}

impl<L, I> At<I> for L
where
    L: Seq,
    L::Next: step::AtNext<I>,
{
    type Output = <L::Next as step::AtNext<I>>::Output;
}

/// The result of [`Get`] when the index is past the end of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NotFound;

mod step {
    use super::*;

    pub trait AtNext<I> {
        type Output;
    }

    impl<I> AtNext<I> for () {
        type Output = NotFound;
    }

    impl<H, T> AtNext<Z> for (H, T) {
        type Output = H;
    }

    impl<I, H, T> AtNext<S<I>> for (H, T)
    where
        T: At<I>,
    {
        type Output = T::Output;
    }
}
