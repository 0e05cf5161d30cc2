use super::*;

/// Every suffix of `L`, longest first: `L` itself, then `L` without its head, and so on down to
/// the empty sequence, which is always the last element.
///
/// The elements are themselves sequences; map [`IntoTuple`](crate::IntoTuple) over the result to
/// look at them as tuples.
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Map<IntoTuple, Tails<FromTuple<(i32, char, bool)>>>>,
///     ((i32, char, bool), (char, bool), (bool,), ()),
/// );
/// assert_type_eq_all!(ToTuple<Map<IntoTuple, Tails<()>>>, ((),));
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Tails<L>(PhantomData<fn() -> L>);

impl<L> Seq for Tails<L>
where
    L: Seq,
    L::Next: step::TailsNext<L>,
{
    type Next = <L::Next as step::TailsNext<L>>::Output;
}

mod step {
    use super::*;

    pub trait TailsNext<L> {
        type Output;
    }

    impl<L> TailsNext<L> for () {
        type Output = (L, ());
    }

    impl<L, H, T> TailsNext<L> for (H, T) {
        type Output = (L, Tails<T>);
    }
}
