use super::*;

/// The elements of the non-empty sequence `L`, repeated forever.
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<5>, Cycle<FromTuple<(u8, char)>>>>,
///     (u8, char, u8, char, u8),
/// );
/// ```
///
/// There is nothing to repeat in an empty sequence, so cycling one is rejected:
///
/// ```compile_fail
/// use typeseq::prelude::*;
/// use typeseq::unary::UnaryOf;
///
/// let _: ToTuple<Take<UnaryOf<1>, Cycle<()>>> = ();
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Cycle<L>(PhantomData<fn() -> L>);

impl<L> Seq for Cycle<L>
where
    L: Seq,
    L::Next: step::CycleNext<L>,
{
    type Next = <L::Next as step::CycleNext<L>>::Output;
}

mod step {
    use super::*;

    /// Only implemented for non-empty sequences.
    pub trait CycleNext<L> {
        type Output;
    }

    impl<L, H, T> CycleNext<L> for (H, T) {
        type Output = (H, Concat<T, Cycle<L>>);
    }
}
