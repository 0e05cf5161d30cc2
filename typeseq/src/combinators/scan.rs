use super::*;

/// The running left fold of `L` under the binary function `Op`: `Seed`, then
/// `Op(Seed, L[0])`, then `Op(Op(Seed, L[0]), L[1])`, and so on.
///
/// The result has one more element than `L`, the last being [`Foldl<Op, Seed, L>`](Foldl).
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// /// Accumulates everything seen so far into nested pairs.
/// struct Snoc;
///
/// impl<A, X> Func2<A, X> for Snoc {
///     type Output = (A, X);
/// }
///
/// assert_type_eq_all!(
///     ToTuple<Scanl<Snoc, (), FromTuple<(u8, u16)>>>,
///     ((), ((), u8), (((), u8), u16)),
/// );
/// assert_type_eq_all!(ToTuple<Scanl<Snoc, (), ()>>, ((),));
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Scanl<Op, Seed, L>(PhantomData<fn() -> (Op, Seed, L)>);

impl<Op, Seed, L> Seq for Scanl<Op, Seed, L>
where
    L: Seq,
    L::Next: step::ScanNext<Op, Seed>,
{
    type Next = <L::Next as step::ScanNext<Op, Seed>>::Output;
}

mod step {
    use super::*;

    pub trait ScanNext<Op, Acc> {
        type Output;
    }

    impl<Op, Acc> ScanNext<Op, Acc> for () {
        type Output = (Acc, ());
    }

    impl<Op, Acc, H, T> ScanNext<Op, Acc> for (H, T)
    where
        Op: Func2<Acc, H>,
    {
        type Output = (Acc, Scanl<Op, Apply2<Op, Acc, H>, T>);
    }
}
