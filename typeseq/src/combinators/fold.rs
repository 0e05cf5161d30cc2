use super::*;
use crate::boolean::{False, True};

/// The left fold of the finite sequence `L` under the binary function `Op`, starting from `Seed`.
///
/// Folding the empty sequence gives back `Seed`, and folding a single element `X` gives
/// `Op(Seed, X)`.
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// /// Nests a function type around everything seen so far.
/// struct Arrow;
///
/// impl<A, X> Func2<A, X> for Arrow {
///     type Output = fn(A) -> X;
/// }
///
/// assert_type_eq_all!(Foldl<Arrow, u8, ()>, u8);
/// assert_type_eq_all!(Foldl<Arrow, u8, FromTuple<(u16,)>>, fn(u8) -> u16);
/// assert_type_eq_all!(Foldl<Arrow, u8, FromTuple<(u16, u32)>>, fn(fn(u8) -> u16) -> u32);
/// ```
pub type Foldl<Op, Seed, L> = <L as FoldWith<Op, Seed>>::Output;

/// Fold a sequence from the left; see [`Foldl`].
pub trait FoldWith<Op, Acc> {
    /// The final accumulator.
    type Output;
}

impl<L, Op, Acc> FoldWith<Op, Acc> for L
where
    L: Seq,
    L::Next: step::FoldNext<Op, Acc>,
{
    type Output = <L::Next as step::FoldNext<Op, Acc>>::Output;
}

/// [`True`] if the predicate `P` holds for some element of `L`.
///
/// Evaluation stops at the first element for which `P` holds, so this also answers for infinite
/// sequences which contain a witness.
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::boolean::{Bool, False, True};
///
/// struct IsBool;
///
/// impl Func<bool> for IsBool { type Output = True; }
/// impl Func<u8> for IsBool { type Output = False; }
///
/// assert!(<Any<IsBool, FromTuple<(u8, bool)>>>::VALUE);
/// assert!(!<Any<IsBool, FromTuple<(u8, u8)>>>::VALUE);
/// assert!(<Any<IsBool, Concat<FromTuple<(u8,)>, Repeat<bool>>>>::VALUE);
/// assert!(!<Any<IsBool, ()>>::VALUE);
///
/// assert!(!<All<IsBool, FromTuple<(u8, bool)>>>::VALUE);
/// assert!(<All<IsBool, FromTuple<(bool, bool)>>>::VALUE);
/// assert!(<All<IsBool, ()>>::VALUE);
/// ```
pub type Any<P, L> = <L as AnyOf<P>>::Output;

/// Decide whether a predicate holds for some element; see [`Any`].
pub trait AnyOf<P> {
    /// [`True`] or [`False`].
    type Output;
}

impl<P, L> AnyOf<P> for L
where
    L: Seq,
    L::Next: step::AnyNext<P>,
{
    type Output = <L::Next as step::AnyNext<P>>::Output;
}

/// [`True`] if the predicate `P` holds for every element of `L`.
///
/// Evaluation stops at the first element for which `P` fails.
pub type All<P, L> = <L as AllOf<P>>::Output;

/// Decide whether a predicate holds for every element; see [`All`].
pub trait AllOf<P> {
    /// [`True`] or [`False`].
    type Output;
}

impl<P, L> AllOf<P> for L
where
    L: Seq,
    L::Next: step::AllNext<P>,
{
    type Output = <L::Next as step::AllNext<P>>::Output;
}

mod step {
    use super::*;

    pub trait FoldNext<Op, Acc> {
        type Output;
    }

    impl<Op, Acc> FoldNext<Op, Acc> for () {
        type Output = Acc;
    }

    impl<Op, Acc, H, T> FoldNext<Op, Acc> for (H, T)
    where
        Op: Func2<Acc, H>,
        T: FoldWith<Op, Apply2<Op, Acc, H>>,
    {
        type Output = <T as FoldWith<Op, Apply2<Op, Acc, H>>>::Output;
    }

    pub trait AnyNext<P> {
        type Output;
    }

    impl<P> AnyNext<P> for () {
        type Output = False;
    }

    impl<P, H, T> AnyNext<P> for (H, T)
    where
        P: Func<H>,
        Apply<P, H>: AnyRest<P, T>,
    {
        type Output = <Apply<P, H> as AnyRest<P, T>>::Output;
    }

    /// Branch on the verdict for the head.
    pub trait AnyRest<P, T> {
        type Output;
    }

    impl<P, T> AnyRest<P, T> for True {
        type Output = True;
    }

    impl<P, T: AnyOf<P>> AnyRest<P, T> for False {
        type Output = T::Output;
    }

    pub trait AllNext<P> {
        type Output;
    }

    impl<P> AllNext<P> for () {
        type Output = True;
    }

    impl<P, H, T> AllNext<P> for (H, T)
    where
        P: Func<H>,
        Apply<P, H>: AllRest<P, T>,
    {
        type Output = <Apply<P, H> as AllRest<P, T>>::Output;
    }

    pub trait AllRest<P, T> {
        type Output;
    }

    impl<P, T: AllOf<P>> AllRest<P, T> for True {
        type Output = T::Output;
    }

    impl<P, T> AllRest<P, T> for False {
        type Output = False;
    }
}
