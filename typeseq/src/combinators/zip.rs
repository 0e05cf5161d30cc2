use super::*;
use crate::tuple::{List, Tuple};

/// Pair up the elements of `A` and `B`: `(A[0], B[0]), (A[1], B[1]), ...`, stopping as soon as
/// either runs out.
///
/// `B` is only evaluated once `A` is known to have a next element, so `Zip2<(), B>` is empty
/// without looking at `B` at all.
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// type Three = FromTuple<(bool, char, i32)>;
///
/// assert_type_eq_all!(
///     ToTuple<Zip2<Three, Repeat<f32>>>,
///     ((bool, f32), (char, f32), (i32, f32)),
/// );
/// assert_type_eq_all!(ToTuple<Zip2<Three, ()>>, ());
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<2>, Zip2<Repeat<i32>, Repeat<f32>>>>,
///     ((i32, f32), (i32, f32)),
/// );
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Zip2<A, B>(PhantomData<fn() -> (A, B)>);

impl<A, B> Seq for Zip2<A, B>
where
    A: Seq,
    A::Next: step::ZipLeft<B>,
{
    type Next = <A::Next as step::ZipLeft<B>>::Output;
}

/// Zip together every sequence in the flat tuple `Seqs`, producing flat tuples of their elements
/// and stopping as soon as any of them runs out.
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Zip<(FromTuple<(u8, u16)>, Repeat<char>, FromTuple<(i8, i16, i32)>)>>,
///     ((u8, char, i8), (u16, char, i16)),
/// );
/// assert_type_eq_all!(ToTuple<Zip<(FromTuple<(u8, u16)>,)>>, ((u8,), (u16,)));
/// ```
///
/// Zipping no sequences at all is rejected, as there is no sensible length for the result:
///
/// ```compile_fail
/// use typeseq::prelude::*;
/// use typeseq::unary::UnaryOf;
///
/// let _: ToTuple<Take<UnaryOf<1>, Zip<()>>> = ((),);
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Zip<Seqs>(PhantomData<fn() -> Seqs>);

impl<Seqs> Seq for Zip<Seqs>
where
    Seqs: Tuple,
    ZipLists<Seqs::AsList>: Seq,
{
    type Next = <ZipLists<Seqs::AsList> as Seq>::Next;
}

/// [`Zip`], over an inductive list of sequences rather than a flat tuple of them.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct ZipLists<Ls>(PhantomData<fn() -> Ls>);

impl<L, Ls> Seq for ZipLists<(L, Ls)>
where
    (L, Ls): step::Heads,
    <(L, Ls) as step::Heads>::Output: step::ZipEmit,
{
    type Next = <<(L, Ls) as step::Heads>::Output as step::ZipEmit>::Output;
}

mod step {
    use super::*;

    pub trait ZipLeft<B> {
        type Output;
    }

    impl<B> ZipLeft<B> for () {
        type Output = ();
    }

    impl<B, H, T> ZipLeft<B> for (H, T)
    where
        B: Seq,
        B::Next: ZipRight<H, T>,
    {
        type Output = <B::Next as ZipRight<H, T>>::Output;
    }

    pub trait ZipRight<H, T> {
        type Output;
    }

    impl<H, T> ZipRight<H, T> for () {
        type Output = ();
    }

    impl<H, T, H2, T2> ZipRight<H, T> for (H2, T2) {
        type Output = ((H, H2), Zip2<T, T2>);
    }

    /// Some sequence in the list has run out.
    #[allow(dead_code)]
    pub struct Stop;

    /// Every sequence in the list has a next element: their heads `Hs` and tails `Ts`, both as
    /// inductive lists.
    #[allow(dead_code)]
    pub struct Step<Hs, Ts>(PhantomData<fn() -> (Hs, Ts)>);

    /// Split a list of sequences into [`Stop`] or a [`Step`].
    pub trait Heads {
        type Output;
    }

    impl Heads for () {
        type Output = Step<(), ()>;
    }

    impl<L, Ls> Heads for (L, Ls)
    where
        L: Seq,
        L::Next: HeadsCons<Ls>,
    {
        type Output = <L::Next as HeadsCons<Ls>>::Output;
    }

    /// Implemented on the `Next` of the first sequence; stops before looking at the others if it
    /// is empty.
    pub trait HeadsCons<Ls> {
        type Output;
    }

    impl<Ls> HeadsCons<Ls> for () {
        type Output = Stop;
    }

    impl<Ls, H, T> HeadsCons<Ls> for (H, T)
    where
        Ls: Heads,
        Ls::Output: Prepend<H, T>,
    {
        type Output = <Ls::Output as Prepend<H, T>>::Output;
    }

    pub trait Prepend<H, T> {
        type Output;
    }

    impl<H, T> Prepend<H, T> for Stop {
        type Output = Stop;
    }

    impl<H, T, Hs, Ts> Prepend<H, T> for Step<Hs, Ts> {
        type Output = Step<(H, Hs), (T, Ts)>;
    }

    pub trait ZipEmit {
        type Output;
    }

    impl ZipEmit for Stop {
        type Output = ();
    }

    impl<Hs: List, Ts> ZipEmit for Step<Hs, Ts> {
        type Output = (Hs::AsTuple, ZipLists<Ts>);
    }
}
