use super::*;

/// All of `A`, followed by all of `B`.
///
/// `B` is not looked at until `A` runs out, so it may be infinite, and so may `A` (in which case
/// `B` is never reached).
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Concat<FromTuple<(u8, u16)>, FromTuple<(u32,)>>>,
///     (u8, u16, u32),
/// );
/// assert_type_eq_all!(
///     ToTuple<Append<FromTuple<(i32, f64, f32)>, f64>>,
///     (i32, f64, f32, f64),
/// );
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Concat<A, B>(PhantomData<fn() -> (A, B)>);

impl<A, B> Seq for Concat<A, B>
where
    A: Seq,
    A::Next: step::ConcatNext<B>,
{
    type Next = <A::Next as step::ConcatNext<B>>::Output;
}

/// `L` with `X` added at the end.
pub type Append<L, X> = Concat<L, (X, ())>;

/// The concatenation of every sequence in the sequence of sequences `Ls`.
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// type Nested = FromTuple<(FromTuple<(u8,)>, (), FromTuple<(u16, u32)>)>;
///
/// assert_type_eq_all!(ToTuple<Flatten<Nested>>, (u8, u16, u32));
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Flatten<Ls>(PhantomData<fn() -> Ls>);

impl<Ls> Seq for Flatten<Ls>
where
    Ls: Seq,
    Ls::Next: step::FlattenNext,
{
    type Next = <Ls::Next as step::FlattenNext>::Output;
}

mod step {
    use super::*;

    pub trait ConcatNext<B> {
        type Output;
    }

    impl<B: Seq> ConcatNext<B> for () {
        type Output = B::Next;
    }

    impl<B, H, T> ConcatNext<B> for (H, T) {
        type Output = (H, Concat<T, B>);
    }

    pub trait FlattenNext {
        type Output;
    }

    impl FlattenNext for () {
        type Output = ();
    }

    impl<L, Ls> FlattenNext for (L, Ls)
    where
        Concat<L, Flatten<Ls>>: Seq,
    {
        type Output = <Concat<L, Flatten<Ls>> as Seq>::Next;
    }
}
