//! The [`Seq`] trait and the operations which consume a sequence as a whole.

use crate::func::Func;
use crate::tuple::{List, Tuple};
use crate::unary::{Unary, S, Z};

/// A possibly-infinite, lazily evaluated type-level sequence.
///
/// A sequence is evaluated one node at a time: [`Seq::Next`] is the sequence's head-normal form,
/// either `()` when the sequence is empty, or `(Head, Tail)` where `Tail` is itself a [`Seq`]
/// that has not yet been evaluated. Nothing past the first node is computed until something asks
/// for it, which is what lets infinite sequences such as [`Repeat`](crate::Repeat) exist as
/// ordinary types.
///
/// The inductive lists `()` and `(A, (B, (C, ())))` are sequences which are already fully
/// evaluated; every combinator in this crate is a sequence which is not.
///
/// # Examples
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<Repeat<u8> as Seq>::Next, (u8, Repeat<u8>));
/// assert_type_eq_all!(<(u8, ()) as Seq>::Next, (u8, ()));
/// ```
pub trait Seq {
    /// Either `()` or `(Head, Tail)`.
    type Next;
}

impl Seq for () {
    type Next = ();
}

impl<H, T> Seq for (H, T) {
    type Next = (H, T);
}

/// Fully evaluate a finite sequence into its inductive list `(A, (B, (C, ())))`.
///
/// Collecting an infinite sequence does not terminate, which surfaces as a recursion-limit
/// error during compilation.
pub trait Collect {
    /// The evaluated list.
    type Output;
}

impl<L> Collect for L
where
    L: Seq,
    L::Next: step::CollectNext,
{
    type Output = <L::Next as step::CollectNext>::Output;
}

/// Take the length of a finite sequence as a unary type-level number.
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::unary::{Unary, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Length<FromTuple<(u8, u16, u32)>>, UnaryOf<3>);
/// assert_eq!(<Length<Take<UnaryOf<7>, Repeat<()>>>>::VALUE, 7);
/// ```
pub trait HasLength {
    /// The length of a type-level sequence.
    type Length: Unary;
}

impl<L> HasLength for L
where
    L: Seq,
    L::Next: step::LengthNext,
{
    type Length = <L::Next as step::LengthNext>::Length;
}

/// The length of the finite sequence `L`.
pub type Length<L> = <L as HasLength>::Length;

/// The sequence holding the elements of the flat tuple `T`, in order.
pub type FromTuple<T> = <T as Tuple>::AsList;

/// The flat tuple holding the elements of the finite sequence `L`, in order.
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ToTuple<FromTuple<(u8, bool, char)>>, (u8, bool, char));
/// assert_type_eq_all!(ToTuple<()>, ());
/// ```
pub type ToTuple<L> = <<L as Collect>::Output as List>::AsTuple;

/// The type-level function [`ToTuple`], for mapping over a sequence of sequences.
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// type Suffixes = Tails<FromTuple<(u8, u16)>>;
/// assert_type_eq_all!(ToTuple<Map<IntoTuple, Suffixes>>, ((u8, u16), (u16,), ()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntoTuple;

impl<L> Func<L> for IntoTuple
where
    L: Collect,
    L::Output: List,
{
    type Output = ToTuple<L>;
}

mod step {
    use super::*;

    pub trait CollectNext {
        type Output;
    }

    impl CollectNext for () {
        type Output = ();
    }

    impl<H, T: Collect> CollectNext for (H, T) {
        type Output = (H, T::Output);
    }

    pub trait LengthNext {
        type Length: Unary;
    }

    impl LengthNext for () {
        type Length = Z;
    }

    impl<H, T: HasLength> LengthNext for (H, T) {
        type Length = S<T::Length>;
    }
}
