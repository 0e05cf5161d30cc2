use super::*;
use crate::boolean::{False, True};

/// The elements of `L` for which the predicate `P` is [`True`], in their original order.
///
/// Only as much of `L` is evaluated as is needed to find the next surviving element, so filtering
/// an infinite sequence is fine as long as the result is consumed boundedly and there always is a
/// next surviving element.
///
/// # Examples
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::boolean::{True, False};
/// use static_assertions::assert_type_eq_all;
///
/// struct IsSigned;
///
/// impl Func<u8> for IsSigned { type Output = False; }
/// impl Func<i8> for IsSigned { type Output = True; }
/// impl Func<u64> for IsSigned { type Output = False; }
/// impl Func<i64> for IsSigned { type Output = True; }
///
/// assert_type_eq_all!(ToTuple<Filter<IsSigned, FromTuple<(u8, i8, u64, i64)>>>, (i8, i64));
/// assert_type_eq_all!(ToTuple<Filter<IsSigned, FromTuple<(u8, u64)>>>, ());
/// ```
///
/// A predicate must answer with a type-level boolean:
///
/// ```compile_fail
/// use typeseq::prelude::*;
///
/// struct NotAPredicate;
///
/// impl<X> Func<X> for NotAPredicate { type Output = X; }
///
/// let _: ToTuple<Filter<NotAPredicate, FromTuple<(u8,)>>> = (1,);
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Filter<P, L>(PhantomData<fn() -> (P, L)>);

impl<P, L> Seq for Filter<P, L>
where
    L: Seq,
    L::Next: step::FilterNext<P>,
{
    type Next = <L::Next as step::FilterNext<P>>::Output;
}

/// The longest prefix of `L` whose elements all satisfy `P`.
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::boolean::{True, False};
/// use static_assertions::assert_type_eq_all;
///
/// struct IsUnit;
///
/// impl Func<()> for IsUnit { type Output = True; }
/// impl Func<u8> for IsUnit { type Output = False; }
///
/// type Mixed = FromTuple<((), (), u8, ())>;
///
/// assert_type_eq_all!(ToTuple<TakeWhile<IsUnit, Mixed>>, ((), ()));
/// assert_type_eq_all!(ToTuple<DropWhile<IsUnit, Mixed>>, (u8, ()));
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct TakeWhile<P, L>(PhantomData<fn() -> (P, L)>);

impl<P, L> Seq for TakeWhile<P, L>
where
    L: Seq,
    L::Next: step::TakeWhileNext<P>,
{
    type Next = <L::Next as step::TakeWhileNext<P>>::Output;
}

/// `L` without the longest prefix whose elements all satisfy `P`.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct DropWhile<P, L>(PhantomData<fn() -> (P, L)>);

impl<P, L> Seq for DropWhile<P, L>
where
    L: Seq,
    L::Next: step::DropWhileNext<P>,
{
    type Next = <L::Next as step::DropWhileNext<P>>::Output;
}

mod step {
    use super::*;

    pub trait FilterNext<P> {
        type Output;
    }

    impl<P> FilterNext<P> for () {
        type Output = ();
    }

    impl<P, H, T> FilterNext<P> for (H, T)
    where
        P: Func<H>,
        Apply<P, H>: Keep<P, H, T>,
    {
        type Output = <Apply<P, H> as Keep<P, H, T>>::Output;
    }

    /// Branch on the verdict of the predicate for the head `H`.
    pub trait Keep<P, H, T> {
        type Output;
    }

    impl<P, H, T> Keep<P, H, T> for True {
        type Output = (H, Filter<P, T>);
    }

    impl<P, H, T> Keep<P, H, T> for False
    where
        Filter<P, T>: Seq,
    {
        type Output = <Filter<P, T> as Seq>::Next;
    }

    pub trait TakeWhileNext<P> {
        type Output;
    }

    impl<P> TakeWhileNext<P> for () {
        type Output = ();
    }

    impl<P, H, T> TakeWhileNext<P> for (H, T)
    where
        P: Func<H>,
        Apply<P, H>: KeepTaking<P, H, T>,
    {
        type Output = <Apply<P, H> as KeepTaking<P, H, T>>::Output;
    }

    pub trait KeepTaking<P, H, T> {
        type Output;
    }

    impl<P, H, T> KeepTaking<P, H, T> for True {
        type Output = (H, TakeWhile<P, T>);
    }

    impl<P, H, T> KeepTaking<P, H, T> for False {
        type Output = ();
    }

    pub trait DropWhileNext<P> {
        type Output;
    }

    impl<P> DropWhileNext<P> for () {
        type Output = ();
    }

    impl<P, H, T> DropWhileNext<P> for (H, T)
    where
        P: Func<H>,
        Apply<P, H>: KeepDropping<P, H, T>,
    {
        type Output = <Apply<P, H> as KeepDropping<P, H, T>>::Output;
    }

    pub trait KeepDropping<P, H, T> {
        type Output;
    }

    impl<P, H, T> KeepDropping<P, H, T> for True
    where
        DropWhile<P, T>: Seq,
    {
        type Output = <DropWhile<P, T> as Seq>::Next;
    }

    impl<P, H, T> KeepDropping<P, H, T> for False {
        type Output = (H, T);
    }
}
