use super::*;

/// Split `L` into its maximal runs of adjacent elements, where each element of a run is related
/// by `Rel` to the first element of that run.
///
/// `Rel` is a binary [`Func2`] answering [`True`](crate::boolean::True) or
/// [`False`](crate::boolean::False), and is always asked as `Rel(first, other)`. Each group is a
/// non-empty sequence. Concatenating the groups gives back `L`, and grouping the empty sequence
/// gives the empty sequence of groups.
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::boolean::{True, False};
/// use static_assertions::assert_type_eq_all;
///
/// /// Relates types of the same signedness.
/// struct SameSign;
///
/// impl Func2<u8, u8> for SameSign { type Output = True; }
/// impl Func2<u8, u16> for SameSign { type Output = True; }
/// impl Func2<u8, i8> for SameSign { type Output = False; }
/// impl Func2<i8, u8> for SameSign { type Output = False; }
/// impl Func2<i8, i8> for SameSign { type Output = True; }
///
/// type Mixed = FromTuple<(u8, u16, i8, i8, u8)>;
///
/// assert_type_eq_all!(
///     ToTuple<Map<IntoTuple, GroupBy<SameSign, Mixed>>>,
///     ((u8, u16), (i8, i8), (u8,)),
/// );
/// assert_type_eq_all!(ToTuple<Flatten<GroupBy<SameSign, Mixed>>>, ToTuple<Mixed>);
/// assert_type_eq_all!(ToTuple<GroupBy<SameSign, ()>>, ());
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct GroupBy<Rel, L>(PhantomData<fn() -> (Rel, L)>);

impl<Rel, L> Seq for GroupBy<Rel, L>
where
    L: Seq,
    L::Next: step::GroupNext<Rel>,
{
    type Next = <L::Next as step::GroupNext<Rel>>::Output;
}

mod step {
    use super::*;

    pub trait GroupNext<Rel> {
        type Output;
    }

    impl<Rel> GroupNext<Rel> for () {
        type Output = ();
    }

    impl<Rel, H, T> GroupNext<Rel> for (H, T) {
        type Output = (
            (H, TakeWhile<Bind<Rel, H>, T>),
            GroupBy<Rel, DropWhile<Bind<Rel, H>, T>>,
        );
    }
}
