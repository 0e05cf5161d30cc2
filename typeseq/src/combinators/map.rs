use super::*;

/// Apply `F` to every element of `L`.
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// struct Optional;
///
/// impl<X> Func<X> for Optional {
///     type Output = Option<X>;
/// }
///
/// assert_type_eq_all!(
///     ToTuple<Map<Optional, FromTuple<(u8, char)>>>,
///     (Option<u8>, Option<char>),
/// );
/// assert_type_eq_all!(ToTuple<Map<Optional, ()>>, ());
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Map<F, L>(PhantomData<fn() -> (F, L)>);

impl<F, L> Seq for Map<F, L>
where
    L: Seq,
    L::Next: step::MapNext<F>,
{
    type Next = <L::Next as step::MapNext<F>>::Output;
}

mod step {
    use super::*;

    pub trait MapNext<F> {
        type Output;
    }

    impl<F> MapNext<F> for () {
        type Output = ();
    }

    impl<F, H, T> MapNext<F> for (H, T)
    where
        F: Func<H>,
    {
        type Output = (Apply<F, H>, Map<F, T>);
    }
}
