use super::*;

/// Every prefix of `L`, shortest first: the empty sequence, then the first element alone, and so
/// on up to `L` itself.
///
/// This works on infinite sequences too, producing an infinite sequence of ever longer prefixes.
///
/// ```
/// use typeseq::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Map<IntoTuple, Inits<FromTuple<(i32, char, bool, f32)>>>>,
///     (
///         (),
///         (i32,),
///         (i32, char),
///         (i32, char, bool),
///         (i32, char, bool, f32),
///     ),
/// );
/// assert_type_eq_all!(ToTuple<Map<IntoTuple, Inits<()>>>, ((),));
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Inits<L>(PhantomData<fn() -> L>);

impl<L> Seq for Inits<L> {
    type Next = ((), Prefixes<Z, L>);
}

/// The prefixes of `L` strictly longer than `N`, shortest first.
///
/// This is the tail of [`Inits<L>`](Inits), which is `Prefixes<Z, L>` preceded by the empty
/// prefix.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Prefixes<N, L>(PhantomData<fn() -> (N, L)>);

impl<N, L> Seq for Prefixes<N, L>
where
    Drop<N, L>: Seq,
    <Drop<N, L> as Seq>::Next: step::PrefixesNext<N, L>,
{
    type Next = <<Drop<N, L> as Seq>::Next as step::PrefixesNext<N, L>>::Output;
}

mod step {
    use super::*;

    /// Implemented on what remains of `L` after its first `N` elements.
    pub trait PrefixesNext<N, L> {
        type Output;
    }

    impl<N, L> PrefixesNext<N, L> for () {
        type Output = ();
    }

    impl<N, L, H, T> PrefixesNext<N, L> for (H, T) {
        type Output = (Take<S<N>, L>, Prefixes<S<N>, L>);
    }
}
