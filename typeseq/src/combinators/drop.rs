use super::*;

/// `L` without its first `N` elements; empty if `L` has `N` or fewer.
///
/// The dropped prefix is walked eagerly once the result is demanded, but nothing after it is.
///
/// # Examples
///
/// ```
/// use typeseq::prelude::*;
/// use typeseq::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// type Four = FromTuple<(f32, i32, f32, i32)>;
///
/// assert_type_eq_all!(ToTuple<Drop<UnaryOf<3>, Four>>, (i32,));
/// assert_type_eq_all!(ToTuple<Drop<UnaryOf<0>, Four>>, (f32, i32, f32, i32));
/// assert_type_eq_all!(ToTuple<Drop<UnaryOf<10>, Four>>, ());
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Drop<N, L>(PhantomData<fn() -> (N, L)>);

impl<L: Seq> Seq for Drop<Z, L> {
    type Next = L::Next;
}

impl<N, L> Seq for Drop<S<N>, L>
where
    L: Seq,
    L::Next: step::DropNext<N>,
{
    type Next = <L::Next as step::DropNext<N>>::Output;
}

mod step {
    use super::*;

    pub trait DropNext<N> {
        type Output;
    }

    impl<N> DropNext<N> for () {
        type Output = ();
    }

    impl<N, H, T> DropNext<N> for (H, T)
    where
        Drop<N, T>: Seq,
    {
        type Output = <Drop<N, T> as Seq>::Next;
    }
}
