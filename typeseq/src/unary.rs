//! Unary natural numbers: [`Z`] is zero and [`S<N>`](S) is one more than `N`.
//!
//! Counts and indices given to sequence combinators such as [`Take`](crate::Take) and
//! [`Get`](crate::Get) are unary because the trait solver can only take a number apart one
//! constructor at a time. Nobody wants to write `S<S<S<Z>>>` by hand, so [`UnaryOf`] spells a
//! number out from an ordinary `usize` constant:
//!
//! ```
//! use typeseq::unary::*;
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(UnaryOf<3>, S<S<S<Z>>>);
//! assert_eq!(<UnaryOf<3>>::VALUE, 3);
//! ```
//!
//! Comparison and addition are also available, which is enough to give types a size and write
//! predicates and orderings over those sizes.

use crate::boolean::{False, True};

/// Zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// One more than `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// The unary number equal to the constant `N`, for `N` up to 64.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// A unary number, [`Z`] or [`S`] of a unary number.
///
/// ```
/// use typeseq::unary::*;
///
/// assert_eq!(<Z>::VALUE, 0);
/// assert_eq!(<S<S<Z>>>::VALUE, 2);
/// assert_eq!(<UnaryOf<64>>::VALUE, 64);
/// ```
pub trait Unary: sealed::Unary + Sized + Send + Sync + 'static {
    /// This number as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = 1 + N::VALUE;
}

/// The left number was smaller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Less;

/// Both numbers were the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Equal;

/// The left number was larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Greater;

/// The outcome of a [`Compare`]: [`Less`], [`Equal`] or [`Greater`].
pub trait Ordering: sealed::Ordering {
    /// Select the argument matching this outcome.
    type Pick<OnLess, OnEqual, OnGreater>;
}

impl Ordering for Less {
    type Pick<OnLess, OnEqual, OnGreater> = OnLess;
}

impl Ordering for Equal {
    type Pick<OnLess, OnEqual, OnGreater> = OnEqual;
}

impl Ordering for Greater {
    type Pick<OnLess, OnEqual, OnGreater> = OnGreater;
}

/// Compare this number with `M`.
///
/// Most uses go through the [`Cmp`] alias, or one of the boolean shorthands built on it.
pub trait Compare<M: Unary>: Unary {
    /// How `Self` compares to `M`.
    type Ordering: Ordering;
}

impl Compare<Z> for Z {
    type Ordering = Equal;
}

impl<M: Unary> Compare<S<M>> for Z {
    type Ordering = Less;
}

impl<N: Unary> Compare<Z> for S<N> {
    type Ordering = Greater;
}

impl<N: Compare<M>, M: Unary> Compare<S<M>> for S<N> {
    type Ordering = N::Ordering;
}

/// `OnLess`, `OnEqual` or `OnGreater`, according to how `N` compares to `M`.
///
/// ```
/// use typeseq::unary::{Cmp, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Cmp<UnaryOf<0>, UnaryOf<1>, u8, u16, u32>, u8);
/// assert_type_eq_all!(Cmp<UnaryOf<4>, UnaryOf<4>, u8, u16, u32>, u16);
/// assert_type_eq_all!(Cmp<UnaryOf<9>, UnaryOf<2>, u8, u16, u32>, u32);
/// ```
pub type Cmp<N, M, OnLess, OnEqual, OnGreater> =
    <<N as Compare<M>>::Ordering as Ordering>::Pick<OnLess, OnEqual, OnGreater>;

/// [`True`] if `N` is at most `M`.
pub type AtMost<N, M> = Cmp<N, M, True, True, False>;

/// [`True`] if `N` and `M` are the same number.
///
/// ```
/// use typeseq::boolean::{False, True};
/// use typeseq::unary::{AtMost, Same, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Same<UnaryOf<3>, UnaryOf<3>>, True);
/// assert_type_eq_all!(Same<UnaryOf<3>, UnaryOf<4>>, False);
/// assert_type_eq_all!(AtMost<UnaryOf<3>, UnaryOf<4>>, True);
/// ```
pub type Same<N, M> = Cmp<N, M, False, True, False>;

/// Add `M` to this number.
pub trait Add<M: Unary>: Unary {
    /// `Self + M`.
    type Sum: Unary;
}

impl<M: Unary> Add<M> for Z {
    type Sum = M;
}

impl<N: Add<M>, M: Unary> Add<M> for S<N> {
    type Sum = S<N::Sum>;
}

/// `N + M`.
///
/// ```
/// use typeseq::unary::{Sum, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Sum<UnaryOf<0>, UnaryOf<6>>, UnaryOf<6>);
/// assert_type_eq_all!(Sum<UnaryOf<5>, UnaryOf<7>>, UnaryOf<12>);
/// ```
pub type Sum<N, M> = <N as Add<M>>::Sum;

/// A `usize` constant lifted to a type, so that it can be converted to [`Unary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Number<const N: usize>;

/// Implemented by every [`Number`].
pub trait Constant: sealed::Constant {}

impl<const N: usize> Constant for Number<N> {}

/// The unary form of a [`Number`].
pub trait ToUnary: Constant {
    /// The equivalent unary number.
    type AsUnary: ToConstant<AsConstant = Self>;
}

/// The [`Number`] form of a unary number.
pub trait ToConstant: Unary {
    /// The equivalent constant.
    type AsConstant: ToUnary<AsUnary = Self>;
}

typeseq_macro::generate_unary_conversion_impls!(64);

mod sealed {
    pub trait Unary {}
    impl Unary for super::Z {}
    impl<N: Unary> Unary for super::S<N> {}

    pub trait Ordering {}
    impl Ordering for super::Less {}
    impl Ordering for super::Equal {}
    impl Ordering for super::Greater {}

    pub trait Constant {}
    impl<const N: usize> Constant for super::Number<N> {}
}
