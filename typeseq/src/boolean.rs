//! Type-level booleans, the results of predicates.

/// Type-level truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct True;

/// Type-level falsehood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct False;

/// A type-level boolean: either [`True`] or [`False`].
///
/// Branching on a boolean is done with [`If`]:
///
/// ```
/// use typeseq::boolean::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(If<True, u8, u16>, u8);
/// assert_type_eq_all!(If<Not<True>, u8, u16>, u16);
/// assert!(<And<True, Not<False>>>::VALUE);
/// ```
pub trait Bool: sealed::Bool + Sized + Sync + Send + 'static {
    /// The runtime value of this boolean.
    const VALUE: bool;

    /// The negation of this boolean.
    type Not: Bool;

    /// Select `Then` if this is [`True`], `Else` otherwise.
    type If<Then, Else>;

    /// Conjunction with another boolean.
    type And<B: Bool>: Bool;

    /// Disjunction with another boolean.
    type Or<B: Bool>: Bool;
}

impl Bool for True {
    const VALUE: bool = true;
    type Not = False;
    type If<Then, Else> = Then;
    type And<B: Bool> = B;
    type Or<B: Bool> = True;
}

impl Bool for False {
    const VALUE: bool = false;
    type Not = True;
    type If<Then, Else> = Else;
    type And<B: Bool> = False;
    type Or<B: Bool> = B;
}

/// `Then` if `C` is [`True`], `Else` if it is [`False`].
pub type If<C, Then, Else> = <C as Bool>::If<Then, Else>;

/// The negation of `B`.
pub type Not<B> = <B as Bool>::Not;

/// Conjunction.
pub type And<A, B> = <A as Bool>::And<B>;

/// Disjunction.
pub type Or<A, B> = <A as Bool>::Or<B>;

mod sealed {
    pub trait Bool: 'static {}
    impl Bool for super::True {}
    impl Bool for super::False {}
}
