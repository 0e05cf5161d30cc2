//! Conversions back and forth between flat tuples like `(A, B, C)` and their corresponding
//! inductive lists like `(A, (B, (C, ())))`.
//!
//! Sequences are inductive: a [`Seq`](crate::Seq) unfolds to either `()` or a `(Head, Tail)` pair.
//! Flat tuples are much easier to read and write, so they are the external interface, and the
//! traits here convert between the two equivalent representations. Both directions work on types
//! (`AsList`, `AsTuple`) and on values (`into_list`, `into_tuple`), so a tuple of runtime values can
//! be walked recursively as well.
//!
//! At present, tuples up to size 64 are supported.

/// A flat tuple, which can be restructured into an inductive list holding the same elements.
///
/// # Examples
///
/// ```
/// use typeseq::tuple::Tuple;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(u8, u16, u32) as Tuple>::AsList, (u8, (u16, (u32, ()))));
/// assert_eq!((1, 'a').into_list(), (1, ('a', ())));
/// ```
pub trait Tuple: Sized {
    /// `(A, (B, (C, ())))` for the tuple `(A, B, C)`.
    type AsList: List<AsTuple = Self>;

    /// Restructure a tuple value into its inductive list.
    fn into_list(self) -> Self::AsList;
}

/// An inductive list, which can be flattened into a tuple holding the same elements.
///
/// # Examples
///
/// ```
/// use typeseq::tuple::List;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(bool, ()) as List>::AsTuple, (bool,));
/// assert_eq!((1, ('a', ())).into_tuple(), (1, 'a'));
/// ```
pub trait List: Sized {
    /// `(A, B, C)` for the list `(A, (B, (C, ())))`.
    type AsTuple: Tuple<AsList = Self>;

    /// Restructure an inductive list value into its flat tuple.
    fn into_tuple(self) -> Self::AsTuple;
}

typeseq_macro::impl_tuples!(64);
