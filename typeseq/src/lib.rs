/*!
Lazy, possibly-infinite **type-level sequences**, and the functional combinators to go with them.

A type-level sequence is a list of *types*, computed entirely by the trait solver: nothing here
exists at runtime, and every "test" of a sequence is a compile-time assertion. Sequences are
evaluated one node at a time through the [`Seq`] trait, which means a sequence may be infinite
([`Repeat`], [`Iterate`], [`Cycle`]) so long as it is only ever consumed boundedly ([`Take`],
[`Zip2`] against something finite, [`Get`], ...).

```
use typeseq::prelude::*;
use typeseq::unary::UnaryOf;
use static_assertions::assert_type_eq_all;

struct Starred;

impl<X> Func<X> for Starred {
    type Output = *const X;
}

assert_type_eq_all!(
    ToTuple<Take<UnaryOf<3>, Iterate<Starred, i32>>>,
    (i32, *const i32, *const *const i32),
);
```

## Quick reference

Sequences are written and read as flat tuples through [`FromTuple`] and [`ToTuple`]. Internally
they are inductive lists `(A, (B, (C, ())))` (see the [`tuple`] module), and every combinator is
a zero-sized marker type whose [`Seq::Next`] is only computed on demand.

| Combinator | Meaning |
| :--------- | :------ |
| [`Take<N, L>`](Take), [`Drop<N, L>`](Drop) | first `N` elements, all but the first `N` |
| [`Replicate<N, X>`](Replicate), [`Repeat<X>`](Repeat) | `N` copies of `X`, infinitely many |
| [`Iterate<F, X>`](Iterate) | `X, F(X), F(F(X)), ...` |
| [`Map<F, L>`](Map), [`Filter<P, L>`](Filter) | transform each, keep those satisfying `P` |
| [`TakeWhile<P, L>`](TakeWhile), [`DropWhile<P, L>`](DropWhile) | split at the first failure of `P` |
| [`Get<L, I>`](Get) | element `I`, or [`NotFound`] |
| [`Cycle<L>`](Cycle) | `L` repeated forever |
| [`Concat<A, B>`](Concat), [`Append<L, X>`](Append), [`Flatten<Ls>`](Flatten) | concatenation |
| [`Tails<L>`](Tails), [`Inits<L>`](Inits) | all suffixes, all prefixes |
| [`Scanl<Op, Seed, L>`](Scanl), [`Foldl<Op, Seed, L>`](Foldl) | running and final left folds |
| [`Zip2<A, B>`](Zip2), [`Zip<(A, B, ...)>`](Zip) | element-wise tuples, truncated to the shortest |
| [`GroupBy<Rel, L>`](GroupBy) | maximal runs related to their first element |
| [`Any<P, L>`](Any), [`All<P, L>`](All) | quantifiers |
| [`Length<L>`](Length) | length as a [unary](unary) number |

Functions, predicates and relations passed to combinators are marker types implementing
[`Func`](func::Func) or [`Func2`](func::Func2); predicates answer with a [type-level
boolean](boolean). Counts and indices are [unary numbers](unary), most easily written as
[`UnaryOf<N>`](unary::UnaryOf).

For a longer walk through the crate, see the [`tutorial`].
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod boolean;
pub mod func;
pub mod tuple;
pub mod tutorial;
pub mod unary;

mod combinators;
mod seq;

pub use combinators::*;
pub use seq::{Collect, FromTuple, HasLength, IntoTuple, Length, Seq, ToTuple};

/// The prelude module for quickly getting started with type-level sequences.
///
/// This module is designed to be imported as `use typeseq::prelude::*;`, which brings into scope
/// every combinator, the [`Seq`] trait, tuple conversion, and the vocabulary of type-level
/// functions.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::combinators::*;
    #[doc(no_inline)]
    pub use crate::func::{Apply, Apply2, Bind, Compose, Const, Flip, Func, Func2, Id};
    #[doc(no_inline)]
    pub use crate::seq::{Collect, FromTuple, HasLength, IntoTuple, Length, Seq, ToTuple};
    #[doc(no_inline)]
    pub use crate::tuple::{List, Tuple};
}
