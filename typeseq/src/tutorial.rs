/*! A short tour of type-level sequences (nothing is exported from this module).

# Writing sequences down

The easiest way to write a finite sequence is as a flat tuple, converted with [`FromTuple`]. The
easiest way to look at one is to convert it back with [`ToTuple`]:

```
use typeseq::prelude::*;
use static_assertions::assert_type_eq_all;

type Numbers = FromTuple<(u8, u16, u32)>;

assert_type_eq_all!(Numbers, (u8, (u16, (u32, ()))));
assert_type_eq_all!(ToTuple<Numbers>, (u8, u16, u32));
```

(Here and elsewhere in this tutorial, we use the
[`assert_type_eq_all!`](static_assertions::assert_type_eq_all) macro from the
[`static_assertions`] crate to assert that Rust sees these types as equal. A failing assertion is a
compile error.)

# Infinite sequences

Sequences are lazy. [`Repeat<X>`](crate::Repeat) is an infinite sequence of `X`, and it is a
perfectly good type so long as nobody asks for all of it:

```
# use typeseq::prelude::*;
# use static_assertions::assert_type_eq_all;
use typeseq::unary::UnaryOf;

assert_type_eq_all!(ToTuple<Take<UnaryOf<3>, Repeat<char>>>, (char, char, char));
```

Asking for all of it is a compile-time infinite loop, which rustc reports as an overflow:

```compile_fail
# use typeseq::prelude::*;
let _: ToTuple<Repeat<char>> = ();
```

# Type-level functions

Combinators such as [`Map`](crate::Map) and [`Iterate`](crate::Iterate) are parameterized by a
*type-level function*: a marker type which implements [`Func`](crate::func::Func) for each
argument it accepts.

```
# use typeseq::prelude::*;
# use static_assertions::assert_type_eq_all;
# use typeseq::unary::UnaryOf;
struct Starred;

impl<X> Func<X> for Starred {
    type Output = *const X;
}

assert_type_eq_all!(
    ToTuple<Take<UnaryOf<4>, Iterate<Starred, i32>>>,
    (i32, *const i32, *const *const i32, *const *const *const i32),
);
```

Predicates answer with a [type-level boolean](crate::boolean), and binary functions implement
[`Func2`](crate::func::Func2). Anything you can compute with traits can go in the body of a
function. Here, every type gets a size as a [unary number](crate::unary), and comparing sizes
with [`Cmp`](crate::unary::Cmp) picks the larger of two types:

```
# use typeseq::prelude::*;
# use static_assertions::assert_type_eq_all;
use typeseq::unary::{AtMost, Cmp, Compare, Unary, UnaryOf};

trait ByteSize {
    type Size: Unary;
}

impl ByteSize for u8 { type Size = UnaryOf<1>; }
impl ByteSize for u16 { type Size = UnaryOf<2>; }
impl ByteSize for u32 { type Size = UnaryOf<4>; }
impl ByteSize for u64 { type Size = UnaryOf<8>; }

/// Does the type fit in four bytes?
struct Fits;

impl<X: ByteSize> Func<X> for Fits
where
    X::Size: Compare<UnaryOf<4>>,
{
    type Output = AtMost<X::Size, UnaryOf<4>>;
}

/// The larger of two types, preferring the left on a tie.
struct MaxBySize;

impl<L: ByteSize, R: ByteSize> Func2<L, R> for MaxBySize
where
    L::Size: Compare<R::Size>,
{
    type Output = Cmp<L::Size, R::Size, R, L, L>;
}

type Mixed = FromTuple<(u16, u64, u8, u32)>;

assert_type_eq_all!(ToTuple<Filter<Fits, Mixed>>, (u16, u8, u32));
assert_type_eq_all!(ToTuple<Scanl<MaxBySize, u8, Mixed>>, (u8, u16, u64, u64, u64));
assert_type_eq_all!(Foldl<MaxBySize, u8, Mixed>, u64);
```

# Sequences of sequences

[`Tails`](crate::Tails), [`Inits`](crate::Inits) and [`GroupBy`](crate::GroupBy) produce sequences
whose elements are themselves sequences. Map [`IntoTuple`](crate::IntoTuple) over them to read
them back as tuples of tuples:

```
# use typeseq::prelude::*;
# use static_assertions::assert_type_eq_all;
assert_type_eq_all!(
    ToTuple<Map<IntoTuple, Inits<FromTuple<(u8, u16)>>>>,
    ((), (u8,), (u8, u16)),
);
```
*/

#[allow(unused_imports)] // For documentation linking
use crate::prelude::*;
