//! Type-level functions over the sizes of primitive types, shared by the integration tests.

#![allow(dead_code)]

use typeseq::func::{Func, Func2};
use typeseq::unary::{AtMost, Cmp, Compare, Same, Unary, UnaryOf};

/// The size in bytes of a primitive type, as a unary number.
pub trait ByteSize {
    type Size: Unary;
}

macro_rules! byte_sizes {
    ($($t:ty => $n:literal),* $(,)?) => {
        $(impl ByteSize for $t {
            type Size = UnaryOf<$n>;
        })*
    };
}

byte_sizes! {
    bool => 1, u8 => 1, i8 => 1,
    u16 => 2, i16 => 2,
    u32 => 4, i32 => 4, f32 => 4, char => 4,
    u64 => 8, i64 => 8, f64 => 8,
}

/// `*const X`.
pub struct Starred;

impl<X> Func<X> for Starred {
    type Output = *const X;
}

/// Whether a type is at most four bytes.
pub struct Fits;

impl<X: ByteSize> Func<X> for Fits
where
    X::Size: Compare<UnaryOf<4>>,
{
    type Output = AtMost<X::Size, UnaryOf<4>>;
}

/// The larger of two types, the left one on a tie.
pub struct MaxBySize;

impl<L: ByteSize, R: ByteSize> Func2<L, R> for MaxBySize
where
    L::Size: Compare<R::Size>,
{
    type Output = Cmp<L::Size, R::Size, R, L, L>;
}

/// Relates two types of the same size.
pub struct SameSize;

impl<L: ByteSize, R: ByteSize> Func2<L, R> for SameSize
where
    L::Size: Compare<R::Size>,
{
    type Output = Same<L::Size, R::Size>;
}

/// Whether a type is a single byte.
pub struct OneByte;

impl<X: ByteSize> Func<X> for OneByte
where
    X::Size: Compare<UnaryOf<1>>,
{
    type Output = Same<X::Size, UnaryOf<1>>;
}
