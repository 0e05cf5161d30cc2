//! The sequence combinators.
//!
//! Every combinator is a zero-sized marker type which implements [`Seq`] by computing its
//! [`Seq::Next`] from the `Next` of its inputs, one node at a time. Combinators therefore compose
//! freely, and a bounded consumer such as [`Take`] forces only as much of an infinite input as it
//! needs:
//!
//! ```
//! use typeseq::prelude::*;
//! use typeseq::unary::UnaryOf;
//! use static_assertions::assert_type_eq_all;
//!
//! struct Boxed;
//!
//! impl<X> Func<X> for Boxed {
//!     type Output = Box<X>;
//! }
//!
//! assert_type_eq_all!(
//!     ToTuple<Take<UnaryOf<3>, Map<Boxed, Iterate<Boxed, u8>>>>,
//!     (Box<u8>, Box<Box<u8>>, Box<Box<Box<u8>>>),
//! );
//! ```

use std::marker::PhantomData;

use crate::func::{Apply, Apply2, Bind, Func, Func2};
use crate::seq::Seq;
use crate::unary::{S, Z};

mod concat;
mod cycle;
mod drop;
mod filter;
mod fold;
mod get;
mod group_by;
mod inits;
mod iterate;
mod map;
mod repeat;
mod replicate;
mod scan;
mod tails;
mod take;
mod zip;

pub use concat::*;
pub use cycle::*;
pub use drop::*;
pub use filter::*;
pub use fold::*;
pub use get::*;
pub use group_by::*;
pub use inits::*;
pub use iterate::*;
pub use map::*;
pub use repeat::*;
pub use replicate::*;
pub use scan::*;
pub use tails::*;
pub use take::*;
pub use zip::*;
