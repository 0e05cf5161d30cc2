/*!
Map the dynamic class of a trait object to a value, by searching a small, statically checked
table.

A hierarchy is a base trait (which must have [`Class`] as a supertrait) together with concrete
types declared with [`class!`], each naming its chain of ancestors. A [`ClassMapper`] over that
hierarchy holds a table of [`Mapping`]s from classes to values, and given any `&dyn Base`,
answers with the value of the first entry whose class the object is-a:

```
use class_mapper::prelude::*;

trait Animal: Class {}

struct Cat;
struct Cow;
struct Dog;
struct StBernard;

impl Animal for Cat {}
impl Animal for Cow {}
impl Animal for Dog {}
impl Animal for StBernard {}

class!(Cat: dyn Animal);
class!(Cow: dyn Animal);
class!(Dog: dyn Animal);
class!(StBernard: Dog, dyn Animal);

let sounds = ClassMapper::<dyn Animal, &str, _>::new((
    Mapping::<Cat, _>::to("meow"),
    Mapping::<Dog, _>::to("woof"),
    Mapping::<StBernard, _>::to("mooo"),
));

let some_animal: Box<dyn Animal> = Box::new(Dog);
assert_eq!(sounds.map(&*some_animal), Some("woof"));
assert_eq!(sounds.map(&Cow), None);
```

Entries are tried in the order they are written, and the first entry that matches wins: above, a
`StBernard` says `"woof"`, because it is a `Dog` and the entry for `Dog` comes first. Put more
specific classes earlier to give them their own values.

Every entry is checked when the mapper is built: a class outside the base's hierarchy, or a value
that can't be converted into the target type, is a compile error rather than a lookup that never
succeeds.
*/

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

mod class;
mod error;
mod mapper;

pub use class::{Class, Extends, Lineage};
pub use error::Unmapped;
pub use mapper::{ClassMapper, Mapping, MappingTable};

/// The prelude module for quickly getting started with class mappers.
///
/// This module is designed to be imported as `use class_mapper::prelude::*;`, which brings into
/// scope everything needed to declare a hierarchy and map over it.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{class, Class, ClassMapper, Extends, Mapping};
}
