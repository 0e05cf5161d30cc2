//! Runtime class hierarchies over trait objects.
//!
//! Rust has no class inheritance, so a hierarchy is declared rather than inherited: the
//! [`class!`](crate::class) macro records, for each concrete type, the chain of ancestors it
//! stands in for. That chain is available dynamically through [`Class::lineage`], and statically
//! through [`Extends`].

use std::any::{type_name, Any, TypeId};
use std::fmt;

/// A type whose place in a class hierarchy is known at runtime.
///
/// This trait is object-safe: make it a supertrait of a hierarchy's base trait, and every
/// `&dyn Base` can report the lineage of the concrete value behind it.
///
/// Implement it with the [`class!`](crate::class) macro rather than by hand.
pub trait Class: Any {
    /// The dynamic class of `self`, followed by each of its ancestors, nearest first.
    fn lineage(&self) -> Lineage;
}

/// A compile-time witness that `Self` is-a `Ancestor`.
///
/// Every declared class extends itself and each ancestor named in its [`class!`](crate::class)
/// declaration, including the base trait object (such as `dyn Animal`) at the root.
pub trait Extends<Ancestor: ?Sized>: Class {}

/// The ordered chain of classes an object belongs to, starting with its own.
///
/// ```
/// use class_mapper::Lineage;
///
/// trait Shape {}
/// struct Square;
///
/// let lineage = Lineage::of::<Square>().then::<dyn Shape>();
/// assert!(lineage.contains::<Square>());
/// assert!(lineage.contains::<dyn Shape>());
/// assert!(!lineage.contains::<u8>());
/// assert_eq!(lineage.depth(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Lineage {
    classes: Vec<(TypeId, &'static str)>,
}

impl Lineage {
    /// The lineage consisting of `C` alone.
    pub fn of<C: ?Sized + 'static>() -> Self {
        Lineage {
            classes: vec![(TypeId::of::<C>(), type_name::<C>())],
        }
    }

    /// Extend this lineage with the next, more distant, ancestor `A`.
    #[must_use]
    pub fn then<A: ?Sized + 'static>(mut self) -> Self {
        self.classes.push((TypeId::of::<A>(), type_name::<A>()));
        self
    }

    /// Whether `C` occurs anywhere in this lineage.
    pub fn contains<C: ?Sized + 'static>(&self) -> bool {
        let id = TypeId::of::<C>();
        self.classes.iter().any(|(class, _)| *class == id)
    }

    /// The name of the most derived class in this lineage.
    pub fn class_name(&self) -> &'static str {
        self.classes[0].1
    }

    /// The names of every class in this lineage, most derived first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classes.iter().map(|(_, name)| *name)
    }

    /// The number of classes in this lineage, counting the class itself.
    pub fn depth(&self) -> usize {
        self.classes.len()
    }
}

impl fmt::Debug for Lineage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Declare a class: its ancestors, most derived first, ending with the base trait object.
///
/// This implements [`Class`] for the type, and [`Extends`] for the type itself and each listed
/// ancestor. The type must still implement the base trait itself, and the declaration is checked
/// against it: the class must coerce to the base trait object, and each ancestor in between must
/// already be declared as extending that base.
///
/// ```
/// use class_mapper::{class, Class, Extends};
///
/// trait Animal: Class {}
///
/// struct Horse;
/// struct RaceHorse;
///
/// impl Animal for Horse {}
/// impl Animal for RaceHorse {}
///
/// class!(Horse: dyn Animal);
/// class!(RaceHorse: Horse, dyn Animal);
///
/// fn is_horse<A: Extends<Horse>>(_: &A) {}
/// is_horse(&RaceHorse);
///
/// let animal: &dyn Animal = &RaceHorse;
/// assert!(animal.lineage().contains::<Horse>());
/// ```
///
/// Listing an ancestor is what makes a type extend it, so a class outside the chain is rejected
/// wherever an [`Extends`] bound asks for it:
///
/// ```compile_fail
/// # use class_mapper::{class, Class, Extends};
/// # trait Animal: Class {}
/// # struct Horse;
/// # struct Cat;
/// # impl Animal for Horse {}
/// # impl Animal for Cat {}
/// # class!(Horse: dyn Animal);
/// # class!(Cat: dyn Animal);
/// fn is_horse<A: Extends<Horse>>(_: &A) {}
/// is_horse(&Cat);
/// ```
///
/// The last ancestor must be a trait the class actually implements:
///
/// ```compile_fail
/// # use class_mapper::{class, Class};
/// trait Animal: Class {}
/// trait Mineral: Class {}
///
/// struct Quartz;
/// impl Mineral for Quartz {}
///
/// class!(Quartz: dyn Animal);
/// ```
///
/// And every ancestor in between must be a class declared under that same base:
///
/// ```compile_fail
/// # use class_mapper::{class, Class};
/// trait Animal: Class {}
/// trait Mineral: Class {}
///
/// struct Quartz;
/// struct Pebble;
/// impl Mineral for Quartz {}
/// impl Animal for Pebble {}
///
/// class!(Quartz: dyn Mineral);
/// class!(Pebble: Quartz, dyn Animal);
/// ```
#[macro_export]
macro_rules! class {
    (@split [$class:ty] [$($parent:ty,)*] $next:ty, $($rest:tt)+) => {
        $crate::class!(@split [$class] [$($parent,)* $next,] $($rest)+);
    };
    (@split [$class:ty] [$($parent:ty,)*] $base:ty $(,)?) => {
        impl $crate::Class for $class {
            fn lineage(&self) -> $crate::Lineage {
                $crate::Lineage::of::<$class>()
                    $(.then::<$parent>())*
                    .then::<$base>()
            }
        }

        impl $crate::Extends<$class> for $class {}
        $(impl $crate::Extends<$parent> for $class {})*
        impl $crate::Extends<$base> for $class {}

        #[allow(dead_code)]
        const _: () = {
            // The class implements the base trait...
            fn upcast(class: &$class) -> &$base {
                class
            }

            // ...and every ancestor in between is a declared class of that base.
            fn ancestors_extend_base() {
                fn extends<C: ?Sized + $crate::Extends<B>, B: ?Sized>() {}
                $(extends::<$parent, $base>();)*
            }
        };
    };
    ($class:ty : $($ancestors:tt)+) => {
        $crate::class!(@split [$class] [] $($ancestors)+);
    };
}
