//! The mapping table and the mapper which searches it.

use std::any::type_name;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

use typeseq::tuple::Tuple;
use typeseq::unary::Unary;
use typeseq::{HasLength, Length};

use crate::{Class, Extends, Lineage, Unmapped};

/// One entry of a [`ClassMapper`]'s table: objects of class `C`, or of any class extending it,
/// map to the value `V`.
///
/// ```
/// use class_mapper::Mapping;
///
/// struct Cat;
///
/// let meow = Mapping::<Cat, _>::to("meow");
/// assert_eq!(*meow.value(), "meow");
/// ```
#[derive(Derivative)]
#[derivative(
    Clone(bound = "V: Clone"),
    Copy(bound = "V: Copy"),
    PartialEq(bound = "V: PartialEq"),
    Eq(bound = "V: Eq"),
    Hash(bound = "V: std::hash::Hash")
)]
pub struct Mapping<C, V> {
    value: V,
    class: PhantomData<fn() -> C>,
}

impl<C, V> Mapping<C, V> {
    /// Map the class `C` to `value`.
    pub fn to(value: V) -> Self {
        Mapping {
            value,
            class: PhantomData,
        }
    }

    /// The value this entry maps to.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Unwrap this entry into its value.
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<C, V: Debug> Debug for Mapping<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("class", &type_name::<C>())
            .field("value", &self.value)
            .finish()
    }
}

/// An inductive list of [`Mapping`]s whose classes all extend `Base`, and whose values all
/// convert into `Target`.
///
/// This is implemented for `()` and for `(Mapping<C, V>, Rest)`, which are the lists
/// [`ClassMapper::new`] builds out of flat tuples of mappings. It cannot be implemented outside
/// this crate.
pub trait MappingTable<Base: ?Sized, Target>: sealed::MappingTable {
    /// The value of the first entry whose class occurs in `lineage`.
    fn lookup(&self, lineage: &Lineage) -> Option<Target>;

    /// Push the name of every entry's class onto `names`, in table order.
    fn class_names(names: &mut Vec<&'static str>);
}

impl<Base: ?Sized, Target> MappingTable<Base, Target> for () {
    fn lookup(&self, _: &Lineage) -> Option<Target> {
        None
    }

    fn class_names(_: &mut Vec<&'static str>) {}
}

impl<Base, Target, C, V, Rest> MappingTable<Base, Target> for (Mapping<C, V>, Rest)
where
    Base: ?Sized,
    C: Extends<Base>,
    V: Clone + Into<Target>,
    Rest: MappingTable<Base, Target>,
{
    fn lookup(&self, lineage: &Lineage) -> Option<Target> {
        let (mapping, rest) = self;
        if lineage.contains::<C>() {
            Some(mapping.value.clone().into())
        } else {
            rest.lookup(lineage)
        }
    }

    fn class_names(names: &mut Vec<&'static str>) {
        names.push(type_name::<C>());
        Rest::class_names(names);
    }
}

/// Maps objects of the hierarchy rooted at `Base` to values of type `Target`, according to the
/// class each object dynamically belongs to.
///
/// The table is fixed when the mapper is built, and is checked at compile time: every entry's
/// class must [extend](Extends) `Base`, and every entry's value must convert [`Into`] `Target`.
/// Lookup scans the entries in the order they were given and answers with the first entry whose
/// class the object is-a. An entry for a class therefore also covers all of that class's
/// descendants, unless an earlier entry already covers them.
///
/// # Examples
///
/// ```
/// use class_mapper::prelude::*;
///
/// trait Animal: Class {}
///
/// struct Cat;
/// struct Dog;
/// struct StBernard;
///
/// impl Animal for Cat {}
/// impl Animal for Dog {}
/// impl Animal for StBernard {}
///
/// class!(Cat: dyn Animal);
/// class!(Dog: dyn Animal);
/// class!(StBernard: Dog, dyn Animal);
///
/// let mapper = ClassMapper::<dyn Animal, String, _>::new((
///     Mapping::<Cat, _>::to("meow"),
///     Mapping::<Dog, _>::to("woof"),
///     Mapping::<StBernard, _>::to("mooo"),
/// ));
///
/// assert_eq!(mapper.map(&Dog), Some("woof".to_string()));
/// // The entry for `Dog` comes first, and a `StBernard` is-a `Dog`:
/// assert_eq!(mapper.map(&StBernard), Some("woof".to_string()));
///
/// let cat: Box<dyn Animal> = Box::new(Cat);
/// assert_eq!(mapper.map(&*cat), Some("meow".to_string()));
/// ```
///
/// A class from outside the hierarchy can't be given an entry:
///
/// ```compile_fail
/// use class_mapper::prelude::*;
///
/// trait Animal: Class {}
/// trait Mineral: Class {}
///
/// struct Cat;
/// struct Quartz;
///
/// impl Animal for Cat {}
/// impl Mineral for Quartz {}
///
/// class!(Cat: dyn Animal);
/// class!(Quartz: dyn Mineral);
///
/// let mapper = ClassMapper::<dyn Animal, &str, _>::new((
///     Mapping::<Cat, _>::to("meow"),
///     Mapping::<Quartz, _>::to("clink"),
/// ));
/// ```
///
/// Nor can a value which doesn't convert into the target type:
///
/// ```compile_fail
/// use class_mapper::prelude::*;
///
/// trait Animal: Class {}
/// struct Cat;
/// impl Animal for Cat {}
/// class!(Cat: dyn Animal);
///
/// let mapper = ClassMapper::<dyn Animal, String, _>::new((Mapping::<Cat, _>::to(7_u8),));
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = "Table: Debug"),
    Clone(bound = "Table: Clone"),
    Copy(bound = "Table: Copy")
)]
pub struct ClassMapper<Base: ?Sized, Target, Table> {
    table: Table,
    #[derivative(Debug = "ignore")]
    mapping: PhantomData<fn(&Base) -> Target>,
}

impl<Base, Target, Table> ClassMapper<Base, Target, Table>
where
    Base: ?Sized + Class,
    Table: MappingTable<Base, Target> + HasLength,
{
    /// Build a mapper from a flat tuple of [`Mapping`]s, which are tried in order.
    pub fn new<T>(mappings: T) -> Self
    where
        T: Tuple<AsList = Table>,
    {
        ClassMapper {
            table: mappings.into_list(),
            mapping: PhantomData,
        }
    }

    /// The value of the first entry whose class `object` is-a, if there is one.
    pub fn map(&self, object: &Base) -> Option<Target> {
        self.table.lookup(&object.lineage())
    }

    /// Like [`map`](ClassMapper::map), but describing the object's class on failure.
    ///
    /// ```
    /// use class_mapper::prelude::*;
    ///
    /// trait Animal: Class {}
    /// struct Cow;
    /// impl Animal for Cow {}
    /// class!(Cow: dyn Animal);
    ///
    /// let mapper = ClassMapper::<dyn Animal, &str, _>::new(());
    /// let error = mapper.try_map(&Cow).unwrap_err();
    /// assert!(error.class_name().ends_with("Cow"));
    /// ```
    pub fn try_map(&self, object: &Base) -> Result<Target, Unmapped> {
        let lineage = object.lineage();
        self.table
            .lookup(&lineage)
            .ok_or_else(|| Unmapped::new(lineage, self.classes()))
    }

    /// The number of entries in the table.
    pub fn len(&self) -> usize {
        <Length<Table> as Unary>::VALUE
    }

    /// Whether the table has no entries, in which case nothing is ever mapped.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The names of the classes in the table, in the order they are tried.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(self.len());
        <Table as MappingTable<Base, Target>>::class_names(&mut names);
        names
    }
}

mod sealed {
    use super::Mapping;

    pub trait MappingTable {}
    impl MappingTable for () {}
    impl<C, V, Rest: MappingTable> MappingTable for (Mapping<C, V>, Rest) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class;

    trait Vehicle: Class {}

    struct Car;
    struct Truck;
    struct Tanker;
    struct Bicycle;

    impl Vehicle for Car {}
    impl Vehicle for Truck {}
    impl Vehicle for Tanker {}
    impl Vehicle for Bicycle {}

    class!(Car: dyn Vehicle);
    class!(Truck: dyn Vehicle);
    class!(Tanker: Truck, dyn Vehicle);
    class!(Bicycle: dyn Vehicle);

    #[test]
    fn first_match_wins() {
        let wheels = ClassMapper::<dyn Vehicle, u32, _>::new((
            Mapping::<Truck, _>::to(6_u8),
            Mapping::<Tanker, _>::to(18_u16),
            Mapping::<Car, _>::to(4_u32),
        ));
        assert_eq!(wheels.map(&Car), Some(4));
        assert_eq!(wheels.map(&Truck), Some(6));
        assert_eq!(wheels.map(&Tanker), Some(6));
        assert_eq!(wheels.map(&Bicycle), None);
    }

    #[test]
    fn specific_entries_first() {
        let wheels = ClassMapper::<dyn Vehicle, u32, _>::new((
            Mapping::<Tanker, _>::to(18_u32),
            Mapping::<Truck, _>::to(6_u32),
        ));
        assert_eq!(wheels.map(&Tanker), Some(18));
        assert_eq!(wheels.map(&Truck), Some(6));
    }

    #[test]
    fn table_introspection() {
        let empty = ClassMapper::<dyn Vehicle, u32, _>::new(());
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(empty.classes().is_empty());

        let wheels = ClassMapper::<dyn Vehicle, u32, _>::new((
            Mapping::<Car, _>::to(4_u32),
            Mapping::<Bicycle, _>::to(2_u32),
        ));
        assert!(!wheels.is_empty());
        assert_eq!(wheels.len(), 2);
        assert_eq!(wheels.classes(), vec![type_name::<Car>(), type_name::<Bicycle>()]);
    }

    #[test]
    fn mapping_debug_names_class() {
        let rendered = format!("{:?}", Mapping::<Car, _>::to(4));
        assert!(rendered.contains("Car"));
        assert!(rendered.contains('4'));
    }
}
