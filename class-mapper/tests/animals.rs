use class_mapper::prelude::*;
use class_mapper::Unmapped;
use static_assertions::{assert_impl_all, assert_not_impl_any};

trait Animal: Class {}

struct Cat;
struct Cow;
struct Dog;
struct StBernard;
struct Horse;
struct RaceHorse;

impl Animal for Cat {}
impl Animal for Cow {}
impl Animal for Dog {}
impl Animal for StBernard {}
impl Animal for Horse {}
impl Animal for RaceHorse {}

class!(Cat: dyn Animal);
class!(Cow: dyn Animal);
class!(Dog: dyn Animal);
class!(StBernard: Dog, dyn Animal);
class!(Horse: dyn Animal);
class!(RaceHorse: Horse, dyn Animal);

assert_impl_all!(Dog: Extends<Dog>, Extends<dyn Animal>);
assert_impl_all!(StBernard: Extends<StBernard>, Extends<Dog>, Extends<dyn Animal>);
assert_not_impl_any!(Dog: Extends<StBernard>, Extends<Cat>, Extends<Horse>);
assert_not_impl_any!(RaceHorse: Extends<Dog>);

// Every declared class implements the base it claims.
assert_impl_all!(Cat: Animal);
assert_impl_all!(StBernard: Animal, Extends<Dog>);
assert_impl_all!(RaceHorse: Animal, Extends<Horse>);

fn sounds() -> ClassMapper<
    dyn Animal,
    String,
    (
        Mapping<Cat, &'static str>,
        (
            Mapping<Dog, &'static str>,
            (Mapping<StBernard, &'static str>, ()),
        ),
    ),
> {
    ClassMapper::new((
        Mapping::<Cat, _>::to("meow"),
        Mapping::<Dog, _>::to("woof"),
        Mapping::<StBernard, _>::to("mooo"),
    ))
}

#[test]
fn dog_says_woof() {
    let some_animal: Box<dyn Animal> = Box::new(Dog);
    assert_eq!(sounds().map(&*some_animal).as_deref(), Some("woof"));
    assert_eq!(sounds().map(&Cat).as_deref(), Some("meow"));
}

#[test]
fn earlier_ancestor_shadows_later_descendant() {
    assert_eq!(sounds().map(&StBernard).as_deref(), Some("woof"));
}

#[test]
fn descendant_listed_first_gets_its_own_value() {
    let mapper = ClassMapper::<dyn Animal, &str, _>::new((
        Mapping::<StBernard, _>::to("mooo"),
        Mapping::<Dog, _>::to("woof"),
    ));
    assert_eq!(mapper.map(&StBernard), Some("mooo"));
    assert_eq!(mapper.map(&Dog), Some("woof"));
}

#[test]
fn descendants_inherit_mappings() {
    let mapper = ClassMapper::<dyn Animal, &str, _>::new((Mapping::<Horse, _>::to("neigh"),));
    assert_eq!(mapper.map(&RaceHorse), Some("neigh"));
    assert_eq!(mapper.map(&Horse), Some("neigh"));
    assert_eq!(mapper.map(&Dog), None);
}

#[test]
fn unmapped_animals() {
    let mapper = sounds();
    assert_eq!(mapper.map(&Cow), None);
    assert_eq!(mapper.map(&RaceHorse), None);

    let error: Unmapped = mapper.try_map(&Cow).unwrap_err();
    assert!(error.class_name().ends_with("Cow"));
    assert_eq!(error.tried(), mapper.classes().as_slice());
    assert!(error.lineage().contains::<dyn Animal>());

    let message = error.to_string();
    assert!(message.contains("Cow"), "{}", message);
    assert!(message.contains("StBernard"), "{}", message);
}

#[test]
fn empty_table_maps_nothing() {
    let mapper = ClassMapper::<dyn Animal, String, ()>::new(());
    assert!(mapper.is_empty());
    for animal in [&Cat as &dyn Animal, &Cow, &Dog, &StBernard, &Horse, &RaceHorse] {
        assert_eq!(mapper.map(animal), None);
        let error = mapper.try_map(animal).unwrap_err();
        assert!(error.tried().is_empty());
        assert!(error.to_string().contains("empty"));
    }
}

#[test]
fn lineage_runs_from_class_to_base() {
    let animal: &dyn Animal = &RaceHorse;
    let lineage = animal.lineage();
    assert_eq!(lineage.depth(), 3);
    assert!(lineage.contains::<RaceHorse>());
    assert!(lineage.contains::<Horse>());
    assert!(lineage.contains::<dyn Animal>());
    assert!(!lineage.contains::<Dog>());

    let names: Vec<_> = lineage.names().collect();
    assert!(names[0].ends_with("RaceHorse"));
    assert!(names[1].ends_with("Horse"));
    assert!(names[2].contains("Animal"));
}

#[test]
fn table_is_reported_in_order() {
    let mapper = sounds();
    assert_eq!(mapper.len(), 3);
    let classes = mapper.classes();
    assert!(classes[0].ends_with("Cat"));
    assert!(classes[1].ends_with("Dog"));
    assert!(classes[2].ends_with("StBernard"));
}

#[test]
fn declared_parents_continue_the_lineage() {
    let parent_of = |child: &dyn Animal, parent: &dyn Animal| {
        let rest: Vec<_> = child.lineage().names().skip(1).collect();
        let expected: Vec<_> = parent.lineage().names().collect();
        assert_eq!(rest, expected);
    };
    parent_of(&StBernard, &Dog);
    parent_of(&RaceHorse, &Horse);

    for animal in [&Cat as &dyn Animal, &Cow, &Dog, &StBernard, &Horse, &RaceHorse] {
        let lineage = animal.lineage();
        assert!(lineage.names().last().unwrap().contains("Animal"));
    }
}
