use class_mapper::prelude::*;
use colored::*;
use std::{process, str::FromStr};
use structopt::StructOpt;

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

/// Print the sound an animal makes, if we know it.
#[derive(Debug, Clone, StructOpt)]
struct Options {
    /// The animal to ask: cat, cow, dog, st-bernard, horse, or race-horse
    #[structopt(short, long, default_value = "dog")]
    animal: Species,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Species {
    Cat,
    Cow,
    Dog,
    StBernard,
    Horse,
    RaceHorse,
}

impl FromStr for Species {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "cat" => Species::Cat,
            "cow" => Species::Cow,
            "dog" => Species::Dog,
            "st-bernard" => Species::StBernard,
            "horse" => Species::Horse,
            "race-horse" => Species::RaceHorse,
            _ => return Err(format!("unknown animal `{}`", name)),
        })
    }
}

impl Species {
    fn instance(self) -> Box<dyn Animal> {
        match self {
            Species::Cat => Box::new(Cat),
            Species::Cow => Box::new(Cow),
            Species::Dog => Box::new(Dog),
            Species::StBernard => Box::new(StBernard),
            Species::Horse => Box::new(Horse),
            Species::RaceHorse => Box::new(RaceHorse),
        }
    }
}

fn main() {
    let options = Options::from_args();
    let sounds = ClassMapper::<dyn Animal, &str, _>::new((
        Mapping::<Cat, _>::to("meow"),
        Mapping::<Dog, _>::to("woof"),
        Mapping::<StBernard, _>::to("mooo"),
    ));

    match sounds.try_map(&*options.animal.instance()) {
        Ok(sound) => println!("{}", sound),
        Err(e) => {
            eprintln!("{}", format!("no sound registered: {}", e).red());
            process::exit(1);
        }
    }
}
