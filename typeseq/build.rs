use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

/// Element types used to build the tuples under test; all distinct, so that any reordering or
/// duplication shows up as a type mismatch.
const ELEMENTS: &[&str] = &["u8", "u16", "u32", "u64", "i8", "i16"];

/// Counts given to `Take`, `Drop`, `Replicate` range over `0..=MAX_COUNT`, which is deliberately
/// larger than the longest tuple.
const MAX_COUNT: usize = 8;

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests for the algebraic laws of the slicing combinators, over every
    // tuple and count within certain size bounds. This makes an off-by-one in any of them much less
    // likely to go un-caught.
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("laws.rs");
    let mut f = File::create(&dest_path)?;

    writeln!(f, "use static_assertions::assert_type_eq_all;")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn tuple_round_trip() {{")?;
    for len in 0..=ELEMENTS.len() {
        let tuple = tuple_of(&ELEMENTS[..len]);
        writeln!(f, "    assert_type_eq_all!(ToTuple<FromTuple<{}>>, {});", tuple, tuple)?;
        writeln!(
            f,
            "    assert_type_eq_all!(Length<FromTuple<{}>>, UnaryOf<{}>);",
            tuple, len
        )?;
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn take_is_prefix() {{")?;
    for len in 0..=ELEMENTS.len() {
        let tuple = tuple_of(&ELEMENTS[..len]);
        for n in 0..=MAX_COUNT {
            let prefix = tuple_of(&ELEMENTS[..n.min(len)]);
            writeln!(
                f,
                "    assert_type_eq_all!(ToTuple<Take<UnaryOf<{}>, FromTuple<{}>>>, {});",
                n, tuple, prefix
            )?;
        }
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn drop_is_suffix() {{")?;
    for len in 0..=ELEMENTS.len() {
        let tuple = tuple_of(&ELEMENTS[..len]);
        for n in 0..=MAX_COUNT {
            let suffix = tuple_of(&ELEMENTS[n.min(len)..len]);
            writeln!(
                f,
                "    assert_type_eq_all!(ToTuple<Drop<UnaryOf<{}>, FromTuple<{}>>>, {});",
                n, tuple, suffix
            )?;
        }
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn take_then_drop_partitions() {{")?;
    for len in 0..=ELEMENTS.len() {
        let tuple = tuple_of(&ELEMENTS[..len]);
        for n in 0..=MAX_COUNT {
            writeln!(
                f,
                "    assert_type_eq_all!(ToTuple<Concat<Take<UnaryOf<{n}>, FromTuple<{t}>>, Drop<UnaryOf<{n}>, FromTuple<{t}>>>>, {t});",
                n = n,
                t = tuple
            )?;
        }
    }
    writeln!(f, "}}")?;
    writeln!(f)?;

    writeln!(f, "#[test]")?;
    writeln!(f, "fn bounded_repetition() {{")?;
    for n in 0..=MAX_COUNT {
        let copies = tuple_of(&vec!["char"; n]);
        writeln!(
            f,
            "    assert_type_eq_all!(ToTuple<Take<UnaryOf<{}>, Repeat<char>>>, {});",
            n, copies
        )?;
        writeln!(
            f,
            "    assert_type_eq_all!(ToTuple<Replicate<UnaryOf<{}>, char>>, {});",
            n, copies
        )?;
    }
    writeln!(f, "}}")?;

    Ok(())
}

/// Render a flat tuple type, taking care of the trailing comma needed by 1-tuples.
fn tuple_of(elements: &[&str]) -> String {
    match elements {
        [] => "()".to_owned(),
        [only] => format!("({},)", only),
        _ => format!("({})", elements.join(", ")),
    }
}
