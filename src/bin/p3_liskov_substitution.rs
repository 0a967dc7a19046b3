// Principle 3: Liskov Substitution
// Depend on behaviour expressed as a trait, not on a concrete type. Anything
// that honours the trait's contract can then stand in for anything else.
//
// Rust has no struct inheritance. Wrapping one struct inside another (the
// closest thing to a "child" type) does not make the wrapper usable where the
// inner type is expected, so substitution only works through a trait.

use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// ============================================================================
// Impossible substitution: concrete parameter type
// ============================================================================

pub struct Animal {
    pub name: String,
}

impl Animal {
    pub fn print_name(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.name)
    }
}

pub struct Bird {
    pub animal: Animal,
}

pub fn impossible_liskov_substitution(animal: &Animal, out: &mut dyn Write) -> io::Result<()> {
    animal.print_name(out)
}

// let eagle = Bird { animal: Animal { name: "Eagle".into() } };
// impossible_liskov_substitution(&eagle, out);
//                                ^^^^^^ expected `&Animal`, found `&Bird`

// ============================================================================
// Possible substitution: behaviour lives in a trait
// ============================================================================

pub trait PrintName {
    fn print_my_name(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct AnimalGood {
    pub name: String,
}

impl PrintName for AnimalGood {
    fn print_my_name(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.name)
    }
}

pub struct BirdGood {
    pub animal: AnimalGood,
}

// No method promotion from the inner field, so the bird opts in explicitly.
impl PrintName for BirdGood {
    fn print_my_name(&self, out: &mut dyn Write) -> io::Result<()> {
        self.animal.print_my_name(out)
    }
}

pub fn possible_liskov_substitution(animal: &dyn PrintName, out: &mut dyn Write) -> io::Result<()> {
    debug!("printing name through trait object");
    animal.print_my_name(out)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

fn main() -> io::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // A bird only fits the concrete signature by handing over its inner animal
    let eagle = Bird {
        animal: Animal {
            name: "Eagle".to_string(),
        },
    };
    impossible_liskov_substitution(&eagle.animal, &mut out)?;
    writeln!(out)?;

    let wolf = AnimalGood {
        name: "Wolf".to_string(),
    };
    possible_liskov_substitution(&wolf, &mut out)?;
    writeln!(out)?;

    let owl = BirdGood {
        animal: AnimalGood {
            name: "Owl".to_string(),
        },
    };
    possible_liskov_substitution(&owl, &mut out)?;

    Ok(())
}
