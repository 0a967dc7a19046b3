// Principle 4: Interface Segregation
// Clients should not be forced to depend on methods they do not use. Split
// one wide type into small traits and compose only what each vehicle needs.

use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// ============================================================================
// Breaking the principle
// ============================================================================

pub struct Vehicle {
    pub name: String,
}

impl Vehicle {
    pub fn run(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Running... {}", self.name)
    }

    pub fn play_cd(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Playing CD... {}", self.name)
    }
}

/// Gets a CD player whether it wants one or not.
pub struct Motorbike {
    pub vehicle: Vehicle,
}

// ============================================================================
// Following the principle
// ============================================================================

pub trait PlayCd {
    fn play(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub trait Run {
    fn run(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct VehicleCdPlay {
    pub song: String,
}

impl PlayCd for VehicleCdPlay {
    fn play(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Playing CD... {}", self.song)
    }
}

pub struct VehicleRun {
    pub name: String,
}

impl Run for VehicleRun {
    fn run(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Vehicle running... {}", self.name)
    }
}

/// A car: runs and plays music.
pub struct VehicleGood {
    pub cd_player: VehicleCdPlay,
    pub engine: VehicleRun,
}

impl PlayCd for VehicleGood {
    fn play(&self, out: &mut dyn Write) -> io::Result<()> {
        self.cd_player.play(out)
    }
}

impl Run for VehicleGood {
    fn run(&self, out: &mut dyn Write) -> io::Result<()> {
        self.engine.run(out)
    }
}

/// Only runs.
pub struct MotorbikeGood {
    pub engine: VehicleRun,
}

impl Run for MotorbikeGood {
    fn run(&self, out: &mut dyn Write) -> io::Result<()> {
        self.engine.run(out)
    }
}

/// A client that needs nothing but [`Run`].
pub fn start_engine(vehicle: &dyn Run, out: &mut dyn Write) -> io::Result<()> {
    debug!("starting engine");
    vehicle.run(out)
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

    // Bad example: a motorbike does not need to play CDs
    let m = Motorbike {
        vehicle: Vehicle {
            name: "Honda".to_string(),
        },
    };
    m.vehicle.run(&mut out)?;
    m.vehicle.play_cd(&mut out)?;

    // Good example
    let v1 = VehicleGood {
        cd_player: VehicleCdPlay {
            song: "My Song".to_string(),
        },
        engine: VehicleRun {
            name: "BMW".to_string(),
        },
    };
    v1.run(&mut out)?;
    v1.play(&mut out)?;

    let m2 = MotorbikeGood {
        engine: VehicleRun {
            name: "Kawasaki".to_string(),
        },
    };
    start_engine(&m2, &mut out)?;

    Ok(())
}
