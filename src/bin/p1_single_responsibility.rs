// Principle 1: Single Responsibility
// A type should have one reason to change. Holding an animal's data and
// encoding it to JSON are two reasons, so the encoding moves to its own type.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode encoding failed: {0}")]
    Bincode(#[from] bincode::Error),
}

// ============================================================================
// Breaking the principle
// ============================================================================

// Keys are Pascal-case to keep the same wire format as `{"Name":..,"Age":..}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AnimalBad {
    name: String,
    age: u16,
}

impl AnimalBad {
    pub fn new(name: impl Into<String>, age: u16) -> Self {
        AnimalBad {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u16 {
        self.age
    }

    // Encoding is not the animal's job. Every new output format would mean
    // editing this struct again.
    pub fn format_json(&self) -> Result<Vec<u8>, FormatError> {
        Ok(serde_json::to_vec(self)?)
    }
}

// ============================================================================
// Following the principle
// ============================================================================

/// Plain data: a name and an age, nothing else.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AnimalGood {
    name: String,
    age: u16,
}

impl AnimalGood {
    pub fn new(name: impl Into<String>, age: u16) -> Self {
        AnimalGood {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u16 {
        self.age
    }
}

/// Owns the JSON encoding of an [`AnimalGood`].
pub struct ToJson;

impl ToJson {
    pub fn format_json(&self, animal: &AnimalGood) -> Result<Vec<u8>, FormatError> {
        let bytes = serde_json::to_vec(animal).map_err(|e| {
            error!(name = animal.name(), error = %e, "json encoding failed");
            FormatError::from(e)
        })?;
        debug!(name = animal.name(), len = bytes.len(), "encoded json");
        Ok(bytes)
    }
}

/// A second output format is a second type; `AnimalGood` stays untouched.
pub struct ToBincode;

impl ToBincode {
    pub fn format_bincode(&self, animal: &AnimalGood) -> Result<Vec<u8>, FormatError> {
        let bytes = bincode::serialize(animal)?;
        debug!(name = animal.name(), len = bytes.len(), "encoded bincode");
        Ok(bytes)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Bad way
    let tiger = AnimalBad::new("Tiger", 12);
    info!(name = tiger.name(), age = tiger.age(), "encoding animal");
    let json_tiger = tiger.format_json()?;
    out.write_all(&json_tiger)?;
    writeln!(out)?;

    // Good way
    let duck = AnimalGood::new("Duck", 7);
    info!(name = duck.name(), age = duck.age(), "encoding animal");
    let json_duck = ToJson.format_json(&duck)?;
    out.write_all(&json_duck)?;
    writeln!(out)?;

    let bin_duck = ToBincode.format_bincode(&duck)?;
    writeln!(out, "bincode: {} bytes {:?}", bin_duck.len(), bin_duck)?;

    Ok(())
}
