// Bonus: Dependency Injection
// A dependency is another object a type needs to do its work. Instead of
// building it inside the function, take it as a parameter, so a test can hand
// in a double that never touches the network.

use std::io::{self, Read, Write};
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_URL: &str = "http://google.com";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read response body: {0}")]
    Read(#[from] io::Error),

    #[error("Failed to write output: {0}")]
    Write(io::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

// ============================================================================
// Wrong way
// ============================================================================

pub struct Print;

impl Print {
    /// Builds its own client, so calling this always hits the real network.
    /// Swap the HTTP client for a database connection and the problem is the
    /// same: nothing here can be mocked.
    pub fn print_data(&self, out: &mut dyn Write) -> Result<(), FetchError> {
        let client = reqwest::blocking::Client::new();
        let mut response = client.get(DEFAULT_URL).send()?;

        let mut body = Vec::new();
        response.read_to_end(&mut body)?;

        write_body(out, &body)
    }
}

// ============================================================================
// Good way
// ============================================================================

/// Anything that can GET a URL and hand back a readable body.
pub trait HttpClient {
    type Body: Read;

    fn get(&self, url: &str) -> Result<Self::Body, FetchError>;
}

// The real client already fits the abstraction.
impl HttpClient for reqwest::blocking::Client {
    type Body = reqwest::blocking::Response;

    fn get(&self, url: &str) -> Result<Self::Body, FetchError> {
        Ok(reqwest::blocking::Client::get(self, url).send()?)
    }
}

pub struct PrintGood;

impl PrintGood {
    /// Fetches `url` through the injected client and writes the raw body,
    /// followed by a newline. A failed GET returns before any body read.
    pub fn print_data_good<C: HttpClient>(
        &self,
        client: &C,
        url: &str,
        out: &mut dyn Write,
    ) -> Result<(), FetchError> {
        info!(url, "fetching");
        let mut response = client.get(url).map_err(|e| {
            error!(url, error = %e, "request failed");
            e
        })?;

        let mut body = Vec::new();
        response.read_to_end(&mut body)?;
        debug!(url, bytes = body.len(), "read response body");

        write_body(out, &body)
    }
}

fn write_body(out: &mut dyn Write, body: &[u8]) -> Result<(), FetchError> {
    out.write_all(body)
        .and_then(|_| writeln!(out))
        .map_err(FetchError::Write)
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

    let url = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_URL.to_string());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Wrong way
    Print.print_data(&mut out)?;
    writeln!(out, "{}", "-".repeat(72))?;

    // Good way
    let client = reqwest::blocking::Client::new();
    PrintGood.print_data_good(&client, &url, &mut out)?;

    Ok(())
}
