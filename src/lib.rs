//! # Numbound
//!
//! Empirically probes the overflow boundary of a numeric parser: the
//! largest string of decimal digits the parser still converts to a finite
//! value rather than an overflow sentinel.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌──────────────────┐    ┌──────────────┐
//! │  Magnitude  │ →  │      Digit       │ →  │ SearchReport │
//! │   Search    │    │   Maximization   │    │  (one line)  │
//! └─────────────┘    └──────────────────┘    └──────────────┘
//!          both probe through the NumberParser trait
//! ```
//!
//! Phase 1 finds the longest "1 followed by zeros" string the parser
//! accepts; phase 2 greedily maximizes every digit position against that
//! baseline. For Rust's `f64` parser the answer is the 309-digit integer
//! sitting just below the overflow threshold.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod parser;
pub mod search;

use tracing::info;

use crate::parser::FloatParser;
use crate::search::BoundarySearch;

/// Run the boundary search against the platform `f64` parser and print the
/// one-line report to stdout.
///
/// # Errors
///
/// No failure path is expected under normal platform behavior; the `Result`
/// is the binary's error boundary.
pub fn run() -> anyhow::Result<()> {
    init_logging();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting boundary search"
    );

    let report = BoundarySearch::new(FloatParser).run();
    info!(digits = report.digit_count(), "Search complete");

    println!("{report}");
    Ok(())
}

/// Initialize logging to stderr, honoring `RUST_LOG` with a `warn` default.
///
/// Diagnostics go to stderr so the single stdout line stays clean.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
