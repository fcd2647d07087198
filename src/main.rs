//! Numbound Entry Point
//!
//! Runs the boundary search against the platform's `f64` parser and prints
//! the resulting maximal digit string.

use numbound::run;

fn main() -> anyhow::Result<()> {
    run()
}
