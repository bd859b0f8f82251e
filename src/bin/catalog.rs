//! Runs every demo unit in the catalogue, one heading and one line each.
//!
//! Run with: cargo run --bin catalog
//! Pass --parallel to render the units on the rayon pool first; the output
//! is byte-identical since units share nothing.

use std::env;
use std::io::{self, Write};

use colored::Colorize;

use builtin_types::catalog::{self, CATALOG};

fn main() -> io::Result<()> {
    let parallel = env::args().any(|arg| arg == "--parallel");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if parallel {
        let rendered = catalog::render_parallel()?;
        for (unit, line) in CATALOG.iter().zip(rendered) {
            writeln!(out, "{}", format!("=== {} ===", unit.name).cyan().bold())?;
            out.write_all(&line)?;
        }
    } else {
        for unit in CATALOG {
            writeln!(out, "{}", format!("=== {} ===", unit.name).cyan().bold())?;
            (unit.run)(&mut out)?;
        }
    }

    Ok(())
}
