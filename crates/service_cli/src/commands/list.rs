//! List command implementation
//!
//! Prints the registered generator names, one per line.

use std::io::{self, Write};

use crate::generator::GeneratorKind;
use crate::Result;

/// Run the list command
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    write_names(&mut stdout.lock())
}

fn write_names<W: Write>(out: &mut W) -> Result<()> {
    for kind in GeneratorKind::ALL {
        writeln!(out, "{}", kind)?;
    }
    Ok(())
}
