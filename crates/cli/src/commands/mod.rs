//! CLI subcommand implementations.

pub mod cart;
pub mod catalog;
pub mod recommend;

use std::io::Write;

use serde::Serialize;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Write a line to stdout.
fn out(line: &str) -> std::io::Result<()> {
    writeln!(std::io::stdout().lock(), "{line}")
}

/// Write a value to stdout as pretty-printed JSON.
fn out_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(value)?;
    out(&json)?;
    Ok(())
}
