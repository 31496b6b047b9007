use serde::Serialize;
use std::io::{self, Write};

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")?;
    Ok(())
}

pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Prints a progress line from an observer callback
///
/// Observers cannot return errors, so a failed write is logged and the
/// run carries on.
pub fn print_progress(s: &str) {
    write_progress(&mut io::stdout().lock(), s);
}

fn write_progress(out: &mut impl Write, s: &str) {
    if let Err(e) = writeln!(out, "{s}") {
        log::debug!("Failed to write progress line: {e}");
    }
}
