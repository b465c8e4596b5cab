//! Result rendering.

use std::{fmt::Display, io::Write};

use serde::Serialize;

/// Writes `report` to `out`, as a single JSON line when `json` is set or with
/// its [`Display`] impl otherwise.
pub fn emit<T, W>(report: &T, json: bool, mut out: W) -> eyre::Result<()>
where
    T: Serialize + Display,
    W: Write,
{
    if json {
        serde_json::to_writer(&mut out, report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{report}")?;
    }
    Ok(())
}
