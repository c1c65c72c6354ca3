use crate::domain::models::JsonOut;
use serde::Serialize;
use std::io::Write;

/// Prints a command report to stdout: `{"ok": true, "data": ...}` in JSON
/// mode, otherwise whatever `text` writes.
///
/// Report commands pass their service `render` as `text`, so plain stdout is
/// byte-for-byte the file they wrote.
pub fn emit<T, F>(json: bool, data: &T, text: F) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    let stdout = std::io::stdout();
    write_report(stdout.lock(), json, data, text)
}

pub fn write_report<W, T, F>(mut out: W, json: bool, data: &T, text: F) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    if json {
        serde_json::to_writer_pretty(&mut out, &JsonOut { ok: true, data })?;
        writeln!(out)?;
    } else {
        text(&mut out)?;
    }
    out.flush()?;
    Ok(())
}
