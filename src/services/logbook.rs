use crate::domain::models::LogReport;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn format_line(timestamp: &str, message: &str) -> String {
    format!("{} - {}", timestamp, message)
}

/// Appends `"{timestamp} - {message}\n"`, creating the file if needed.
pub fn append(path: &Path, message: &str) -> anyhow::Result<LogReport> {
    let now = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    let line = format_line(&now, message);
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    writeln!(file, "{}", line).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "appended log line");
    Ok(LogReport {
        path: path.to_path_buf(),
        line,
    })
}
