use crate::domain::models::{OutlineReport, ProjectEntry};
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const TASK_INDENT: &str = "  ";

/// Counts indented task lines under each project header.
///
/// Every header after the first line flushes the running project, and the
/// last one is always flushed at end of input. Task lines seen before any
/// header are counted under an empty project name; an empty input still
/// yields one empty-named entry.
pub fn parse_outline<R: BufRead>(reader: R) -> std::io::Result<OutlineReport> {
    let mut report = OutlineReport::new();
    let mut project = String::new();
    let mut count = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.starts_with(TASK_INDENT) {
            count += 1;
            continue;
        }
        if idx > 0 {
            report.push(ProjectEntry {
                project: std::mem::take(&mut project),
                tasks: count,
            });
        }
        project = line.to_string();
        count = 0;
    }
    report.push(ProjectEntry {
        project,
        tasks: count,
    });

    Ok(report)
}

pub fn render<W: Write>(report: &[ProjectEntry], mut out: W) -> std::io::Result<()> {
    for entry in report {
        writeln!(out, "{}", format_entry(entry))?;
    }
    out.flush()
}

pub fn format_entry(entry: &ProjectEntry) -> String {
    format!("{}: {} tasks", entry.project, entry.tasks)
}

pub fn count_tasks_file(input: &Path, output: &Path) -> anyhow::Result<OutlineReport> {
    let report = {
        let file = File::open(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        parse_outline(BufReader::new(file))
            .with_context(|| format!("failed to read {}", input.display()))?
    };
    tracing::debug!(input = %input.display(), projects = report.len(), "parsed outline");

    {
        let file = File::create(output)
            .with_context(|| format!("failed to write {}", output.display()))?;
        render(&report, BufWriter::new(file))
            .with_context(|| format!("failed to write {}", output.display()))?;
    }
    tracing::info!(output = %output.display(), "wrote outline report");

    Ok(report)
}
