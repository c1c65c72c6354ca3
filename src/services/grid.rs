use crate::domain::models::GridReport;
use anyhow::Context;
use std::path::Path;

/// Renders `rows` lines of `cols` sequential integers starting at 1.
///
/// Rows are joined with `\n`; there is no trailing newline.
pub fn render_grid(rows: usize, cols: usize) -> String {
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| (r * cols + c + 1).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn write_grid(path: &Path, rows: usize, cols: usize) -> anyhow::Result<GridReport> {
    anyhow::ensure!(
        rows.checked_mul(cols).and_then(|n| n.checked_add(1)).is_some(),
        "grid of {}x{} cells is too large",
        rows,
        cols
    );
    std::fs::write(path, render_grid(rows, cols))
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows, cols, "wrote number grid");
    Ok(GridReport {
        path: path.to_path_buf(),
        rows,
        cols,
    })
}
