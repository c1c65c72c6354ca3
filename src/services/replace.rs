use crate::domain::models::ReplaceReport;
use anyhow::Context;
use std::path::Path;

/// Replaces every literal occurrence of `old`, returning the new text and
/// the number of replacements.
pub fn replace_all(content: &str, old: &str, new: &str) -> (String, usize) {
    (content.replace(old, new), content.matches(old).count())
}

/// `input` and `output` may be the same path; the input is read in full
/// before the output is opened.
pub fn find_and_replace(
    input: &Path,
    output: &Path,
    old: &str,
    new: &str,
) -> anyhow::Result<ReplaceReport> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let (updated, replacements) = replace_all(&content, old, new);
    std::fs::write(output, updated)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        replacements,
        "replaced text"
    );
    Ok(ReplaceReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        replacements,
    })
}
