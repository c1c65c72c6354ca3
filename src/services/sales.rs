use crate::domain::models::{SalesTotal, SalesTotals};
use crate::error::{ParseError, ScanError};
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Accumulates `<token> <integer>` lines into per-token sums.
///
/// The first malformed line aborts the scan; nothing is returned for the
/// lines already seen.
pub fn accumulate<R: BufRead>(reader: R) -> Result<SalesTotals, ScanError> {
    let mut totals = SalesTotals::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let (token, value) = parse_record(idx + 1, &line)?;
        match totals.get_mut(token) {
            Some(sum) => {
                *sum = sum.checked_add(value).ok_or_else(|| ParseError::Overflow {
                    line: idx + 1,
                    token: token.to_string(),
                })?;
            }
            None => {
                totals.insert(token.to_string(), value);
            }
        }
    }
    Ok(totals)
}

fn parse_record(line_no: usize, line: &str) -> Result<(&str, i64), ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [token, raw] = fields[..] else {
        return Err(ParseError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    };
    let value = raw
        .parse::<i64>()
        .map_err(|source| ParseError::InvalidInteger {
            line: line_no,
            value: raw.to_string(),
            source,
        })?;
    Ok((token, value))
}

/// Flattens the totals into report rows, ascending by token.
pub fn into_report(totals: SalesTotals) -> Vec<SalesTotal> {
    totals
        .into_iter()
        .map(|(token, total)| SalesTotal { token, total })
        .collect()
}

pub fn render<W: Write>(report: &[SalesTotal], mut out: W) -> std::io::Result<()> {
    for total in report {
        writeln!(out, "{}", format_total(total))?;
    }
    out.flush()
}

pub fn format_total(total: &SalesTotal) -> String {
    format!("{}: {}", total.token, total.total)
}

/// Reads `input`, writes the sorted summary to `output`.
///
/// `output` is only created once the whole input parsed.
pub fn summarize_file(input: &Path, output: &Path) -> anyhow::Result<Vec<SalesTotal>> {
    let totals = {
        let file = File::open(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        accumulate(BufReader::new(file))
            .with_context(|| format!("failed to summarize {}", input.display()))?
    };
    tracing::debug!(input = %input.display(), tokens = totals.len(), "accumulated sales");
    let report = into_report(totals);

    {
        let file = File::create(output)
            .with_context(|| format!("failed to write {}", output.display()))?;
        render(&report, BufWriter::new(file))
            .with_context(|| format!("failed to write {}", output.display()))?;
    }
    tracing::info!(output = %output.display(), "wrote sales summary");

    Ok(report)
}
