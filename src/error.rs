//! Typed failures for the line scanners.
//!
//! Scanners over a reader return [`ScanError`]; file-level services wrap it in
//! `anyhow` with the path attached.

use std::num::ParseIntError;

/// A malformed input line. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A sales line did not split into exactly `<token> <integer>`.
    #[error("line {line}: expected `<token> <integer>`, found {found} field(s)")]
    FieldCount { line: usize, found: usize },

    /// The value column of a sales line is not an integer.
    #[error("line {line}: invalid integer `{value}`")]
    InvalidInteger {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Accumulating a token's total left the `i64` range.
    #[error("line {line}: total for `{token}` overflows")]
    Overflow { line: usize, token: String },

    /// A config line has no `=` separator.
    #[error("line {line}: expected `key=value`, found `{content}`")]
    MissingSeparator { line: usize, content: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A config entry that would not read back unchanged from `key=value` form.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("key `{key}` contains `=`")]
    SeparatorInKey { key: String },

    #[error("key `{key}` starts with whitespace")]
    LeadingWhitespace { key: String },

    #[error("value for `{key}` ends with whitespace")]
    TrailingWhitespace { key: String },

    #[error("entry `{key}` contains a line break")]
    LineBreak { key: String },
}
