use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Per-token running sums. Keyed by token so iteration is already sorted.
pub type SalesTotals = BTreeMap<String, i64>;

/// Flat `key=value` config contents, in file order.
pub type ConfigMap = IndexMap<String, String>;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SalesTotal {
    pub token: String,
    pub total: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub project: String,
    pub tasks: usize,
}

/// Projects in first-appearance order.
pub type OutlineReport = Vec<ProjectEntry>;

#[derive(Debug, Serialize)]
pub struct GridReport {
    pub path: PathBuf,
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Serialize)]
pub struct LogReport {
    pub path: PathBuf,
    pub line: String,
}

#[derive(Debug, Serialize)]
pub struct ReplaceReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub replacements: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}
