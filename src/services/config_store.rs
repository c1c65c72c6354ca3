//! Flat `key=value` config files.
//!
//! Each read builds a fresh [`ConfigMap`]; nothing is cached between calls.

use crate::domain::models::{ConfigEntry, ConfigMap};
use crate::error::{EntryError, ParseError, ScanError};
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Parses trimmed lines split at the first `=`. A line without `=`, blank
/// lines included, fails the whole read. Later duplicates overwrite earlier
/// values but keep the first position.
pub fn parse<R: BufRead>(reader: R) -> Result<ConfigMap, ScanError> {
    let mut map = ConfigMap::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let Some((key, value)) = line.split_once('=') else {
            return Err(ParseError::MissingSeparator {
                line: idx + 1,
                content: line.to_string(),
            }
            .into());
        };
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}

/// Rejects entries that `parse` would not return unchanged: the line is
/// trimmed and split at the first `=`.
pub fn check_entry(key: &str, value: &str) -> Result<(), EntryError> {
    let owned = || key.to_string();
    if [key, value].iter().any(|s| s.contains(['\n', '\r'])) {
        return Err(EntryError::LineBreak { key: owned() });
    }
    if key.contains('=') {
        return Err(EntryError::SeparatorInKey { key: owned() });
    }
    if key.trim_start() != key {
        return Err(EntryError::LeadingWhitespace { key: owned() });
    }
    if value.trim_end() != value {
        return Err(EntryError::TrailingWhitespace { key: owned() });
    }
    Ok(())
}

pub fn render<W: Write>(map: &ConfigMap, mut out: W) -> std::io::Result<()> {
    for (key, value) in map {
        writeln!(out, "{}={}", key, value)?;
    }
    out.flush()
}

pub fn read_config(path: &Path) -> anyhow::Result<ConfigMap> {
    let file = File::open(path).with_context(|| format!("failed to read {}", path.display()))?;
    let map = parse(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), keys = map.len(), "read config");
    Ok(map)
}

/// Fails before touching `path` if any entry would not read back unchanged.
pub fn write_config(path: &Path, map: &ConfigMap) -> anyhow::Result<()> {
    for (key, value) in map {
        check_entry(key, value)
            .with_context(|| format!("refusing to write {}", path.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("failed to write {}", path.display()))?;
    render(map, BufWriter::new(file))
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), keys = map.len(), "wrote config");
    Ok(())
}

/// Merges `pairs` into the file at `path` (created when absent) and returns
/// the resulting contents.
pub fn set_values(path: &Path, pairs: &[(String, String)]) -> anyhow::Result<ConfigMap> {
    let mut map = if path.exists() {
        read_config(path)?
    } else {
        ConfigMap::new()
    };
    for (key, value) in pairs {
        map.insert(key.clone(), value.clone());
    }
    write_config(path, &map)?;
    Ok(map)
}

pub fn get_value(path: &Path, key: &str) -> anyhow::Result<ConfigEntry> {
    let map = read_config(path)?;
    let Some(value) = map.get(key) else {
        anyhow::bail!("key not found: {}", key);
    };
    Ok(ConfigEntry {
        key: key.to_string(),
        value: value.clone(),
    })
}

pub fn entries(map: &ConfigMap) -> Vec<ConfigEntry> {
    map.iter()
        .map(|(key, value)| ConfigEntry {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}

/// Splits a CLI `key=value` argument, rejecting pairs the file could not
/// store faithfully.
pub fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => {
            check_entry(key, value).map_err(|e| e.to_string())?;
            Ok((key.to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got `{}`", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        check_entry, get_value, parse, parse_pair, read_config, set_values, write_config,
    };
    use crate::domain::models::ConfigMap;
    use crate::error::{EntryError, ParseError, ScanError};
    use std::io::Cursor;

    #[test]
    fn parses_pairs_in_file_order() {
        let map = parse(Cursor::new("host=localhost\n port = 8080 \n")).expect("parse");
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["host", "port "]);
        assert_eq!(map["port "], " 8080");
    }

    #[test]
    fn value_may_contain_separator() {
        let map = parse(Cursor::new("url=a=b\n")).expect("parse");
        assert_eq!(map["url"], "a=b");
    }

    #[test]
    fn missing_separator_is_fatal() {
        let err = parse(Cursor::new("a=1\nbroken\n")).unwrap_err();
        assert!(matches!(
            err,
            ScanError::Parse(ParseError::MissingSeparator { line: 2, .. })
        ));
    }

    #[test]
    fn blank_line_is_fatal() {
        let err = parse(Cursor::new("a=1\n\nb=2\n")).unwrap_err();
        assert!(matches!(
            err,
            ScanError::Parse(ParseError::MissingSeparator { line: 2, ref content })
                if content.is_empty()
        ));
    }

    #[test]
    fn entries_that_would_not_read_back_are_rejected() {
        assert_eq!(
            check_entry("k", "v "),
            Err(EntryError::TrailingWhitespace { key: "k".into() })
        );
        assert_eq!(
            check_entry(" k", "v"),
            Err(EntryError::LeadingWhitespace { key: " k".into() })
        );
        assert_eq!(
            check_entry("a=b", "v"),
            Err(EntryError::SeparatorInKey { key: "a=b".into() })
        );
        assert_eq!(
            check_entry("k", "one\ntwo"),
            Err(EntryError::LineBreak { key: "k".into() })
        );
        assert_eq!(check_entry("k ", " v"), Ok(()));
        assert_eq!(check_entry("k ", ""), Ok(()));
    }

    #[test]
    fn write_refuses_unstorable_value_without_creating_file() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("app.cfg");
        let mut map = ConfigMap::new();
        map.insert("k".to_string(), "v ".to_string());

        assert!(write_config(&path, &map).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn edge_whitespace_that_survives_trim_round_trips() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("app.cfg");
        let mut map = ConfigMap::new();
        map.insert("spaced key ".to_string(), " spaced value".to_string());
        map.insert("trailing ".to_string(), String::new());
        map.insert(String::new(), "no key".to_string());

        write_config(&path, &map).expect("write");
        assert_eq!(read_config(&path).expect("read"), map);
    }

    #[test]
    fn reads_are_independent() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let a = tmp.path().join("a.cfg");
        let b = tmp.path().join("b.cfg");
        std::fs::write(&a, "only_a=1\n").expect("write a");
        std::fs::write(&b, "only_b=2\n").expect("write b");

        let _ = read_config(&a).expect("read a");
        let second = read_config(&b).expect("read b");
        assert_eq!(second.len(), 1);
        assert!(!second.contains_key("only_a"));
    }

    #[test]
    fn write_then_read_round_trips() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("app.cfg");
        let mut map = ConfigMap::new();
        map.insert("name".to_string(), "textkit".to_string());
        map.insert("retries".to_string(), "3".to_string());
        map.insert("empty".to_string(), String::new());

        write_config(&path, &map).expect("write");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read raw"),
            "name=textkit\nretries=3\nempty=\n"
        );
        assert_eq!(read_config(&path).expect("read"), map);
    }

    #[test]
    fn set_merges_and_get_reads_back() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("app.cfg");
        set_values(&path, &[("a".into(), "1".into()), ("b".into(), "2".into())])
            .expect("first set");
        let map = set_values(&path, &[("a".into(), "9".into())]).expect("second set");

        assert_eq!(map.len(), 2);
        assert_eq!(get_value(&path, "a").expect("get a").value, "9");
        assert!(get_value(&path, "missing").is_err());
    }

    #[test]
    fn pair_argument_parsing() {
        assert_eq!(parse_pair("k=v=w"), Ok(("k".to_string(), "v=w".to_string())));
        assert!(parse_pair("novalue").is_err());
        assert!(parse_pair("=v").is_err());
        assert!(parse_pair("k=v ").is_err());
        assert!(parse_pair(" k=v").is_err());
    }
}
