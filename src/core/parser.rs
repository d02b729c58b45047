//! Line classifier for `show mab`-style binding exports.
//!
//! Every non-blank line is either a VLAN mapping declaration
//! (`1 = 'Wired Production'`), a binding record
//! (`1    001e.0b41.7afd    DYNAMIC     Gi1/0/15`), or noise. Mapping
//! declarations are recognised by shape, so a header block may appear
//! before, after or in between the records.

use crate::domain::model::{canonical_vlan_key, BindingRecord, ParsedExport};
use regex::Regex;
use std::sync::LazyLock;

static MAPPING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*([0-9]+)\s*=\s*['"]?(.*?)['"]?\s*$"#).expect("mapping pattern compiles")
});

const MIN_RECORD_TOKENS: usize = 4;

/// Parses an export. Never fails: lines that are neither a mapping nor a
/// well-formed record are dropped.
pub fn parse(text: &str) -> ParsedExport {
    let mut parsed = ParsedExport::default();
    let mut skipped = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((vlan, segment)) = parse_mapping_line(line) {
            parsed.mappings.insert(vlan, segment);
            continue;
        }

        match parse_record_line(line) {
            Some(record) => {
                parsed.observed_vlans.insert(record.vlan);
                parsed.records.push(record);
            }
            None => {
                skipped += 1;
                tracing::trace!("Skipping unrecognised line: {:?}", line);
            }
        }
    }

    tracing::debug!(
        "Parsed {} records, {} VLAN mappings, skipped {} lines",
        parsed.records.len(),
        parsed.mappings.len(),
        skipped
    );

    parsed
}

/// Returns `(vlan key, segment name)` for a `N = 'name'` declaration.
fn parse_mapping_line(line: &str) -> Option<(String, String)> {
    let caps = MAPPING_LINE.captures(line)?;
    let vlan = canonical_vlan_key(caps.get(1)?.as_str());
    let segment = caps.get(2).map_or("", |m| m.as_str());
    Some((vlan, segment.to_string()))
}

fn parse_record_line(line: &str) -> Option<BindingRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_RECORD_TOKENS {
        return None;
    }

    // `u64::from_str` would also take a leading '+'
    if !tokens[0].bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let vlan = tokens[0].parse::<u64>().ok()?;

    // tokens[2] is the session state column (DYNAMIC/STATIC/...), unused
    Some(BindingRecord {
        vlan,
        mac: tokens[1].to_string(),
        port: tokens[3].to_string(),
    })
}
