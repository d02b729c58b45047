use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One authenticated client as reported by the switch's MAB binding table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRecord {
    pub vlan: u64,
    /// Address token exactly as it appeared in the export.
    pub mac: String,
    pub port: String,
}

/// Decimal form of a VLAN key, so `"010"` and `"10"` name the same VLAN.
/// Keys that are not plain digit strings are returned unchanged.
pub fn canonical_vlan_key(key: &str) -> String {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return key.to_string();
    }

    let trimmed = key.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// VLAN id (decimal string) to segment name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct VlanMapping(BTreeMap<String, String>);

impl VlanMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites; the last write for a key wins. Numeric keys
    /// are stored in decimal form.
    pub fn insert(&mut self, vlan: impl Into<String>, segment: impl Into<String>) {
        self.0.insert(canonical_vlan_key(&vlan.into()), segment.into());
    }

    pub fn segment_for(&self, vlan: u64) -> Option<&str> {
        self.0.get(&vlan.to_string()).map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&canonical_vlan_key(key)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VlanMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = VlanMapping::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

impl From<BTreeMap<String, String>> for VlanMapping {
    fn from(entries: BTreeMap<String, String>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<VlanMapping> for BTreeMap<String, String> {
    fn from(mapping: VlanMapping) -> Self {
        mapping.0
    }
}

/// Everything the parser found in one export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedExport {
    pub records: Vec<BindingRecord>,
    pub observed_vlans: BTreeSet<u64>,
    pub mappings: VlanMapping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingSource {
    Explicit,
    Detected,
}

#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub csv_output: String,
    pub record_count: usize,
    pub observed_vlans: BTreeSet<u64>,
    pub detected_mappings: VlanMapping,
    pub mapping_source: MappingSource,
}
