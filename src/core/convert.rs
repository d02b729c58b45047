use crate::core::{formatter, parser};
use crate::domain::model::{ConversionResult, MappingSource, ParsedExport, VlanMapping};
use crate::utils::error::{ConvertError, Result};

/// Picks the mapping used for the Segment column. A non-empty explicit
/// mapping replaces the detected one entirely; entries are never merged.
pub fn select_mapping<'a>(
    explicit: Option<&'a VlanMapping>,
    detected: &'a VlanMapping,
) -> (&'a VlanMapping, MappingSource) {
    match explicit {
        Some(mapping) if !mapping.is_empty() => (mapping, MappingSource::Explicit),
        _ => (detected, MappingSource::Detected),
    }
}

/// Formats an already parsed export. Zero records is an error here: an
/// import file with only a header row is never what the caller wants.
pub fn render(parsed: ParsedExport, explicit: Option<&VlanMapping>) -> Result<ConversionResult> {
    if parsed.records.is_empty() {
        tracing::warn!(
            "No binding records found ({} mappings detected)",
            parsed.mappings.len()
        );
        return Err(ConvertError::NoRecordsFound);
    }

    let (mapping, mapping_source) = select_mapping(explicit, &parsed.mappings);
    tracing::debug!(
        "Using {:?} VLAN mapping with {} entries",
        mapping_source,
        mapping.len()
    );

    let unmapped: Vec<u64> = parsed
        .observed_vlans
        .iter()
        .copied()
        .filter(|vlan| mapping.segment_for(*vlan).is_none())
        .collect();
    if !unmapped.is_empty() {
        tracing::info!("VLANs without a segment name: {:?}", unmapped);
    }

    let csv_output = formatter::format_csv(&parsed.records, mapping)?;

    Ok(ConversionResult {
        csv_output,
        record_count: parsed.records.len(),
        observed_vlans: parsed.observed_vlans,
        detected_mappings: parsed.mappings,
        mapping_source,
    })
}

/// Parse then render in one step.
pub fn convert(text: &str, explicit: Option<&VlanMapping>) -> Result<ConversionResult> {
    render(parser::parse(text), explicit)
}
