use crate::domain::model::{canonical_vlan_key, VlanMapping};
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_file_extension, validate_vlan_key};
use std::path::Path;

pub const MAPPING_FILE_EXTENSIONS: [&str; 2] = ["toml", "json"];

/// 從檔案載入 VLAN 對應表，依副檔名選擇 TOML 或 JSON
///
/// TOML files are a flat table (`10 = "Voice"`), JSON files a flat object
/// (`{"10": "Voice"}`).
pub fn load_mapping_file<P: AsRef<Path>>(path: P) -> Result<VlanMapping> {
    let path = path.as_ref();
    let display = path.display().to_string();
    validate_file_extension("mappings", &display, &MAPPING_FILE_EXTENSIONS)?;

    let content = std::fs::read_to_string(path).map_err(ConvertError::IoError)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json_mapping(&content)
    } else {
        parse_toml_mapping(&content)
    }
}

pub fn parse_toml_mapping(content: &str) -> Result<VlanMapping> {
    let mapping: VlanMapping =
        toml::from_str(content).map_err(|e| ConvertError::ConfigValidationError {
            field: "mappings".to_string(),
            message: format!("TOML parsing error: {}", e),
        })?;
    check_keys(&mapping)?;
    Ok(mapping)
}

pub fn parse_json_mapping(content: &str) -> Result<VlanMapping> {
    let mapping: VlanMapping =
        serde_json::from_str(content).map_err(|e| ConvertError::ConfigValidationError {
            field: "mappings".to_string(),
            message: format!("JSON parsing error: {}", e),
        })?;
    check_keys(&mapping)?;
    Ok(mapping)
}

/// Parses one `VLAN=NAME` command line entry.
pub fn parse_mapping_arg(arg: &str) -> Result<(String, String)> {
    let (vlan, segment) = arg
        .split_once('=')
        .ok_or_else(|| ConvertError::InvalidConfigValueError {
            field: "map".to_string(),
            value: arg.to_string(),
            reason: "Expected VLAN=NAME".to_string(),
        })?;

    let vlan = vlan.trim();
    validate_vlan_key("map", vlan)?;
    Ok((canonical_vlan_key(vlan), segment.trim().to_string()))
}

fn check_keys(mapping: &VlanMapping) -> Result<()> {
    for (vlan, _) in mapping.iter() {
        validate_vlan_key("mappings", vlan)?;
    }
    Ok(())
}
