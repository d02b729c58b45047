//! API Gateway proxy envelope around the converter.
//!
//! The request body is JSON: `fileContent` holds the export as base64 text
//! and `vlanMappings` optionally replaces the mappings declared inside the
//! export. The CSV comes back base64 encoded together with whatever
//! mappings the export declared.

use crate::config::lambda::LambdaConfig;
use crate::core::{convert, VlanMapping};
use crate::utils::error::{ConvertError, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayRequest {
    /// REST API (v1) events.
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    /// HTTP API (v2) events.
    #[serde(default)]
    pub http: Option<HttpContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpContext {
    #[serde(default)]
    pub method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConvertRequest {
    #[serde(default)]
    file_content: Option<String>,
    #[serde(default)]
    vlan_mappings: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvertResponse {
    csv_content: String,
    detected_mappings: VlanMapping,
    observed_vlans: BTreeSet<u64>,
    record_count: usize,
}

impl ApiGatewayRequest {
    pub fn method(&self) -> Option<&str> {
        self.http_method.as_deref().or_else(|| {
            self.request_context
                .as_ref()
                .and_then(|ctx| ctx.http.as_ref())
                .and_then(|http| http.method.as_deref())
        })
    }

    fn is_preflight(&self) -> bool {
        self.method()
            .is_some_and(|m| m.eq_ignore_ascii_case("OPTIONS"))
    }

    fn body_text(&self) -> Result<String> {
        match &self.body {
            None => Ok("{}".to_string()),
            Some(body) if self.is_base64_encoded => Ok(String::from_utf8(BASE64.decode(body)?)?),
            Some(body) => Ok(body.clone()),
        }
    }
}

pub fn handle_request(request: &ApiGatewayRequest, config: &LambdaConfig) -> ApiGatewayResponse {
    if request.is_preflight() {
        return respond(200, &serde_json::json!({}), config);
    }

    match process(request) {
        Ok(response) => {
            tracing::info!(
                "✅ Converted {} records ({} VLANs)",
                response.record_count,
                response.observed_vlans.len()
            );
            respond(200, &response, config)
        }
        Err(e) => {
            let status = status_for(&e);
            if status >= 500 {
                tracing::error!("❌ Conversion failed: {}", e);
            } else {
                tracing::warn!("Rejected request: {}", e);
            }
            respond(status, &serde_json::json!({ "error": error_message(&e) }), config)
        }
    }
}

fn process(request: &ApiGatewayRequest) -> Result<ConvertResponse> {
    let body: ConvertRequest = serde_json::from_str(&request.body_text()?)?;

    let file_content = body
        .file_content
        .filter(|content| !content.is_empty())
        .ok_or(ConvertError::EmptyInput)?;

    let explicit = body.vlan_mappings.map(|entries| {
        entries
            .into_iter()
            .map(|(vlan, segment)| (vlan, segment_text(segment)))
            .collect::<VlanMapping>()
    });

    let text = decode_file_content(&file_content)?;
    let result = convert::convert(&text, explicit.as_ref())?;

    Ok(ConvertResponse {
        csv_content: BASE64.encode(result.csv_output.as_bytes()),
        detected_mappings: result.detected_mappings,
        observed_vlans: result.observed_vlans,
        record_count: result.record_count,
    })
}

/// Base64 to UTF-8 text. Line breaks inside the base64 are ignored.
pub fn decode_file_content(content: &str) -> Result<String> {
    let compact: String = content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = BASE64.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}

/// Segment names sent as JSON scalars are written the way a Python caller
/// would print them (`100`, `True`, null as empty).
fn segment_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        serde_json::Value::Bool(true) => "True".to_string(),
        serde_json::Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

fn status_for(error: &ConvertError) -> u16 {
    if error.is_client_error() {
        400
    } else {
        500
    }
}

fn error_message(error: &ConvertError) -> String {
    match error {
        ConvertError::InvalidEncoding(e) => format!("Invalid base64 encoding: {}", e),
        other => other.to_string(),
    }
}

fn respond<T: Serialize>(status_code: u16, body: &T, config: &LambdaConfig) -> ApiGatewayResponse {
    let body = serde_json::to_string(body).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize response body: {}", e);
        r#"{"error":"Failed to serialize response"}"#.to_string()
    });

    ApiGatewayResponse {
        status_code,
        headers: cors_headers(config),
        body,
    }
}

fn cors_headers(config: &LambdaConfig) -> BTreeMap<String, String> {
    [
        ("Content-Type", "application/json".to_string()),
        ("Access-Control-Allow-Origin", config.allow_origin.clone()),
        ("Access-Control-Allow-Methods", "*".to_string()),
        ("Access-Control-Allow-Headers", "*".to_string()),
        ("Access-Control-Expose-Headers", "*".to_string()),
        ("Access-Control-Max-Age", config.cors_max_age.to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}
