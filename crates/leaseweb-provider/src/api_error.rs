// ── API error → diagnostics ──
//
// Leaseweb error bodies look like:
//
//   { "correlationId": "...", "errorCode": "400", "errorMessage": "...",
//     "errorDetails": { "contract.term": ["..."], "instanceId": ["..."] } }
//
// When `errorDetails` is present every message is attached to the attribute
// it names. Otherwise the whole decoded body becomes one resource-level
// diagnostic. Nothing in here ever fails: undecodable bodies degrade to
// `DEFAULT_ERROR_MESSAGE`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::path::AttributePath;

pub const DEFAULT_ERROR_MESSAGE: &str =
    "An error has occurred in the program. Please consider opening an issue.";

/// Decoded API error body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub correlation_id: String,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub error_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub error_details: BTreeMap<String, Vec<String>>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null => String::new(),
    })
}

/// Translate an `errorDetails` key into attribute path segments.
///
/// Dotted keys are lowercased as a whole, so `contract.billingFrequency`
/// yields `contract`, `billingfrequency`. Keys without a dot are camelCase
/// and split at every uppercase letter: `instanceId` yields `instance`, `id`.
pub fn normalize_error_key(key: &str) -> Vec<String> {
    let flat = if key.contains('.') {
        key.to_lowercase().replace('.', "_")
    } else {
        let mut out = String::with_capacity(key.len() + 4);
        for ch in key.chars() {
            if ch.is_ascii_uppercase() {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        }
        out
    };

    flat.split('_')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn error_key_path(key: &str) -> AttributePath {
    normalize_error_key(key).into_iter().collect()
}

/// Map a failed API call onto `diags`.
pub fn handle_sdk_error(summary: &str, err: &leaseweb_api::Error, diags: &mut Diagnostics) {
    let Some(response) = err.response() else {
        debug!(summary, error = %err, "request failed without a response");
        diags.add_error(summary, err.to_string());
        return;
    };

    let Ok(decoded) = serde_json::from_str::<ErrorResponse>(&response.body) else {
        debug!(
            summary,
            status = response.status,
            http_response = %response.body,
            "undecodable error response"
        );
        diags.add_error(summary, DEFAULT_ERROR_MESSAGE);
        return;
    };

    let raw = serde_json::from_str::<serde_json::Value>(&response.body).unwrap_or_default();
    debug!(summary, status = response.status, response = %raw, "error response");

    if decoded.error_details.is_empty() {
        let detail = serde_json::to_string_pretty(&decoded)
            .unwrap_or_else(|_| DEFAULT_ERROR_MESSAGE.to_owned());
        diags.add_error(summary, detail);
        return;
    }

    for (key, messages) in &decoded.error_details {
        let path = error_key_path(key);
        for message in messages {
            diags.add_attribute_error(path.clone(), summary, message.as_str());
        }
    }
}
