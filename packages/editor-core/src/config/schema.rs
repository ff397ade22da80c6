//! Structural validation of the raw `config.json` payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// A single failed check, located by JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    pub path: String,
    pub message: String,
}

impl SchemaIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// The payload did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid backend config: {}", summarize(.issues))]
pub struct SchemaError {
    pub issues: Vec<SchemaIssue>,
}

impl SchemaError {
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|issue| issue.path == path)
    }
}

fn summarize(issues: &[SchemaIssue]) -> String {
    issues
        .iter()
        .map(|issue| {
            if issue.path.is_empty() {
                issue.message.clone()
            } else {
                format!("{}: {}", issue.path, issue.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Backend connection parameters as published by the server.
///
/// Both fields are optional; unknown fields are dropped during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(rename = "apiBase", skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(rename = "webSocketURL", skip_serializing_if = "Option::is_none")]
    pub web_socket_url: Option<String>,
}

impl BackendConfig {
    /// Check an untyped payload against the config schema.
    ///
    /// The root must be an object. Present fields must be strings holding
    /// absolute URLs; `null` does not count as absent. Every failing field is
    /// reported, not just the first one.
    pub fn validate(value: &Value) -> Result<Self, SchemaError> {
        let Value::Object(fields) = value else {
            return Err(SchemaError {
                issues: vec![SchemaIssue::new(
                    "",
                    format!("Expected object, received {}", kind(value)),
                )],
            });
        };

        let mut issues = Vec::new();
        let api_base = optional_url(fields, "apiBase", &mut issues);
        let web_socket_url = optional_url(fields, "webSocketURL", &mut issues);

        if !issues.is_empty() {
            return Err(SchemaError { issues });
        }

        Ok(Self {
            api_base,
            web_socket_url,
        })
    }
}

fn optional_url(
    fields: &Map<String, Value>,
    key: &str,
    issues: &mut Vec<SchemaIssue>,
) -> Option<String> {
    match fields.get(key)? {
        Value::String(value) => match Url::parse(value) {
            Ok(_) => Some(value.clone()),
            Err(_) => {
                issues.push(SchemaIssue::new(key, "Invalid url"));
                None
            }
        },
        other => {
            issues.push(SchemaIssue::new(
                key,
                format!("Expected string, received {}", kind(other)),
            ));
            None
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_is_valid() {
        let config = BackendConfig::validate(&json!({})).unwrap();
        assert_eq!(config, BackendConfig::default());
    }

    #[test]
    fn test_both_fields() {
        let config = BackendConfig::validate(&json!({
            "apiBase": "https://refinery.example/api/v1",
            "webSocketURL": "wss://refinery.example/xtext-service",
        }))
        .unwrap();

        assert_eq!(
            config.api_base.as_deref(),
            Some("https://refinery.example/api/v1")
        );
        assert_eq!(
            config.web_socket_url.as_deref(),
            Some("wss://refinery.example/xtext-service")
        );
    }

    #[test]
    fn test_unknown_fields_are_stripped() {
        let config = BackendConfig::validate(&json!({
            "apiBase": "https://x.test/api",
            "chatURL": "https://x.test/chat",
        }))
        .unwrap();

        assert_eq!(config.api_base.as_deref(), Some("https://x.test/api"));
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "apiBase": "https://x.test/api" })
        );
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let err = BackendConfig::validate(&json!({ "apiBase": 42 })).unwrap_err();
        assert!(err.has_issue_at("apiBase"));
        assert_eq!(
            err.to_string(),
            "Invalid backend config: apiBase: Expected string, received number"
        );
    }

    #[test]
    fn test_null_is_not_absent() {
        let err = BackendConfig::validate(&json!({ "webSocketURL": null })).unwrap_err();
        assert!(err.has_issue_at("webSocketURL"));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let err = BackendConfig::validate(&json!({ "apiBase": "/api/v1" })).unwrap_err();
        assert_eq!(err.issues, vec![SchemaIssue::new("apiBase", "Invalid url")]);
    }

    #[test]
    fn test_all_issues_are_reported() {
        let err = BackendConfig::validate(&json!({
            "apiBase": true,
            "webSocketURL": ["ws://x.test"],
        }))
        .unwrap_err();

        assert_eq!(err.issues.len(), 2);
        assert!(err.has_issue_at("apiBase"));
        assert!(err.has_issue_at("webSocketURL"));
    }

    #[test]
    fn test_non_object_root_is_rejected() {
        for value in [json!(null), json!([]), json!("config"), json!(1)] {
            let err = BackendConfig::validate(&value).unwrap_err();
            assert!(err.has_issue_at(""), "{value}");
        }
    }
}
