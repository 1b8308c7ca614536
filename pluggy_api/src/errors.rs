//! Error types for the API client.

use serde::Deserialize;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client was constructed without an API key.
    #[error("Missing authorization for API communication")]
    MissingApiKey,
    /// The request never produced a response (connection, TLS or timeout failure).
    #[error("HTTP transport failed")]
    Transport(#[from] reqwest::Error),
    /// A request URL could not be constructed from the base URL and endpoint path.
    #[error("Invalid request URL")]
    InvalidUrl(#[from] url::ParseError),
    /// The API returned a non-success status with a structured `{code, message}` body.
    #[error("API error {code}: {message}")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },
    /// The API rejected one or more request parameters, with per-field detail.
    #[error("Validation failed: {message}")]
    Validation {
        status: u16,
        code: i64,
        message: String,
        details: Vec<ParameterErrorDetail>,
    },
    /// The connector rejected the submitted credentials before execution.
    #[error("Connector rejected credentials: {message}")]
    ConnectorValidation {
        status: u16,
        code: i64,
        message: String,
        errors: Vec<CredentialErrorDetail>,
    },
    /// The API returned a non-success status with a body this client cannot interpret.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A success response carried a body that failed to deserialize.
    #[error("Failed to decode response body")]
    Decode(#[source] serde_json::Error),
}

/// Per-field detail of a parameter validation failure.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParameterErrorDetail {
    pub code: Option<String>,
    pub message: String,
    /// Name of the offending request parameter.
    pub parameter: String,
}

/// Per-credential detail of a connector validation failure.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CredentialErrorDetail {
    pub code: Option<String>,
    pub message: String,
}

#[derive(Deserialize)]
struct RawErrorDetail {
    code: Option<String>,
    message: String,
    parameter: Option<String>,
}

#[derive(Deserialize)]
struct RawErrorBody {
    code: i64,
    message: String,
    details: Option<Vec<RawErrorDetail>>,
}

/// Classifies a non-success response into a domain error.
///
/// The vendor uses the same `{code, message}` envelope for all errors and
/// distinguishes validation failures by a `details` array; entries naming a
/// `parameter` are request-parameter violations, entries without one are
/// connector credential rejections.
pub(crate) fn classify_status(status: u16, body: &str) -> Error {
    let raw: RawErrorBody = match serde_json::from_str(body) {
        Ok(raw) => raw,
        Err(_) => {
            return Error::HttpStatus {
                status,
                body: truncate_body(body),
            }
        }
    };
    match raw.details {
        Some(details) if details.iter().any(|d| d.parameter.is_some()) => Error::Validation {
            status,
            code: raw.code,
            message: raw.message,
            details: details
                .into_iter()
                .map(|d| ParameterErrorDetail {
                    code: d.code,
                    message: d.message,
                    parameter: d.parameter.unwrap_or_default(),
                })
                .collect(),
        },
        Some(details) => Error::ConnectorValidation {
            status,
            code: raw.code,
            message: raw.message,
            errors: details
                .into_iter()
                .map(|d| CredentialErrorDetail {
                    code: d.code,
                    message: d.message,
                })
                .collect(),
        },
        None => Error::Api {
            status,
            code: raw.code,
            message: raw.message,
        },
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary; vendor error pages are not ASCII-only.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_body_becomes_api_error() {
        let err = classify_status(403, r#"{"code": 403, "message": "Forbidden"}"#);
        match err {
            Error::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 403);
                assert_eq!(code, 403);
                assert_eq!(message, "Forbidden");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn details_with_parameter_become_validation_error() {
        let body = r#"{
            "code": 400,
            "message": "Invalid parameters",
            "details": [
                {"code": "INVALID_URL", "message": "webhookUrl must be a valid URL", "parameter": "webhookUrl"}
            ]
        }"#;
        let err = classify_status(400, body);
        match err {
            Error::Validation { details, .. } => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].parameter, "webhookUrl");
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn details_without_parameter_become_connector_validation_error() {
        let body = r#"{
            "code": 400,
            "message": "Parameter validation error",
            "details": [
                {"code": "INVALID_CPF", "message": "cpf must have 11 digits"}
            ]
        }"#;
        let err = classify_status(400, body);
        match err {
            Error::ConnectorValidation { errors, .. } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].code.as_deref(), Some("INVALID_CPF"));
            }
            other => panic!("expected ConnectorValidation error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_body_keeps_status_and_snippet() {
        let err = classify_status(502, "Bad Gateway");
        match err {
            Error::HttpStatus { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("expected HttpStatus error, got {other:?}"),
        }
    }

    #[test]
    fn long_bodies_are_truncated() {
        let long = "x".repeat(5000);
        let snippet = truncate_body(&long);
        assert!(snippet.len() < 2100);
        assert!(snippet.ends_with("...[truncated]"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 2001 bytes, with a two-byte char straddling the cut index.
        let body = format!("x{}", "á".repeat(1000));
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert!(snippet.strip_suffix("...[truncated]").unwrap().len() <= 2000);
    }

    #[test]
    fn oversized_multibyte_body_classifies_without_panicking() {
        let body = format!("x{}", "á".repeat(1200));
        let err = classify_status(502, &body);
        match err {
            Error::HttpStatus { status, body } => {
                assert_eq!(status, 502);
                assert!(body.ends_with("...[truncated]"));
            }
            other => panic!("expected HttpStatus error, got {other:?}"),
        }
    }
}
