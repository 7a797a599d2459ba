//! Normalized web action responses

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{statusCode, body}` returned by every action invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub status_code: u16,
    pub body: Value,
}

impl ActionResponse {
    /// Successful export: status 200 with the literal body `"{}"`
    pub fn ok_empty() -> Self {
        Self {
            status_code: 200,
            body: Value::String("{}".to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Build `{statusCode, body: {error: {statusCode, message}}}` and log it
pub fn error_response(status_code: u16, message: impl Into<String>) -> ActionResponse {
    let message = message.into();
    tracing::info!("{status_code}: {message}");

    ActionResponse {
        status_code,
        body: serde_json::json!({
            "error": {
                "statusCode": status_code,
                "message": message,
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_empty_shape() {
        let json = serde_json::to_value(ActionResponse::ok_empty()).unwrap();
        assert_eq!(json, serde_json::json!({"statusCode": 200, "body": "{}"}));
    }

    #[test]
    fn test_error_response_shape() {
        let response = error_response(400, "missing parameter(s) 'tenant'");
        assert_eq!(response.status_code, 400);
        assert!(!response.is_success());
        assert_eq!(
            response.body,
            serde_json::json!({
                "error": {"statusCode": 400, "message": "missing parameter(s) 'tenant'"}
            })
        );
    }
}
