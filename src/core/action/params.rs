//! Web action parameters and input checks
//!
//! A web action receives one flat JSON object: request parameters merged with
//! platform keys such as `__ow_headers` (lower-cased request headers) and
//! `__ow_method`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the incoming request headers
pub const HEADERS_KEY: &str = "__ow_headers";

/// Key holding the incoming request method
pub const METHOD_KEY: &str = "__ow_method";

/// Parameters of one action invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionParams(Map<String, Value>);

impl ActionParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value; anything but an object yields empty parameters
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Set a parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set a request header; names are stored lower-case
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        let headers = self
            .0
            .entry(HEADERS_KEY.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !headers.is_object() {
            *headers = Value::Object(Map::new());
        }
        if let Value::Object(map) = headers {
            map.insert(name.to_lowercase(), Value::String(value.into()));
        }
        self
    }

    /// Merge every top-level key of another object, replacing existing ones
    pub fn merge(&mut self, other: Map<String, Value>) {
        self.0.extend(other);
    }

    /// String parameter, if present and a string
    pub fn param(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Request header by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.0
            .get(HEADERS_KEY)
            .and_then(|h| h.get(name.to_lowercase()))
            .and_then(Value::as_str)
    }
}

/// Keys from `required` that are absent or empty strings in `obj`
///
/// Dotted keys (`a.b`) are resolved through nested objects.
fn missing_keys(obj: &Value, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|key| {
            let found = key
                .split('.')
                .try_fold(obj, |current, segment| current.get(segment));
            match found {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.is_empty(),
                Some(_) => false,
            }
        })
        .map(|key| key.to_string())
        .collect()
}

/// Check required parameters and headers
///
/// Returns `None` when everything is present, otherwise a message such as
/// `missing header(s) 'authorization' and missing parameter(s) 'tenant'`.
/// Header names are compared lower-case.
pub fn check_missing_request_inputs(
    params: &ActionParams,
    required_params: &[&str],
    required_headers: &[&str],
) -> Option<String> {
    let mut message: Option<String> = None;

    let headers = params
        .0
        .get(HEADERS_KEY)
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));
    let lowered: Vec<String> = required_headers.iter().map(|h| h.to_lowercase()).collect();
    let lowered: Vec<&str> = lowered.iter().map(String::as_str).collect();
    let missing_headers = missing_keys(&headers, &lowered);
    if !missing_headers.is_empty() {
        message = Some(format!("missing header(s) '{}'", missing_headers.join(",")));
    }

    let all_params = Value::Object(params.0.clone());
    let missing_params = missing_keys(&all_params, required_params);
    if !missing_params.is_empty() {
        let part = format!("missing parameter(s) '{}'", missing_params.join(","));
        message = Some(match message {
            Some(existing) => format!("{existing} and {part}"),
            None => part,
        });
    }

    message
}

/// Render parameters for debug logging with the `authorization` header hidden
pub fn string_parameters(params: &ActionParams) -> String {
    let mut copy = params.0.clone();
    if let Some(Value::Object(headers)) = copy.get_mut(HEADERS_KEY) {
        if headers.contains_key("authorization") {
            headers.insert(
                "authorization".to_string(),
                Value::String("<hidden>".to_string()),
            );
        }
    }
    Value::Object(copy).to_string()
}
