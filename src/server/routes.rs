//! HTTP routes exposing the export action as a web action.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::action::params::{HEADERS_KEY, METHOD_KEY};
use crate::core::action::{error_response, ActionParams, ActionResponse, ExportAction};

/// Route the export action is served on
pub const EXPORT_ROUTE: &str = "/api/v1/web/export";

/// Shared application state.
pub struct AppState {
    pub action: ExportAction,
}

/// Build the router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(EXPORT_ROUTE, post(export_handler))
        .with_state(state)
}

/// Handler for export invocations.
///
/// Query parameters and a JSON object body are merged into the action
/// parameters (body wins); request headers are passed through lower-cased.
async fn export_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let params = match invocation_params(&method, query, &headers, &body) {
        Ok(params) => params,
        Err(message) => return into_http(error_response(400, message)),
    };

    into_http(state.action.run(&params).await)
}

fn invocation_params(
    method: &Method,
    query: HashMap<String, String>,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<ActionParams, String> {
    let mut params = ActionParams::new();
    params.merge(
        query
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect(),
    );

    if !body.is_empty() {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => params.merge(map),
            Ok(_) => return Err("request body must be a JSON object".to_string()),
            Err(e) => return Err(format!("invalid JSON body: {e}")),
        }
    }

    let forwarded: Map<String, Value> = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_lowercase(), Value::String(v.to_string())))
        })
        .collect();

    let mut platform = Map::new();
    platform.insert(HEADERS_KEY.to_string(), Value::Object(forwarded));
    platform.insert(
        METHOD_KEY.to_string(),
        Value::String(method.as_str().to_lowercase()),
    );
    params.merge(platform);

    Ok(params)
}

/// Map an action response onto HTTP; a string body is sent verbatim
fn into_http(response: ActionResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    match response.body {
        Value::String(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        body => (status, Json(body)).into_response(),
    }
}
