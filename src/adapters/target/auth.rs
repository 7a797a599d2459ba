//! Outbound authentication for the Target admin API
//!
//! The export action never mints tokens. It forwards the caller's IMS bearer
//! token and adds the integration's API key.

use crate::config::{SecretString, TargetConfig};
use crate::domain::{OffersError, Result};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::collections::BTreeMap;

/// Derives the headers the Target API expects from the incoming request
///
/// Failures propagate to the caller as server errors.
#[async_trait]
pub trait TargetAuthProvider: Send + Sync {
    /// Build outbound auth headers from the incoming `Authorization` value
    async fn target_auth_headers(&self, authorization: &str)
        -> Result<BTreeMap<String, String>>;
}

/// Forwards the incoming bearer token and attaches the configured API key
#[derive(Debug, Clone)]
pub struct ApiKeyAuthProvider {
    api_key: Option<SecretString>,
}

impl ApiKeyAuthProvider {
    pub fn new(api_key: Option<SecretString>) -> Self {
        Self { api_key }
    }

    pub fn from_config(config: &TargetConfig) -> Self {
        Self::new(config.api_key.clone())
    }
}

#[async_trait]
impl TargetAuthProvider for ApiKeyAuthProvider {
    async fn target_auth_headers(
        &self,
        authorization: &str,
    ) -> Result<BTreeMap<String, String>> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            OffersError::Authentication("target.api_key is not configured".to_string())
        })?;

        let token = authorization.trim();
        if !token.to_lowercase().starts_with("bearer ") {
            return Err(OffersError::Authentication(
                "Authorization header is not a bearer token".to_string(),
            ));
        }

        let mut headers = BTreeMap::new();
        headers.insert("Authorization".to_string(), token.to_string());
        headers.insert(
            "x-api-key".to_string(),
            api_key.expose_secret().to_string(),
        );
        Ok(headers)
    }
}
