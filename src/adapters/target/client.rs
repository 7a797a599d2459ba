//! Adobe Target offers API client
//!
//! Posts one JSON offer per export request. There are no retries and no
//! timeout override: a single attempt decides the outcome.

use crate::config::{OfferConfig, TargetConfig};
use crate::domain::{ExportRequest, OffersError, Result, TargetError, Tenant};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use url::Url;

/// Media type of the Target admin API v2
pub const TARGET_V2_CONTENT_TYPE: &str = "application/vnd.adobe.target.v2+json";

/// Body of a JSON offer creation request
#[derive(Debug, Clone, Serialize)]
pub struct OfferPayload<'a> {
    pub name: &'a str,
    pub content: &'a serde_json::Value,
    pub workspace: &'a str,
}

impl<'a> From<&'a OfferConfig> for OfferPayload<'a> {
    fn from(offer: &'a OfferConfig) -> Self {
        Self {
            name: &offer.name,
            content: &offer.content,
            workspace: &offer.workspace,
        }
    }
}

/// Client for `POST {base_url}/{tenant}/target/offers/json`
///
/// # Example
///
/// ```no_run
/// use cf_offers::adapters::target::TargetOffersClient;
/// use cf_offers::config::TargetConfig;
///
/// # fn example() -> cf_offers::domain::Result<()> {
/// let client = TargetOffersClient::new(&TargetConfig::default())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TargetOffersClient {
    base_url: Url,
    client: Client,
    offer: OfferConfig,
}

impl TargetOffersClient {
    /// Create a client from the `[target]` configuration section
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `base_url` does not parse or the HTTP
    /// client cannot be built.
    pub fn new(config: &TargetConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            OffersError::Configuration(format!(
                "Invalid target.base_url '{}': {e}",
                config.base_url
            ))
        })?;

        let client = Client::builder().build().map_err(|e| {
            OffersError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url,
            client,
            offer: config.offer.clone(),
        })
    }

    /// Offers endpoint for a tenant
    pub fn offers_url(&self, tenant: &Tenant) -> String {
        format!(
            "{}/{}/target/offers/json",
            self.base_url.as_str().trim_end_matches('/'),
            tenant
        )
    }

    /// Create the configured offer for the request's tenant
    ///
    /// The derived auth headers are merged first; `Content-Type` is always the
    /// Target v2 media type.
    ///
    /// # Errors
    ///
    /// - [`TargetError::ConnectionFailed`] if no response was received
    /// - [`TargetError::Upstream`] for any non-2xx status, with the raw body
    pub async fn create_offer(&self, request: &ExportRequest) -> Result<StatusCode> {
        let url = self.offers_url(&request.tenant);
        let body = serde_json::to_vec(&OfferPayload::from(&self.offer))
            .map_err(|e| TargetError::InvalidPayload(e.to_string()))?;

        tracing::debug!(url = %url, tenant = %request.tenant, "Posting offer to Target");

        let mut builder = self.client.post(&url);
        for (name, value) in &request.auth_headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let response = builder
            .header(CONTENT_TYPE, TARGET_V2_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| TargetError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        tracing::info!(
            status = status.as_u16(),
            status_text = status.canonical_reason().unwrap_or_default(),
            "Export response received"
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TargetError::Upstream {
                url,
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn request(tenant: &str) -> ExportRequest {
        let mut headers = BTreeMap::new();
        headers.insert("Authorization".to_string(), "Bearer abc".to_string());
        headers.insert("x-api-key".to_string(), "client-id".to_string());
        ExportRequest::new(Tenant::new(tenant).unwrap(), headers)
    }

    fn client_for(base_url: &str) -> TargetOffersClient {
        let config = TargetConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        };
        TargetOffersClient::new(&config).unwrap()
    }

    #[test]
    fn test_offers_url() {
        let client = client_for("https://mc.adobe.io");
        let tenant = Tenant::new("acme").unwrap();
        assert_eq!(
            client.offers_url(&tenant),
            "https://mc.adobe.io/acme/target/offers/json"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = TargetConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            TargetOffersClient::new(&config),
            Err(OffersError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_create_offer_sends_payload_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/acme/target/offers/json")
            .match_header("content-type", TARGET_V2_CONTENT_TYPE)
            .match_header("authorization", "Bearer abc")
            .match_header("x-api-key", "client-id")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "name": "CF offer name",
                "content": {"content": "The content of the offer"},
                "workspace": "751852935"
            })))
            .with_status(201)
            .with_body(r#"{"id": 1}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let status = client.create_offer(&request("acme")).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_offer_upstream_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/acme/target/offers/json")
            .with_status(403)
            .with_body("forbidden")
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client.create_offer(&request("acme")).await.unwrap_err();

        match err {
            OffersError::Target(TargetError::Upstream { status, body, url }) => {
                assert_eq!(status, 403);
                assert_eq!(body, "forbidden");
                assert!(url.ends_with("/acme/target/offers/json"));
            }
            other => panic!("Expected upstream error, got {other:?}"),
        }
    }
}
