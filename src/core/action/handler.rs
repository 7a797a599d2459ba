//! Export action: validates the invocation, derives auth headers and creates
//! one Target offer.

use super::params::{check_missing_request_inputs, string_parameters, ActionParams};
use super::response::{error_response, ActionResponse};
use crate::adapters::target::{ApiKeyAuthProvider, TargetAuthProvider, TargetOffersClient};
use crate::config::TargetConfig;
use crate::domain::{ExportRequest, OffersError, Result, Tenant};
use std::sync::Arc;
use tracing::Instrument;

/// Parameters every invocation must carry
pub const REQUIRED_PARAMS: &[&str] = &["tenant"];

/// Headers every invocation must carry
pub const REQUIRED_HEADERS: &[&str] = &["Authorization"];

/// Stateless handler for one export request per call
#[derive(Clone)]
pub struct ExportAction {
    client: TargetOffersClient,
    auth: Arc<dyn TargetAuthProvider>,
}

impl ExportAction {
    pub fn new(client: TargetOffersClient, auth: Arc<dyn TargetAuthProvider>) -> Self {
        Self { client, auth }
    }

    /// Build with the reqwest client and the API key auth provider
    pub fn from_config(config: &TargetConfig) -> Result<Self> {
        Ok(Self::new(
            TargetOffersClient::new(config)?,
            Arc::new(ApiKeyAuthProvider::from_config(config)),
        ))
    }

    /// Handle one invocation
    ///
    /// Never fails: validation problems map to 400 and everything else to 500,
    /// each logged before the response is returned.
    pub async fn run(&self, params: &ActionParams) -> ActionResponse {
        let span = tracing::info_span!(
            "export_action",
            activation_id = %uuid::Uuid::new_v4()
        );

        async {
            tracing::info!("Calling the export action");
            tracing::debug!(params = %string_parameters(params), "Action parameters");

            match self.export(params).await {
                Ok(()) => ActionResponse::ok_empty(),
                Err(OffersError::Validation(message)) => {
                    tracing::error!(error = %message, "Rejected export request");
                    error_response(400, message)
                }
                Err(e) => {
                    crate::log_error_with_context!(&e, "Export action failed");
                    error_response(500, format!("Server error: {e}"))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn export(&self, params: &ActionParams) -> Result<()> {
        if let Some(message) =
            check_missing_request_inputs(params, REQUIRED_PARAMS, REQUIRED_HEADERS)
        {
            return Err(OffersError::Validation(message));
        }

        let request = self.build_request(params).await?;
        let status = self.client.create_offer(&request).await?;

        tracing::info!(
            status = status.as_u16(),
            tenant = %request.tenant,
            "{}: successful export request",
            status.as_u16()
        );
        Ok(())
    }

    async fn build_request(&self, params: &ActionParams) -> Result<ExportRequest> {
        let tenant = params
            .param("tenant")
            .ok_or_else(|| OffersError::Validation("missing parameter(s) 'tenant'".to_string()))
            .and_then(|t| Tenant::new(t).map_err(OffersError::Validation))?;

        let authorization = params.header("authorization").ok_or_else(|| {
            OffersError::Validation("missing header(s) 'authorization'".to_string())
        })?;

        let auth_headers = self.auth.target_auth_headers(authorization).await?;
        Ok(ExportRequest::new(tenant, auth_headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::BTreeMap;

    struct FailingAuth;

    #[async_trait]
    impl TargetAuthProvider for FailingAuth {
        async fn target_auth_headers(
            &self,
            _authorization: &str,
        ) -> Result<BTreeMap<String, String>> {
            Err(OffersError::Authentication("token exchange failed".to_string()))
        }
    }

    fn action_with(auth: Arc<dyn TargetAuthProvider>) -> ExportAction {
        let config = TargetConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        };
        ExportAction::new(TargetOffersClient::new(&config).unwrap(), auth)
    }

    #[tokio::test]
    async fn test_missing_inputs_return_400() {
        let action = action_with(Arc::new(FailingAuth));
        let response = action.run(&ActionParams::new()).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body["error"]["message"],
            "missing header(s) 'authorization' and missing parameter(s) 'tenant'"
        );
    }

    #[tokio::test]
    async fn test_invalid_tenant_returns_400() {
        let action = action_with(Arc::new(FailingAuth));
        let params = ActionParams::new()
            .with_param("tenant", "acme/other")
            .with_header("Authorization", "Bearer abc");

        assert_eq!(action.run(&params).await.status_code, 400);
    }

    #[tokio::test]
    async fn test_auth_failure_returns_500() {
        let action = action_with(Arc::new(FailingAuth));
        let params = ActionParams::new()
            .with_param("tenant", "acme")
            .with_header("Authorization", "Bearer abc");

        let response = action.run(&params).await;
        assert_eq!(response.status_code, 500);
        let message = response.body["error"]["message"].as_str().unwrap();
        assert!(message.starts_with("Server error: "));
        assert!(message.contains("token exchange failed"));
    }
}
