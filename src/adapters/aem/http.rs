//! HTTP implementation of the publish and export collaborators
//!
//! Publish goes to the repository's replication endpoint with
//! `cmd=Activate` and one `path` field per fragment. Export posts the paths to
//! the deployed export web action.

use super::FragmentActions;
use crate::config::{AemConfig, TargetConfig};
use crate::domain::{AemError, AuthContext, FragmentId, OffersError, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Serialize;

/// IMS organization header understood by Adobe gateways
pub const IMS_ORG_HEADER: &str = "x-gw-ims-org-id";

/// Repository host header read by the export web action
pub const AEM_HOST_HEADER: &str = "x-aem-host";

#[derive(Debug, Serialize)]
struct ExportTriggerBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    tenant: Option<&'a str>,
    paths: &'a [FragmentId],
}

/// reqwest-backed [`FragmentActions`]
#[derive(Debug, Clone)]
pub struct HttpFragmentActions {
    client: Client,
    export_action_url: String,
    publish_path: String,
    tenant: Option<String>,
}

impl HttpFragmentActions {
    /// Build from the `[aem]` and `[target]` sections
    pub fn new(aem: &AemConfig, target: &TargetConfig) -> Result<Self> {
        let client = Client::builder().build().map_err(|e| {
            OffersError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            export_action_url: aem.export_action_url.clone(),
            publish_path: aem.publish_path.clone(),
            tenant: target.tenant.clone(),
        })
    }

    fn publish_url(&self, auth: &AuthContext) -> Result<String> {
        let url = format!("{}{}", auth.repo_url(), self.publish_path);
        match url::Url::parse(&url) {
            Ok(_) => Ok(url),
            Err(e) => Err(AemError::InvalidEndpoint(format!("{url}: {e}")).into()),
        }
    }
}

#[async_trait]
impl FragmentActions for HttpFragmentActions {
    async fn trigger_publish(&self, auth: &AuthContext, paths: &[FragmentId]) -> Result<()> {
        let url = self.publish_url(auth)?;

        let mut form: Vec<(&str, &str)> = vec![("cmd", "Activate")];
        form.extend(paths.iter().map(|p| ("path", p.as_str())));

        tracing::debug!(url = %url, count = paths.len(), "Triggering publish");

        let resp = self
            .client
            .post(&url)
            .header(AUTHORIZATION, auth.bearer())
            .header(IMS_ORG_HEADER, &auth.ims_org)
            .form(&form)
            .send()
            .await
            .map_err(|e| AemError::ConnectionFailed {
                service: "publish".to_string(),
                message: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(AemError::PublishFailed { status, body }.into());
        }

        Ok(())
    }

    async fn trigger_export(&self, auth: &AuthContext, paths: &[FragmentId]) -> Result<()> {
        tracing::debug!(
            url = %self.export_action_url,
            count = paths.len(),
            "Triggering export"
        );

        let resp = self
            .client
            .post(&self.export_action_url)
            .header(AUTHORIZATION, auth.bearer())
            .header(IMS_ORG_HEADER, &auth.ims_org)
            .header(AEM_HOST_HEADER, &auth.repo_host)
            .json(&ExportTriggerBody {
                tenant: self.tenant.as_deref(),
                paths,
            })
            .send()
            .await
            .map_err(|e| AemError::ConnectionFailed {
                service: "export".to_string(),
                message: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(AemError::ExportFailed { status, body }.into());
        }

        Ok(())
    }
}
