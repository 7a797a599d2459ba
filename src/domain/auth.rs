//! Auth context shared by the host console

use crate::config::SecretString;
use secrecy::ExposeSecret;

/// Credentials and repository host read from the host's shared context
///
/// Read fresh for each modal operation and dropped when it ends. The IMS token
/// is zeroized on drop and redacted from `Debug` output.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// IMS access token of the signed-in console user
    pub ims_token: SecretString,

    /// IMS organization id
    pub ims_org: String,

    /// Repository (author) host, e.g. `author-p1-e2.adobeaemcloud.com`
    pub repo_host: String,
}

impl AuthContext {
    /// Build a context, rejecting empty fields
    pub fn new(
        ims_token: SecretString,
        ims_org: impl Into<String>,
        repo_host: impl Into<String>,
    ) -> Result<Self, String> {
        let ims_org = ims_org.into();
        let repo_host = repo_host.into();

        if ims_token.expose_secret().is_empty() {
            return Err("imsToken cannot be empty".to_string());
        }
        if ims_org.trim().is_empty() {
            return Err("imsOrg cannot be empty".to_string());
        }
        if repo_host.trim().is_empty() {
            return Err("aemHost cannot be empty".to_string());
        }

        Ok(Self {
            ims_token,
            ims_org,
            repo_host,
        })
    }

    /// `Authorization` header value for collaborator calls
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.ims_token.expose_secret())
    }

    /// Repository base URL; a bare host is assumed to be https
    pub fn repo_url(&self) -> String {
        if self.repo_host.starts_with("http://") || self.repo_host.starts_with("https://") {
            self.repo_host.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", self.repo_host.trim_end_matches('/'))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn context(host: &str) -> AuthContext {
        AuthContext::new(secret_string("tok".to_string()), "org@AdobeOrg", host).unwrap()
    }

    #[test]
    fn test_bearer() {
        assert_eq!(context("author.example.com").bearer(), "Bearer tok");
    }

    #[test]
    fn test_repo_url() {
        assert_eq!(
            context("author.example.com").repo_url(),
            "https://author.example.com"
        );
        assert_eq!(
            context("http://localhost:4502/").repo_url(),
            "http://localhost:4502"
        );
    }

    #[test]
    fn test_rejects_empty_fields() {
        assert!(AuthContext::new(secret_string(String::new()), "org", "host").is_err());
        assert!(AuthContext::new(secret_string("t".to_string()), " ", "host").is_err());
        assert!(AuthContext::new(secret_string("t".to_string()), "org", "").is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", context("author.example.com"));
        assert!(!debug.contains("tok\""));
    }
}
