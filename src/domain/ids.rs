//! Domain identifier types with validation
//!
//! Newtype wrappers for the identifiers that cross the action and modal
//! boundaries. Each type rejects empty values at construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content Fragment identifier
///
/// Usually a repository path such as `/content/dam/site/fragments/hero`,
/// but the console may hand over other opaque ids, which are kept verbatim.
///
/// # Examples
///
/// ```
/// use cf_offers::domain::ids::FragmentId;
///
/// let id = FragmentId::new("/content/dam/site/hero").unwrap();
/// assert_eq!(id.relative_path(), "content/dam/site/hero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FragmentId(String);

impl FragmentId {
    /// Creates a new FragmentId
    ///
    /// # Returns
    ///
    /// Returns `Err` if the id is empty
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Content Fragment ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id without its leading slash, as used in editor routes
    pub fn relative_path(&self) -> &str {
        self.0.strip_prefix('/').unwrap_or(&self.0)
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FragmentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FragmentId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FragmentId> for String {
    fn from(id: FragmentId) -> Self {
        id.0
    }
}

impl AsRef<str> for FragmentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Opaque key under which the host stores a selection batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatchId(String);

impl BatchId {
    /// Creates a new BatchId
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Batch ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Generates a fresh random batch id
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the batch ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BatchId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Adobe Target tenant name, the first path segment of the offers API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenant(String);

impl Tenant {
    /// Creates a new Tenant
    ///
    /// Tenants are single URL path segments, so `/`, `?` and `#` are rejected.
    pub fn new(tenant: impl Into<String>) -> Result<Self, String> {
        let tenant = tenant.into();
        if tenant.trim().is_empty() {
            return Err("Tenant cannot be empty".to_string());
        }
        if tenant.contains(['/', '?', '#']) {
            return Err(format!("Tenant contains invalid characters: {tenant}"));
        }
        Ok(Self(tenant))
    }

    /// Returns the tenant as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Tenant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_id_valid() {
        let id = FragmentId::new("/content/a").unwrap();
        assert_eq!(id.as_str(), "/content/a");
        assert_eq!(id.relative_path(), "content/a");
        assert_eq!(id.to_string(), "/content/a");
    }

    #[test]
    fn test_fragment_id_rejects_empty() {
        assert!(FragmentId::new("").is_err());
        assert!(FragmentId::new("   ").is_err());
    }

    #[test]
    fn test_fragment_id_accepts_opaque_ids() {
        let id = FragmentId::new("urn:aaid:aem:123").unwrap();
        assert_eq!(id.as_str(), "urn:aaid:aem:123");
        assert_eq!(id.relative_path(), "urn:aaid:aem:123");
    }

    #[test]
    fn test_fragment_id_deserialize_validates() {
        let ok: FragmentId = serde_json::from_str("\"/content/a\"").unwrap();
        assert_eq!(ok.as_str(), "/content/a");
        assert!(serde_json::from_str::<FragmentId>("\"\"").is_err());
    }

    #[test]
    fn test_fragment_id_serializes_as_plain_string() {
        let id = FragmentId::new("/content/a").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"/content/a\"");
    }

    #[test]
    fn test_batch_id() {
        assert!(BatchId::new("").is_err());
        assert_eq!(BatchId::new("b1").unwrap().as_str(), "b1");
        assert_ne!(BatchId::generate(), BatchId::generate());
    }

    #[test]
    fn test_tenant() {
        assert_eq!(Tenant::new("acme").unwrap().as_str(), "acme");
        assert!(Tenant::new("").is_err());
        assert!(Tenant::new("acme/../x").is_err());
    }
}
