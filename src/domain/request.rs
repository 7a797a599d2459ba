//! Export request built per action invocation

use super::ids::Tenant;
use std::collections::BTreeMap;
use std::fmt;

/// Validated input for one offer export
///
/// Constructed from the incoming action parameters after the required inputs
/// have been checked, then dropped when the invocation ends.
#[derive(Clone)]
pub struct ExportRequest {
    /// Target tenant receiving the offer
    pub tenant: Tenant,

    /// Outbound authentication headers derived from the incoming request
    pub auth_headers: BTreeMap<String, String>,
}

impl ExportRequest {
    pub fn new(tenant: Tenant, auth_headers: BTreeMap<String, String>) -> Self {
        Self {
            tenant,
            auth_headers,
        }
    }
}

// Header values carry credentials, so only the names are printed.
impl fmt::Debug for ExportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportRequest")
            .field("tenant", &self.tenant)
            .field("auth_headers", &self.auth_headers.keys().collect::<Vec<_>>())
            .finish()
    }
}
