//! Result type alias for cf-offers

use super::errors::OffersError;

/// Result type alias for cf-offers operations
///
/// # Examples
///
/// ```
/// use cf_offers::domain::result::Result;
/// use cf_offers::domain::errors::OffersError;
///
/// fn failing_function() -> Result<()> {
///     Err(OffersError::Validation("missing header(s) 'authorization'".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, OffersError>;
