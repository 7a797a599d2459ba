//! Domain error types
//!
//! This module defines the error hierarchy for cf-offers.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main cf-offers error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum OffersError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Missing or malformed request input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Adobe Target offer service errors
    #[error("Target error: {0}")]
    Target(#[from] TargetError),

    /// Publish/export collaborator errors
    #[error("AEM error: {0}")]
    Aem(#[from] AemError),

    /// Host console capability errors
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// Batch handoff errors
    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),

    /// Authentication header derivation errors
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Modal used outside the state an operation requires
    #[error("Invalid modal state: {0}")]
    InvalidState(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Adobe Target offer service errors
///
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum TargetError {
    /// Transport failure before a response was received
    #[error("Failed to connect to Target: {0}")]
    ConnectionFailed(String),

    /// Non-success HTTP status from the offers endpoint
    #[error("request to {url} failed with status code {status}: {body}")]
    Upstream {
        url: String,
        status: u16,
        body: String,
    },

    /// Offer payload could not be encoded
    #[error("Invalid offer payload: {0}")]
    InvalidPayload(String),
}

/// Errors from the repository publish service and the export trigger
#[derive(Debug, Error)]
pub enum AemError {
    /// Transport failure
    #[error("Failed to connect to {service}: {message}")]
    ConnectionFailed { service: String, message: String },

    /// Publish request rejected
    #[error("Publish failed with status {status}: {body}")]
    PublishFailed { status: u16, body: String },

    /// Export trigger rejected
    #[error("Export trigger failed with status {status}: {body}")]
    ExportFailed { status: u16, body: String },

    /// Endpoint could not be built from the configured host
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Host console capability errors
#[derive(Debug, Error)]
pub enum HostError {
    /// Shared context key absent or empty
    #[error("Shared context value missing: {0}")]
    MissingContext(String),
}

/// Batch handoff errors
#[derive(Debug, Error)]
pub enum BatchError {
    /// No batch id was supplied with the modal
    #[error("batchId parameter is missing")]
    MissingBatchId,

    /// The store holds nothing under the id
    #[error("Invalid batch specified for exporting: {0}")]
    NotFound(String),

    /// The stored value is not a JSON array of fragment references
    #[error("Invalid batch data: {0}")]
    Malformed(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for OffersError {
    fn from(err: std::io::Error) -> Self {
        OffersError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for OffersError {
    fn from(err: serde_json::Error) -> Self {
        OffersError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for OffersError {
    fn from(err: toml::de::Error) -> Self {
        OffersError::Configuration(format!("TOML parse error: {err}"))
    }
}
