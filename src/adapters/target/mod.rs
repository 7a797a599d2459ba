//! Adobe Target adapter
//!
//! Offer creation against the Target admin API and the auth header provider
//! that feeds it.

pub mod auth;
pub mod client;

pub use auth::{ApiKeyAuthProvider, TargetAuthProvider};
pub use client::{OfferPayload, TargetOffersClient, TARGET_V2_CONTENT_TYPE};
