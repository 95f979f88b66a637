// src/backend/error.rs
use candid::CandidType;
use serde::Deserialize;
use thiserror::Error;

#[derive(CandidType, Deserialize, Error, Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    #[error("Subscriber not found: {0}")]
    SubscriberNotFound(String),

    #[error("Subscription suspended or expired for subscriber {0}. Contact support to renew.")]
    SubscriptionSuspended(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    #[error("No active session")]
    NotAuthenticated,

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal canister error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for PortalError {
    fn from(errors: validator::ValidationErrors) -> Self {
        PortalError::InvalidInput(errors.to_string())
    }
}
