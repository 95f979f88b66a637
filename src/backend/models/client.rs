// src/backend/models/client.rs
use crate::models::common::{non_blank, ClientId, ClientStatus, Timestamp};
use crate::models::Record;
use candid::CandidType;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const DEFAULT_SERVER: &str = "plus.guitoserve.tv";
pub const DEFAULT_PLAN_LABEL: &str = "VIP Plan";

/// A subscriber. `status` is the only gate on portal access.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Validate)]
pub struct ClientRecord {
    #[validate(custom(function = "validate_client_id"))]
    pub id: ClientId,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(url)]
    pub renewal_link: Option<String>,
    #[validate(url)]
    pub custom_banner_url: Option<String>,
    /// Free text, shown as-is ("31/12/2025").
    #[validate(length(max = 40))]
    pub expiry: String,
    #[validate(length(max = 40))]
    pub registration_date: String,
    #[validate(length(min = 1, max = 200))]
    pub server: String,
    #[validate(length(min = 1, max = 120))]
    pub app_name: String,
    pub status: ClientStatus,
    #[serde(default)]
    pub created_at: Timestamp,
}

#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct ClientInput {
    pub id: ClientId,
    pub name: String,
    pub email: Option<String>,
    pub renewal_link: Option<String>,
    pub custom_banner_url: Option<String>,
    pub expiry: String,
    pub registration_date: String,
    pub server: Option<String>,
    pub app_name: Option<String>,
    pub status: Option<ClientStatus>,
}

impl ClientRecord {
    pub fn from_input(input: ClientInput, created_at: Timestamp) -> Self {
        Self {
            id: input.id.trim().to_string(),
            name: input.name.trim().to_string(),
            email: non_blank(input.email),
            renewal_link: non_blank(input.renewal_link),
            custom_banner_url: non_blank(input.custom_banner_url),
            expiry: input.expiry.trim().to_string(),
            registration_date: input.registration_date.trim().to_string(),
            server: non_blank(input.server).unwrap_or_else(|| DEFAULT_SERVER.to_string()),
            app_name: non_blank(input.app_name).unwrap_or_else(|| DEFAULT_PLAN_LABEL.to_string()),
            status: input.status.unwrap_or_default(),
            created_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ClientStatus::Active
    }
}

impl Record for ClientRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// Client IDs double as login credentials: non-empty, ASCII digits only.
pub fn is_valid_client_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
}

fn validate_client_id(id: &str) -> Result<(), ValidationError> {
    if is_valid_client_id(id) {
        Ok(())
    } else {
        Err(ValidationError::new("client_id_must_be_digits"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: &str) -> ClientInput {
        ClientInput {
            id: id.to_string(),
            name: "Ricardo Oliveira".to_string(),
            email: Some("ricardo@email.com".to_string()),
            renewal_link: Some(String::new()),
            custom_banner_url: None,
            expiry: "25/12/2025".to_string(),
            registration_date: "01/01/2024".to_string(),
            server: None,
            app_name: Some("  ".to_string()),
            status: None,
        }
    }

    #[test]
    fn blank_fields_take_defaults() {
        let client = ClientRecord::from_input(input("882941"), 0);
        assert_eq!(client.renewal_link, None);
        assert_eq!(client.server, DEFAULT_SERVER);
        assert_eq!(client.app_name, DEFAULT_PLAN_LABEL);
        assert!(client.is_active());
        assert!(client.validate().is_ok());
    }

    #[test]
    fn id_must_be_digits() {
        assert!(is_valid_client_id("882941"));
        assert!(!is_valid_client_id(""));
        assert!(!is_valid_client_id("88-2941"));
        let client = ClientRecord::from_input(input("abc"), 0);
        assert!(client.validate().unwrap_err().field_errors().contains_key("id"));
    }
}
