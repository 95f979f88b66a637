// src/backend/models/lead.rs
use crate::models::common::{LeadId, Timestamp};
use crate::models::Record;
use candid::CandidType;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A trial or contact request left through the public contact form.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Validate)]
pub struct Lead {
    pub id: LeadId,
    #[validate(length(min = 1, max = 120))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 20))]
    pub phone: String,
    #[validate(length(max = 2000))]
    pub message: String,
    pub created_at: Timestamp,
}

#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Lead {
    pub fn from_form(id: LeadId, form: ContactForm, created_at: Timestamp) -> Self {
        Self {
            id,
            full_name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            message: form.message.trim().to_string(),
            created_at,
        }
    }
}

impl Record for Lead {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
