// src/backend/models/common.rs
use candid::{CandidType, Principal};
use serde::{Deserialize, Serialize};

pub type ContentId = String;
pub type PlanId = String;
pub type ClientId = String; // Digits only, doubles as the login credential
pub type NotificationId = String;
pub type LeadId = String;
pub type PrincipalId = Principal;

pub type Timestamp = u64; // Nanoseconds since epoch

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Copy, Hash)]
pub enum Category {
    Movie,
    Series,
    Cartoon,
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

impl ClientStatus {
    pub fn toggled(self) -> Self {
        match self {
            ClientStatus::Active => ClientStatus::Inactive,
            ClientStatus::Inactive => ClientStatus::Active,
        }
    }
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Alert,
    Promo,
}

/// Where the records behind every endpoint come from.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub enum DataMode {
    /// Stable-memory tables that survive upgrades.
    Production,
    /// Bundled sample data held on the heap; mutations are lost on upgrade.
    #[default]
    Demo,
}

/// Trims a user-supplied optional field and collapses blank values to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
