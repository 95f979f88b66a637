// src/backend/models/session.rs
use crate::models::client::ClientRecord;
use crate::models::common::{ClientId, ClientStatus, Timestamp};
use candid::CandidType;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SESSION_EMAIL: &str = "subscriber@guitoplus.com";

/// The public face of a client record carried by a logged-in session.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionIdentity {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub plan: String,
    pub expiry: String,
    pub renewal_link: Option<String>,
    pub custom_banner_url: Option<String>,
    pub server: String,
    pub status: ClientStatus,
}

impl From<&ClientRecord> for SessionIdentity {
    fn from(client: &ClientRecord) -> Self {
        Self {
            id: client.id.clone(),
            name: client.name.clone(),
            email: client
                .email
                .clone()
                .unwrap_or_else(|| DEFAULT_SESSION_EMAIL.to_string()),
            plan: client.app_name.clone(),
            expiry: client.expiry.clone(),
            renewal_link: client.renewal_link.clone(),
            custom_banner_url: client.custom_banner_url.clone(),
            server: client.server.clone(),
            status: client.status,
        }
    }
}

/// Client-side trust level once a login lookup succeeded.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Active(SessionIdentity),
    /// Authenticated but locked: only the renewal screen is available.
    Suspended(SessionIdentity),
}

impl SessionState {
    pub fn for_client(client: &ClientRecord) -> Self {
        let identity = SessionIdentity::from(client);
        match client.status {
            ClientStatus::Active => SessionState::Active(identity),
            ClientStatus::Inactive => SessionState::Suspended(identity),
        }
    }

    pub fn identity(&self) -> &SessionIdentity {
        match self {
            SessionState::Active(identity) | SessionState::Suspended(identity) => identity,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active(_))
    }
}

#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct LoginResponse {
    pub state: SessionState,
    pub message: String,
}

/// Expiry of an admin session opened through `admin_login`.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Copy)]
pub struct AdminSession {
    pub opened_at: Timestamp,
    pub expires_at: Timestamp,
}

impl AdminSession {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }
}
