// src/backend/models/notification.rs
use crate::models::common::{non_blank, ClientId, NotificationId, NotificationKind, Timestamp};
use crate::models::Record;
use candid::CandidType;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An announcement on the notification board.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Validate)]
pub struct Notification {
    pub id: NotificationId,
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    pub kind: NotificationKind,
    /// `None` broadcasts to every client.
    pub target_user_id: Option<ClientId>,
    #[serde(default)]
    pub created_at: Timestamp,
}

#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct NotificationInput {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub target_user_id: Option<ClientId>,
}

impl Notification {
    pub fn from_input(id: NotificationId, input: NotificationInput, created_at: Timestamp) -> Self {
        Self {
            id,
            title: input.title.trim().to_string(),
            message: input.message.trim().to_string(),
            kind: input.kind,
            target_user_id: non_blank(input.target_user_id),
            created_at,
        }
    }

    pub fn is_broadcast(&self) -> bool {
        self.target_user_id.as_deref().map_or(true, |t| t.trim().is_empty())
    }

    pub fn is_visible_to(&self, client_id: &str) -> bool {
        self.is_broadcast() || self.target_user_id.as_deref() == Some(client_id)
    }
}

impl Record for Notification {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(target: Option<&str>) -> Notification {
        Notification::from_input(
            "1".to_string(),
            NotificationInput {
                title: "Test".to_string(),
                message: "Server maintenance tonight".to_string(),
                kind: NotificationKind::Alert,
                target_user_id: target.map(str::to_string),
            },
            0,
        )
    }

    #[test]
    fn empty_target_is_broadcast() {
        let n = note(Some(""));
        assert_eq!(n.target_user_id, None);
        assert!(n.is_visible_to("882941"));
        assert!(n.is_visible_to("999999"));
    }

    #[test]
    fn targeted_only_reaches_its_client() {
        let n = note(Some("882941"));
        assert!(!n.is_broadcast());
        assert!(n.is_visible_to("882941"));
        assert!(!n.is_visible_to("999999"));
    }
}
