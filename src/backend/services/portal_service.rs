// src/backend/services/portal_service.rs
// Aggregated views for the public landing page and the client area. Each view is
// assembled in one call from every table it needs.

use crate::datasource::DataSource;
use crate::error::PortalError;
use crate::models::{Category, ClientId, ContentItem, Notification, Plan, SessionIdentity, SessionState};
use crate::services::{catalog_service, notification_service, plan_service, settings_service};
use candid::CandidType;
use serde::Deserialize;

#[derive(CandidType, Deserialize, Clone, Debug, PartialEq)]
pub struct PublicSite {
    /// Movies and series.
    pub releases: Vec<ContentItem>,
    pub cartoons: Vec<ContentItem>,
    pub plans: Vec<Plan>,
    pub trial_hours: u32,
    pub support_whatsapp: String,
}

#[derive(CandidType, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReferralInvite {
    pub code: ClientId,
    pub reward_days: u32,
    pub text: String,
}

#[derive(CandidType, Deserialize, Clone, Debug, PartialEq)]
pub struct ActivePortal {
    pub identity: SessionIdentity,
    pub catalog: Vec<ContentItem>,
    pub notifications: Vec<Notification>,
    pub has_unread: bool,
    pub referral: ReferralInvite,
}

/// Everything a suspended client may see: who they are and how to renew.
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SuspendedView {
    pub id: ClientId,
    pub name: String,
    pub renewal_link: Option<String>,
    pub support_whatsapp: String,
}

#[derive(CandidType, Deserialize, Clone, Debug, PartialEq)]
pub enum PortalView {
    Active(ActivePortal),
    Suspended(SuspendedView),
}

pub fn get_public_site(source: &dyn DataSource) -> PublicSite {
    let settings = settings_service::get_settings(source);
    PublicSite {
        releases: catalog_service::public_by_category(source, &[Category::Movie, Category::Series]),
        cartoons: catalog_service::public_by_category(source, &[Category::Cartoon]),
        plans: plan_service::public_plans(source),
        trial_hours: settings.trial_hours,
        support_whatsapp: settings.support_whatsapp,
    }
}

/// The client area for `session`. Suspended sessions never receive catalog,
/// notification or referral data.
pub fn get_portal(source: &dyn DataSource, session: &SessionState) -> PortalView {
    match session {
        SessionState::Active(identity) => {
            let notifications = notification_service::notifications_for(source, &identity.id);
            PortalView::Active(ActivePortal {
                identity: identity.clone(),
                catalog: catalog_service::subscriber_catalog(source),
                has_unread: !notifications.is_empty(),
                notifications,
                referral: referral_for(source, identity),
            })
        }
        SessionState::Suspended(identity) => PortalView::Suspended(SuspendedView {
            id: identity.id.clone(),
            name: identity.name.clone(),
            renewal_link: identity.renewal_link.clone(),
            support_whatsapp: settings_service::get_settings(source).support_whatsapp,
        }),
    }
}

pub fn get_referral_invite(source: &dyn DataSource, session: &SessionState) -> Result<ReferralInvite, PortalError> {
    match session {
        SessionState::Active(identity) => Ok(referral_for(source, identity)),
        SessionState::Suspended(identity) => Err(PortalError::SubscriptionSuspended(identity.id.clone())),
    }
}

fn referral_for(source: &dyn DataSource, identity: &SessionIdentity) -> ReferralInvite {
    let settings = settings_service::get_settings(source);
    ReferralInvite {
        code: identity.id.clone(),
        reward_days: settings.referral_reward_days,
        text: referral_text(&identity.id, settings.referral_reward_days, &settings.support_whatsapp),
    }
}

/// Share text for the "invite a friend" button.
pub fn referral_text(code: &str, reward_days: u32, support_whatsapp: &str) -> String {
    format!(
        "Hey! I'm using Guito Plus and the quality is amazing. 🎬\n\n\
         Use my code: *{code}* and get {reward_days} bonus days!\n\n\
         Talk to support: https://wa.me/{support_whatsapp}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppSettings, ContentInput};
    use crate::services::test_support::{demo, NOW};
    use crate::services::auth_service::client_login;
    use crate::storage::MemorySessionStore;
    use candid::Principal;

    fn login(source: &dyn DataSource, id: &str) -> SessionState {
        let mut sessions = MemorySessionStore::default();
        client_login(source, &mut sessions, &Principal::from_slice(&[4, 2]), id)
            .unwrap()
            .state
    }

    #[test]
    fn public_site_splits_catalog_and_sorts_plans() {
        let site = get_public_site(&demo());
        assert_eq!(site.releases.len(), 4);
        assert_eq!(site.cartoons.len(), 4);
        assert!(site.cartoons.iter().all(|c| c.category == Category::Cartoon));
        let prices: Vec<&str> = site.plans.iter().map(|p| p.price.as_str()).collect();
        assert_eq!(prices, vec!["29,90", "45,90", "75,90"]);
        assert_eq!(site.trial_hours, 6);
    }

    #[test]
    fn active_portal_has_catalog_notifications_and_referral() {
        let source = demo();
        let PortalView::Active(portal) = get_portal(&source, &login(&source, "882941")) else {
            panic!("expected active portal");
        };
        assert_eq!(portal.identity.name, "Ricardo Oliveira");
        assert!(!portal.catalog.is_empty());
        assert!(portal.has_unread);
        assert_eq!(portal.referral.code, "882941");
        assert_eq!(portal.referral.reward_days, 7);
        assert!(portal.referral.text.contains("*882941*"));
        assert!(portal.referral.text.contains("wa.me/5598982804577"));
    }

    #[test]
    fn suspended_portal_has_no_catalog_or_notifications() {
        let source = demo();
        let session = login(&source, "1234");
        assert_eq!(
            get_portal(&source, &session),
            PortalView::Suspended(SuspendedView {
                id: "1234".to_string(),
                name: "Test User".to_string(),
                renewal_link: session.identity().renewal_link.clone(),
                support_whatsapp: "5598982804577".to_string(),
            })
        );
        assert_eq!(
            get_referral_invite(&source, &session),
            Err(PortalError::SubscriptionSuspended("1234".to_string()))
        );
    }

    #[test]
    fn portal_reflects_saved_settings_and_exclusive_titles() {
        let mut source = demo();
        settings_service::update_settings(
            &mut source,
            AppSettings {
                referral_reward_days: 30,
                ..AppSettings::default()
            },
        )
        .unwrap();
        catalog_service::create_content(
            &mut source,
            ContentInput {
                title: "Members Cut".to_string(),
                category: Category::Series,
                image_url: "https://example.com/cut.jpg".to_string(),
                rating: 7.0,
                year: "2025".to_string(),
                is_new: true,
                is_subscriber_only: Some(true),
                synopsis: None,
                cast: vec![],
            },
            NOW + 1,
        )
        .unwrap();

        let session = login(&source, "882941");
        let PortalView::Active(portal) = get_portal(&source, &session) else {
            panic!("expected active portal");
        };
        assert_eq!(portal.catalog.len(), 1);
        assert_eq!(portal.catalog[0].title, "Members Cut");
        assert_eq!(get_referral_invite(&source, &session).unwrap().reward_days, 30);
        assert!(get_public_site(&source).releases.iter().all(|c| c.title != "Members Cut"));
    }
}
