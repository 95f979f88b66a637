// src/backend/services/auth_service.rs
// Client login by subscriber ID and admin login by configured credentials.

use crate::config::PortalConfig;
use crate::datasource::DataSource;
use crate::error::PortalError;
use crate::models::{AdminSession, LoginResponse, PrincipalId, SessionState, Timestamp};
use crate::storage::SessionStore;
use crate::utils::crypto::{calculate_sha256_hex, constant_time_eq};
use candid::Principal;

/// IDs shorter than this are rejected before any lookup.
pub const MIN_CLIENT_ID_DIGITS: usize = 4;

/// Strips everything but ASCII digits from a submitted client ID.
pub fn normalize_client_id(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Resolves a submitted client ID into a session and stores it for `caller`.
///
/// Inactive records still produce a session, in the `Suspended` state, so the portal
/// can show the renewal screen; nothing else is reachable from it.
///
/// # Errors
/// * `NotAuthenticated` - the anonymous principal cannot hold a session.
/// * `InvalidInput` - fewer than four digits after normalization.
/// * `SubscriberNotFound` - no client with that exact ID.
pub fn client_login(
    source: &dyn DataSource,
    sessions: &mut dyn SessionStore,
    caller: &PrincipalId,
    raw_id: &str,
) -> Result<LoginResponse, PortalError> {
    if is_anonymous(caller) {
        return Err(PortalError::NotAuthenticated);
    }

    let client_id = normalize_client_id(raw_id);
    if client_id.len() < MIN_CLIENT_ID_DIGITS {
        return Err(PortalError::InvalidInput(format!(
            "Client ID must contain at least {} digits",
            MIN_CLIENT_ID_DIGITS
        )));
    }

    let client = source
        .clients()
        .get(&client_id)
        .ok_or_else(|| PortalError::SubscriberNotFound(client_id.clone()))?;

    let state = SessionState::for_client(&client);
    let message = match &state {
        SessionState::Active(identity) => format!("Welcome back, {}!", identity.name),
        SessionState::Suspended(identity) => {
            crate::log_info!("Suspended client {} logged in; portal locked", identity.id);
            PortalError::SubscriptionSuspended(identity.id.clone()).to_string()
        }
    };

    sessions.set_client_session(caller, state.clone());
    crate::log_info!("Client {} authenticated ({:?} mode)", client_id, source.mode());
    Ok(LoginResponse { state, message })
}

/// Clears the caller's client session. Returns whether one existed.
pub fn client_logout(sessions: &mut dyn SessionStore, caller: &PrincipalId) -> bool {
    sessions.clear_client_session(caller).is_some()
}

/// Hydrates the caller's session; `None` means unauthenticated.
pub fn current_session(sessions: &dyn SessionStore, caller: &PrincipalId) -> Option<SessionState> {
    sessions.client_session(caller)
}

/// The caller's session, or `NotAuthenticated`.
pub fn require_session(sessions: &dyn SessionStore, caller: &PrincipalId) -> Result<SessionState, PortalError> {
    current_session(sessions, caller).ok_or(PortalError::NotAuthenticated)
}

/// Checks the configured admin credentials and opens an admin session for `caller`.
/// The username comparison ignores case; the password is compared by SHA-256 digest.
pub fn admin_login(
    config: &PortalConfig,
    sessions: &mut dyn SessionStore,
    caller: &PrincipalId,
    username: &str,
    password: &str,
    now: Timestamp,
) -> Result<AdminSession, PortalError> {
    if is_anonymous(caller) {
        return Err(PortalError::NotAuthorized(
            "Sign in with an identity before opening an admin session".to_string(),
        ));
    }

    let credentials = config.admin_credentials.as_ref().ok_or_else(|| {
        PortalError::NotAuthorized("Password login is not configured".to_string())
    })?;

    let username_ok = username.trim().eq_ignore_ascii_case(&credentials.username);
    let digest = calculate_sha256_hex(password.as_bytes());
    let password_ok = constant_time_eq(digest.as_bytes(), credentials.password_sha256.as_bytes());

    if !(username_ok && password_ok) {
        crate::log_warn!("Rejected admin login from {}", caller);
        return Err(PortalError::NotAuthorized("Invalid admin credentials".to_string()));
    }

    let session = AdminSession {
        opened_at: now,
        expires_at: now.saturating_add(config.admin_session_ttl_ns),
    };
    sessions.set_admin_session(caller, session);
    crate::log_info!("Admin session opened for {}", caller);
    Ok(session)
}

pub fn admin_logout(sessions: &mut dyn SessionStore, caller: &PrincipalId) -> bool {
    sessions.clear_admin_session(caller).is_some()
}

/// Controllers and configured principals are always admins; anyone else needs an
/// unexpired session from `admin_login`. The anonymous principal is shared by every
/// unauthenticated caller and never counts as an admin.
pub fn is_admin(
    config: &PortalConfig,
    sessions: &dyn SessionStore,
    caller: &PrincipalId,
    caller_is_controller: bool,
    now: Timestamp,
) -> bool {
    if is_anonymous(caller) {
        return false;
    }
    caller_is_controller
        || config.admin_principals.contains(caller)
        || sessions
            .admin_session(caller)
            .is_some_and(|session| !session.is_expired(now))
}

fn is_anonymous(caller: &PrincipalId) -> bool {
    *caller == Principal::anonymous()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdminCredentials;
    use crate::datasource::FixtureSource;
    use crate::models::{ClientInput, ClientRecord, ClientStatus};
    use crate::services::client_service::toggle_client_status;
    use crate::services::test_support::{demo, each_source, production, NOW};
    use crate::storage::MemorySessionStore;

    fn caller() -> Principal {
        Principal::from_slice(&[7, 7, 7])
    }

    fn add_client(source: &mut dyn DataSource, id: &str, status: ClientStatus) {
        let client = ClientRecord::from_input(
            ClientInput {
                id: id.to_string(),
                name: format!("Client {id}"),
                email: None,
                renewal_link: None,
                custom_banner_url: None,
                expiry: "31/12/2030".to_string(),
                registration_date: "01/01/2024".to_string(),
                server: None,
                app_name: None,
                status: Some(status),
            },
            NOW,
        );
        source.clients_mut().put(client);
    }

    #[test]
    fn normalization_strips_non_digits() {
        assert_eq!(normalize_client_id("88-2941"), "882941");
        assert_eq!(normalize_client_id(" id: 12 34 "), "1234");
        assert_eq!(normalize_client_id("abc"), "");
    }

    #[test]
    fn demo_login_scenarios() {
        let source: FixtureSource = demo();
        let mut sessions = MemorySessionStore::default();

        let active = client_login(&source, &mut sessions, &caller(), "882941").unwrap();
        assert!(active.state.is_active());
        assert_eq!(active.state.identity().plan, "Guito Plus VIP");

        let suspended = client_login(&source, &mut sessions, &caller(), "1234").unwrap();
        assert!(matches!(suspended.state, SessionState::Suspended(_)));
        assert!(suspended.message.contains("suspended"));
        assert_eq!(current_session(&sessions, &caller()), Some(suspended.state));

        assert_eq!(
            client_login(&source, &mut sessions, &caller(), "555555").unwrap_err(),
            PortalError::SubscriberNotFound("555555".to_string())
        );
    }

    #[test]
    fn formatted_id_is_normalized_before_lookup() {
        let source = demo();
        let mut sessions = MemorySessionStore::default();
        let response = client_login(&source, &mut sessions, &caller(), "88-2941").unwrap();
        assert_eq!(response.state.identity().id, "882941");
    }

    #[test]
    fn short_ids_are_rejected() {
        let source = demo();
        let mut sessions = MemorySessionStore::default();
        assert!(matches!(
            client_login(&source, &mut sessions, &caller(), "12-3"),
            Err(PortalError::InvalidInput(_))
        ));
        assert_eq!(current_session(&sessions, &caller()), None);
    }

    #[test]
    fn inactive_clients_always_get_suspended_sessions() {
        each_source(|source| {
            add_client(source, "777000", ClientStatus::Inactive);
            let mut sessions = MemorySessionStore::default();
            let response = client_login(source, &mut sessions, &caller(), "777000").unwrap();
            assert!(!response.state.is_active());
        });
    }

    #[test]
    fn logout_returns_to_unauthenticated() {
        let mut source = production();
        add_client(&mut source, "4444", ClientStatus::Active);
        let mut sessions = MemorySessionStore::default();
        client_login(&source, &mut sessions, &caller(), "4444").unwrap();
        assert!(require_session(&sessions, &caller()).is_ok());
        assert!(client_logout(&mut sessions, &caller()));
        assert_eq!(require_session(&sessions, &caller()), Err(PortalError::NotAuthenticated));
        assert!(!client_logout(&mut sessions, &caller()));
    }

    fn config_with_password(password: &str) -> PortalConfig {
        PortalConfig {
            admin_credentials: Some(AdminCredentials {
                username: "Admin".to_string(),
                password_sha256: calculate_sha256_hex(password.as_bytes()),
            }),
            admin_session_ttl_ns: 100,
            ..PortalConfig::default()
        }
    }

    #[test]
    fn admin_login_checks_credentials_and_expires() {
        let config = config_with_password("s3cret");
        let mut sessions = MemorySessionStore::default();

        assert!(admin_login(&config, &mut sessions, &caller(), "admin", "wrong", 0).is_err());
        assert!(!is_admin(&config, &sessions, &caller(), false, 0));

        let session = admin_login(&config, &mut sessions, &caller(), "ADMIN", "s3cret", 10).unwrap();
        assert_eq!(session.expires_at, 110);
        assert!(is_admin(&config, &sessions, &caller(), false, 109));
        assert!(!is_admin(&config, &sessions, &caller(), false, 110));

        assert!(admin_logout(&mut sessions, &caller()));
        assert!(!is_admin(&config, &sessions, &caller(), false, 50));
    }

    #[test]
    fn controllers_and_listed_principals_are_admins() {
        let config = PortalConfig {
            admin_principals: vec![caller()],
            ..PortalConfig::default()
        };
        let sessions = MemorySessionStore::default();
        assert!(is_admin(&config, &sessions, &caller(), false, 0));
        let other = Principal::from_slice(&[1]);
        assert!(!is_admin(&config, &sessions, &other, false, 0));
        assert!(is_admin(&config, &sessions, &other, true, 0));
    }

    #[test]
    fn password_login_disabled_without_credentials() {
        let mut sessions = MemorySessionStore::default();
        assert!(matches!(
            admin_login(&PortalConfig::default(), &mut sessions, &caller(), "admin", "x", 0),
            Err(PortalError::NotAuthorized(_))
        ));
    }

    #[test]
    fn anonymous_caller_cannot_open_client_session() {
        let source = demo();
        let mut sessions = MemorySessionStore::default();
        assert_eq!(
            client_login(&source, &mut sessions, &Principal::anonymous(), "882941").unwrap_err(),
            PortalError::NotAuthenticated
        );
        assert_eq!(
            require_session(&sessions, &Principal::anonymous()),
            Err(PortalError::NotAuthenticated)
        );
    }

    #[test]
    fn anonymous_caller_cannot_become_admin() {
        let mut config = config_with_password("s3cret");
        let mut sessions = MemorySessionStore::default();
        let anonymous = Principal::anonymous();

        assert!(matches!(
            admin_login(&config, &mut sessions, &anonymous, "admin", "s3cret", 0),
            Err(PortalError::NotAuthorized(_))
        ));
        assert!(sessions.admin_session(&anonymous).is_none());

        sessions.set_admin_session(&anonymous, AdminSession { opened_at: 0, expires_at: 1_000 });
        config.admin_principals.push(anonymous);
        assert!(!is_admin(&config, &sessions, &anonymous, false, 10));
    }

    #[test]
    fn status_toggle_applies_at_next_login() {
        let mut source = demo();
        let mut sessions = MemorySessionStore::default();
        client_login(&source, &mut sessions, &caller(), "882941").unwrap();

        toggle_client_status(&mut source, "882941").unwrap();
        assert!(current_session(&sessions, &caller()).is_some_and(|s| s.is_active()));

        let relogin = client_login(&source, &mut sessions, &caller(), "882941").unwrap();
        assert!(matches!(relogin.state, SessionState::Suspended(_)));
        assert_eq!(current_session(&sessions, &caller()), Some(relogin.state));
    }
}
