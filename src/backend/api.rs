// src/backend/api.rs
// Candid endpoints. Everything here resolves the caller and clock, then hands off to
// the services with the installed data source and session store.

use crate::{
    error::PortalError,
    metrics::{self, DashboardOverview},
    models::{
        AdminSession, AppSettings, ClientInput, ClientRecord, ContactForm, ContentId, ContentInput,
        ContentItem, LeadId, Lead, LoginResponse, Notification, NotificationInput, Plan, PlanId,
        PlanInput, SessionState,
    },
    services::{
        auth_service, catalog_service, client_service, lead_service, notification_service,
        plan_service,
        portal_service::{self, PortalView, PublicSite, ReferralInvite},
        settings_service,
    },
    state::{with_state, with_state_mut},
    utils::guards::admin_guard,
    utils::time::now_ns,
};
use ic_cdk::caller;
use ic_cdk_macros::{query, update};

// --- Session Endpoints ---

#[update]
fn client_login(client_id: String) -> Result<LoginResponse, PortalError> {
    let caller = caller();
    let now = now_ns();
    with_state_mut(|state| {
        state.limiter.check(&caller, now)?;
        auth_service::client_login(state.source.as_ref(), state.sessions.as_mut(), &caller, &client_id)
    })?
}

#[update]
fn client_logout() -> Result<bool, PortalError> {
    let caller = caller();
    with_state_mut(|state| auth_service::client_logout(state.sessions.as_mut(), &caller))
}

#[query]
fn current_session() -> Result<Option<SessionState>, PortalError> {
    let caller = caller();
    with_state(|state| auth_service::current_session(state.sessions.as_ref(), &caller))
}

#[update]
fn admin_login(username: String, password: String) -> Result<AdminSession, PortalError> {
    let caller = caller();
    let now = now_ns();
    with_state_mut(|state| {
        state.limiter.check(&caller, now)?;
        auth_service::admin_login(&state.config, state.sessions.as_mut(), &caller, &username, &password, now)
    })?
}

#[update]
fn admin_logout() -> Result<bool, PortalError> {
    let caller = caller();
    with_state_mut(|state| auth_service::admin_logout(state.sessions.as_mut(), &caller))
}

#[query]
fn is_admin_session() -> bool {
    admin_guard().is_ok()
}

// --- Public Site ---

#[query]
fn get_public_site() -> Result<PublicSite, PortalError> {
    with_state(|state| portal_service::get_public_site(state.source.as_ref()))
}

#[query]
fn get_content_detail(id: ContentId) -> Result<ContentItem, PortalError> {
    let caller = caller();
    with_state(|state| {
        let has_active_session = state
            .sessions
            .client_session(&caller)
            .is_some_and(|session| session.is_active());
        catalog_service::get_content_detail(state.source.as_ref(), &id, has_active_session)
    })?
}

#[update]
fn submit_lead(form: ContactForm) -> Result<LeadId, PortalError> {
    let caller = caller();
    let now = now_ns();
    with_state_mut(|state| {
        state.limiter.check(&caller, now)?;
        lead_service::submit_lead(state.source.as_mut(), form, now)
    })?
}

// --- Client Portal ---

#[query]
fn get_portal() -> Result<PortalView, PortalError> {
    let caller = caller();
    with_state(|state| {
        let session = auth_service::require_session(state.sessions.as_ref(), &caller)?;
        Ok(portal_service::get_portal(state.source.as_ref(), &session))
    })?
}

#[query]
fn get_referral_invite() -> Result<ReferralInvite, PortalError> {
    let caller = caller();
    with_state(|state| {
        let session = auth_service::require_session(state.sessions.as_ref(), &caller)?;
        portal_service::get_referral_invite(state.source.as_ref(), &session)
    })?
}

// --- Admin: Content ---

#[query(guard = "admin_guard")]
fn list_content() -> Result<Vec<ContentItem>, PortalError> {
    with_state(|state| catalog_service::list_content(state.source.as_ref()))
}

#[update(guard = "admin_guard")]
fn create_content(input: ContentInput) -> Result<Vec<ContentItem>, PortalError> {
    let now = now_ns();
    with_state_mut(|state| catalog_service::create_content(state.source.as_mut(), input, now))?
}

#[update(guard = "admin_guard")]
fn update_content(id: ContentId, input: ContentInput) -> Result<Vec<ContentItem>, PortalError> {
    with_state_mut(|state| catalog_service::update_content(state.source.as_mut(), id, input))?
}

#[update(guard = "admin_guard")]
fn delete_content(id: ContentId) -> Result<Vec<ContentItem>, PortalError> {
    with_state_mut(|state| catalog_service::delete_content(state.source.as_mut(), &id))?
}

// --- Admin: Plans ---

#[query(guard = "admin_guard")]
fn list_plans() -> Result<Vec<Plan>, PortalError> {
    with_state(|state| plan_service::list_plans(state.source.as_ref()))
}

#[update(guard = "admin_guard")]
fn create_plan(input: PlanInput) -> Result<Vec<Plan>, PortalError> {
    let now = now_ns();
    with_state_mut(|state| plan_service::create_plan(state.source.as_mut(), input, now))?
}

#[update(guard = "admin_guard")]
fn update_plan(id: PlanId, input: PlanInput) -> Result<Vec<Plan>, PortalError> {
    with_state_mut(|state| plan_service::update_plan(state.source.as_mut(), id, input))?
}

#[update(guard = "admin_guard")]
fn delete_plan(id: PlanId) -> Result<Vec<Plan>, PortalError> {
    with_state_mut(|state| plan_service::delete_plan(state.source.as_mut(), &id))?
}

// --- Admin: Clients ---

#[query(guard = "admin_guard")]
fn list_clients() -> Result<Vec<ClientRecord>, PortalError> {
    with_state(|state| client_service::list_clients(state.source.as_ref()))
}

#[update(guard = "admin_guard")]
fn create_client(input: ClientInput) -> Result<Vec<ClientRecord>, PortalError> {
    let now = now_ns();
    with_state_mut(|state| client_service::create_client(state.source.as_mut(), input, now))?
}

#[update(guard = "admin_guard")]
fn update_client(id: String, input: ClientInput) -> Result<Vec<ClientRecord>, PortalError> {
    with_state_mut(|state| client_service::update_client(state.source.as_mut(), &id, input))?
}

#[update(guard = "admin_guard")]
fn toggle_client_status(id: String) -> Result<Vec<ClientRecord>, PortalError> {
    with_state_mut(|state| client_service::toggle_client_status(state.source.as_mut(), &id))?
}

#[update(guard = "admin_guard")]
fn delete_client(id: String) -> Result<Vec<ClientRecord>, PortalError> {
    with_state_mut(|state| client_service::delete_client(state.source.as_mut(), &id))?
}

// --- Admin: Notifications ---

#[query(guard = "admin_guard")]
fn list_notifications() -> Result<Vec<Notification>, PortalError> {
    with_state(|state| notification_service::list_notifications(state.source.as_ref()))
}

#[update(guard = "admin_guard")]
fn create_notification(input: NotificationInput) -> Result<Vec<Notification>, PortalError> {
    let now = now_ns();
    with_state_mut(|state| notification_service::create_notification(state.source.as_mut(), input, now))?
}

#[update(guard = "admin_guard")]
fn delete_notification(id: String) -> Result<Vec<Notification>, PortalError> {
    with_state_mut(|state| notification_service::delete_notification(state.source.as_mut(), &id))?
}

// --- Admin: Leads ---

#[query(guard = "admin_guard")]
fn list_leads() -> Result<Vec<Lead>, PortalError> {
    with_state(|state| lead_service::list_leads(state.source.as_ref()))
}

#[update(guard = "admin_guard")]
fn delete_lead(id: LeadId) -> Result<Vec<Lead>, PortalError> {
    with_state_mut(|state| lead_service::delete_lead(state.source.as_mut(), &id))?
}

// --- Admin: Settings & Overview ---

#[query(guard = "admin_guard")]
fn get_settings() -> Result<AppSettings, PortalError> {
    with_state(|state| settings_service::get_settings(state.source.as_ref()))
}

#[update(guard = "admin_guard")]
fn update_settings(settings: AppSettings) -> Result<AppSettings, PortalError> {
    with_state_mut(|state| settings_service::update_settings(state.source.as_mut(), settings))?
}

#[query(guard = "admin_guard")]
fn get_dashboard_overview() -> Result<DashboardOverview, PortalError> {
    with_state(|state| metrics::dashboard_overview(state.source.as_ref()))
}
