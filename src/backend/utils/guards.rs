// src/backend/utils/guards.rs
use crate::services::auth_service;
use crate::state::with_state;
use crate::utils::time::now_ns;

/// Admits controllers, configured admin principals and callers holding an
/// unexpired admin session.
pub fn admin_guard() -> Result<(), String> {
    let caller = ic_cdk::caller();
    let caller_is_controller = ic_cdk::api::is_controller(&caller);
    let now = now_ns();

    let allowed = with_state(|state| {
        auth_service::is_admin(&state.config, state.sessions.as_ref(), &caller, caller_is_controller, now)
    })
    .map_err(|e| e.to_string())?;

    if allowed {
        Ok(())
    } else {
        crate::log_warn!("Admin guard rejected {}", caller);
        Err(format!("Caller {} is not an admin", caller))
    }
}
