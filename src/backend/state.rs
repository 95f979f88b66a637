// src/backend/state.rs
// Canister-wide state, built once from the resolved configuration.

use crate::config::PortalConfig;
use crate::datasource::{DataSource, FixtureSource, StableSource};
use crate::error::PortalError;
use crate::models::{DataMode, Timestamp};
use crate::storage::memory::{ADMIN_SESSIONS_MEM_ID, CLIENT_SESSIONS_MEM_ID};
use crate::storage::{get_memory, MemorySessionStore, SessionStore, StableSessionStore};
use crate::utils::rate_limit::RateLimiter;
use std::cell::RefCell;

pub struct PortalState {
    pub config: PortalConfig,
    pub source: Box<dyn DataSource>,
    pub sessions: Box<dyn SessionStore>,
    pub limiter: RateLimiter,
}

thread_local! {
    static STATE: RefCell<Option<PortalState>> = const { RefCell::new(None) };
}

/// Picks the data source and session store for `config.data_mode`.
pub fn build_state(config: PortalConfig, now: Timestamp) -> Result<PortalState, PortalError> {
    let (source, sessions): (Box<dyn DataSource>, Box<dyn SessionStore>) = match config.data_mode {
        DataMode::Production => (
            Box::new(StableSource::init(get_memory)?),
            Box::new(StableSessionStore::init(
                get_memory(CLIENT_SESSIONS_MEM_ID),
                get_memory(ADMIN_SESSIONS_MEM_ID),
            )),
        ),
        DataMode::Demo => {
            crate::log_warn!("Running in demo mode: bundled sample data, changes are not persisted");
            (
                Box::new(FixtureSource::bundled(now)?),
                Box::new(MemorySessionStore::default()),
            )
        }
    };

    Ok(PortalState {
        limiter: RateLimiter::new(config.login_burst, config.login_refill_per_sec),
        config,
        source,
        sessions,
    })
}

pub fn install(state: PortalState) {
    crate::log_info!("Portal state ready ({:?} mode)", state.config.data_mode);
    STATE.with(|cell| *cell.borrow_mut() = Some(state));
}

fn not_initialized() -> PortalError {
    PortalError::InternalError("Portal state is not initialized".to_string())
}

pub fn with_state<R>(f: impl FnOnce(&PortalState) -> R) -> Result<R, PortalError> {
    STATE.with(|cell| cell.borrow().as_ref().map(f).ok_or_else(not_initialized))
}

pub fn with_state_mut<R>(f: impl FnOnce(&mut PortalState) -> R) -> Result<R, PortalError> {
    STATE.with(|cell| cell.borrow_mut().as_mut().map(f).ok_or_else(not_initialized))
}
