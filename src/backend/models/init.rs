// src/backend/models/init.rs
use crate::models::common::DataMode;
use candid::{CandidType, Principal};
use serde::Deserialize;

/// Install and upgrade arguments. Every field is optional; leaving `data_mode`
/// unset runs the canister on the bundled demo data.
#[derive(CandidType, Deserialize, Debug, Clone, Default)]
pub struct InitArgs {
    pub data_mode: Option<DataMode>,
    pub admin_principals: Option<Vec<Principal>>,
    pub admin_username: Option<String>,
    /// Lowercase hex SHA-256 of the admin password.
    pub admin_password_sha256: Option<String>,
    pub admin_session_ttl_secs: Option<u64>,
    pub login_burst: Option<u32>,
    pub login_refill_per_sec: Option<f64>,
}
