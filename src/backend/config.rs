// src/backend/config.rs
use crate::models::{DataMode, InitArgs};
use candid::{CandidType, Principal};
use serde::{Deserialize, Serialize};

const NANOS_PER_SEC: u64 = 1_000_000_000;
const DEFAULT_ADMIN_SESSION_TTL_SECS: u64 = 12 * 60 * 60;
const DEFAULT_LOGIN_BURST: u32 = 20;
const DEFAULT_LOGIN_REFILL_PER_SEC: f64 = 1.0;

/// Username plus the SHA-256 digest of the password accepted by `admin_login`.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct AdminCredentials {
    pub username: String,
    pub password_sha256: String,
}

#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct PortalConfig {
    pub data_mode: DataMode,
    /// Always treated as admins, in addition to the canister controllers.
    pub admin_principals: Vec<Principal>,
    /// `None` disables password login; only principals can administer.
    pub admin_credentials: Option<AdminCredentials>,
    pub admin_session_ttl_ns: u64,
    pub login_burst: u32,
    pub login_refill_per_sec: f64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            data_mode: DataMode::Demo,
            admin_principals: Vec::new(),
            admin_credentials: None,
            admin_session_ttl_ns: DEFAULT_ADMIN_SESSION_TTL_SECS * NANOS_PER_SEC,
            login_burst: DEFAULT_LOGIN_BURST,
            login_refill_per_sec: DEFAULT_LOGIN_REFILL_PER_SEC,
        }
    }
}

impl PortalConfig {
    /// Resolves install arguments over the defaults. Missing arguments never fail:
    /// the canister falls back to demo mode.
    pub fn from_init_args(args: Option<InitArgs>) -> Self {
        let defaults = Self::default();
        let Some(args) = args else {
            return defaults;
        };

        let admin_credentials = match (args.admin_username, args.admin_password_sha256) {
            (Some(username), Some(digest)) if !username.trim().is_empty() && is_sha256_hex(&digest) => {
                Some(AdminCredentials {
                    username: username.trim().to_string(),
                    password_sha256: digest.to_ascii_lowercase(),
                })
            }
            (None, None) => None,
            _ => {
                crate::log_warn!("Admin credentials incomplete or malformed; password login disabled");
                None
            }
        };

        Self {
            data_mode: args.data_mode.unwrap_or(defaults.data_mode),
            admin_principals: args.admin_principals.unwrap_or_default(),
            admin_credentials,
            admin_session_ttl_ns: args
                .admin_session_ttl_secs
                .filter(|secs| *secs > 0)
                .map(|secs| secs.saturating_mul(NANOS_PER_SEC))
                .unwrap_or(defaults.admin_session_ttl_ns),
            login_burst: args.login_burst.filter(|b| *b > 0).unwrap_or(defaults.login_burst),
            login_refill_per_sec: args
                .login_refill_per_sec
                .filter(|rate| rate.is_finite() && *rate > 0.0)
                .unwrap_or(defaults.login_refill_per_sec),
        }
    }
}

fn is_sha256_hex(digest: &str) -> bool {
    digest.len() == 64 && digest.chars().all(|c| c.is_ascii_hexdigit())
}
