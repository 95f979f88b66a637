// src/backend/lib.rs

pub mod api;
pub mod config;
pub mod datasource;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

use crate::config::PortalConfig;
use crate::error::PortalError;
use crate::metrics::DashboardOverview;
use crate::models::*;
use crate::services::portal_service::{PortalView, PublicSite, ReferralInvite};
use crate::services::scheduler;
use crate::utils::time::now_ns;
use std::time::Duration;

#[ic_cdk::init]
fn init(args: Option<InitArgs>) {
    let config = PortalConfig::from_init_args(args);
    if let Err(e) = storage::config::save_config(&config) {
        crate::log_error!("{}", e);
    }
    start(config);
}

/// Reuses the configuration saved at install unless new arguments are supplied.
#[ic_cdk::post_upgrade]
fn post_upgrade(args: Option<InitArgs>) {
    let config = match (args, storage::config::load_config()) {
        (Some(args), _) => {
            let config = PortalConfig::from_init_args(Some(args));
            if let Err(e) = storage::config::save_config(&config) {
                crate::log_error!("{}", e);
            }
            config
        }
        (None, Some(saved)) => saved,
        (None, None) => {
            crate::log_warn!("No saved configuration found on upgrade; using defaults");
            PortalConfig::default()
        }
    };
    start(config);
}

fn start(config: PortalConfig) {
    match state::build_state(config, now_ns()) {
        Ok(portal) => state::install(portal),
        Err(e) => {
            // Endpoints report InternalError until the next successful upgrade.
            crate::log_error!("Failed to build portal state: {}", e);
            return;
        }
    }

    ic_cdk_timers::set_timer_interval(Duration::from_secs(scheduler::SWEEP_INTERVAL_SECS), || {
        let now = now_ns();
        if let Err(e) = state::with_state_mut(|portal| {
            scheduler::sweep(portal.sessions.as_mut(), &mut portal.limiter, now);
        }) {
            crate::log_error!("Maintenance sweep skipped: {}", e);
        }
    });
}

// Export Candid interface
ic_cdk::export_candid!();
