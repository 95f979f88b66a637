// src/backend/metrics.rs
use crate::datasource::DataSource;
use crate::models::{Category, ClientStatus};
use candid::CandidType;
use serde::{Deserialize, Serialize};

/// Counts shown at the top of the admin dashboard. Computed on demand from the tables.
#[derive(CandidType, Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardOverview {
    pub total_clients: u64,
    pub active_clients: u64,
    pub inactive_clients: u64,
    pub movies: u64,
    pub series: u64,
    pub cartoons: u64,
    pub subscriber_only_content: u64,
    pub plans: u64,
    pub notifications: u64,
    pub leads: u64,
}

pub fn dashboard_overview(source: &dyn DataSource) -> DashboardOverview {
    let mut overview = DashboardOverview {
        plans: source.plans().len(),
        notifications: source.notifications().len(),
        leads: source.leads().len(),
        ..DashboardOverview::default()
    };

    for client in source.clients().all() {
        overview.total_clients += 1;
        match client.status {
            ClientStatus::Active => overview.active_clients += 1,
            ClientStatus::Inactive => overview.inactive_clients += 1,
        }
    }

    for item in source.content().all() {
        match item.category {
            Category::Movie => overview.movies += 1,
            Category::Series => overview.series += 1,
            Category::Cartoon => overview.cartoons += 1,
        }
        if item.is_subscriber_only {
            overview.subscriber_only_content += 1;
        }
    }

    overview
}
