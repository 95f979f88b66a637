// src/backend/services/mod.rs

pub mod auth_service;
pub mod catalog_service;
pub mod client_service;
pub mod lead_service;
pub mod notification_service;
pub mod plan_service;
pub mod portal_service;
pub mod scheduler;
pub mod settings_service;

use crate::error::PortalError;
use crate::models::Record;
use crate::storage::Table;
use std::cmp::Ordering;

// --- Shared table helpers ---

/// Numeric-looking ids sort by magnitude ("9" before "10").
fn compare_ids(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

pub(crate) fn newest_first<T: Record>(mut rows: Vec<T>) -> Vec<T> {
    rows.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| compare_ids(b.id(), a.id()))
    });
    rows
}

pub(crate) fn oldest_first<T: Record>(mut rows: Vec<T>) -> Vec<T> {
    rows.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| compare_ids(a.id(), b.id()))
    });
    rows
}

/// Stores a row whose id must not exist yet.
pub(crate) fn insert_new<T: Record>(table: &mut dyn Table<T>, row: T, what: &str) -> Result<(), PortalError> {
    if table.contains(row.id()) {
        return Err(PortalError::AlreadyExists(format!("{} {}", what, row.id())));
    }
    table.put(row);
    Ok(())
}

/// Row currently stored under `id`, or `NotFound`.
pub(crate) fn existing<T: Record>(table: &dyn Table<T>, id: &str, what: &str) -> Result<T, PortalError> {
    table
        .get(id)
        .ok_or_else(|| PortalError::NotFound(format!("{} {}", what, id)))
}

pub(crate) fn remove_existing<T: Record>(table: &mut dyn Table<T>, id: &str, what: &str) -> Result<T, PortalError> {
    table
        .remove(id)
        .ok_or_else(|| PortalError::NotFound(format!("{} {}", what, id)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::datasource::{DataSource, FixtureSource, StableSource};
    use crate::storage::get_memory;

    pub const NOW: u64 = 1_700_000_000_000_000_000;

    pub fn demo() -> FixtureSource {
        FixtureSource::bundled(NOW).expect("bundled demo data")
    }

    pub fn production() -> StableSource {
        StableSource::init(get_memory).expect("stable source")
    }

    /// Both implementations, for tests that must hold in either mode.
    pub fn each_source(mut check: impl FnMut(&mut dyn DataSource)) {
        check(&mut demo());
        check(&mut production());
    }
}
