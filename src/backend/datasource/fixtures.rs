// src/backend/datasource/fixtures.rs
use crate::datasource::DataSource;
use crate::error::PortalError;
use crate::models::{AppSettings, ClientRecord, ContentItem, DataMode, Lead, Notification, Plan, Record};
use crate::storage::{MemoryTable, Table};
use serde::Deserialize;
use validator::Validate;

const DEMO_DATA: &str = include_str!("../fixtures/demo_data.json");

/// Generated demo ids start above anything in the bundled file.
const FIRST_DEMO_ID: u64 = 1000;

#[derive(Deserialize)]
struct DemoData {
    content: Vec<ContentItem>,
    plans: Vec<Plan>,
    clients: Vec<ClientRecord>,
    notifications: Vec<Notification>,
}

/// Demo mode: bundled sample data on the heap. Edits apply in place and vanish on upgrade.
pub struct FixtureSource {
    content: MemoryTable<ContentItem>,
    plans: MemoryTable<Plan>,
    clients: MemoryTable<ClientRecord>,
    notifications: MemoryTable<Notification>,
    leads: MemoryTable<Lead>,
    settings: Option<AppSettings>,
    next_id: u64,
}

impl FixtureSource {
    /// Loads the bundled sample data. `now` stamps the fixtures so that file order
    /// is display order.
    pub fn bundled(now: u64) -> Result<Self, PortalError> {
        Self::from_json(DEMO_DATA, now)
    }

    pub fn from_json(json: &str, now: u64) -> Result<Self, PortalError> {
        let data: DemoData = serde_json::from_str(json)
            .map_err(|e| PortalError::InternalError(format!("Malformed demo data: {}", e)))?;

        let content = stamp(data.content, now, Order::NewestFirst, |r, t| r.created_at = t)?;
        let plans = stamp(data.plans, now, Order::OldestFirst, |r, t| r.created_at = t)?;
        let clients = stamp(data.clients, now, Order::NewestFirst, |r, t| r.created_at = t)?;
        let notifications = stamp(data.notifications, now, Order::NewestFirst, |r, t| r.created_at = t)?;

        Ok(Self {
            content: MemoryTable::with_rows(content),
            plans: MemoryTable::with_rows(plans),
            clients: MemoryTable::with_rows(clients),
            notifications: MemoryTable::with_rows(notifications),
            leads: MemoryTable::default(),
            settings: None,
            next_id: FIRST_DEMO_ID,
        })
    }
}

enum Order {
    NewestFirst,
    OldestFirst,
}

/// Validates each fixture row and assigns `created_at` from its position.
fn stamp<T>(
    mut rows: Vec<T>,
    now: u64,
    order: Order,
    set_created_at: impl Fn(&mut T, u64),
) -> Result<Vec<T>, PortalError>
where
    T: Record + Validate,
{
    let count = rows.len() as u64;
    for (index, row) in rows.iter_mut().enumerate() {
        row.validate().map_err(|e| {
            PortalError::InternalError(format!("Invalid demo row {}: {}", row.id(), e))
        })?;
        let offset = match order {
            Order::NewestFirst => count - index as u64,
            Order::OldestFirst => index as u64 + 1,
        };
        set_created_at(row, now.saturating_sub(count + 1).saturating_add(offset));
    }
    Ok(rows)
}

impl DataSource for FixtureSource {
    fn mode(&self) -> DataMode {
        DataMode::Demo
    }

    fn content(&self) -> &dyn Table<ContentItem> {
        &self.content
    }

    fn content_mut(&mut self) -> &mut dyn Table<ContentItem> {
        &mut self.content
    }

    fn plans(&self) -> &dyn Table<Plan> {
        &self.plans
    }

    fn plans_mut(&mut self) -> &mut dyn Table<Plan> {
        &mut self.plans
    }

    fn clients(&self) -> &dyn Table<ClientRecord> {
        &self.clients
    }

    fn clients_mut(&mut self) -> &mut dyn Table<ClientRecord> {
        &mut self.clients
    }

    fn notifications(&self) -> &dyn Table<Notification> {
        &self.notifications
    }

    fn notifications_mut(&mut self) -> &mut dyn Table<Notification> {
        &mut self.notifications
    }

    fn leads(&self) -> &dyn Table<Lead> {
        &self.leads
    }

    fn leads_mut(&mut self) -> &mut dyn Table<Lead> {
        &mut self.leads
    }

    fn settings(&self) -> Option<AppSettings> {
        self.settings.clone()
    }

    fn save_settings(&mut self, settings: AppSettings) -> Result<(), PortalError> {
        self.settings = Some(settings);
        Ok(())
    }

    fn next_id(&mut self) -> Result<String, PortalError> {
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| PortalError::InternalError("Demo id counter overflow".to_string()))?;
        Ok(self.next_id.to_string())
    }
}
