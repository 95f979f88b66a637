// src/backend/datasource/mod.rs
// One data-access interface for every endpoint; the implementation is picked once at init.

pub mod fixtures;
pub mod stable;

use crate::error::PortalError;
use crate::models::{AppSettings, ClientRecord, ContentItem, DataMode, Lead, Notification, Plan};
use crate::storage::Table;

pub use fixtures::FixtureSource;
pub use stable::StableSource;

pub trait DataSource {
    fn mode(&self) -> DataMode;

    fn content(&self) -> &dyn Table<ContentItem>;
    fn content_mut(&mut self) -> &mut dyn Table<ContentItem>;

    fn plans(&self) -> &dyn Table<Plan>;
    fn plans_mut(&mut self) -> &mut dyn Table<Plan>;

    fn clients(&self) -> &dyn Table<ClientRecord>;
    fn clients_mut(&mut self) -> &mut dyn Table<ClientRecord>;

    fn notifications(&self) -> &dyn Table<Notification>;
    fn notifications_mut(&mut self) -> &mut dyn Table<Notification>;

    fn leads(&self) -> &dyn Table<Lead>;
    fn leads_mut(&mut self) -> &mut dyn Table<Lead>;

    /// The stored settings row, `None` until an admin saves one.
    fn settings(&self) -> Option<AppSettings>;
    fn save_settings(&mut self, settings: AppSettings) -> Result<(), PortalError>;

    /// Next id for a generated row (content, plans, notifications, leads).
    fn next_id(&mut self) -> Result<String, PortalError>;
}
