// src/backend/datasource/stable.rs
use crate::datasource::DataSource;
use crate::error::PortalError;
use crate::models::{AppSettings, ClientRecord, ContentItem, DataMode, Lead, Notification, Plan};
use crate::storage::memory::{
    CLIENTS_MEM_ID, CONTENT_MEM_ID, ID_COUNTER_MEM_ID, LEADS_MEM_ID, NOTIFICATIONS_MEM_ID,
    PLANS_MEM_ID, SETTINGS_MEM_ID,
};
use crate::storage::{Cbor, Memory, StableCounter, StableTable, Table};
use ic_stable_structures::memory_manager::MemoryId;
use ic_stable_structures::StableCell;

/// Production tables, each in its own stable-memory region.
pub struct StableSource {
    content: StableTable<ContentItem>,
    plans: StableTable<Plan>,
    clients: StableTable<ClientRecord>,
    notifications: StableTable<Notification>,
    leads: StableTable<Lead>,
    settings: StableCell<Cbor<Option<AppSettings>>, Memory>,
    ids: StableCounter,
}

impl StableSource {
    pub fn init(memory: impl Fn(MemoryId) -> Memory) -> Result<Self, PortalError> {
        let settings = StableCell::init(memory(SETTINGS_MEM_ID), Cbor(None))
            .map_err(|e| PortalError::StorageError(format!("Failed to initialize settings cell: {:?}", e)))?;

        Ok(Self {
            content: StableTable::init(memory(CONTENT_MEM_ID)),
            plans: StableTable::init(memory(PLANS_MEM_ID)),
            clients: StableTable::init(memory(CLIENTS_MEM_ID)),
            notifications: StableTable::init(memory(NOTIFICATIONS_MEM_ID)),
            leads: StableTable::init(memory(LEADS_MEM_ID)),
            settings,
            ids: StableCounter::init(memory(ID_COUNTER_MEM_ID))?,
        })
    }
}

impl DataSource for StableSource {
    fn mode(&self) -> DataMode {
        DataMode::Production
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
        self.settings.get().0.clone()
    }

    fn save_settings(&mut self, settings: AppSettings) -> Result<(), PortalError> {
        self.settings
            .set(Cbor(Some(settings)))
            .map(|_previous| ())
            .map_err(|e| PortalError::StorageError(format!("Failed to save settings: {:?}", e)))
    }

    fn next_id(&mut self) -> Result<String, PortalError> {
        self.ids.next().map(|id| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::get_memory;

    #[test]
    fn production_source_starts_empty() {
        let mut source = StableSource::init(get_memory).unwrap();
        assert_eq!(source.mode(), DataMode::Production);
        assert!(source.content().is_empty());
        assert!(source.clients().is_empty());
        assert_eq!(source.settings(), None);

        source.save_settings(AppSettings::default()).unwrap();
        assert_eq!(source.settings(), Some(AppSettings::default()));
        assert_eq!(source.next_id().unwrap(), "1");
        assert_eq!(source.next_id().unwrap(), "2");
    }
}
