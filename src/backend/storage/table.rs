// src/backend/storage/table.rs
use crate::models::Record;
use crate::storage::memory::Memory;
use crate::storage::storable::Cbor;
use ic_stable_structures::StableBTreeMap;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;

/// Keyed rows of one entity. Ordering of `all()` is by id; callers sort as needed.
pub trait Table<T: Record> {
    fn all(&self) -> Vec<T>;
    fn get(&self, id: &str) -> Option<T>;
    /// Inserts or replaces the row stored under its id, returning the previous row.
    fn put(&mut self, row: T) -> Option<T>;
    fn remove(&mut self, id: &str) -> Option<T>;
    fn len(&self) -> u64;

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Table persisted in its own stable-memory region.
pub struct StableTable<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    rows: StableBTreeMap<String, Cbor<T>, Memory>,
}

impl<T> StableTable<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    pub fn init(memory: Memory) -> Self {
        Self {
            rows: StableBTreeMap::init(memory),
        }
    }
}

impl<T> Table<T> for StableTable<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    fn all(&self) -> Vec<T> {
        self.rows.iter().map(|(_id, row)| row.0).collect()
    }

    fn get(&self, id: &str) -> Option<T> {
        self.rows.get(&id.to_string()).map(|row| row.0)
    }

    fn put(&mut self, row: T) -> Option<T> {
        let key = row.id().to_string();
        self.rows.insert(key, Cbor(row)).map(|prev| prev.0)
    }

    fn remove(&mut self, id: &str) -> Option<T> {
        self.rows.remove(&id.to_string()).map(|prev| prev.0)
    }

    fn len(&self) -> u64 {
        self.rows.len()
    }
}

/// Heap table backing demo mode. Lost on upgrade.
pub struct MemoryTable<T: Record> {
    rows: BTreeMap<String, T>,
}

impl<T: Record> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Record> MemoryTable<T> {
    pub fn with_rows(rows: impl IntoIterator<Item = T>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| (row.id().to_string(), row))
                .collect(),
        }
    }
}

impl<T: Record> Table<T> for MemoryTable<T> {
    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn get(&self, id: &str) -> Option<T> {
        self.rows.get(id).cloned()
    }

    fn put(&mut self, row: T) -> Option<T> {
        self.rows.insert(row.id().to_string(), row)
    }

    fn remove(&mut self, id: &str) -> Option<T> {
        self.rows.remove(id)
    }

    fn len(&self) -> u64 {
        self.rows.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Plan, PlanInput};
    use crate::storage::memory::{get_memory, PLANS_MEM_ID};

    fn plan(id: &str, features: &[&str]) -> Plan {
        Plan::from_input(
            id.to_string(),
            PlanInput {
                name: format!("Plan {id}"),
                price: "29,90".to_string(),
                features: features.iter().map(|f| f.to_string()).collect(),
                is_recommended: false,
                checkout_url: "https://wa.me/5598982804577".to_string(),
                renewal_url: "https://wa.me/5598982804577".to_string(),
            },
            0,
        )
    }

    fn exercise(table: &mut dyn Table<Plan>) {
        assert!(table.is_empty());
        assert_eq!(table.put(plan("p1", &["4K", "2 Screens"])), None);
        assert_eq!(
            table.get("p1").map(|p| p.features),
            Some(vec!["4K".to_string(), "2 Screens".to_string()])
        );

        let previous = table.put(plan("p1", &["HD"]));
        assert_eq!(previous.map(|p| p.features.len()), Some(2));
        assert_eq!(table.len(), 1);

        table.put(plan("p2", &[]));
        assert!(table.contains("p2"));
        assert_eq!(table.remove("p2").map(|p| p.id), Some("p2".to_string()));
        assert_eq!(table.remove("p2"), None);
        assert_eq!(table.all().len(), 1);
    }

    #[test]
    fn stable_table_upserts_and_removes() {
        let mut table = StableTable::<Plan>::init(get_memory(PLANS_MEM_ID));
        exercise(&mut table);
    }

    #[test]
    fn memory_table_upserts_and_removes() {
        let mut table = MemoryTable::<Plan>::default();
        exercise(&mut table);
    }
}
