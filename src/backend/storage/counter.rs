// src/backend/storage/counter.rs
use crate::error::PortalError;
use crate::storage::memory::Memory;
use ic_stable_structures::StableCell;

/// Monotonic id source shared by every stable table.
pub struct StableCounter {
    cell: StableCell<u64, Memory>,
}

impl StableCounter {
    pub fn init(memory: Memory) -> Result<Self, PortalError> {
        let cell = StableCell::init(memory, 0)
            .map_err(|e| PortalError::StorageError(format!("Failed to initialize id counter: {:?}", e)))?;
        Ok(Self { cell })
    }

    pub fn current(&self) -> u64 {
        *self.cell.get()
    }

    /// Increments the counter and returns the new value.
    pub fn next(&mut self) -> Result<u64, PortalError> {
        let next = self
            .current()
            .checked_add(1)
            .ok_or_else(|| PortalError::InternalError("Id counter overflow".to_string()))?;
        self.cell
            .set(next)
            .map_err(|e| PortalError::StorageError(format!("Failed to update id counter: {:?}", e)))?;
        Ok(next)
    }
}
