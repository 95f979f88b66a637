// src/backend/storage/memory.rs
use ic_stable_structures::memory_manager::{MemoryId, MemoryManager, VirtualMemory};
use ic_stable_structures::DefaultMemoryImpl;
use std::cell::RefCell;

// One region per table; never reuse or renumber an ID once deployed.
pub const CONFIG_MEM_ID: MemoryId = MemoryId::new(0);
pub const CONTENT_MEM_ID: MemoryId = MemoryId::new(1);
pub const PLANS_MEM_ID: MemoryId = MemoryId::new(2);
pub const CLIENTS_MEM_ID: MemoryId = MemoryId::new(3);
pub const NOTIFICATIONS_MEM_ID: MemoryId = MemoryId::new(4);
pub const LEADS_MEM_ID: MemoryId = MemoryId::new(5);
pub const SETTINGS_MEM_ID: MemoryId = MemoryId::new(6);
pub const ID_COUNTER_MEM_ID: MemoryId = MemoryId::new(7);
pub const CLIENT_SESSIONS_MEM_ID: MemoryId = MemoryId::new(8);
pub const ADMIN_SESSIONS_MEM_ID: MemoryId = MemoryId::new(9);

pub type Memory = VirtualMemory<DefaultMemoryImpl>;

thread_local! {
    static MEMORY_MANAGER: RefCell<MemoryManager<DefaultMemoryImpl>> = RefCell::new(
        MemoryManager::init(DefaultMemoryImpl::default())
    );
}

/// Get memory instance for a specific MemoryId.
pub fn get_memory(id: MemoryId) -> Memory {
    MEMORY_MANAGER.with(|m| m.borrow().get(id))
}
