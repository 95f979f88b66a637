// src/backend/storage/mod.rs

pub mod config;
pub mod counter;
pub mod memory;
pub mod sessions;
pub mod storable;
pub mod table;

pub use counter::StableCounter;
pub use memory::{get_memory, Memory};
pub use sessions::{MemorySessionStore, SessionStore, StableSessionStore};
pub use storable::Cbor;
pub use table::{MemoryTable, StableTable, Table};
