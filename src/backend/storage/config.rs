// src/backend/storage/config.rs
use crate::config::PortalConfig;
use crate::storage::memory::{get_memory, Memory, CONFIG_MEM_ID};
use crate::storage::storable::Cbor;
use ic_stable_structures::StableCell;
use std::cell::RefCell;

thread_local! {
    /// Configuration resolved at install time, kept across upgrades.
    static CONFIG: RefCell<StableCell<Cbor<Option<PortalConfig>>, Memory>> = RefCell::new(
        StableCell::init(get_memory(CONFIG_MEM_ID), Cbor(None))
            .expect("Failed to initialize config stable cell")
    );
}

/// Persists the active configuration.
pub fn save_config(config: &PortalConfig) -> Result<(), String> {
    CONFIG.with(|cell| {
        cell.borrow_mut()
            .set(Cbor(Some(config.clone())))
            .map(|_previous| ())
            .map_err(|e| format!("Failed to persist config: {:?}", e))
    })
}

/// Configuration saved by the last install or upgrade, if any.
pub fn load_config() -> Option<PortalConfig> {
    CONFIG.with(|cell| cell.borrow().get().0.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DataMode, InitArgs};

    #[test]
    fn config_is_saved_and_reloaded() {
        assert_eq!(load_config(), None);
        let config = PortalConfig::from_init_args(Some(InitArgs {
            data_mode: Some(DataMode::Production),
            ..InitArgs::default()
        }));
        save_config(&config).unwrap();
        assert_eq!(load_config(), Some(config));
    }
}
