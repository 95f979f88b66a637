// src/backend/services/client_service.rs
// Subscriber records. The client ID is chosen by the admin and doubles as the login
// credential, so it is never generated and never changes once stored.

use crate::datasource::DataSource;
use crate::error::PortalError;
use crate::models::{ClientInput, ClientRecord, Timestamp};
use crate::services::{existing, insert_new, newest_first, remove_existing};
use validator::Validate;

pub fn list_clients(source: &dyn DataSource) -> Vec<ClientRecord> {
    newest_first(source.clients().all())
}

pub fn get_client(source: &dyn DataSource, id: &str) -> Result<ClientRecord, PortalError> {
    existing(source.clients(), id, "Client")
}

pub fn create_client(
    source: &mut dyn DataSource,
    input: ClientInput,
    now: Timestamp,
) -> Result<Vec<ClientRecord>, PortalError> {
    let client = ClientRecord::from_input(input, now);
    client.validate()?;
    crate::log_info!("Client {} '{}' registered ({:?})", client.id, client.name, client.status);
    insert_new(source.clients_mut(), client, "Client")?;
    Ok(list_clients(source))
}

/// Replaces every field except the ID and creation time.
///
/// Sessions already opened by this client keep the state they were issued with.
pub fn update_client(
    source: &mut dyn DataSource,
    id: &str,
    input: ClientInput,
) -> Result<Vec<ClientRecord>, PortalError> {
    let current = get_client(source, id)?;
    if input.id.trim() != current.id {
        return Err(PortalError::InvalidInput(
            "Client ID cannot be changed; delete and recreate the client instead".to_string(),
        ));
    }
    let client = ClientRecord::from_input(input, current.created_at);
    client.validate()?;
    source.clients_mut().put(client);
    Ok(list_clients(source))
}

/// Flips Active/Inactive. Applying it twice restores the previous status.
pub fn toggle_client_status(source: &mut dyn DataSource, id: &str) -> Result<Vec<ClientRecord>, PortalError> {
    let mut client = get_client(source, id)?;
    client.status = client.status.toggled();
    crate::log_info!("Client {} is now {:?}", client.id, client.status);
    source.clients_mut().put(client);
    Ok(list_clients(source))
}

pub fn delete_client(source: &mut dyn DataSource, id: &str) -> Result<Vec<ClientRecord>, PortalError> {
    let removed = remove_existing(source.clients_mut(), id, "Client")?;
    crate::log_info!("Client {} deleted", removed.id);
    Ok(list_clients(source))
}
