// src/backend/services/catalog_service.rs

use crate::datasource::DataSource;
use crate::error::PortalError;
use crate::models::{Category, ContentId, ContentInput, ContentItem, Timestamp};
use crate::services::{existing, insert_new, newest_first, remove_existing};
use validator::Validate;

/// Most subscriber-only titles shown in the client portal.
pub const SUBSCRIBER_CATALOG_LIMIT: usize = 15;

// --- Reads ---

/// Full catalog for the admin dashboard, newest first.
pub fn list_content(source: &dyn DataSource) -> Vec<ContentItem> {
    newest_first(source.content().all())
}

/// Catalog visible to anonymous visitors.
pub fn public_content(source: &dyn DataSource) -> Vec<ContentItem> {
    list_content(source)
        .into_iter()
        .filter(ContentItem::is_public)
        .collect()
}

pub fn public_by_category(source: &dyn DataSource, categories: &[Category]) -> Vec<ContentItem> {
    public_content(source)
        .into_iter()
        .filter(|item| categories.contains(&item.category))
        .collect()
}

/// What a logged-in subscriber browses: exclusive titles, or the public movies and
/// series when there are none yet. Cartoons keep their own section.
pub fn subscriber_catalog(source: &dyn DataSource) -> Vec<ContentItem> {
    let exclusive: Vec<ContentItem> = list_content(source)
        .into_iter()
        .filter(|item| item.is_subscriber_only)
        .take(SUBSCRIBER_CATALOG_LIMIT)
        .collect();
    if exclusive.is_empty() {
        public_by_category(source, &[Category::Movie, Category::Series])
    } else {
        exclusive
    }
}

/// A single title. Subscriber-only items require an active session.
pub fn get_content_detail(
    source: &dyn DataSource,
    id: &str,
    has_active_session: bool,
) -> Result<ContentItem, PortalError> {
    let item = existing(source.content(), id, "Content")?;
    if item.is_subscriber_only && !has_active_session {
        return Err(PortalError::NotAuthorized(
            "This title is available to active subscribers only".to_string(),
        ));
    }
    Ok(item)
}

// --- Admin mutations (each returns the refreshed list) ---

pub fn create_content(
    source: &mut dyn DataSource,
    input: ContentInput,
    now: Timestamp,
) -> Result<Vec<ContentItem>, PortalError> {
    let id = source.next_id()?;
    let item = ContentItem::from_input(id, input, now);
    item.validate()?;
    crate::log_info!("Content {} '{}' created", item.id, item.title);
    insert_new(source.content_mut(), item, "Content")?;
    Ok(list_content(source))
}

pub fn update_content(
    source: &mut dyn DataSource,
    id: ContentId,
    input: ContentInput,
) -> Result<Vec<ContentItem>, PortalError> {
    let current = existing(source.content(), &id, "Content")?;
    let item = ContentItem::from_input(id, input, current.created_at);
    item.validate()?;
    source.content_mut().put(item);
    Ok(list_content(source))
}

pub fn delete_content(source: &mut dyn DataSource, id: &str) -> Result<Vec<ContentItem>, PortalError> {
    let removed = remove_existing(source.content_mut(), id, "Content")?;
    crate::log_info!("Content {} '{}' deleted", removed.id, removed.title);
    Ok(list_content(source))
}
