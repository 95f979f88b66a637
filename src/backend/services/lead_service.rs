// src/backend/services/lead_service.rs

use crate::datasource::DataSource;
use crate::error::PortalError;
use crate::models::{ContactForm, Lead, LeadId, Timestamp};
use crate::services::{insert_new, newest_first, remove_existing};
use validator::Validate;

/// Stores a contact-form submission from the public site and returns its id.
pub fn submit_lead(source: &mut dyn DataSource, form: ContactForm, now: Timestamp) -> Result<LeadId, PortalError> {
    let id = source.next_id()?;
    let lead = Lead::from_form(id.clone(), form, now);
    lead.validate()?;
    insert_new(source.leads_mut(), lead, "Lead")?;
    crate::log_info!("Lead {} received", id);
    Ok(id)
}

pub fn list_leads(source: &dyn DataSource) -> Vec<Lead> {
    newest_first(source.leads().all())
}

pub fn delete_lead(source: &mut dyn DataSource, id: &str) -> Result<Vec<Lead>, PortalError> {
    remove_existing(source.leads_mut(), id, "Lead")?;
    Ok(list_leads(source))
}
