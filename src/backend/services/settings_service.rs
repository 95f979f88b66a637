// src/backend/services/settings_service.rs

use crate::datasource::DataSource;
use crate::error::PortalError;
use crate::models::AppSettings;
use validator::Validate;

/// Saved settings, or the defaults when none were saved yet.
pub fn get_settings(source: &dyn DataSource) -> AppSettings {
    source.settings().unwrap_or_default()
}

pub fn update_settings(source: &mut dyn DataSource, settings: AppSettings) -> Result<AppSettings, PortalError> {
    let settings = AppSettings {
        support_whatsapp: settings.support_whatsapp.trim().to_string(),
        ..settings
    };
    settings.validate()?;
    source.save_settings(settings.clone())?;
    crate::log_info!(
        "Settings updated: reward {} days, trial {} hours",
        settings.referral_reward_days,
        settings.trial_hours
    );
    Ok(settings)
}
