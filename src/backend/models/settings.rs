// src/backend/models/settings.rs
use candid::CandidType;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const DEFAULT_REFERRAL_REWARD_DAYS: u32 = 7;
pub const DEFAULT_SUPPORT_WHATSAPP: &str = "5598982804577";
pub const DEFAULT_TRIAL_HOURS: u32 = 6;

/// Business parameters tuned from the admin settings form.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Validate)]
pub struct AppSettings {
    #[validate(range(max = 365))]
    pub referral_reward_days: u32,
    #[validate(custom(function = "validate_phone"))]
    pub support_whatsapp: String,
    #[validate(range(max = 720))]
    pub trial_hours: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            referral_reward_days: DEFAULT_REFERRAL_REWARD_DAYS,
            support_whatsapp: DEFAULT_SUPPORT_WHATSAPP.to_string(),
            trial_hours: DEFAULT_TRIAL_HOURS,
        }
    }
}

/// International number without the leading '+', 10 to 15 digits.
pub(crate) fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if digits == phone.len() && (10..=15).contains(&digits) {
        Ok(())
    } else {
        Err(ValidationError::new("phone_must_be_10_to_15_digits"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = AppSettings::default();
        assert_eq!(settings.referral_reward_days, 7);
        assert_eq!(settings.trial_hours, 6);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_formatted_phone() {
        let settings = AppSettings {
            support_whatsapp: "+55 98 98280-4577".to_string(),
            ..AppSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
