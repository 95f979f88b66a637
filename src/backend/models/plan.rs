// src/backend/models/plan.rs
use crate::models::common::{PlanId, Timestamp};
use crate::models::Record;
use candid::CandidType;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A subscription plan. Several plans may be recommended at once.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Validate)]
pub struct Plan {
    pub id: PlanId,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Decimal rendered as text, e.g. "29,90" or "45.90".
    #[validate(custom(function = "validate_price"))]
    pub price: String,
    #[validate(length(max = 30))]
    pub features: Vec<String>,
    pub is_recommended: bool,
    #[validate(url)]
    pub checkout_url: String,
    #[validate(url)]
    pub renewal_url: String,
    #[serde(default)]
    pub created_at: Timestamp,
}

#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct PlanInput {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    pub is_recommended: bool,
    pub checkout_url: String,
    pub renewal_url: String,
}

impl Plan {
    pub fn from_input(id: PlanId, input: PlanInput, created_at: Timestamp) -> Self {
        Self {
            id,
            name: input.name.trim().to_string(),
            price: input.price.trim().to_string(),
            features: input
                .features
                .into_iter()
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect(),
            is_recommended: input.is_recommended,
            checkout_url: input.checkout_url.trim().to_string(),
            renewal_url: input.renewal_url.trim().to_string(),
            created_at,
        }
    }

    /// Price in cents, used to order plans on the public site.
    pub fn price_cents(&self) -> Option<u64> {
        parse_price_cents(&self.price)
    }
}

impl Record for Plan {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// Parses "29,90", "29.9" or "30" into cents. Thousands separators are not accepted.
pub fn parse_price_cents(price: &str) -> Option<u64> {
    let normalized = price.trim().replace(',', ".");
    let (whole, fraction) = match normalized.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (normalized.as_str(), ""),
    };
    if whole.is_empty()
        || fraction.len() > 2
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    let whole: u64 = whole.parse().ok()?;
    let cents: u64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<u64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(cents)
}

fn validate_price(price: &str) -> Result<(), ValidationError> {
    parse_price_cents(price)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("price_must_be_decimal"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_decimal_separators() {
        assert_eq!(parse_price_cents("29,90"), Some(2990));
        assert_eq!(parse_price_cents("45.9"), Some(4590));
        assert_eq!(parse_price_cents("75"), Some(7500));
        assert_eq!(parse_price_cents("1.234,50"), None);
        assert_eq!(parse_price_cents("R$ 10"), None);
        assert_eq!(parse_price_cents(",50"), None);
    }

    #[test]
    fn feature_order_is_preserved() {
        let plan = Plan::from_input(
            "1".to_string(),
            PlanInput {
                name: "VIP 4K".to_string(),
                price: "45,90".to_string(),
                features: vec!["4K".to_string(), "2 Screens".to_string()],
                is_recommended: true,
                checkout_url: "https://wa.me/5598982804577?text=VIP".to_string(),
                renewal_url: "https://wa.me/5598982804577?text=Renew".to_string(),
            },
            1,
        );
        assert_eq!(plan.features, vec!["4K", "2 Screens"]);
        assert!(plan.validate().is_ok());
    }
}
