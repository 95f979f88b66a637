// src/backend/models/content_item.rs
use crate::models::common::{non_blank, Category, ContentId, Timestamp};
use crate::models::Record;
use candid::CandidType;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A title in the catalog. Public unless `is_subscriber_only` is set.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Validate)]
pub struct ContentItem {
    pub id: ContentId,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub category: Category,
    #[validate(url)]
    pub image_url: String,
    #[validate(range(min = 0.0, max = 10.0))]
    pub rating: f64,
    #[validate(custom(function = "validate_year"))]
    pub year: String,
    pub is_new: bool,
    #[serde(default)]
    pub is_subscriber_only: bool,
    #[validate(length(max = 2000))]
    pub synopsis: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub cast: Vec<String>,
    #[serde(default)]
    pub created_at: Timestamp,
}

/// Admin form payload for creating or editing a catalog entry.
#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct ContentInput {
    pub title: String,
    pub category: Category,
    pub image_url: String,
    pub rating: f64,
    pub year: String,
    pub is_new: bool,
    pub is_subscriber_only: Option<bool>,
    pub synopsis: Option<String>,
    pub cast: Vec<String>,
}

impl ContentItem {
    pub fn from_input(id: ContentId, input: ContentInput, created_at: Timestamp) -> Self {
        Self {
            id,
            title: input.title.trim().to_string(),
            category: input.category,
            image_url: input.image_url.trim().to_string(),
            rating: input.rating,
            year: input.year.trim().to_string(),
            is_new: input.is_new,
            is_subscriber_only: input.is_subscriber_only.unwrap_or(false),
            synopsis: non_blank(input.synopsis),
            cast: input
                .cast
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
            created_at,
        }
    }

    pub fn is_public(&self) -> bool {
        !self.is_subscriber_only
    }
}

impl Record for ContentItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

fn validate_year(year: &str) -> Result<(), ValidationError> {
    if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("year_must_be_four_digits"))
    }
}
