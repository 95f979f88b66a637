// src/backend/storage/storable.rs
use ic_stable_structures::{storable::Bound, Storable};
use serde::{de::DeserializeOwned, Serialize};
use std::borrow::Cow;

/// Wraps any serde type so it can live in stable structures, encoded as CBOR.
#[derive(Clone, Debug, PartialEq)]
pub struct Cbor<T>(pub T)
where
    T: Serialize + DeserializeOwned;

impl<T> Storable for Cbor<T>
where
    T: Serialize + DeserializeOwned,
{
    fn to_bytes(&self) -> Cow<[u8]> {
        let mut writer = vec![];
        ciborium::ser::into_writer(&self.0, &mut writer)
            .expect("Failed to serialize value to CBOR for stable storage");
        Cow::Owned(writer)
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        let value: T = ciborium::de::from_reader(bytes.as_ref())
            .expect("Failed to deserialize value from CBOR from stable storage");
        Cbor(value)
    }

    const BOUND: Bound = Bound::Unbounded;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ContentItem};

    #[test]
    fn cbor_preserves_records() {
        let item = ContentItem {
            id: "c1".to_string(),
            title: "Inside Out 2".to_string(),
            category: Category::Cartoon,
            image_url: "https://image.tmdb.org/t/p/original/io2.jpg".to_string(),
            rating: 9.6,
            year: "2024".to_string(),
            is_new: true,
            is_subscriber_only: false,
            synopsis: None,
            cast: vec!["Amy Poehler".to_string(), "Maya Hawke".to_string()],
            created_at: 3,
        };
        let wrapped = Cbor(item.clone());
        let bytes = wrapped.to_bytes();
        assert_eq!(Cbor::<ContentItem>::from_bytes(bytes).0, item);
    }
}
