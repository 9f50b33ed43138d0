//! Photo domain entity

use chrono::{DateTime, Utc};

/// What a photo is attached to. Exactly one link per photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoOwner {
    User(String),
    Hostel(String),
    Room(String),
}

/// A stored photo URL linked to a user, hostel or room.
#[derive(Debug, Clone)]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub is_primary: bool,
    pub owner: PhotoOwner,
    pub created_at: DateTime<Utc>,
}

impl Photo {
    pub fn new(url: impl Into<String>, owner: PhotoOwner, is_primary: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            url: url.into(),
            is_primary,
            owner,
            created_at: Utc::now(),
        }
    }
}
