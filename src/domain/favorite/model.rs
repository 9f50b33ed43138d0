//! Favorite domain entity

use chrono::{DateTime, Utc};

/// A student's bookmark of a hostel. Unique per (user, hostel).
#[derive(Debug, Clone)]
pub struct Favorite {
    pub id: String,
    pub user_id: String,
    pub hostel_id: String,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: impl Into<String>, hostel_id: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            hostel_id: hostel_id.into(),
            created_at: Utc::now(),
        }
    }
}
