//! Inquiry domain entity

use chrono::{DateTime, Utc};

/// A student's question to a hostel owner.
#[derive(Debug, Clone)]
pub struct Inquiry {
    pub id: String,
    pub student_id: String,
    pub hostel_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Inquiry {
    pub fn new(
        student_id: impl Into<String>,
        hostel_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            student_id: student_id.into(),
            hostel_id: hostel_id.into(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}
