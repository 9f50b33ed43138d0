//! Hostel domain entity

use chrono::{DateTime, Utc};

/// Listing moderation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostelStatus {
    /// Awaiting admin approval, visible to owner and admin only
    Pending,
    /// Approved, publicly visible
    Approved,
    /// Rejected by admin
    Rejected,
}

impl HostelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for HostelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A property listing owned by a user with role "owner".
#[derive(Debug, Clone)]
pub struct Hostel {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub location_lat: f64,
    pub location_lng: f64,
    pub contact_number: String,
    pub amenities: Vec<String>,
    pub status: HostelStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hostel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        address: impl Into<String>,
        location_lat: f64,
        location_lng: f64,
        contact_number: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            name: name.into(),
            description: description.into(),
            address: address.into(),
            location_lat,
            location_lng,
            contact_number: contact_number.into(),
            amenities: Vec::new(),
            status: HostelStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}
