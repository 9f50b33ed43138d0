//! Booking domain entity

use chrono::{DateTime, Utc};

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// Booking created, awaiting confirmation
    Pending,
    /// Booking confirmed by the owner
    Confirmed,
    /// Booking cancelled by user or system (terminal)
    Cancelled,
    /// Stay completed (terminal)
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Whether a transition to `next` is allowed.
    ///
    /// pending -> confirmed -> completed; pending/confirmed -> cancelled.
    /// Terminal states admit no transition, not even onto themselves;
    /// non-terminal self-transitions are idempotent no-ops.
    pub fn can_transition_to(&self, next: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        if *self == next {
            return true;
        }
        match (self, next) {
            (Self::Pending, Self::Confirmed) => true,
            (Self::Confirmed, Self::Completed) => true,
            (Self::Pending | Self::Confirmed, Self::Cancelled) => true,
            _ => false,
        }
    }

    /// Terminal states admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reservation of a room by a student for a date interval.
///
/// The interval is half-open in intent, but the overlap comparison is
/// inclusive on both ends: two bookings sharing a boundary date conflict.
/// Cancelled bookings never participate in overlap checks.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: String,
    pub room_id: String,
    pub student_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        room_id: impl Into<String>,
        student_id: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            room_id: room_id.into(),
            student_id: student_id.into(),
            start_date,
            end_date,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Inclusive date-range overlap test.
    ///
    /// `existing.start <= new.end && existing.end >= new.start` - back-to-back
    /// bookings on the same boundary date count as overlapping.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_date <= end && self.end_date >= start
    }

    /// Whether this booking blocks the room (any status except cancelled).
    pub fn blocks_room(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }

    /// Mark as cancelled. Terminal.
    pub fn cancel(&mut self) {
        self.status = BookingStatus::Cancelled;
    }
}

/// Validate a booking date range: start must be strictly before end.
pub fn validate_date_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), String> {
    if start >= end {
        return Err("checkInDate must be before checkOutDate".to_string());
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn sample_booking() -> Booking {
        Booking::new("room-1", "student-1", date(2025, 8, 1), date(2025, 8, 5))
    }

    #[test]
    fn new_booking_is_pending() {
        let b = sample_booking();
        assert_eq!(b.status, BookingStatus::Pending);
        assert!(b.blocks_room());
    }

    #[test]
    fn overlap_is_inclusive_on_boundaries() {
        let b = sample_booking();
        // shares only the boundary date 08-05, still conflicts
        assert!(b.overlaps(date(2025, 8, 5), date(2025, 8, 10)));
        // fully disjoint
        assert!(!b.overlaps(date(2025, 8, 6), date(2025, 8, 10)));
        // contained
        assert!(b.overlaps(date(2025, 8, 2), date(2025, 8, 3)));
        // surrounding
        assert!(b.overlaps(date(2025, 7, 1), date(2025, 9, 1)));
    }

    #[test]
    fn cancelled_booking_does_not_block() {
        let mut b = sample_booking();
        b.cancel();
        assert!(!b.blocks_room());
        assert_eq!(b.status, BookingStatus::Cancelled);
    }

    #[test]
    fn inverted_range_is_invalid() {
        assert!(validate_date_range(date(2025, 8, 5), date(2025, 8, 1)).is_err());
        assert!(validate_date_range(date(2025, 8, 1), date(2025, 8, 1)).is_err());
        assert!(validate_date_range(date(2025, 8, 1), date(2025, 8, 2)).is_ok());
    }

    #[test]
    fn status_transitions_follow_state_machine() {
        use BookingStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Confirmed.can_transition_to(Completed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Cancelled));
        // must pass through confirmed
        assert!(!Pending.can_transition_to(Completed));
        // terminal states
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(Cancelled.is_terminal());
        assert!(Completed.is_terminal());
    }

    #[test]
    fn self_transitions_only_in_non_terminal_states() {
        use BookingStatus::*;
        assert!(Pending.can_transition_to(Pending));
        assert!(Confirmed.can_transition_to(Confirmed));
        // terminal states reject even their own status
        assert!(!Cancelled.can_transition_to(Cancelled));
        assert!(!Completed.can_transition_to(Completed));
    }

    #[test]
    fn status_parse_roundtrip() {
        for status in &[
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(*status));
        }
        assert_eq!(BookingStatus::parse("resurrected"), None);
    }
}
