//! Booking service: application-layer orchestration
//!
//! All booking business logic lives here: date parsing and validation,
//! partial-update merging and the status state machine. HTTP handlers
//! are thin wrappers that delegate to this service. The double-booking
//! check itself runs inside the repository transaction, together with
//! the write, so a concurrent create cannot slip between check and
//! insert.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::domain::booking::validate_date_range;
use crate::domain::{Booking, BookingStatus, DomainError, DomainResult, RepositoryProvider};

/// Fields accepted when creating a booking.
#[derive(Debug, Clone)]
pub struct CreateBookingData {
    pub room_id: String,
    pub student_id: String,
    pub check_in_date: String,
    pub check_out_date: String,
}

/// Partial update of a booking. Unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookingData {
    pub room_id: Option<String>,
    pub student_id: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub status: Option<String>,
}

/// Parse a booking date: either a plain calendar date (`2025-08-01`,
/// midnight UTC) or a full RFC 3339 timestamp.
fn parse_booking_date(field: &str, value: &str) -> DomainResult<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| DomainError::Validation(format!("Invalid {}: {}", field, value)))?;
        return Ok(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DomainError::Validation(format!("Invalid {}: {}", field, value)))
}

/// Orchestrates all booking use-cases over the repository provider.
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Create a booking.
    ///
    /// Dates are validated before anything touches the store, so an
    /// inverted range fails with a validation error even when the room
    /// does not exist. Room existence, the inclusive overlap check, the
    /// insert and `room.available = false` all happen in one repository
    /// transaction.
    pub async fn create(&self, data: CreateBookingData) -> DomainResult<Booking> {
        let start = parse_booking_date("checkInDate", &data.check_in_date)?;
        let end = parse_booking_date("checkOutDate", &data.check_out_date)?;
        validate_date_range(start, end).map_err(DomainError::Validation)?;

        if self.repos.users().find_by_id(&data.student_id).await?.is_none() {
            return Err(DomainError::not_found("Student", &data.student_id));
        }

        let booking = Booking::new(data.room_id, data.student_id, start, end);
        let booking = self.repos.bookings().create(booking).await?;

        info!(
            booking_id = %booking.id,
            room_id = %booking.room_id,
            "Booking created"
        );
        Ok(booking)
    }

    /// Get a single booking by ID.
    pub async fn get(&self, id: &str) -> DomainResult<Booking> {
        self.repos
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking", id))
    }

    /// All bookings in the system.
    pub async fn list_all(&self) -> DomainResult<Vec<Booking>> {
        let bookings = self.repos.bookings().find_all().await?;
        if bookings.is_empty() {
            return Err(DomainError::NotFound("No bookings found".to_string()));
        }
        Ok(bookings)
    }

    /// All bookings for one room. An empty result is reported as not found.
    pub async fn for_room(&self, room_id: &str) -> DomainResult<Vec<Booking>> {
        let bookings = self.repos.bookings().find_by_room(room_id).await?;
        if bookings.is_empty() {
            return Err(DomainError::NotFound(
                "No bookings found for this room".to_string(),
            ));
        }
        Ok(bookings)
    }

    /// All bookings made by one student. An empty result is reported as
    /// not found.
    pub async fn for_student(&self, student_id: &str) -> DomainResult<Vec<Booking>> {
        let bookings = self.repos.bookings().find_by_student(student_id).await?;
        if bookings.is_empty() {
            return Err(DomainError::NotFound(
                "No bookings found for this student".to_string(),
            ));
        }
        Ok(bookings)
    }

    /// Apply a partial update.
    ///
    /// Unset fields keep their stored values; the merged date range is
    /// re-validated and re-checked for overlap (excluding the booking
    /// itself) inside the repository transaction. A re-pointed room or
    /// student must exist. Status changes must follow the state machine.
    /// Room availability is not touched here.
    pub async fn update(&self, id: &str, data: UpdateBookingData) -> DomainResult<Booking> {
        let existing = self.get(id).await?;

        if let Some(room_id) = &data.room_id {
            if self.repos.rooms().find_by_id(room_id).await?.is_none() {
                return Err(DomainError::not_found("Room", room_id));
            }
        }
        if let Some(student_id) = &data.student_id {
            if self.repos.users().find_by_id(student_id).await?.is_none() {
                return Err(DomainError::not_found("Student", student_id));
            }
        }

        let start = match &data.check_in_date {
            Some(raw) => parse_booking_date("checkInDate", raw)?,
            None => existing.start_date,
        };
        let end = match &data.check_out_date {
            Some(raw) => parse_booking_date("checkOutDate", raw)?,
            None => existing.end_date,
        };
        validate_date_range(start, end).map_err(DomainError::Validation)?;

        let status = match &data.status {
            Some(raw) => {
                let next = BookingStatus::parse(raw).ok_or_else(|| {
                    DomainError::Validation(format!("Invalid booking status: {}", raw))
                })?;
                if !existing.status.can_transition_to(next) {
                    return Err(DomainError::Validation(format!(
                        "Cannot change booking status from {} to {}",
                        existing.status, next
                    )));
                }
                next
            }
            None => existing.status,
        };

        let merged = Booking {
            id: existing.id,
            room_id: data.room_id.unwrap_or(existing.room_id),
            student_id: data.student_id.unwrap_or(existing.student_id),
            start_date: start,
            end_date: end,
            status,
            created_at: existing.created_at,
        };

        let booking = self.repos.bookings().update(merged).await?;
        info!(booking_id = %booking.id, status = %booking.status, "Booking updated");
        Ok(booking)
    }

    /// Cancel a booking: mark it cancelled and free its room, atomically.
    pub async fn cancel(&self, id: &str) -> DomainResult<()> {
        let existing = self.get(id).await?;

        if !existing.status.can_transition_to(BookingStatus::Cancelled) {
            return Err(DomainError::Validation(format!(
                "Cannot cancel a {} booking",
                existing.status
            )));
        }

        self.repos.bookings().cancel(id).await?;
        info!(booking_id = %id, "Booking cancelled");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    use crate::domain::{Hostel, Room, User, UserRole};
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::SeaOrmRepositoryProvider;

    async fn setup() -> (BookingService, Arc<SeaOrmRepositoryProvider>) {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        let repos = Arc::new(SeaOrmRepositoryProvider::new(db));
        let service = BookingService::new(repos.clone());
        (service, repos)
    }

    async fn seed_student(repos: &SeaOrmRepositoryProvider, email: &str) -> User {
        repos
            .users()
            .save(User::new("Test Student", email, "hash", UserRole::Student))
            .await
            .unwrap()
    }

    async fn seed_room(repos: &SeaOrmRepositoryProvider) -> Room {
        let owner = repos
            .users()
            .save(User::new("Owner", "owner@test.dev", "hash", UserRole::Owner))
            .await
            .unwrap();
        let hostel = repos
            .hostels()
            .save(Hostel::new(
                &owner.id,
                "Sunrise Hostel",
                "A hostel",
                "1 Main St",
                41.3,
                69.2,
                "+998901234567",
            ))
            .await
            .unwrap();
        repos
            .rooms()
            .save(Room::new(&hostel.id, "double", 120.0, 2))
            .await
            .unwrap()
    }

    fn create_data(room: &Room, student: &User, check_in: &str, check_out: &str) -> CreateBookingData {
        CreateBookingData {
            room_id: room.id.clone(),
            student_id: student.id.clone(),
            check_in_date: check_in.to_string(),
            check_out_date: check_out.to_string(),
        }
    }

    #[tokio::test]
    async fn create_and_get_round_trip() {
        let (service, repos) = setup().await;
        let student = seed_student(&repos, "s1@test.dev").await;
        let room = seed_room(&repos).await;

        let created = service
            .create(create_data(&room, &student, "2025-08-01", "2025-08-05"))
            .await
            .unwrap();
        assert_eq!(created.status, BookingStatus::Pending);

        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched.room_id, room.id);
        assert_eq!(fetched.student_id, student.id);
        assert_eq!(fetched.start_date, created.start_date);
        assert_eq!(fetched.end_date, created.end_date);
        assert_eq!(fetched.status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn create_marks_room_unavailable() {
        let (service, repos) = setup().await;
        let student = seed_student(&repos, "s1@test.dev").await;
        let room = seed_room(&repos).await;
        assert!(room.available);

        service
            .create(create_data(&room, &student, "2025-08-01", "2025-08-05"))
            .await
            .unwrap();

        let room = repos.rooms().find_by_id(&room.id).await.unwrap().unwrap();
        assert!(!room.available);
    }

    #[tokio::test]
    async fn overlapping_create_conflicts() {
        let (service, repos) = setup().await;
        let a = seed_student(&repos, "a@test.dev").await;
        let b = seed_student(&repos, "b@test.dev").await;
        let room = seed_room(&repos).await;

        service
            .create(create_data(&room, &a, "2025-08-01", "2025-08-10"))
            .await
            .unwrap();

        let err = service
            .create(create_data(&room, &b, "2025-08-05", "2025-08-15"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(
            err.to_string(),
            "Room is already booked for the selected dates"
        );
    }

    #[tokio::test]
    async fn boundary_dates_conflict() {
        let (service, repos) = setup().await;
        let a = seed_student(&repos, "a@test.dev").await;
        let b = seed_student(&repos, "b@test.dev").await;
        let room = seed_room(&repos).await;

        service
            .create(create_data(&room, &a, "2025-08-01", "2025-08-05"))
            .await
            .unwrap();

        // back-to-back on 08-05: inclusive comparison, so this conflicts
        let err = service
            .create(create_data(&room, &b, "2025-08-05", "2025-08-10"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn disjoint_ranges_both_succeed() {
        let (service, repos) = setup().await;
        let a = seed_student(&repos, "a@test.dev").await;
        let b = seed_student(&repos, "b@test.dev").await;
        let room = seed_room(&repos).await;

        service
            .create(create_data(&room, &a, "2025-08-01", "2025-08-05"))
            .await
            .unwrap();
        service
            .create(create_data(&room, &b, "2025-08-06", "2025-08-10"))
            .await
            .unwrap();

        let bookings = service.for_room(&room.id).await.unwrap();
        assert_eq!(bookings.len(), 2);
    }

    #[tokio::test]
    async fn inverted_range_fails_even_for_missing_room() {
        let (service, repos) = setup().await;
        let student = seed_student(&repos, "s1@test.dev").await;

        let err = service
            .create(CreateBookingData {
                room_id: "no-such-room".to_string(),
                student_id: student.id.clone(),
                check_in_date: "2025-08-10".to_string(),
                check_out_date: "2025-08-01".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "checkInDate must be before checkOutDate");
    }

    #[tokio::test]
    async fn missing_room_is_not_found() {
        let (service, repos) = setup().await;
        let student = seed_student(&repos, "s1@test.dev").await;

        let err = service
            .create(CreateBookingData {
                room_id: "no-such-room".to_string(),
                student_id: student.id.clone(),
                check_in_date: "2025-08-01".to_string(),
                check_out_date: "2025-08-05".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn unparseable_date_is_validation_error() {
        let (service, repos) = setup().await;
        let student = seed_student(&repos, "s1@test.dev").await;
        let room = seed_room(&repos).await;

        let err = service
            .create(create_data(&room, &student, "next tuesday", "2025-08-05"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn cancel_frees_room() {
        let (service, repos) = setup().await;
        let student = seed_student(&repos, "s1@test.dev").await;
        let room = seed_room(&repos).await;

        let booking = service
            .create(create_data(&room, &student, "2025-08-01", "2025-08-05"))
            .await
            .unwrap();

        service.cancel(&booking.id).await.unwrap();

        let cancelled = service.get(&booking.id).await.unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        let room = repos.rooms().find_by_id(&room.id).await.unwrap().unwrap();
        assert!(room.available);
    }

    #[tokio::test]
    async fn cancel_frees_room_even_with_other_active_booking() {
        let (service, repos) = setup().await;
        let a = seed_student(&repos, "a@test.dev").await;
        let b = seed_student(&repos, "b@test.dev").await;
        let room = seed_room(&repos).await;

        let first = service
            .create(create_data(&room, &a, "2025-08-01", "2025-08-05"))
            .await
            .unwrap();
        service
            .create(create_data(&room, &b, "2025-08-10", "2025-08-15"))
            .await
            .unwrap();

        service.cancel(&first.id).await.unwrap();

        // availability is set blindly, even though the second booking
        // still holds the room
        let room = repos.rooms().find_by_id(&room.id).await.unwrap().unwrap();
        assert!(room.available);
    }

    #[tokio::test]
    async fn cancelled_booking_no_longer_blocks() {
        let (service, repos) = setup().await;
        let a = seed_student(&repos, "a@test.dev").await;
        let b = seed_student(&repos, "b@test.dev").await;
        let room = seed_room(&repos).await;

        let booking = service
            .create(create_data(&room, &a, "2025-08-01", "2025-08-10"))
            .await
            .unwrap();
        service.cancel(&booking.id).await.unwrap();

        // same dates are free again
        service
            .create(create_data(&room, &b, "2025-08-01", "2025-08-10"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_moving_onto_other_booking_conflicts() {
        let (service, repos) = setup().await;
        let a = seed_student(&repos, "a@test.dev").await;
        let b = seed_student(&repos, "b@test.dev").await;
        let room = seed_room(&repos).await;

        service
            .create(create_data(&room, &a, "2025-08-01", "2025-08-05"))
            .await
            .unwrap();
        let moved = service
            .create(create_data(&room, &b, "2025-08-10", "2025-08-15"))
            .await
            .unwrap();

        let err = service
            .update(
                &moved.id,
                UpdateBookingData {
                    check_in_date: Some("2025-08-03".to_string()),
                    check_out_date: Some("2025-08-07".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // stored booking unchanged after the failed update
        let unchanged = service.get(&moved.id).await.unwrap();
        assert_eq!(unchanged.start_date, moved.start_date);
        assert_eq!(unchanged.end_date, moved.end_date);
    }

    #[tokio::test]
    async fn update_own_range_excludes_self_from_overlap() {
        let (service, repos) = setup().await;
        let student = seed_student(&repos, "s1@test.dev").await;
        let room = seed_room(&repos).await;

        let booking = service
            .create(create_data(&room, &student, "2025-08-01", "2025-08-05"))
            .await
            .unwrap();

        // extending the same booking must not conflict with itself
        let updated = service
            .update(
                &booking.id,
                UpdateBookingData {
                    check_out_date: Some("2025-08-08".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.start_date, booking.start_date);
        assert!(updated.end_date > booking.end_date);
    }

    #[tokio::test]
    async fn update_to_missing_room_or_student_is_not_found() {
        let (service, repos) = setup().await;
        let student = seed_student(&repos, "s1@test.dev").await;
        let room = seed_room(&repos).await;

        let booking = service
            .create(create_data(&room, &student, "2025-08-01", "2025-08-05"))
            .await
            .unwrap();

        let err = service
            .update(
                &booking.id,
                UpdateBookingData {
                    room_id: Some("no-such-room".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));

        let err = service
            .update(
                &booking.id,
                UpdateBookingData {
                    student_id: Some("no-such-student".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn status_transitions_are_enforced() {
        let (service, repos) = setup().await;
        let student = seed_student(&repos, "s1@test.dev").await;
        let room = seed_room(&repos).await;

        let booking = service
            .create(create_data(&room, &student, "2025-08-01", "2025-08-05"))
            .await
            .unwrap();

        // pending cannot jump straight to completed
        let err = service
            .update(
                &booking.id,
                UpdateBookingData {
                    status: Some("completed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // pending -> confirmed -> completed
        service
            .update(
                &booking.id,
                UpdateBookingData {
                    status: Some("confirmed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let completed = service
            .update(
                &booking.id,
                UpdateBookingData {
                    status: Some("completed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(completed.status, BookingStatus::Completed);

        // completed is terminal, even for its own status
        let err = service.cancel(&booking.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        let err = service
            .update(
                &booking.id,
                UpdateBookingData {
                    status: Some("completed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn cancelling_twice_is_rejected() {
        let (service, repos) = setup().await;
        let student = seed_student(&repos, "s1@test.dev").await;
        let room = seed_room(&repos).await;

        let booking = service
            .create(create_data(&room, &student, "2025-08-01", "2025-08-05"))
            .await
            .unwrap();
        service.cancel(&booking.id).await.unwrap();

        let err = service.cancel(&booking.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Cannot cancel a cancelled booking");
    }

    #[tokio::test]
    async fn empty_lookups_are_not_found() {
        let (service, repos) = setup().await;
        let student = seed_student(&repos, "s1@test.dev").await;
        let room = seed_room(&repos).await;

        let err = service.for_room(&room.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(err.to_string(), "No bookings found for this room");

        let err = service.for_student(&student.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(err.to_string(), "No bookings found for this student");

        let err = service.list_all().await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
