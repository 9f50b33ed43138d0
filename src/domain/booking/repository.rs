//! Booking repository interface

use async_trait::async_trait;

use super::model::Booking;
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking.
    ///
    /// Implementations must run the room-existence check, the inclusive
    /// overlap check against non-cancelled bookings of the room, the insert
    /// and the `room.available = false` write inside a single database
    /// transaction, so that two concurrent requests cannot both pass the
    /// check (check-then-act race).
    async fn create(&self, booking: Booking) -> DomainResult<Booking>;

    /// Persist changed fields of an existing booking.
    ///
    /// Runs the overlap check against all other non-cancelled bookings for
    /// the booking's room (excluding the booking itself) in the same
    /// transaction as the write. Does not touch room availability.
    async fn update(&self, booking: Booking) -> DomainResult<Booking>;

    /// Mark a booking cancelled and set its room available, atomically.
    async fn cancel(&self, id: &str) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>>;

    async fn find_all(&self) -> DomainResult<Vec<Booking>>;

    async fn find_by_room(&self, room_id: &str) -> DomainResult<Vec<Booking>>;

    async fn find_by_student(&self, student_id: &str) -> DomainResult<Vec<Booking>>;
}
