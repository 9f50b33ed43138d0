//! SeaORM implementation of BookingRepository
//!
//! Booking mutations run as one database transaction: the overlap check,
//! the booking write and the room-availability write either all land or
//! none do. Two concurrent create requests for the same room serialize on
//! the store instead of both passing an in-memory check.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbBackend, EntityTrait, IsolationLevel, QueryFilter, QueryOrder, Set, TransactionError,
    TransactionTrait,
};

use crate::domain::booking::{Booking, BookingRepository, BookingStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{booking, room};

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: booking::Model) -> Booking {
    Booking {
        id: m.id,
        room_id: m.room_id,
        student_id: m.student_id,
        start_date: m.start_date,
        end_date: m.end_date,
        status: BookingStatus::parse(&m.status).unwrap_or(BookingStatus::Pending),
        created_at: m.created_at,
    }
}

fn domain_to_active(b: &Booking) -> booking::ActiveModel {
    booking::ActiveModel {
        id: Set(b.id.clone()),
        room_id: Set(b.room_id.clone()),
        student_id: Set(b.student_id.clone()),
        start_date: Set(b.start_date),
        end_date: Set(b.end_date),
        status: Set(b.status.as_str().to_string()),
        created_at: Set(b.created_at),
    }
}

fn txn_err(e: TransactionError<DomainError>) -> DomainError {
    match e {
        TransactionError::Connection(db) => db.into(),
        TransactionError::Transaction(domain) => domain,
    }
}

/// Isolation for the check-then-write transactions.
///
/// On multi-writer backends the overlap check and the insert must run
/// serializable, or two concurrent creates can both see zero conflicts
/// and both commit. SQLite serializes write transactions itself and
/// ignores the setting.
fn write_isolation(backend: DbBackend) -> Option<IsolationLevel> {
    match backend {
        DbBackend::Sqlite => None,
        _ => Some(IsolationLevel::Serializable),
    }
}

/// Inclusive overlap query: `start_date <= end AND end_date >= start`,
/// cancelled bookings excluded. Runs on the supplied transaction.
async fn overlapping_in_txn(
    txn: &DatabaseTransaction,
    room_id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    exclude_id: Option<&str>,
) -> Result<Vec<booking::Model>, sea_orm::DbErr> {
    let mut query = booking::Entity::find()
        .filter(booking::Column::RoomId.eq(room_id))
        .filter(booking::Column::Status.ne(BookingStatus::Cancelled.as_str()))
        .filter(booking::Column::StartDate.lte(end))
        .filter(booking::Column::EndDate.gte(start));

    if let Some(id) = exclude_id {
        query = query.filter(booking::Column::Id.ne(id));
    }

    query.all(txn).await
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn create(&self, b: Booking) -> DomainResult<Booking> {
        debug!("Creating booking {} for room {}", b.id, b.room_id);

        let isolation = write_isolation(self.db.get_database_backend());
        let result = self
            .db
            .transaction_with_config::<_, Booking, DomainError>(
                move |txn| {
                    Box::pin(async move {
                        let room = room::Entity::find_by_id(&b.room_id)
                            .one(txn)
                            .await
                            .map_err(DomainError::from)?
                            .ok_or_else(|| DomainError::not_found("Room", &b.room_id))?;

                        let conflicts =
                            overlapping_in_txn(txn, &b.room_id, b.start_date, b.end_date, None)
                                .await
                                .map_err(DomainError::from)?;
                        if !conflicts.is_empty() {
                            return Err(DomainError::Conflict(
                                "Room is already booked for the selected dates".to_string(),
                            ));
                        }

                        domain_to_active(&b)
                            .insert(txn)
                            .await
                            .map_err(DomainError::from)?;

                        let mut active: room::ActiveModel = room.into();
                        active.available = Set(false);
                        active.update(txn).await.map_err(DomainError::from)?;

                        Ok(b)
                    })
                },
                isolation,
                None,
            )
            .await;

        result.map_err(txn_err)
    }

    async fn update(&self, b: Booking) -> DomainResult<Booking> {
        debug!("Updating booking {}", b.id);

        let isolation = write_isolation(self.db.get_database_backend());
        let result = self
            .db
            .transaction_with_config::<_, Booking, DomainError>(
                move |txn| {
                    Box::pin(async move {
                        let existing = booking::Entity::find_by_id(&b.id)
                            .one(txn)
                            .await
                            .map_err(DomainError::from)?;
                        if existing.is_none() {
                            return Err(DomainError::not_found("Booking", &b.id));
                        }

                        // Cancelled bookings no longer contend for the room, so
                        // skip the overlap check when cancelling via update.
                        if b.status != BookingStatus::Cancelled {
                            let conflicts = overlapping_in_txn(
                                txn,
                                &b.room_id,
                                b.start_date,
                                b.end_date,
                                Some(&b.id),
                            )
                            .await
                            .map_err(DomainError::from)?;
                            if !conflicts.is_empty() {
                                return Err(DomainError::Conflict(
                                    "Room is already booked for the selected dates".to_string(),
                                ));
                            }
                        }

                        domain_to_active(&b)
                            .update(txn)
                            .await
                            .map_err(DomainError::from)?;

                        Ok(b)
                    })
                },
                isolation,
                None,
            )
            .await;

        result.map_err(txn_err)
    }

    async fn cancel(&self, id: &str) -> DomainResult<()> {
        debug!("Cancelling booking {}", id);
        let id = id.to_string();

        let result = self
            .db
            .transaction::<_, (), DomainError>(move |txn| {
                Box::pin(async move {
                    let existing = booking::Entity::find_by_id(&id)
                        .one(txn)
                        .await
                        .map_err(DomainError::from)?
                        .ok_or_else(|| DomainError::not_found("Booking", &id))?;

                    let room_id = existing.room_id.clone();

                    let mut active: booking::ActiveModel = existing.into();
                    active.status = Set(BookingStatus::Cancelled.as_str().to_string());
                    active.update(txn).await.map_err(DomainError::from)?;

                    // Unconditional: no recompute from remaining active
                    // bookings.
                    if let Some(room) = room::Entity::find_by_id(&room_id)
                        .one(txn)
                        .await
                        .map_err(DomainError::from)?
                    {
                        let mut active: room::ActiveModel = room.into();
                        active.available = Set(true);
                        active.update(txn).await.map_err(DomainError::from)?;
                    }

                    Ok(())
                })
            })
            .await;

        result.map_err(txn_err)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>> {
        let model = booking::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .order_by_desc(booking::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_room(&self, room_id: &str) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::RoomId.eq(room_id))
            .order_by_asc(booking::Column::StartDate)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_student(&self, student_id: &str) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::StudentId.eq(student_id))
            .order_by_asc(booking::Column::StartDate)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_writer_backends_get_serializable_isolation() {
        assert_eq!(
            write_isolation(DbBackend::Postgres),
            Some(IsolationLevel::Serializable)
        );
        assert_eq!(
            write_isolation(DbBackend::MySql),
            Some(IsolationLevel::Serializable)
        );
    }

    #[test]
    fn sqlite_relies_on_its_single_writer() {
        assert_eq!(write_isolation(DbBackend::Sqlite), None);
    }
}
