//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::room::{Room, RoomRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::room;

use super::{amenities_from_json, amenities_to_json};

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        hostel_id: m.hostel_id,
        room_type: m.room_type,
        price: m.price,
        capacity: m.capacity,
        available: m.available,
        amenities: amenities_from_json(&m.amenities),
        created_at: m.created_at,
    }
}

fn domain_to_active(r: &Room) -> room::ActiveModel {
    room::ActiveModel {
        id: Set(r.id.clone()),
        hostel_id: Set(r.hostel_id.clone()),
        room_type: Set(r.room_type.clone()),
        price: Set(r.price),
        capacity: Set(r.capacity),
        available: Set(r.available),
        amenities: Set(amenities_to_json(&r.amenities)),
        created_at: Set(r.created_at),
    }
}

// ── RoomRepository impl ─────────────────────────────────────────

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn save(&self, r: Room) -> DomainResult<Room> {
        debug!("Saving room {} in hostel {}", r.id, r.hostel_id);
        domain_to_active(&r).insert(&self.db).await?;
        Ok(r)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        let models = room::Entity::find()
            .order_by_desc(room::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_hostel(&self, hostel_id: &str) -> DomainResult<Vec<Room>> {
        let models = room::Entity::find()
            .filter(room::Column::HostelId.eq(hostel_id))
            .order_by_asc(room::Column::Price)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, r: Room) -> DomainResult<Room> {
        let existing = room::Entity::find_by_id(&r.id).one(&self.db).await?;
        if existing.is_none() {
            return Err(DomainError::not_found("Room", &r.id));
        }
        domain_to_active(&r).update(&self.db).await?;
        Ok(r)
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let existing = room::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Room", id))?;
        let active: room::ActiveModel = existing.into();
        active.delete(&self.db).await?;
        Ok(())
    }
}
