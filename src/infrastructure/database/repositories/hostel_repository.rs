//! SeaORM implementation of HostelRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::hostel::{Hostel, HostelRepository, HostelStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::hostel;

use super::{amenities_from_json, amenities_to_json};

pub struct SeaOrmHostelRepository {
    db: DatabaseConnection,
}

impl SeaOrmHostelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: hostel::Model) -> Hostel {
    Hostel {
        id: m.id,
        owner_id: m.owner_id,
        name: m.name,
        description: m.description,
        address: m.address,
        location_lat: m.location_lat,
        location_lng: m.location_lng,
        contact_number: m.contact_number,
        amenities: amenities_from_json(&m.amenities),
        status: HostelStatus::parse(&m.status).unwrap_or(HostelStatus::Pending),
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(h: &Hostel) -> hostel::ActiveModel {
    hostel::ActiveModel {
        id: Set(h.id.clone()),
        owner_id: Set(h.owner_id.clone()),
        name: Set(h.name.clone()),
        description: Set(h.description.clone()),
        address: Set(h.address.clone()),
        location_lat: Set(h.location_lat),
        location_lng: Set(h.location_lng),
        contact_number: Set(h.contact_number.clone()),
        amenities: Set(amenities_to_json(&h.amenities)),
        status: Set(h.status.as_str().to_string()),
        created_at: Set(h.created_at),
        updated_at: Set(h.updated_at),
    }
}

// ── HostelRepository impl ───────────────────────────────────────

#[async_trait]
impl HostelRepository for SeaOrmHostelRepository {
    async fn save(&self, h: Hostel) -> DomainResult<Hostel> {
        debug!("Saving hostel {}", h.id);
        domain_to_active(&h).insert(&self.db).await?;
        Ok(h)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Hostel>> {
        let model = hostel::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Hostel>> {
        let models = hostel::Entity::find()
            .order_by_desc(hostel::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_owner(&self, owner_id: &str) -> DomainResult<Vec<Hostel>> {
        let models = hostel::Entity::find()
            .filter(hostel::Column::OwnerId.eq(owner_id))
            .order_by_desc(hostel::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, h: Hostel) -> DomainResult<Hostel> {
        let existing = hostel::Entity::find_by_id(&h.id).one(&self.db).await?;
        if existing.is_none() {
            return Err(DomainError::not_found("Hostel", &h.id));
        }
        domain_to_active(&h).update(&self.db).await?;
        Ok(h)
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let existing = hostel::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Hostel", id))?;
        let active: hostel::ActiveModel = existing.into();
        active.delete(&self.db).await?;
        Ok(())
    }
}
