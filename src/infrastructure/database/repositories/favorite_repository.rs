//! SeaORM implementation of FavoriteRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::favorite::{Favorite, FavoriteRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::favorite;

pub struct SeaOrmFavoriteRepository {
    db: DatabaseConnection,
}

impl SeaOrmFavoriteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: favorite::Model) -> Favorite {
    Favorite {
        id: m.id,
        user_id: m.user_id,
        hostel_id: m.hostel_id,
        created_at: m.created_at,
    }
}

#[async_trait]
impl FavoriteRepository for SeaOrmFavoriteRepository {
    async fn save(&self, f: Favorite) -> DomainResult<Favorite> {
        debug!("Saving favorite {} ({} -> {})", f.id, f.user_id, f.hostel_id);
        let model = favorite::ActiveModel {
            id: Set(f.id.clone()),
            user_id: Set(f.user_id.clone()),
            hostel_id: Set(f.hostel_id.clone()),
            created_at: Set(f.created_at),
        };
        model.insert(&self.db).await?;
        Ok(f)
    }

    async fn find_by_user(&self, user_id: &str) -> DomainResult<Vec<Favorite>> {
        let models = favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_desc(favorite::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_user_and_hostel(
        &self,
        user_id: &str,
        hostel_id: &str,
    ) -> DomainResult<Option<Favorite>> {
        let model = favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::HostelId.eq(hostel_id))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let existing = favorite::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Favorite", id))?;
        let active: favorite::ActiveModel = existing.into();
        active.delete(&self.db).await?;
        Ok(())
    }
}
