//! SeaORM implementation of PhotoRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionError, TransactionTrait,
};

use crate::domain::photo::{Photo, PhotoOwner, PhotoRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::photo;

pub struct SeaOrmPhotoRepository {
    db: DatabaseConnection,
}

impl SeaOrmPhotoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: photo::Model) -> Photo {
    let owner = if let Some(user_id) = m.user_id {
        PhotoOwner::User(user_id)
    } else if let Some(hostel_id) = m.hostel_id {
        PhotoOwner::Hostel(hostel_id)
    } else {
        PhotoOwner::Room(m.room_id.unwrap_or_default())
    };
    Photo {
        id: m.id,
        url: m.url,
        is_primary: m.is_primary,
        owner,
        created_at: m.created_at,
    }
}

fn owner_links(owner: &PhotoOwner) -> (Option<String>, Option<String>, Option<String>) {
    match owner {
        PhotoOwner::User(id) => (Some(id.clone()), None, None),
        PhotoOwner::Hostel(id) => (None, Some(id.clone()), None),
        PhotoOwner::Room(id) => (None, None, Some(id.clone())),
    }
}

fn owner_filter(owner: &PhotoOwner) -> sea_orm::Condition {
    use sea_orm::Condition;
    match owner {
        PhotoOwner::User(id) => Condition::all().add(photo::Column::UserId.eq(id.clone())),
        PhotoOwner::Hostel(id) => Condition::all().add(photo::Column::HostelId.eq(id.clone())),
        PhotoOwner::Room(id) => Condition::all().add(photo::Column::RoomId.eq(id.clone())),
    }
}

fn txn_err(e: TransactionError<DomainError>) -> DomainError {
    match e {
        TransactionError::Connection(db) => db.into(),
        TransactionError::Transaction(domain) => domain,
    }
}

// ── PhotoRepository impl ────────────────────────────────────────

#[async_trait]
impl PhotoRepository for SeaOrmPhotoRepository {
    async fn save(&self, p: Photo) -> DomainResult<Photo> {
        debug!("Saving photo {}", p.id);

        let result = self
            .db
            .transaction::<_, Photo, DomainError>(move |txn| {
                Box::pin(async move {
                    // Only one primary photo per entity.
                    if p.is_primary {
                        photo::Entity::update_many()
                            .filter(owner_filter(&p.owner))
                            .filter(photo::Column::IsPrimary.eq(true))
                            .col_expr(photo::Column::IsPrimary, Expr::value(false))
                            .exec(txn)
                            .await
                            .map_err(DomainError::from)?;
                    }

                    let (user_id, hostel_id, room_id) = owner_links(&p.owner);
                    let model = photo::ActiveModel {
                        id: Set(p.id.clone()),
                        url: Set(p.url.clone()),
                        is_primary: Set(p.is_primary),
                        user_id: Set(user_id),
                        hostel_id: Set(hostel_id),
                        room_id: Set(room_id),
                        created_at: Set(p.created_at),
                    };
                    model.insert(txn).await.map_err(DomainError::from)?;

                    Ok(p)
                })
            })
            .await;

        result.map_err(txn_err)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Photo>> {
        let model = photo::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_owner(&self, owner: &PhotoOwner) -> DomainResult<Vec<Photo>> {
        let models = photo::Entity::find()
            .filter(owner_filter(owner))
            .order_by_desc(photo::Column::IsPrimary)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let existing = photo::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Photo", id))?;
        let active: photo::ActiveModel = existing.into();
        active.delete(&self.db).await?;
        Ok(())
    }
}
