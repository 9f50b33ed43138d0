//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::user::{User, UserRepository, UserRole};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn role_to_db(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Student => user::UserRole::Student,
        UserRole::Owner => user::UserRole::Owner,
        UserRole::Admin => user::UserRole::Admin,
    }
}

fn role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Student => UserRole::Student,
        user::UserRole::Owner => UserRole::Owner,
        user::UserRole::Admin => UserRole::Admin,
    }
}

fn model_to_domain(m: user::Model) -> User {
    User {
        id: m.id,
        name: m.name,
        email: m.email,
        hashed_password: m.hashed_password,
        role: role_to_domain(m.role),
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(u: &User) -> user::ActiveModel {
    user::ActiveModel {
        id: Set(u.id.clone()),
        name: Set(u.name.clone()),
        email: Set(u.email.clone()),
        hashed_password: Set(u.hashed_password.clone()),
        role: Set(role_to_db(u.role)),
        created_at: Set(u.created_at),
        updated_at: Set(u.updated_at),
    }
}

// ── UserRepository impl ─────────────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn save(&self, u: User) -> DomainResult<User> {
        debug!("Saving user {}", u.id);
        domain_to_active(&u).insert(&self.db).await?;
        Ok(u)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn update(&self, u: User) -> DomainResult<User> {
        let existing = user::Entity::find_by_id(&u.id).one(&self.db).await?;
        if existing.is_none() {
            return Err(DomainError::not_found("User", &u.id));
        }
        domain_to_active(&u).update(&self.db).await?;
        Ok(u)
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id))?;
        let active: user::ActiveModel = existing.into();
        active.delete(&self.db).await?;
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(user::Entity::find().count(&self.db).await?)
    }
}
