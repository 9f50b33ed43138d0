//! Favorite repository interface

use async_trait::async_trait;

use super::model::Favorite;
use crate::domain::DomainResult;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn save(&self, favorite: Favorite) -> DomainResult<Favorite>;

    async fn find_by_user(&self, user_id: &str) -> DomainResult<Vec<Favorite>>;

    async fn find_by_user_and_hostel(
        &self,
        user_id: &str,
        hostel_id: &str,
    ) -> DomainResult<Option<Favorite>>;

    async fn delete(&self, id: &str) -> DomainResult<()>;
}
