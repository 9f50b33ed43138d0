//! Photo repository interface

use async_trait::async_trait;

use super::model::{Photo, PhotoOwner};
use crate::domain::DomainResult;

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Save a photo. When `photo.is_primary`, the previous primary photo of
    /// the same owner is demoted in the same transaction.
    async fn save(&self, photo: Photo) -> DomainResult<Photo>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Photo>>;

    /// All photos for one owner, primary first.
    async fn find_by_owner(&self, owner: &PhotoOwner) -> DomainResult<Vec<Photo>>;

    async fn delete(&self, id: &str) -> DomainResult<()>;
}
