//! Hostel repository interface

use async_trait::async_trait;

use super::model::Hostel;
use crate::domain::DomainResult;

#[async_trait]
pub trait HostelRepository: Send + Sync {
    async fn save(&self, hostel: Hostel) -> DomainResult<Hostel>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Hostel>>;

    async fn find_all(&self) -> DomainResult<Vec<Hostel>>;

    async fn find_by_owner(&self, owner_id: &str) -> DomainResult<Vec<Hostel>>;

    async fn update(&self, hostel: Hostel) -> DomainResult<Hostel>;

    async fn delete(&self, id: &str) -> DomainResult<()>;
}
