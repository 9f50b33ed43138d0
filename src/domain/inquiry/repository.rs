//! Inquiry repository interface

use async_trait::async_trait;

use super::model::Inquiry;
use crate::domain::DomainResult;

#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn save(&self, inquiry: Inquiry) -> DomainResult<Inquiry>;

    async fn find_by_hostel(&self, hostel_id: &str) -> DomainResult<Vec<Inquiry>>;

    async fn find_by_student(&self, student_id: &str) -> DomainResult<Vec<Inquiry>>;
}
