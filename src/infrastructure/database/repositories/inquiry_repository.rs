//! SeaORM implementation of InquiryRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::inquiry::{Inquiry, InquiryRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::inquiry;

pub struct SeaOrmInquiryRepository {
    db: DatabaseConnection,
}

impl SeaOrmInquiryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: inquiry::Model) -> Inquiry {
    Inquiry {
        id: m.id,
        student_id: m.student_id,
        hostel_id: m.hostel_id,
        message: m.message,
        created_at: m.created_at,
    }
}

#[async_trait]
impl InquiryRepository for SeaOrmInquiryRepository {
    async fn save(&self, i: Inquiry) -> DomainResult<Inquiry> {
        debug!("Saving inquiry {} for hostel {}", i.id, i.hostel_id);
        let model = inquiry::ActiveModel {
            id: Set(i.id.clone()),
            student_id: Set(i.student_id.clone()),
            hostel_id: Set(i.hostel_id.clone()),
            message: Set(i.message.clone()),
            created_at: Set(i.created_at),
        };
        model.insert(&self.db).await?;
        Ok(i)
    }

    async fn find_by_hostel(&self, hostel_id: &str) -> DomainResult<Vec<Inquiry>> {
        let models = inquiry::Entity::find()
            .filter(inquiry::Column::HostelId.eq(hostel_id))
            .order_by_desc(inquiry::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_student(&self, student_id: &str) -> DomainResult<Vec<Inquiry>> {
        let models = inquiry::Entity::find()
            .filter(inquiry::Column::StudentId.eq(student_id))
            .order_by_desc(inquiry::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
