//! Photo entity
//!
//! Exactly one of user_id / hostel_id / room_id is set; enforced at the
//! handler layer, mirrored by the nullable columns here.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "photos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub url: String,
    pub is_primary: bool,

    #[sea_orm(nullable)]
    pub user_id: Option<String>,
    #[sea_orm(nullable)]
    pub hostel_id: Option<String>,
    #[sea_orm(nullable)]
    pub room_id: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::hostel::Entity",
        from = "Column::HostelId",
        to = "super::hostel::Column::Id"
    )]
    Hostel,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id"
    )]
    Room,
}

impl ActiveModelBehavior for ActiveModel {}
