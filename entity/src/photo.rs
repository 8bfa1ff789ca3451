use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "photos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub sender_id: i64,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Soft delete marker; queries must filter on this being null.
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SenderId",
        to = "super::user::Column::Id"
    )]
    Sender,
    #[sea_orm(has_many = "super::photo_recipient::Entity")]
    PhotoRecipient,
}

impl Related<super::photo_recipient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PhotoRecipient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
