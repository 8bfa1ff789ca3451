//! Photo and photo recipient factories.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PhotoFactory<'a> {
    db: &'a DatabaseConnection,
    sender_id: i64,
    image_url: String,
    caption: Option<String>,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> PhotoFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, sender_id: i64) -> Self {
        Self {
            db,
            sender_id,
            image_url: format!("/media/photo{}.jpg", next_id()),
            caption: None,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the photo as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    pub async fn build(self) -> Result<entity::photo::Model, DbErr> {
        entity::photo::ActiveModel {
            sender_id: ActiveValue::Set(self.sender_id),
            image_url: ActiveValue::Set(self.image_url),
            caption: ActiveValue::Set(self.caption),
            created_at: ActiveValue::Set(self.created_at),
            deleted_at: ActiveValue::Set(self.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a photo with default values.
pub async fn create_photo(
    db: &DatabaseConnection,
    sender_id: i64,
) -> Result<entity::photo::Model, DbErr> {
    PhotoFactory::new(db, sender_id).build().await
}

pub struct PhotoRecipientFactory<'a> {
    db: &'a DatabaseConnection,
    photo_id: i64,
    recipient_id: i64,
    viewed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl<'a> PhotoRecipientFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, photo_id: i64, recipient_id: i64) -> Self {
        Self {
            db,
            photo_id,
            recipient_id,
            viewed_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn viewed_at(mut self, viewed_at: DateTime<Utc>) -> Self {
        self.viewed_at = Some(viewed_at);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::photo_recipient::Model, DbErr> {
        entity::photo_recipient::ActiveModel {
            photo_id: ActiveValue::Set(self.photo_id),
            recipient_id: ActiveValue::Set(self.recipient_id),
            viewed_at: ActiveValue::Set(self.viewed_at),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unviewed recipient row for a photo.
pub async fn create_photo_recipient(
    db: &DatabaseConnection,
    photo_id: i64,
    recipient_id: i64,
) -> Result<entity::photo_recipient::Model, DbErr> {
    PhotoRecipientFactory::new(db, photo_id, recipient_id)
        .build()
        .await
}
