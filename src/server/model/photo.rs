use chrono::{DateTime, Utc};

use crate::{
    model::photo::{
        PaginatedReceivedPhotosDto, PaginatedSentPhotosDto, PhotoDto, PhotoRecipientDto,
        ReceivedPhotoDto, SentPhotoDto,
    },
    server::model::user::UserSummary,
};

#[derive(Debug, Clone)]
pub struct Photo {
    pub id: i64,
    pub sender_id: i64,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Photo {
    pub fn from_entity(entity: entity::photo::Model) -> Self {
        Self {
            id: entity.id,
            sender_id: entity.sender_id,
            image_url: entity.image_url,
            caption: entity.caption,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PhotoDto {
        PhotoDto {
            id: self.id,
            image_url: self.image_url,
            caption: self.caption,
            created_at: self.created_at,
        }
    }
}

/// The fan-out row linking a photo to one recipient.
#[derive(Debug, Clone)]
pub struct PhotoRecipient {
    pub id: i64,
    pub photo_id: i64,
    pub recipient_id: i64,
    pub viewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl PhotoRecipient {
    pub fn from_entity(entity: entity::photo_recipient::Model) -> Self {
        Self {
            id: entity.id,
            photo_id: entity.photo_id,
            recipient_id: entity.recipient_id,
            viewed_at: entity.viewed_at,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecipientInfo {
    pub recipient_row_id: i64,
    pub user: UserSummary,
    pub viewed_at: Option<DateTime<Utc>>,
}

impl RecipientInfo {
    pub fn into_dto(self) -> PhotoRecipientDto {
        PhotoRecipientDto {
            id: self.recipient_row_id,
            user: self.user.into_dto(),
            viewed_at: self.viewed_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SentPhoto {
    pub photo: Photo,
    pub recipients: Vec<RecipientInfo>,
}

impl SentPhoto {
    pub fn into_dto(self) -> SentPhotoDto {
        SentPhotoDto {
            id: self.photo.id,
            image_url: self.photo.image_url,
            caption: self.photo.caption,
            created_at: self.photo.created_at,
            recipients: self
                .recipients
                .into_iter()
                .map(RecipientInfo::into_dto)
                .collect(),
        }
    }
}

/// A photo from the receiving side, keyed by the recipient row id so the
/// client can mark it viewed.
#[derive(Debug, Clone)]
pub struct ReceivedPhoto {
    pub recipient_row_id: i64,
    pub photo: Photo,
    pub sender: UserSummary,
    pub viewed_at: Option<DateTime<Utc>>,
}

impl ReceivedPhoto {
    pub fn into_dto(self) -> ReceivedPhotoDto {
        ReceivedPhotoDto {
            id: self.recipient_row_id,
            photo: self.photo.into_dto(),
            sender: self.sender.into_dto(),
            viewed_at: self.viewed_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedSentPhotos {
    pub photos: Vec<SentPhoto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl PaginatedSentPhotos {
    pub fn into_dto(self) -> PaginatedSentPhotosDto {
        PaginatedSentPhotosDto {
            total_pages: self.total.div_ceil(self.limit),
            photos: self.photos.into_iter().map(SentPhoto::into_dto).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedReceivedPhotos {
    pub photos: Vec<ReceivedPhoto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl PaginatedReceivedPhotos {
    pub fn into_dto(self) -> PaginatedReceivedPhotosDto {
        PaginatedReceivedPhotosDto {
            total_pages: self.total.div_ceil(self.limit),
            photos: self
                .photos
                .into_iter()
                .map(ReceivedPhoto::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

pub struct SendPhotoParams {
    pub sender_id: i64,
    pub image_url: String,
    pub caption: Option<String>,
    pub recipient_ids: Vec<i64>,
}
