use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PhotoDto {
    pub id: i64,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One recipient of a sent photo with their viewed state.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PhotoRecipientDto {
    pub id: i64,
    pub user: UserSummaryDto,
    pub viewed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SentPhotoDto {
    pub id: i64,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
    pub recipients: Vec<PhotoRecipientDto>,
}

/// A received photo keyed by the recipient row id, which is what the client
/// passes back when marking the photo as viewed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReceivedPhotoDto {
    pub id: i64,
    pub photo: PhotoDto,
    pub sender: UserSummaryDto,
    pub viewed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaginatedSentPhotosDto {
    pub photos: Vec<SentPhotoDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaginatedReceivedPhotosDto {
    pub photos: Vec<ReceivedPhotoDto>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}
