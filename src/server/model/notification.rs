use chrono::{DateTime, Utc};

use crate::{
    model::notification::{NotificationDto, NotificationKind, PaginatedNotificationsDto},
    server::error::internal::InternalError,
};

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub kind: NotificationKind,
    pub reference_id: Option<i64>,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, InternalError> {
        let kind = NotificationKind::parse(&entity.kind).ok_or_else(|| {
            InternalError::UnknownEnumValue {
                column: "notifications.type",
                value: entity.kind.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            kind,
            reference_id: entity.reference_id,
            content: entity.content,
            is_read: entity.is_read,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            kind: self.kind,
            reference_id: self.reference_id,
            content: self.content,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

pub struct CreateNotificationParams {
    pub user_id: i64,
    pub kind: NotificationKind,
    pub reference_id: Option<i64>,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct PaginatedNotifications {
    pub notifications: Vec<Notification>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl PaginatedNotifications {
    pub fn into_dto(self) -> PaginatedNotificationsDto {
        PaginatedNotificationsDto {
            total_pages: self.total.div_ceil(self.limit),
            notifications: self
                .notifications
                .into_iter()
                .map(Notification::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}
