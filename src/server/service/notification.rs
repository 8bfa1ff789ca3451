//! Notification listing and the settings-aware write path.

use sea_orm::DatabaseConnection;

use crate::{
    model::notification::NotificationKind,
    server::{
        data::{notification::NotificationRepository, user_setting::UserSettingRepository},
        error::AppError,
        model::notification::{CreateNotificationParams, Notification, PaginatedNotifications},
    },
};

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Clamps raw pagination input to a 1-based page and a bounded page size.
pub fn normalize_page(page: Option<u64>, limit: Option<u64>) -> (u64, u64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    (page, limit)
}

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes a notification unless the recipient has disabled the category
    /// in their settings. Returns `None` when suppressed.
    pub async fn notify(
        &self,
        user_id: i64,
        kind: NotificationKind,
        reference_id: Option<i64>,
        content: String,
    ) -> Result<Option<Notification>, AppError> {
        let settings = UserSettingRepository::new(self.db)
            .get_or_create(user_id)
            .await?;

        let enabled = match kind {
            NotificationKind::Photo => settings.notification_photo,
            NotificationKind::FriendRequest | NotificationKind::FriendAccept => {
                settings.notification_friend
            }
            NotificationKind::System => settings.notification_system,
        };

        if !enabled {
            return Ok(None);
        }

        let notification = NotificationRepository::new(self.db)
            .create(CreateNotificationParams {
                user_id,
                kind,
                reference_id,
                content,
            })
            .await?;

        Ok(Some(notification))
    }

    pub async fn list(
        &self,
        user_id: i64,
        page: Option<u64>,
        limit: Option<u64>,
        unread_only: bool,
    ) -> Result<PaginatedNotifications, AppError> {
        let (page, limit) = normalize_page(page, limit);

        let (notifications, total) = NotificationRepository::new(self.db)
            .for_user_paginated(user_id, page - 1, limit, unread_only)
            .await?;

        Ok(PaginatedNotifications {
            notifications,
            total,
            page,
            limit,
        })
    }

    pub async fn mark_read(&self, user_id: i64, notification_id: i64) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);

        self.owned_by(&repo, user_id, notification_id).await?;
        repo.mark_read(notification_id).await
    }

    /// Marks everything unread as read, returning the number of rows
    /// affected.
    pub async fn mark_all_read(&self, user_id: i64) -> Result<u64, AppError> {
        NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await
    }

    pub async fn delete(&self, user_id: i64, notification_id: i64) -> Result<(), AppError> {
        let repo = NotificationRepository::new(self.db);

        self.owned_by(&repo, user_id, notification_id).await?;
        repo.delete(notification_id).await
    }

    pub async fn unread_count(&self, user_id: i64) -> Result<u64, AppError> {
        NotificationRepository::new(self.db)
            .unread_count(user_id)
            .await
    }

    /// Another user's notification id is indistinguishable from a missing
    /// one.
    async fn owned_by(
        &self,
        repo: &NotificationRepository<'_>,
        user_id: i64,
        notification_id: i64,
    ) -> Result<(), AppError> {
        match repo.find_by_id(notification_id).await? {
            Some(notification) if notification.user_id == user_id => Ok(()),
            _ => Err(AppError::NotFound("Notification not found".to_string())),
        }
    }
}
