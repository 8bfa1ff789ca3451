//! Photo sending and retrieval.
//!
//! Sending validates every recipient against the sender's accepted friends,
//! writes the photo and its fan-out rows atomically and queues notifications
//! for recipients who allow them. Deletion is a soft delete restricted to
//! the sender.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::{
    model::notification::NotificationKind,
    server::{
        data::{friend::FriendRepository, photo::PhotoRepository},
        error::{auth::AuthError, AppError},
        model::{
            photo::{
                PaginatedReceivedPhotos, PaginatedSentPhotos, Photo, PhotoRecipient,
                ReceivedPhoto, SendPhotoParams, SentPhoto,
            },
            user::User,
        },
        service::notification::{normalize_page, NotificationService},
    },
};

pub struct PhotoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a photo for the given recipients.
    ///
    /// Every recipient must be an accepted friend of the sender. Duplicate
    /// recipient ids collapse to one fan-out row. Also returns the ids of
    /// recipients who got a notification, so the caller can limit push
    /// delivery to users who want it.
    pub async fn send(
        &self,
        sender: &User,
        image_url: String,
        caption: Option<String>,
        recipient_ids: Vec<i64>,
    ) -> Result<(SentPhoto, Vec<i64>), AppError> {
        let recipient_ids: Vec<i64> = recipient_ids
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        self.validate_recipients(sender.id, &recipient_ids).await?;

        let sent = PhotoRepository::new(self.db)
            .create_with_recipients(SendPhotoParams {
                sender_id: sender.id,
                image_url,
                caption,
                recipient_ids: recipient_ids.clone(),
            })
            .await?;

        let notifications = NotificationService::new(self.db);
        let mut notified = Vec::with_capacity(recipient_ids.len());
        for recipient_id in recipient_ids {
            let created = notifications
                .notify(
                    recipient_id,
                    NotificationKind::Photo,
                    Some(sent.photo.id),
                    format!("{} sent you a photo", sender.username),
                )
                .await?;

            if created.is_some() {
                notified.push(recipient_id);
            }
        }

        Ok((sent, notified))
    }

    /// Checks that at least one recipient was given and that every one is an
    /// accepted friend of the sender. Exposed so the upload handler can
    /// reject a send before the image touches disk.
    pub async fn validate_recipients(
        &self,
        sender_id: i64,
        recipient_ids: &[i64],
    ) -> Result<(), AppError> {
        if recipient_ids.is_empty() {
            return Err(AppError::BadRequest(
                "At least one recipient is required".to_string(),
            ));
        }

        let friends: HashSet<i64> = FriendRepository::new(self.db)
            .accepted_friend_ids(sender_id)
            .await?
            .into_iter()
            .collect();

        if recipient_ids.iter().any(|id| !friends.contains(id)) {
            return Err(AppError::BadRequest(
                "Recipients must be accepted friends".to_string(),
            ));
        }

        Ok(())
    }

    pub async fn sent(
        &self,
        user_id: i64,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Result<PaginatedSentPhotos, AppError> {
        let (page, limit) = normalize_page(page, limit);

        let (photos, total) = PhotoRepository::new(self.db)
            .sent_paginated(user_id, page - 1, limit)
            .await?;

        Ok(PaginatedSentPhotos {
            photos,
            total,
            page,
            limit,
        })
    }

    pub async fn received(
        &self,
        user_id: i64,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Result<PaginatedReceivedPhotos, AppError> {
        let (page, limit) = normalize_page(page, limit);

        let (photos, total) = PhotoRepository::new(self.db)
            .received_paginated(user_id, page - 1, limit)
            .await?;

        Ok(PaginatedReceivedPhotos {
            photos,
            total,
            page,
            limit,
        })
    }

    /// The most recent photo shared with the user, used by widget-style
    /// clients that only show one photo. Fetching it counts as a view, so an
    /// unviewed result is stamped before it is returned.
    pub async fn latest_received(&self, user_id: i64) -> Result<Option<ReceivedPhoto>, AppError> {
        let repo = PhotoRepository::new(self.db);

        let Some(mut latest) = repo.latest_received(user_id).await? else {
            return Ok(None);
        };

        if latest.viewed_at.is_none() {
            let recipient_row = repo.mark_viewed(latest.recipient_row_id).await?;
            latest.viewed_at = recipient_row.viewed_at;
        }

        Ok(Some(latest))
    }

    /// Soft-deletes a photo. Only the sender may delete it; recipients lose
    /// access once it is gone.
    pub async fn delete(&self, user_id: i64, photo_id: i64) -> Result<(), AppError> {
        let repo = PhotoRepository::new(self.db);

        let Some(photo) = repo.find_by_id(photo_id).await? else {
            return Err(AppError::NotFound("Photo not found".to_string()));
        };

        if photo.sender_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("photo {} belongs to another user", photo_id),
            )
            .into());
        }

        repo.soft_delete(photo_id).await
    }

    /// Marks a received photo as viewed and returns the updated row plus
    /// the photo so the caller can notify the sender. Repeated views keep
    /// the first timestamp.
    pub async fn mark_viewed(
        &self,
        user_id: i64,
        recipient_row_id: i64,
    ) -> Result<(PhotoRecipient, Photo), AppError> {
        let repo = PhotoRepository::new(self.db);

        let Some(recipient_row) = repo.find_recipient_by_id(recipient_row_id).await? else {
            return Err(AppError::NotFound("Photo not found".to_string()));
        };

        if recipient_row.recipient_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("photo recipient row {} belongs to another user", recipient_row_id),
            )
            .into());
        }

        let Some(photo) = repo.find_by_id(recipient_row.photo_id).await? else {
            return Err(AppError::NotFound("Photo not found".to_string()));
        };

        let recipient_row = repo.mark_viewed(recipient_row_id).await?;

        Ok((recipient_row, photo))
    }
}
