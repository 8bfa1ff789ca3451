//! Friendship state machine: request, accept, reject, remove.
//!
//! Rows are directed (requester to addressee). Only the addressee may accept
//! or reject; either side may remove an established friendship. A rejected
//! row does not block a fresh request later.

use sea_orm::DatabaseConnection;

use crate::{
    model::{friend::FriendStatus, notification::NotificationKind},
    server::{
        data::{friend::FriendRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            friend::{FriendLink, Friendship, IncomingRequest},
            user::User,
        },
        service::notification::NotificationService,
    },
};

pub struct FriendService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, user_id: i64) -> Result<Vec<FriendLink>, AppError> {
        FriendRepository::new(self.db).accepted_for_user(user_id).await
    }

    pub async fn incoming_requests(
        &self,
        user_id: i64,
    ) -> Result<Vec<IncomingRequest>, AppError> {
        FriendRepository::new(self.db).pending_for_user(user_id).await
    }

    /// Sends a friend request from `requester` to `friend_id`.
    ///
    /// A previously rejected relationship is replaced by a new pending
    /// request; a block in either direction reads as the target not
    /// existing. The addressee gets a notification unless they disabled
    /// friend notifications.
    pub async fn send_request(
        &self,
        requester: &User,
        friend_id: i64,
    ) -> Result<Friendship, AppError> {
        if requester.id == friend_id {
            return Err(AppError::BadRequest(
                "Cannot send a friend request to yourself".to_string(),
            ));
        }

        let target = UserRepository::new(self.db).find_by_id(friend_id).await?;
        let target_exists = target.is_some_and(|user| user.is_active);

        let repo = FriendRepository::new(self.db);

        if !target_exists || repo.is_blocked_between(requester.id, friend_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if let Some(existing) = repo.find_between(requester.id, friend_id).await? {
            match existing.status {
                FriendStatus::Pending => {
                    return Err(AppError::BadRequest(
                        "A friend request between these users is already pending".to_string(),
                    ));
                }
                FriendStatus::Accepted => {
                    return Err(AppError::BadRequest("Already friends".to_string()));
                }
                FriendStatus::Rejected => {
                    repo.delete(existing.id).await?;
                }
                // Covered by the blocked check above, kept for completeness
                FriendStatus::Blocked => {
                    return Err(AppError::NotFound("User not found".to_string()));
                }
            }
        }

        let friendship = repo
            .create(requester.id, friend_id, FriendStatus::Pending)
            .await?;

        NotificationService::new(self.db)
            .notify(
                friend_id,
                NotificationKind::FriendRequest,
                Some(friendship.id),
                format!("{} sent you a friend request", requester.username),
            )
            .await?;

        Ok(friendship)
    }

    /// Accepts a pending request addressed to `user`. Notifies the original
    /// requester.
    pub async fn accept(&self, user: &User, friendship_id: i64) -> Result<Friendship, AppError> {
        let friendship = self
            .pending_addressed_to(user.id, friendship_id)
            .await?;

        let repo = FriendRepository::new(self.db);
        repo.set_status(friendship.id, FriendStatus::Accepted).await?;

        NotificationService::new(self.db)
            .notify(
                friendship.user_id,
                NotificationKind::FriendAccept,
                Some(friendship.id),
                format!("{} accepted your friend request", user.username),
            )
            .await?;

        Ok(Friendship {
            status: FriendStatus::Accepted,
            ..friendship
        })
    }

    /// Rejects a pending request addressed to `user`. The requester is not
    /// notified.
    pub async fn reject(&self, user: &User, friendship_id: i64) -> Result<Friendship, AppError> {
        let friendship = self
            .pending_addressed_to(user.id, friendship_id)
            .await?;

        FriendRepository::new(self.db)
            .set_status(friendship.id, FriendStatus::Rejected)
            .await?;

        Ok(Friendship {
            status: FriendStatus::Rejected,
            ..friendship
        })
    }

    /// Removes a friendship row. Either party may remove it.
    pub async fn remove(&self, user_id: i64, friendship_id: i64) -> Result<(), AppError> {
        let repo = FriendRepository::new(self.db);

        let Some(friendship) = repo.find_by_id(friendship_id).await? else {
            return Err(AppError::NotFound("Friendship not found".to_string()));
        };

        if friendship.user_id != user_id && friendship.friend_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("friendship {} does not involve this user", friendship_id),
            )
            .into());
        }

        repo.delete(friendship.id).await
    }

    async fn pending_addressed_to(
        &self,
        user_id: i64,
        friendship_id: i64,
    ) -> Result<Friendship, AppError> {
        let Some(friendship) = FriendRepository::new(self.db)
            .find_by_id(friendship_id)
            .await?
        else {
            return Err(AppError::NotFound("Friend request not found".to_string()));
        };

        if friendship.friend_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("friend request {} is not addressed to this user", friendship_id),
            )
            .into());
        }

        if friendship.status != FriendStatus::Pending {
            return Err(AppError::BadRequest(
                "Friend request is not pending".to_string(),
            ));
        }

        Ok(friendship)
    }
}
