//! Friendship factory.
//!
//! Friendship rows are directed: `user_id` is the requester and `friend_id`
//! the addressee. The status is stored as a plain string, matching the
//! values the application writes.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct FriendFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    friend_id: i64,
    status: String,
}

impl<'a> FriendFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i64, friend_id: i64) -> Self {
        Self {
            db,
            user_id,
            friend_id,
            status: "pending".to_string(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::friend::Model, DbErr> {
        let now = Utc::now();

        entity::friend::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            friend_id: ActiveValue::Set(self.friend_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending request from `user_id` to `friend_id`.
pub async fn create_friend_request(
    db: &DatabaseConnection,
    user_id: i64,
    friend_id: i64,
) -> Result<entity::friend::Model, DbErr> {
    FriendFactory::new(db, user_id, friend_id).build().await
}

/// Creates an accepted friendship between two users.
pub async fn create_accepted_friendship(
    db: &DatabaseConnection,
    user_id: i64,
    friend_id: i64,
) -> Result<entity::friend::Model, DbErr> {
    FriendFactory::new(db, user_id, friend_id)
        .status("accepted")
        .build()
        .await
}
