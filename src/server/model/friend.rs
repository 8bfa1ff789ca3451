use chrono::{DateTime, Utc};

use crate::{
    model::friend::{FriendDto, FriendRequestDto, FriendStatus},
    server::{error::internal::InternalError, model::user::UserSummary},
};

/// A directed friendship row: `user_id` sent the request to `friend_id`.
#[derive(Debug, Clone)]
pub struct Friendship {
    pub id: i64,
    pub user_id: i64,
    pub friend_id: i64,
    pub status: FriendStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Friendship {
    pub fn from_entity(entity: entity::friend::Model) -> Result<Self, InternalError> {
        let status = FriendStatus::parse(&entity.status).ok_or_else(|| {
            InternalError::UnknownEnumValue {
                column: "friends.status",
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            friend_id: entity.friend_id,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// The other party of the friendship, from `user_id`'s point of view.
    pub fn counterpart_of(&self, user_id: i64) -> i64 {
        if self.user_id == user_id {
            self.friend_id
        } else {
            self.user_id
        }
    }
}

/// An accepted friendship as seen by one of its two users.
#[derive(Debug, Clone)]
pub struct FriendLink {
    pub friendship_id: i64,
    pub user: UserSummary,
    pub since: DateTime<Utc>,
}

impl FriendLink {
    pub fn into_dto(self) -> FriendDto {
        FriendDto {
            id: self.friendship_id,
            user: self.user.into_dto(),
            since: self.since,
        }
    }
}

/// A pending request awaiting the addressee's decision.
#[derive(Debug, Clone)]
pub struct IncomingRequest {
    pub friendship_id: i64,
    pub user: UserSummary,
    pub created_at: DateTime<Utc>,
}

impl IncomingRequest {
    pub fn into_dto(self) -> FriendRequestDto {
        FriendRequestDto {
            id: self.friendship_id,
            user: self.user.into_dto(),
            created_at: self.created_at,
        }
    }
}
