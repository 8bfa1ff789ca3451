//! Friendship data repository.
//!
//! Friendship rows are directed: `user_id` sent the request to `friend_id`.
//! Accepted rows count for both directions, so list queries match on either
//! column.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::friend::FriendStatus,
    server::{
        error::AppError,
        model::{
            friend::{FriendLink, Friendship, IncomingRequest},
            user::UserSummary,
        },
    },
};

pub struct FriendRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i64,
        friend_id: i64,
        status: FriendStatus,
    ) -> Result<Friendship, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::Friend::insert(entity::friend::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            friend_id: ActiveValue::Set(friend_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Friendship::from_entity(entity)?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Friendship>, AppError> {
        let entity = entity::prelude::Friend::find_by_id(id).one(self.db).await?;

        entity
            .map(Friendship::from_entity)
            .transpose()
            .map_err(AppError::from)
    }

    /// Finds the relationship row between two users in either direction.
    pub async fn find_between(&self, a: i64, b: i64) -> Result<Option<Friendship>, AppError> {
        let entity = entity::prelude::Friend::find()
            .filter(pair_condition(a, b))
            .one(self.db)
            .await?;

        entity
            .map(Friendship::from_entity)
            .transpose()
            .map_err(AppError::from)
    }

    pub async fn set_status(&self, id: i64, status: FriendStatus) -> Result<(), AppError> {
        entity::prelude::Friend::update_many()
            .col_expr(
                entity::friend::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(entity::friend::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::friend::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        entity::prelude::Friend::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Lists the user's accepted friendships with the counterpart's public
    /// profile, newest acceptance first.
    pub async fn accepted_for_user(&self, user_id: i64) -> Result<Vec<FriendLink>, AppError> {
        let rows = entity::prelude::Friend::find()
            .filter(
                Condition::any()
                    .add(entity::friend::Column::UserId.eq(user_id))
                    .add(entity::friend::Column::FriendId.eq(user_id)),
            )
            .filter(entity::friend::Column::Status.eq(FriendStatus::Accepted.as_str()))
            .order_by_desc(entity::friend::Column::UpdatedAt)
            .all(self.db)
            .await?;

        let friendships = rows
            .into_iter()
            .map(Friendship::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let counterpart_ids: Vec<i64> = friendships
            .iter()
            .map(|friendship| friendship.counterpart_of(user_id))
            .collect();
        let users = self.load_summaries(&counterpart_ids).await?;

        Ok(friendships
            .into_iter()
            .filter_map(|friendship| {
                let user = users.get(&friendship.counterpart_of(user_id))?.clone();

                Some(FriendLink {
                    friendship_id: friendship.id,
                    user,
                    since: friendship.updated_at,
                })
            })
            .collect())
    }

    /// Lists pending requests addressed to the user, newest first.
    pub async fn pending_for_user(&self, user_id: i64) -> Result<Vec<IncomingRequest>, AppError> {
        let rows = entity::prelude::Friend::find()
            .filter(entity::friend::Column::FriendId.eq(user_id))
            .filter(entity::friend::Column::Status.eq(FriendStatus::Pending.as_str()))
            .order_by_desc(entity::friend::Column::CreatedAt)
            .all(self.db)
            .await?;

        let friendships = rows
            .into_iter()
            .map(Friendship::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let requester_ids: Vec<i64> = friendships
            .iter()
            .map(|friendship| friendship.user_id)
            .collect();
        let users = self.load_summaries(&requester_ids).await?;

        Ok(friendships
            .into_iter()
            .filter_map(|friendship| {
                let user = users.get(&friendship.user_id)?.clone();

                Some(IncomingRequest {
                    friendship_id: friendship.id,
                    user,
                    created_at: friendship.created_at,
                })
            })
            .collect())
    }

    /// Ids of every user in an accepted friendship with this user. Used for
    /// photo recipient validation and realtime fan-out.
    pub async fn accepted_friend_ids(&self, user_id: i64) -> Result<Vec<i64>, AppError> {
        let rows = entity::prelude::Friend::find()
            .filter(
                Condition::any()
                    .add(entity::friend::Column::UserId.eq(user_id))
                    .add(entity::friend::Column::FriendId.eq(user_id)),
            )
            .filter(entity::friend::Column::Status.eq(FriendStatus::Accepted.as_str()))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                if row.user_id == user_id {
                    row.friend_id
                } else {
                    row.user_id
                }
            })
            .collect())
    }

    pub async fn is_blocked_between(&self, a: i64, b: i64) -> Result<bool, AppError> {
        let count = entity::prelude::Friend::find()
            .filter(pair_condition(a, b))
            .filter(entity::friend::Column::Status.eq(FriendStatus::Blocked.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn load_summaries(
        &self,
        user_ids: &[i64],
    ) -> Result<HashMap<i64, UserSummary>, AppError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(users
            .into_iter()
            .map(|user| (user.id, UserSummary::from_entity(user)))
            .collect())
    }
}

/// Matches the friendship row between two users regardless of direction.
fn pair_condition(a: i64, b: i64) -> Condition {
    Condition::any()
        .add(
            Condition::all()
                .add(entity::friend::Column::UserId.eq(a))
                .add(entity::friend::Column::FriendId.eq(b)),
        )
        .add(
            Condition::all()
                .add(entity::friend::Column::UserId.eq(b))
                .add(entity::friend::Column::FriendId.eq(a)),
        )
}
