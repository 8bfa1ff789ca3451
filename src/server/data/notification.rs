//! Notification data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::notification::{CreateNotificationParams, Notification},
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateNotificationParams,
    ) -> Result<Notification, AppError> {
        let entity = entity::prelude::Notification::insert(entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            reference_id: ActiveValue::Set(params.reference_id),
            content: ActiveValue::Set(params.content),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Notification::from_entity(entity)?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Notification>, AppError> {
        let entity = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?;

        entity
            .map(Notification::from_entity)
            .transpose()
            .map_err(AppError::from)
    }

    /// One page of the user's notifications, newest first. `page` is
    /// zero-based; also returns the total count for the filter.
    pub async fn for_user_paginated(
        &self,
        user_id: i64,
        page: u64,
        per_page: u64,
        unread_only: bool,
    ) -> Result<(Vec<Notification>, u64), AppError> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));

        if unread_only {
            query = query.filter(entity::notification::Column::IsRead.eq(false));
        }

        let paginator = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let notifications = entities
            .into_iter()
            .map(|entity| Notification::from_entity(entity).map_err(AppError::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((notifications, total))
    }

    pub async fn mark_read(&self, id: i64) -> Result<(), AppError> {
        entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .filter(entity::notification::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks every unread notification of the user as read, returning how
    /// many rows changed.
    pub async fn mark_all_read(&self, user_id: i64) -> Result<u64, AppError> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        entity::prelude::Notification::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn unread_count(&self, user_id: i64) -> Result<u64, AppError> {
        let count = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Deletes read notifications created before the cutoff. Used by the
    /// nightly cleanup job.
    pub async fn delete_read_older_than(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::IsRead.eq(true))
            .filter(entity::notification::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
