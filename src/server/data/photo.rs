//! Photo data repository.
//!
//! Photos are written together with their recipient fan-out rows in one
//! transaction. Deletion is a soft delete; every read filters on
//! `deleted_at` being null.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::{
        photo::{Photo, PhotoRecipient, ReceivedPhoto, RecipientInfo, SendPhotoParams, SentPhoto},
        user::UserSummary,
    },
};

pub struct PhotoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a photo and one recipient row per recipient atomically.
    pub async fn create_with_recipients(
        &self,
        params: SendPhotoParams,
    ) -> Result<SentPhoto, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let photo = entity::prelude::Photo::insert(entity::photo::ActiveModel {
            sender_id: ActiveValue::Set(params.sender_id),
            image_url: ActiveValue::Set(params.image_url),
            caption: ActiveValue::Set(params.caption),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&txn)
        .await?;

        entity::prelude::PhotoRecipient::insert_many(params.recipient_ids.iter().map(
            |recipient_id| entity::photo_recipient::ActiveModel {
                photo_id: ActiveValue::Set(photo.id),
                recipient_id: ActiveValue::Set(*recipient_id),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            },
        ))
        .exec(&txn)
        .await?;

        txn.commit().await?;

        let recipients = self.recipients_of(photo.id).await?;

        Ok(SentPhoto {
            photo: Photo::from_entity(photo),
            recipients,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Photo>, AppError> {
        let entity = entity::prelude::Photo::find()
            .filter(entity::photo::Column::Id.eq(id))
            .filter(entity::photo::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Photo::from_entity))
    }

    /// One page of the user's sent photos, newest first, with recipients and
    /// their viewed state. `page` is zero-based; also returns the total
    /// number of sent photos.
    pub async fn sent_paginated(
        &self,
        sender_id: i64,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<SentPhoto>, u64), AppError> {
        let paginator = entity::prelude::Photo::find()
            .filter(entity::photo::Column::SenderId.eq(sender_id))
            .filter(entity::photo::Column::DeletedAt.is_null())
            .order_by_desc(entity::photo::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let photos = paginator.fetch_page(page).await?;

        let mut sent = Vec::with_capacity(photos.len());
        for photo in photos {
            let recipients = self.recipients_of(photo.id).await?;
            sent.push(SentPhoto {
                photo: Photo::from_entity(photo),
                recipients,
            });
        }

        Ok((sent, total))
    }

    /// One page of photos shared with the user, newest first. `page` is
    /// zero-based; also returns the total number of received photos.
    pub async fn received_paginated(
        &self,
        recipient_id: i64,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ReceivedPhoto>, u64), AppError> {
        let paginator = entity::prelude::PhotoRecipient::find()
            .find_also_related(entity::prelude::Photo)
            .filter(entity::photo_recipient::Column::RecipientId.eq(recipient_id))
            .filter(entity::photo::Column::DeletedAt.is_null())
            .order_by_desc(entity::photo_recipient::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        self.assemble_received(rows).await.map(|photos| (photos, total))
    }

    /// The most recent photo shared with the user, if any.
    pub async fn latest_received(
        &self,
        recipient_id: i64,
    ) -> Result<Option<ReceivedPhoto>, AppError> {
        let row = entity::prelude::PhotoRecipient::find()
            .find_also_related(entity::prelude::Photo)
            .filter(entity::photo_recipient::Column::RecipientId.eq(recipient_id))
            .filter(entity::photo::Column::DeletedAt.is_null())
            .order_by_desc(entity::photo_recipient::Column::CreatedAt)
            .one(self.db)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(self.assemble_received(vec![row]).await?.into_iter().next())
    }

    pub async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        entity::prelude::Photo::update_many()
            .col_expr(
                entity::photo::Column::DeletedAt,
                Expr::value(Some(Utc::now())),
            )
            .filter(entity::photo::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_recipient_by_id(
        &self,
        id: i64,
    ) -> Result<Option<PhotoRecipient>, AppError> {
        let entity = entity::prelude::PhotoRecipient::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(PhotoRecipient::from_entity))
    }

    /// Stamps `viewed_at` on a recipient row. Already-viewed rows keep their
    /// original timestamp so repeated views are idempotent.
    pub async fn mark_viewed(&self, id: i64) -> Result<PhotoRecipient, AppError> {
        let Some(entity) = entity::prelude::PhotoRecipient::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Err(AppError::NotFound("Photo recipient not found".to_string()));
        };

        if entity.viewed_at.is_some() {
            return Ok(PhotoRecipient::from_entity(entity));
        }

        let mut active: entity::photo_recipient::ActiveModel = entity.into();
        active.viewed_at = ActiveValue::Set(Some(Utc::now()));

        let entity = entity::prelude::PhotoRecipient::update(active)
            .exec(self.db)
            .await?;

        Ok(PhotoRecipient::from_entity(entity))
    }

    async fn recipients_of(&self, photo_id: i64) -> Result<Vec<RecipientInfo>, AppError> {
        let rows = entity::prelude::PhotoRecipient::find()
            .filter(entity::photo_recipient::Column::PhotoId.eq(photo_id))
            .order_by_asc(entity::photo_recipient::Column::Id)
            .all(self.db)
            .await?;

        let recipient_ids: Vec<i64> = rows.iter().map(|row| row.recipient_id).collect();
        let users = self.load_summaries(&recipient_ids).await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let user = users.get(&row.recipient_id)?.clone();

                Some(RecipientInfo {
                    recipient_row_id: row.id,
                    user,
                    viewed_at: row.viewed_at,
                })
            })
            .collect())
    }

    async fn assemble_received(
        &self,
        rows: Vec<(entity::photo_recipient::Model, Option<entity::photo::Model>)>,
    ) -> Result<Vec<ReceivedPhoto>, AppError> {
        let sender_ids: Vec<i64> = rows
            .iter()
            .filter_map(|(_, photo)| photo.as_ref().map(|photo| photo.sender_id))
            .collect();
        let senders = self.load_summaries(&sender_ids).await?;

        Ok(rows
            .into_iter()
            .filter_map(|(recipient_row, photo)| {
                let photo = photo?;
                let sender = senders.get(&photo.sender_id)?.clone();

                Some(ReceivedPhoto {
                    recipient_row_id: recipient_row.id,
                    photo: Photo::from_entity(photo),
                    sender,
                    viewed_at: recipient_row.viewed_at,
                })
            })
            .collect())
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
