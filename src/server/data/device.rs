//! Device data repository.
//!
//! Device tokens are globally unique; registering a token that already
//! exists reassigns it to the registering user, which handles a phone
//! changing hands between accounts.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use migration::OnConflict;

use crate::server::{
    error::AppError,
    model::device::{Device, RegisterDeviceParams},
};

pub struct DeviceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeviceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn upsert(&self, params: RegisterDeviceParams) -> Result<Device, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::Device::insert(entity::device::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            device_token: ActiveValue::Set(params.device_token),
            platform: ActiveValue::Set(params.platform.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            last_active_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::device::Column::DeviceToken)
                .update_columns([
                    entity::device::Column::UserId,
                    entity::device::Column::Platform,
                    entity::device::Column::LastActiveAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Device::from_entity(entity)?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Device>, AppError> {
        let entity = entity::prelude::Device::find_by_id(id).one(self.db).await?;

        entity
            .map(Device::from_entity)
            .transpose()
            .map_err(AppError::from)
    }

    /// All devices of the user, most recently active first.
    pub async fn for_user(&self, user_id: i64) -> Result<Vec<Device>, AppError> {
        let entities = entity::prelude::Device::find()
            .filter(entity::device::Column::UserId.eq(user_id))
            .order_by_desc(entity::device::Column::LastActiveAt)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|entity| Device::from_entity(entity).map_err(AppError::from))
            .collect()
    }

    pub async fn update_token(&self, id: i64, device_token: &str) -> Result<Device, AppError> {
        let Some(entity) = entity::prelude::Device::find_by_id(id).one(self.db).await? else {
            return Err(AppError::NotFound("Device not found".to_string()));
        };

        let mut active: entity::device::ActiveModel = entity.into();
        active.device_token = ActiveValue::Set(device_token.to_string());
        active.last_active_at = ActiveValue::Set(Utc::now());

        let entity = entity::prelude::Device::update(active).exec(self.db).await?;

        Ok(Device::from_entity(entity)?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        entity::prelude::Device::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn touch_last_active(&self, id: i64) -> Result<(), AppError> {
        entity::prelude::Device::update_many()
            .col_expr(
                entity::device::Column::LastActiveAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::device::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
