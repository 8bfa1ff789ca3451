//! Device factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct DeviceFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    device_token: String,
    platform: String,
}

impl<'a> DeviceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i64) -> Self {
        Self {
            db,
            user_id,
            device_token: format!("device-token-{}", next_id()),
            platform: "ios".to_string(),
        }
    }

    pub fn device_token(mut self, device_token: impl Into<String>) -> Self {
        self.device_token = device_token.into();
        self
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub async fn build(self) -> Result<entity::device::Model, DbErr> {
        let now = Utc::now();

        entity::device::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            device_token: ActiveValue::Set(self.device_token),
            platform: ActiveValue::Set(self.platform),
            created_at: ActiveValue::Set(now),
            last_active_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an iOS device with a unique token.
pub async fn create_device(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::device::Model, DbErr> {
    DeviceFactory::new(db, user_id).build().await
}
