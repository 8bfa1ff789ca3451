use chrono::{DateTime, Utc};

use crate::{
    model::device::{DeviceDto, Platform},
    server::error::internal::InternalError,
};

#[derive(Debug, Clone)]
pub struct Device {
    pub id: i64,
    pub user_id: i64,
    pub device_token: String,
    pub platform: Platform,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
}

impl Device {
    pub fn from_entity(entity: entity::device::Model) -> Result<Self, InternalError> {
        let platform = Platform::parse(&entity.platform).ok_or_else(|| {
            InternalError::UnknownEnumValue {
                column: "devices.platform",
                value: entity.platform.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            device_token: entity.device_token,
            platform,
            created_at: entity.created_at,
            last_active_at: entity.last_active_at,
        })
    }

    pub fn into_dto(self) -> DeviceDto {
        DeviceDto {
            id: self.id,
            device_token: self.device_token,
            platform: self.platform,
            created_at: self.created_at,
            last_active_at: self.last_active_at,
        }
    }
}

pub struct RegisterDeviceParams {
    pub user_id: i64,
    pub device_token: String,
    pub platform: Platform,
}
