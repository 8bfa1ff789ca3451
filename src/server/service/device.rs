//! Device registration for push delivery.

use sea_orm::DatabaseConnection;

use crate::{
    model::device::RegisterDeviceDto,
    server::{
        data::device::DeviceRepository,
        error::{auth::AuthError, AppError},
        model::device::{Device, RegisterDeviceParams},
    },
};

pub struct DeviceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeviceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a device token, reassigning it if another account held it.
    pub async fn register(
        &self,
        user_id: i64,
        dto: RegisterDeviceDto,
    ) -> Result<Device, AppError> {
        if dto.device_token.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Device token is required".to_string(),
            ));
        }

        DeviceRepository::new(self.db)
            .upsert(RegisterDeviceParams {
                user_id,
                device_token: dto.device_token,
                platform: dto.platform,
            })
            .await
    }

    pub async fn list(&self, user_id: i64) -> Result<Vec<Device>, AppError> {
        DeviceRepository::new(self.db).for_user(user_id).await
    }

    /// Updates a device's token, or just refreshes its activity timestamp
    /// when no new token is given.
    pub async fn update(
        &self,
        user_id: i64,
        device_id: i64,
        device_token: Option<String>,
    ) -> Result<Device, AppError> {
        let repo = DeviceRepository::new(self.db);
        self.owned_by(&repo, user_id, device_id).await?;

        match device_token {
            Some(token) if !token.trim().is_empty() => repo.update_token(device_id, &token).await,
            _ => {
                repo.touch_last_active(device_id).await?;
                repo.find_by_id(device_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Device not found".to_string()))
            }
        }
    }

    pub async fn delete(&self, user_id: i64, device_id: i64) -> Result<(), AppError> {
        let repo = DeviceRepository::new(self.db);
        self.owned_by(&repo, user_id, device_id).await?;

        repo.delete(device_id).await
    }

    async fn owned_by(
        &self,
        repo: &DeviceRepository<'_>,
        user_id: i64,
        device_id: i64,
    ) -> Result<Device, AppError> {
        let Some(device) = repo.find_by_id(device_id).await? else {
            return Err(AppError::NotFound("Device not found".to_string()));
        };

        if device.user_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("device {} belongs to another user", device_id),
            )
            .into());
        }

        Ok(device)
    }
}
