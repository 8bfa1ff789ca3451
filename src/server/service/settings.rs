//! Per-user settings reads and updates.

use sea_orm::DatabaseConnection;

use crate::{
    model::settings::UpdateSettingsDto,
    server::{
        data::user_setting::UserSettingRepository,
        error::AppError,
        model::settings::{UpdateSettingsParams, UserSettings},
    },
};

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, user_id: i64) -> Result<UserSettings, AppError> {
        UserSettingRepository::new(self.db).get_or_create(user_id).await
    }

    pub async fn update(
        &self,
        user_id: i64,
        dto: UpdateSettingsDto,
    ) -> Result<UserSettings, AppError> {
        UserSettingRepository::new(self.db)
            .update(
                user_id,
                UpdateSettingsParams {
                    notification_photo: dto.notification_photo,
                    notification_friend: dto.notification_friend,
                    notification_system: dto.notification_system,
                    theme: dto.theme,
                    language: dto.language,
                    auto_save_photos: dto.auto_save_photos,
                },
            )
            .await
    }
}
