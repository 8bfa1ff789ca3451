//! User settings data repository.
//!
//! The settings row is created lazily with defaults on first access, so
//! accounts registered before a settings column was added behave the same as
//! new ones.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    model::settings::Theme,
    server::{
        error::AppError,
        model::settings::{UpdateSettingsParams, UserSettings},
    },
};

const DEFAULT_LANGUAGE: &str = "en";

pub struct UserSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_or_create(&self, user_id: i64) -> Result<UserSettings, AppError> {
        if let Some(entity) = self.find_entity(user_id).await? {
            return Ok(UserSettings::from_entity(entity)?);
        }

        let now = Utc::now();

        let entity = entity::prelude::UserSetting::insert(entity::user_setting::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            notification_photo: ActiveValue::Set(true),
            notification_friend: ActiveValue::Set(true),
            notification_system: ActiveValue::Set(true),
            theme: ActiveValue::Set(Theme::System.as_str().to_string()),
            language: ActiveValue::Set(DEFAULT_LANGUAGE.to_string()),
            auto_save_photos: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(UserSettings::from_entity(entity)?)
    }

    /// Applies the provided fields on top of the user's current settings,
    /// creating the row first if needed.
    pub async fn update(
        &self,
        user_id: i64,
        params: UpdateSettingsParams,
    ) -> Result<UserSettings, AppError> {
        self.get_or_create(user_id).await?;

        let Some(entity) = self.find_entity(user_id).await? else {
            return Err(AppError::NotFound("User settings not found".to_string()));
        };

        let mut active: entity::user_setting::ActiveModel = entity.into();

        if let Some(notification_photo) = params.notification_photo {
            active.notification_photo = ActiveValue::Set(notification_photo);
        }
        if let Some(notification_friend) = params.notification_friend {
            active.notification_friend = ActiveValue::Set(notification_friend);
        }
        if let Some(notification_system) = params.notification_system {
            active.notification_system = ActiveValue::Set(notification_system);
        }
        if let Some(theme) = params.theme {
            active.theme = ActiveValue::Set(theme.as_str().to_string());
        }
        if let Some(language) = params.language {
            active.language = ActiveValue::Set(language);
        }
        if let Some(auto_save_photos) = params.auto_save_photos {
            active.auto_save_photos = ActiveValue::Set(auto_save_photos);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = entity::prelude::UserSetting::update(active)
            .exec(self.db)
            .await?;

        Ok(UserSettings::from_entity(entity)?)
    }

    async fn find_entity(
        &self,
        user_id: i64,
    ) -> Result<Option<entity::user_setting::Model>, AppError> {
        let entity = entity::prelude::UserSetting::find()
            .filter(entity::user_setting::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity)
    }
}
