//! User settings factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct UserSettingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    notification_photo: bool,
    notification_friend: bool,
    notification_system: bool,
    theme: String,
    language: String,
    auto_save_photos: bool,
}

impl<'a> UserSettingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i64) -> Self {
        Self {
            db,
            user_id,
            notification_photo: true,
            notification_friend: true,
            notification_system: true,
            theme: "system".to_string(),
            language: "en".to_string(),
            auto_save_photos: false,
        }
    }

    pub fn notification_photo(mut self, enabled: bool) -> Self {
        self.notification_photo = enabled;
        self
    }

    pub fn notification_friend(mut self, enabled: bool) -> Self {
        self.notification_friend = enabled;
        self
    }

    pub fn notification_system(mut self, enabled: bool) -> Self {
        self.notification_system = enabled;
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn auto_save_photos(mut self, enabled: bool) -> Self {
        self.auto_save_photos = enabled;
        self
    }

    pub async fn build(self) -> Result<entity::user_setting::Model, DbErr> {
        let now = Utc::now();

        entity::user_setting::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            notification_photo: ActiveValue::Set(self.notification_photo),
            notification_friend: ActiveValue::Set(self.notification_friend),
            notification_system: ActiveValue::Set(self.notification_system),
            theme: ActiveValue::Set(self.theme),
            language: ActiveValue::Set(self.language),
            auto_save_photos: ActiveValue::Set(self.auto_save_photos),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a settings row with application defaults.
pub async fn create_settings(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::user_setting::Model, DbErr> {
    UserSettingFactory::new(db, user_id).build().await
}
