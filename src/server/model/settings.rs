use crate::{
    model::settings::{Theme, UserSettingsDto},
    server::error::internal::InternalError,
};

/// Per-user preferences. Every user has exactly one row, created lazily on
/// first read with defaults.
#[derive(Debug, Clone)]
pub struct UserSettings {
    pub user_id: i64,
    pub notification_photo: bool,
    pub notification_friend: bool,
    pub notification_system: bool,
    pub theme: Theme,
    pub language: String,
    pub auto_save_photos: bool,
}

impl UserSettings {
    pub fn from_entity(entity: entity::user_setting::Model) -> Result<Self, InternalError> {
        let theme = Theme::parse(&entity.theme).ok_or_else(|| {
            InternalError::UnknownEnumValue {
                column: "user_settings.theme",
                value: entity.theme.clone(),
            }
        })?;

        Ok(Self {
            user_id: entity.user_id,
            notification_photo: entity.notification_photo,
            notification_friend: entity.notification_friend,
            notification_system: entity.notification_system,
            theme,
            language: entity.language,
            auto_save_photos: entity.auto_save_photos,
        })
    }

    pub fn into_dto(self) -> UserSettingsDto {
        UserSettingsDto {
            notification_photo: self.notification_photo,
            notification_friend: self.notification_friend,
            notification_system: self.notification_system,
            theme: self.theme,
            language: self.language,
            auto_save_photos: self.auto_save_photos,
        }
    }
}

#[derive(Default)]
pub struct UpdateSettingsParams {
    pub notification_photo: Option<bool>,
    pub notification_friend: Option<bool>,
    pub notification_system: Option<bool>,
    pub theme: Option<Theme>,
    pub language: Option<String>,
    pub auto_save_photos: Option<bool>,
}
