use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserSettingsDto {
    pub notification_photo: bool,
    pub notification_friend: bool,
    pub notification_system: bool,
    pub theme: Theme,
    pub language: String,
    pub auto_save_photos: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct UpdateSettingsDto {
    pub notification_photo: Option<bool>,
    pub notification_friend: Option<bool>,
    pub notification_system: Option<bool>,
    pub theme: Option<Theme>,
    pub language: Option<String>,
    pub auto_save_photos: Option<bool>,
}
