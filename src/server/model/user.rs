use chrono::{DateTime, Utc};

use crate::model::user::{UserDto, UserSummaryDto};

/// A registered account. Carries the password hash for credential checks;
/// never leaves the server layer, `into_dto` strips everything sensitive.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub profile_image: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            phone: entity.phone,
            password_hash: entity.password_hash,
            profile_image: entity.profile_image,
            is_active: entity.is_active,
            is_verified: entity.is_verified,
            last_login: entity.last_login,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            profile_image: self.profile_image.clone(),
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            phone: self.phone,
            profile_image: self.profile_image,
            is_verified: self.is_verified,
        }
    }
}

/// The public subset of a user shown to other users.
#[derive(Debug, Clone)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub profile_image: Option<String>,
}

impl UserSummary {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            profile_image: entity.profile_image,
        }
    }

    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            username: self.username,
            profile_image: self.profile_image,
        }
    }
}

pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub verification_token: String,
}

#[derive(Default)]
pub struct UpdateProfileParams {
    pub username: Option<String>,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
}
