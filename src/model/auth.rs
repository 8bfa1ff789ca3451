use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TokenPairDto {
    pub access_token: String,
    pub refresh_token: String,
}

/// Returned by register, login and refresh.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub tokens: TokenPairDto,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RefreshDto {
    pub refresh_token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PasswordResetRequestDto {
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PasswordResetDto {
    pub token: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VerifyEmailDto {
    pub token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
}
