use serde::{Deserialize, Serialize};

/// Full profile of the authenticated user. Never exposes the password hash
/// or any of the verification/reset token columns.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub is_verified: bool,
}

/// Compact user representation attached to friends, photo recipients and
/// search results.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserSummaryDto {
    pub id: i64,
    pub username: String,
    pub profile_image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateProfileDto {
    pub username: Option<String>,
    pub phone: Option<String>,
    pub profile_image: Option<String>,
}
