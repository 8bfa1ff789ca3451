//! Profile management and user search.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UpdateProfileDto,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{UpdateProfileParams, User, UserSummary},
        service::auth::validate_username,
    },
};

const SEARCH_RESULT_LIMIT: u64 = 20;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies profile changes, rejecting username collisions with a 409.
    pub async fn update_profile(
        &self,
        user_id: i64,
        dto: UpdateProfileDto,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(username) = &dto.username {
            validate_username(username)?;

            if let Some(existing) = repo.find_by_username(username).await? {
                if existing.id != user_id {
                    return Err(AppError::Conflict("Username already taken".to_string()));
                }
            }
        }

        repo.update_profile(
            user_id,
            UpdateProfileParams {
                username: dto.username,
                phone: dto.phone,
                profile_image: dto.profile_image,
            },
        )
        .await
    }

    /// Substring search over usernames and emails of active accounts. The
    /// searching user is excluded from the results.
    pub async fn search(&self, user_id: i64, query: &str) -> Result<Vec<UserSummary>, AppError> {
        let query = query.trim();

        if query.is_empty() {
            return Err(AppError::BadRequest("Search query is required".to_string()));
        }

        UserRepository::new(self.db)
            .search(query, user_id, SEARCH_RESULT_LIMIT)
            .await
    }

    /// Deactivates the account. Tokens already issued keep failing the
    /// active check on their next use.
    pub async fn deactivate(&self, user_id: i64) -> Result<(), AppError> {
        UserRepository::new(self.db).deactivate(user_id).await
    }
}
