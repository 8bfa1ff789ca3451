//! User data repository for database operations.
//!
//! Handles account creation, credential lookups, profile updates and the
//! token flows for email verification and password reset.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::user::{CreateUserParams, UpdateProfileParams, User, UserSummary},
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account. The caller is responsible for hashing the
    /// password and checking username/email availability first; a uniqueness
    /// race still surfaces as `DbErr` from the unique indexes.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            password_hash: ActiveValue::Set(params.password_hash),
            is_active: ActiveValue::Set(true),
            is_verified: ActiveValue::Set(false),
            verification_token: ActiveValue::Set(Some(params.verification_token)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Phone.eq(phone))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Looks up the account a registration would collide with.
    pub async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(username))
                    .add(entity::user::Column::Email.eq(email)),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Applies the provided profile fields, leaving unset fields untouched.
    pub async fn update_profile(
        &self,
        id: i64,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let mut active: entity::user::ActiveModel = entity.into();

        if let Some(username) = params.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(profile_image) = params.profile_image {
            active.profile_image = ActiveValue::Set(Some(profile_image));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = entity::prelude::User::update(active).exec(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Replaces the password hash and clears any outstanding reset token.
    pub async fn set_password(&self, id: i64, password_hash: &str) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::PasswordHash,
                Expr::value(password_hash),
            )
            .col_expr(
                entity::user::Column::ResetToken,
                Expr::value(None::<String>),
            )
            .col_expr(
                entity::user::Column::ResetTokenExpires,
                Expr::value(None::<DateTime<Utc>>),
            )
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_last_login(&self, id: i64) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::LastLogin,
                Expr::value(Some(Utc::now())),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn deactivate(&self, id: i64) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::IsActive, Expr::value(false))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Case-insensitive substring search over username and email, excluding
    /// the searching user and deactivated accounts.
    pub async fn search(
        &self,
        query: &str,
        exclude_user_id: i64,
        limit: u64,
    ) -> Result<Vec<UserSummary>, AppError> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::IsActive.eq(true))
            .filter(entity::user::Column::Id.ne(exclude_user_id))
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.contains(query))
                    .add(entity::user::Column::Email.contains(query)),
            )
            .order_by_asc(entity::user::Column::Username)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserSummary::from_entity).collect())
    }

    pub async fn set_reset_token(
        &self,
        id: i64,
        token: &str,
        expires: DateTime<Utc>,
    ) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::ResetToken, Expr::value(Some(token)))
            .col_expr(
                entity::user::Column::ResetTokenExpires,
                Expr::value(Some(expires)),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds the account holding this reset token if it has not expired.
    pub async fn find_by_valid_reset_token(&self, token: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ResetToken.eq(token))
            .filter(entity::user::Column::ResetTokenExpires.gt(Utc::now()))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::VerificationToken.eq(token))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn mark_verified(&self, id: i64) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::IsVerified, Expr::value(true))
            .col_expr(
                entity::user::Column::VerificationToken,
                Expr::value(None::<String>),
            )
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
