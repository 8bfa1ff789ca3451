//! Account lifecycle: registration, login, token refresh, email
//! verification and password reset.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{RegisterDto, TokenPairDto},
    server::{
        data::{user::UserRepository, user_setting::UserSettingRepository},
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, User},
        service::{mail::MailService, token::TokenService},
        util::token::generate_token,
    },
};

const VERIFICATION_TOKEN_LENGTH: usize = 48;
const RESET_TOKEN_LENGTH: usize = 48;
const RESET_TOKEN_TTL_HOURS: i64 = 1;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    mailer: &'a MailService,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        mailer: &'a MailService,
    ) -> Self {
        Self { db, tokens, mailer }
    }

    /// Creates a new account and issues its first token pair.
    ///
    /// Validates the username, email and password shape, rejects taken
    /// usernames, emails and phone numbers with a 409, and sends the
    /// verification email best-effort.
    pub async fn register(&self, dto: RegisterDto) -> Result<(User, TokenPairDto), AppError> {
        validate_username(&dto.username)?;
        validate_email(&dto.email)?;
        validate_password(&dto.password)?;

        let repo = UserRepository::new(self.db);

        if let Some(existing) = repo
            .find_by_username_or_email(&dto.username, &dto.email)
            .await?
        {
            let message = if existing.username == dto.username {
                "Username already taken"
            } else {
                "Email already registered"
            };
            return Err(AppError::Conflict(message.to_string()));
        }

        if let Some(phone) = dto.phone.as_deref() {
            if repo.find_by_phone(phone).await?.is_some() {
                return Err(AppError::Conflict(
                    "Phone number already registered".to_string(),
                ));
            }
        }

        let password_hash = bcrypt::hash(&dto.password, bcrypt::DEFAULT_COST)?;
        let verification_token = generate_token(VERIFICATION_TOKEN_LENGTH);

        let user = repo
            .create(CreateUserParams {
                username: dto.username,
                email: dto.email,
                phone: dto.phone,
                password_hash,
                verification_token: verification_token.clone(),
            })
            .await?;

        UserSettingRepository::new(self.db)
            .get_or_create(user.id)
            .await?;

        if let Err(err) = self
            .mailer
            .send_verification_email(&user.email, &user.username, &verification_token)
            .await
        {
            tracing::warn!("Failed to send verification email to {}: {}", user.email, err);
        }

        let tokens = self.tokens.issue_pair(user.id)?;

        Ok((user, tokens))
    }

    /// Checks credentials and issues a token pair. The error does not reveal
    /// whether the email exists.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, TokenPairDto), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        repo.set_last_login(user.id).await?;

        let tokens = self.tokens.issue_pair(user.id)?;

        Ok((user, tokens))
    }

    /// Exchanges a valid refresh token for a fresh token pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<(User, TokenPairDto), AppError> {
        let user_id = self.tokens.verify_refresh(refresh_token)?;

        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotFound(user_id).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        let tokens = self.tokens.issue_pair(user.id)?;

        Ok((user, tokens))
    }

    /// Starts the password reset flow for an email address.
    ///
    /// Always succeeds from the caller's perspective so the endpoint cannot
    /// be used to probe which emails are registered.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email).await? else {
            tracing::debug!("Password reset requested for unknown email");
            return Ok(());
        };

        let token = generate_token(RESET_TOKEN_LENGTH);
        let expires = Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS);

        repo.set_reset_token(user.id, &token, expires).await?;

        if let Err(err) = self
            .mailer
            .send_password_reset_email(&user.email, &user.username, &token)
            .await
        {
            tracing::warn!("Failed to send password reset email to {}: {}", user.email, err);
        }

        Ok(())
    }

    /// Completes the reset flow: sets the new password and consumes the
    /// token.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AppError> {
        validate_password(new_password)?;

        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_valid_reset_token(token).await? else {
            return Err(AppError::BadRequest(
                "Invalid or expired reset token".to_string(),
            ));
        };

        let password_hash = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)?;
        repo.set_password(user.id, &password_hash).await?;

        Ok(())
    }

    /// Marks the account behind the verification token as verified.
    pub async fn verify_email(&self, token: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_verification_token(token).await? else {
            return Err(AppError::BadRequest(
                "Invalid verification token".to_string(),
            ));
        };

        repo.mark_verified(user.id).await?;

        Ok(User {
            is_verified: true,
            ..user
        })
    }

    /// Changes the password of an authenticated user after re-checking the
    /// current one.
    pub async fn change_password(
        &self,
        user: &User,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if !bcrypt::verify(current_password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        validate_password(new_password)?;

        let password_hash = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)?;
        UserRepository::new(self.db)
            .set_password(user.id, &password_hash)
            .await?;

        Ok(())
    }
}

/// Usernames are 3-30 characters of letters, digits, underscore or dot.
pub fn validate_username(username: &str) -> Result<(), AppError> {
    if username.len() < 3 || username.len() > 30 {
        return Err(AppError::BadRequest(
            "Username must be between 3 and 30 characters".to_string(),
        ));
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    {
        return Err(AppError::BadRequest(
            "Username may only contain letters, digits, underscores and dots".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    });

    if !valid {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    Ok(())
}

/// Passwords need at least 8 characters with an upper case letter, a lower
/// case letter and a digit.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    let long_enough = password.len() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(long_enough && has_upper && has_lower && has_digit) {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters and contain an upper case letter, a lower \
             case letter and a digit"
                .to_string(),
        ));
    }

    Ok(())
}
