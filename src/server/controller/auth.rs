use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        auth::{
            AuthResponseDto, LoginDto, PasswordResetDto, PasswordResetRequestDto, RefreshDto,
            RegisterDto, VerifyEmailDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService, state::AppState,
    },
};

/// POST /api/auth/register
/// Create an account and return the user with its first token pair.
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, &state.mailer);

    let (user, tokens) = service.register(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            user: user.into_dto(),
            tokens,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, &state.mailer);

    let (user, tokens) = service.login(&dto.email, &dto.password).await?;

    Ok(Json(AuthResponseDto {
        user: user.into_dto(),
        tokens,
    }))
}

/// POST /api/auth/refresh
/// Exchange a refresh token for a new token pair.
pub async fn refresh(
    State(state): State<AppState>,
    Json(dto): Json<RefreshDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, &state.mailer);

    let (user, tokens) = service.refresh(&dto.refresh_token).await?;

    Ok(Json(AuthResponseDto {
        user: user.into_dto(),
        tokens,
    }))
}

/// POST /api/auth/password/reset
/// Start the password reset flow. Always 200 so the endpoint cannot be used
/// to probe registered emails.
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(dto): Json<PasswordResetRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.tokens, &state.mailer)
        .request_password_reset(&dto.email)
        .await?;

    Ok(Json(MessageDto {
        message: "If the email is registered, a reset link has been sent".to_string(),
    }))
}

/// PUT /api/auth/password/update
/// Complete the reset flow with the emailed token.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(dto): Json<PasswordResetDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.tokens, &state.mailer)
        .reset_password(&dto.token, &dto.password)
        .await?;

    Ok(Json(MessageDto {
        message: "Password has been reset".to_string(),
    }))
}

/// POST /api/auth/verify
pub async fn verify_email(
    State(state): State<AppState>,
    Json(dto): Json<VerifyEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.tokens, &state.mailer)
        .verify_email(&dto.token)
        .await?;

    Ok(Json(user.into_dto()))
}

/// POST /api/auth/logout
///
/// Tokens are stateless, so logout only confirms the client should drop its
/// pair. Kept so clients have a uniform auth surface.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    Ok(Json(MessageDto {
        message: "Logged out".to_string(),
    }))
}
