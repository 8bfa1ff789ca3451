use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::MessageDto,
        auth::ChangePasswordDto,
        settings::UpdateSettingsDto,
        user::{UpdateProfileDto, UserSummaryDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::UserSummary,
        service::{auth::AuthService, settings::SettingsService, user::UserService},
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/users/me
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    Ok(Json(user.into_dto()))
}

/// PUT /api/users/me
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let updated = UserService::new(&state.db).update_profile(user.id, dto).await?;

    Ok(Json(updated.into_dto()))
}

/// DELETE /api/users/me
/// Deactivates the account; rows stay in place so shared photos survive.
pub async fn delete_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    UserService::new(&state.db).deactivate(user.id).await?;

    Ok(Json(MessageDto {
        message: "Account deactivated".to_string(),
    }))
}

/// GET /api/users/search?q=
pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let results: Vec<UserSummaryDto> = UserService::new(&state.db)
        .search(user.id, &query.q)
        .await?
        .into_iter()
        .map(UserSummary::into_dto)
        .collect();

    Ok(Json(results))
}

/// PUT /api/users/password
/// Change password for an authenticated user.
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    AuthService::new(&state.db, &state.tokens, &state.mailer)
        .change_password(&user, &dto.current_password, &dto.new_password)
        .await?;

    Ok(Json(MessageDto {
        message: "Password updated".to_string(),
    }))
}

/// GET /api/users/me/settings
pub async fn get_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let settings = SettingsService::new(&state.db).get(user.id).await?;

    Ok(Json(settings.into_dto()))
}

/// PUT /api/users/me/settings
pub async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<UpdateSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let settings = SettingsService::new(&state.db).update(user.id, dto).await?;

    Ok(Json(settings.into_dto()))
}
