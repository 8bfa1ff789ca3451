use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::moment::{CreateMomentDto, MomentAcceptedDto},
    server::{error::AppError, middleware::auth::AuthGuard, state::AppState},
};

/// POST /api/v1/moments
///
/// Acceptance stub kept API-compatible with newer clients: the payload is
/// validated for shape and echoed back without persistence.
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<CreateMomentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    tracing::debug!(
        "Accepted moment payload with {} recipients",
        dto.recipients.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(MomentAcceptedDto {
            thumbnail_url: dto.thumbnail_url,
            recipients: dto.recipients,
            overlays: dto.overlays,
        }),
    ))
}
