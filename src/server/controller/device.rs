use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        device::{DeviceDto, RegisterDeviceDto, UpdateDeviceDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::device::Device,
        service::device::DeviceService, state::AppState,
    },
};

/// POST /api/devices
/// Register a device token for push delivery.
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<RegisterDeviceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let device = DeviceService::new(&state.db).register(user.id, dto).await?;

    Ok((StatusCode::CREATED, Json(device.into_dto())))
}

/// GET /api/devices
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let devices: Vec<DeviceDto> = DeviceService::new(&state.db)
        .list(user.id)
        .await?
        .into_iter()
        .map(Device::into_dto)
        .collect();

    Ok(Json(devices))
}

/// PUT /api/devices/{id}
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(device_id): Path<i64>,
    Json(dto): Json<UpdateDeviceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let device = DeviceService::new(&state.db)
        .update(user.id, device_id, dto.device_token)
        .await?;

    Ok(Json(device.into_dto()))
}

/// DELETE /api/devices/{id}
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(device_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    DeviceService::new(&state.db).delete(user.id, device_id).await?;

    Ok(Json(MessageDto {
        message: "Device removed".to_string(),
    }))
}
