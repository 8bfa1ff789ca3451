use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::MessageDto,
        photo::{PaginatedReceivedPhotosDto, PaginatedSentPhotosDto},
        realtime::ServerEvent,
    },
    server::{
        controller::PaginationQuery,
        error::AppError,
        middleware::auth::AuthGuard,
        model::photo::ReceivedPhoto,
        service::photo::PhotoService,
        state::AppState,
    },
};

/// Upload cap for the image part.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
];

struct Upload {
    data: axum::body::Bytes,
    extension: &'static str,
}

/// POST /api/photos
/// Multipart upload: `image` (jpeg/png/gif, ≤5 MiB), optional `caption`,
/// `recipients` (JSON array of user ids). Stores the image on disk, fans the
/// photo out to recipients, notifies and pushes, and emits `photo:new`.
pub async fn send_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let mut upload: Option<Upload> = None;
    let mut caption: Option<String> = None;
    let mut recipient_ids: Option<Vec<i64>> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("image") => {
                let extension = field
                    .content_type()
                    .and_then(|content_type| {
                        IMAGE_TYPES
                            .iter()
                            .find(|(mime, _)| *mime == content_type)
                            .map(|(_, ext)| *ext)
                    })
                    .ok_or_else(|| {
                        AppError::BadRequest(
                            "Image must be a jpeg, png or gif".to_string(),
                        )
                    })?;

                let data = field.bytes().await?;
                if data.len() > MAX_IMAGE_BYTES {
                    return Err(AppError::BadRequest(
                        "Image exceeds the 5 MiB limit".to_string(),
                    ));
                }

                upload = Some(Upload { data, extension });
            }
            Some("caption") => {
                let text = field.text().await?;
                if !text.is_empty() {
                    caption = Some(text);
                }
            }
            Some("recipients") => {
                let text = field.text().await?;
                let ids: Vec<i64> = serde_json::from_str(&text).map_err(|_| {
                    AppError::BadRequest(
                        "Recipients must be a JSON array of user ids".to_string(),
                    )
                })?;
                recipient_ids = Some(ids);
            }
            _ => {}
        }
    }

    let Some(upload) = upload else {
        return Err(AppError::BadRequest("Image is required".to_string()));
    };
    let Some(recipient_ids) = recipient_ids else {
        return Err(AppError::BadRequest("Recipients are required".to_string()));
    };

    let service = PhotoService::new(&state.db);

    // Reject bad recipient lists before the image touches disk.
    service.validate_recipients(user.id, &recipient_ids).await?;

    let filename = format!("{}.{}", Uuid::new_v4(), upload.extension);
    let image_path = state.media_dir.join(&filename);
    tokio::fs::write(&image_path, &upload.data).await?;
    let image_url = format!("/media/{}", filename);

    let (sent, notified) = match service.send(&user, image_url, caption, recipient_ids).await {
        Ok(result) => result,
        Err(err) => {
            if let Err(io_err) = tokio::fs::remove_file(&image_path).await {
                tracing::warn!("Failed to remove unsent upload {}: {}", filename, io_err);
            }
            return Err(err);
        }
    };

    let event = ServerEvent::PhotoNew {
        photo_id: sent.photo.id,
        sender: user.summary().into_dto(),
        caption: sent.photo.caption.clone(),
    };
    let recipient_user_ids: Vec<i64> = sent
        .recipients
        .iter()
        .map(|recipient| recipient.user.id)
        .collect();
    state.presence.emit_to_users(&recipient_user_ids, &event).await;

    for recipient_id in notified {
        state
            .push
            .notify_user(
                &state.db,
                recipient_id,
                "New photo",
                &format!("{} sent you a photo", user.username),
            )
            .await;
    }

    Ok((StatusCode::CREATED, Json(sent.into_dto())))
}

/// GET /api/photos?page&limit
/// Photos the caller sent.
pub async fn sent(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let page: PaginatedSentPhotosDto = PhotoService::new(&state.db)
        .sent(user.id, query.page, query.limit)
        .await?
        .into_dto();

    Ok(Json(page))
}

/// GET /api/photos/received?page&limit
pub async fn received(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let page: PaginatedReceivedPhotosDto = PhotoService::new(&state.db)
        .received(user.id, query.page, query.limit)
        .await?
        .into_dto();

    Ok(Json(page))
}

/// GET /api/photos/latest
/// Most recent received photo, for widget-style clients. Fetching it counts
/// as a view.
pub async fn latest(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let latest = PhotoService::new(&state.db)
        .latest_received(user.id)
        .await?
        .map(ReceivedPhoto::into_dto);

    match latest {
        Some(photo) => Ok(Json(photo).into_response()),
        None => Err(AppError::NotFound("No photos received yet".to_string())),
    }
}

/// DELETE /api/photos/{id}
/// Sender-only soft delete.
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(photo_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    PhotoService::new(&state.db).delete(user.id, photo_id).await?;

    Ok(Json(MessageDto {
        message: "Photo deleted".to_string(),
    }))
}

/// PUT /api/photos/recipient/{id}/view
/// Mark a received photo as viewed and tell the sender in realtime.
pub async fn mark_viewed(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(recipient_row_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let (recipient_row, photo) = PhotoService::new(&state.db)
        .mark_viewed(user.id, recipient_row_id)
        .await?;

    if let Some(viewed_at) = recipient_row.viewed_at {
        state
            .presence
            .emit_to_user(
                photo.sender_id,
                &ServerEvent::PhotoViewed {
                    photo_id: photo.id,
                    recipient_id: user.id,
                    viewed_at,
                },
            )
            .await;
    }

    Ok(Json(MessageDto {
        message: "Photo marked as viewed".to_string(),
    }))
}
