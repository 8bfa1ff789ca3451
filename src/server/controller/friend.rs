use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        friend::{FriendDto, FriendRequestDto, SendFriendRequestDto},
        realtime::ServerEvent,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::friend::{FriendLink, IncomingRequest},
        service::friend::FriendService,
        state::AppState,
    },
};

/// GET /api/friends
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let friends: Vec<FriendDto> = FriendService::new(&state.db)
        .list(user.id)
        .await?
        .into_iter()
        .map(FriendLink::into_dto)
        .collect();

    Ok(Json(friends))
}

/// POST /api/friends/request
/// Send a friend request, notify the target in realtime and via push.
pub async fn send_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(dto): Json<SendFriendRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let friendship = FriendService::new(&state.db)
        .send_request(&user, dto.friend_id)
        .await?;

    state
        .presence
        .emit_to_user(
            friendship.friend_id,
            &ServerEvent::FriendRequest {
                friendship_id: friendship.id,
                user: user.summary().into_dto(),
            },
        )
        .await;
    state
        .push
        .notify_user(
            &state.db,
            friendship.friend_id,
            "New friend request",
            &format!("{} sent you a friend request", user.username),
        )
        .await;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "Friend request sent".to_string(),
        }),
    ))
}

/// GET /api/friends/requests
/// Incoming pending requests.
pub async fn incoming_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let requests: Vec<FriendRequestDto> = FriendService::new(&state.db)
        .incoming_requests(user.id)
        .await?
        .into_iter()
        .map(IncomingRequest::into_dto)
        .collect();

    Ok(Json(requests))
}

/// PUT /api/friends/{id}/accept
pub async fn accept(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(friendship_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let friendship = FriendService::new(&state.db)
        .accept(&user, friendship_id)
        .await?;

    // The requester sits on friendship.user_id for a directed row
    state
        .presence
        .emit_to_user(
            friendship.user_id,
            &ServerEvent::FriendAccepted {
                friendship_id: friendship.id,
                user: user.summary().into_dto(),
            },
        )
        .await;
    state
        .push
        .notify_user(
            &state.db,
            friendship.user_id,
            "Friend request accepted",
            &format!("{} accepted your friend request", user.username),
        )
        .await;

    Ok(Json(MessageDto {
        message: "Friend request accepted".to_string(),
    }))
}

/// PUT /api/friends/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(friendship_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    FriendService::new(&state.db)
        .reject(&user, friendship_id)
        .await?;

    Ok(Json(MessageDto {
        message: "Friend request rejected".to_string(),
    }))
}

/// DELETE /api/friends/{id}
pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(friendship_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    FriendService::new(&state.db)
        .remove(user.id, friendship_id)
        .await?;

    Ok(Json(MessageDto {
        message: "Friend removed".to_string(),
    }))
}
