use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::IntoResponse,
};
use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::{
    model::{
        friend::FriendStatus,
        realtime::{ClientEvent, PresenceStatus, ServerEvent},
    },
    server::{
        data::{friend::FriendRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::user::User,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct SocketQuery {
    pub token: Option<String>,
}

/// GET /api/realtime?token=
///
/// WebSocket upgrade. Browsers cannot set an Authorization header on the
/// upgrade request, so the access token travels in the query string.
pub async fn upgrade(
    State(state): State<AppState>,
    Query(query): Query<SocketQuery>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, AppError> {
    let token = query.token.ok_or(AuthError::MissingToken)?;
    let user_id = state.tokens.verify_access(&token)?;

    let Some(user) = UserRepository::new(&state.db).find_by_id(user_id).await? else {
        return Err(AuthError::UserNotFound(user_id).into());
    };

    if !user.is_active {
        return Err(AuthError::AccountDisabled(user.id).into());
    }

    Ok(ws.on_upgrade(move |socket| handle_socket(state, user, socket)))
}

async fn handle_socket(state: AppState, user: User, socket: WebSocket) {
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerEvent>();
    let (connection_id, first_connection) = state.presence.register(user.id, tx.clone()).await;

    tracing::debug!(
        "Realtime connection {} opened for user {}",
        connection_id,
        user.id
    );

    if first_connection {
        broadcast_status(&state, user.id, PresenceStatus::Online).await;
    }

    let (mut sink, mut stream) = socket.split();

    // Forwards registry events to this connection until the channel closes
    let mut forward_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let Ok(text) = serde_json::to_string(&event) else {
                continue;
            };

            if sink.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    loop {
        tokio::select! {
            incoming = stream.next() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<ClientEvent>(&text) {
                            Ok(event) => handle_client_event(&state, &user, event).await,
                            Err(_) => {
                                let _ = tx.send(ServerEvent::Error {
                                    message: "Unrecognized event".to_string(),
                                });
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::debug!(
                            "Realtime connection {} errored for user {}: {}",
                            connection_id,
                            user.id,
                            err
                        );
                        break;
                    }
                }
            }
            _ = &mut forward_task => break,
        }
    }

    forward_task.abort();

    let last_connection = state.presence.deregister(user.id, connection_id).await;
    if last_connection {
        broadcast_status(&state, user.id, PresenceStatus::Offline).await;
    }

    tracing::debug!(
        "Realtime connection {} closed for user {}",
        connection_id,
        user.id
    );
}

async fn handle_client_event(state: &AppState, user: &User, event: ClientEvent) {
    match event {
        ClientEvent::UserStatus { status } => {
            broadcast_status(state, user.id, status).await;
        }
        ClientEvent::PhotoView {
            sender_id,
            photo_id,
        } => {
            state
                .presence
                .emit_to_user(
                    sender_id,
                    &ServerEvent::PhotoViewed {
                        photo_id,
                        recipient_id: user.id,
                        viewed_at: Utc::now(),
                    },
                )
                .await;
        }
        ClientEvent::FriendRequest { recipient_id } => {
            relay_friendship_event(state, user, recipient_id, FriendStatus::Pending).await;
        }
        ClientEvent::FriendAccept { recipient_id } => {
            relay_friendship_event(state, user, recipient_id, FriendStatus::Accepted).await;
        }
        ClientEvent::TypingStart { recipient_id } => {
            state
                .presence
                .emit_to_user(recipient_id, &ServerEvent::TypingStart { user_id: user.id })
                .await;
        }
        ClientEvent::TypingStop { recipient_id } => {
            state
                .presence
                .emit_to_user(recipient_id, &ServerEvent::TypingStop { user_id: user.id })
                .await;
        }
    }
}

/// Relays a friend event if the claimed relationship actually exists in the
/// claimed state; spoofed relays are dropped.
async fn relay_friendship_event(
    state: &AppState,
    user: &User,
    recipient_id: i64,
    expected_status: FriendStatus,
) {
    let friendship = match FriendRepository::new(&state.db)
        .find_between(user.id, recipient_id)
        .await
    {
        Ok(Some(friendship)) if friendship.status == expected_status => friendship,
        Ok(_) => return,
        Err(err) => {
            tracing::error!(
                "Failed to load friendship for realtime relay from user {}: {}",
                user.id,
                err
            );
            return;
        }
    };

    let event = match expected_status {
        FriendStatus::Pending => ServerEvent::FriendRequest {
            friendship_id: friendship.id,
            user: user.summary().into_dto(),
        },
        _ => ServerEvent::FriendAccepted {
            friendship_id: friendship.id,
            user: user.summary().into_dto(),
        },
    };

    state.presence.emit_to_user(recipient_id, &event).await;
}

/// Sends the user's presence status to every online friend.
async fn broadcast_status(state: &AppState, user_id: i64, status: PresenceStatus) {
    let friend_ids = match FriendRepository::new(&state.db)
        .accepted_friend_ids(user_id)
        .await
    {
        Ok(ids) => ids,
        Err(err) => {
            tracing::error!(
                "Failed to load friends for status broadcast of user {}: {}",
                user_id,
                err
            );
            return;
        }
    };

    state
        .presence
        .emit_to_users(&friend_ids, &ServerEvent::UserStatus { user_id, status })
        .await;
}
