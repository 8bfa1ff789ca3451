use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::server::{
    controller::{auth, device, friend, moment, notification, photo, user},
    realtime,
    state::AppState,
};

/// Request body cap: the 5 MiB image plus headroom for the other multipart
/// parts.
const MAX_BODY_BYTES: usize = photo::MAX_IMAGE_BYTES + 1024 * 1024;

pub fn router(media_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/auth/password/reset", post(auth::request_password_reset))
        .route("/api/auth/password/update", put(auth::reset_password))
        .route("/api/auth/verify", post(auth::verify_email))
        .route("/api/auth/logout", post(auth::logout))
        .route(
            "/api/users/me",
            get(user::get_me).put(user::update_me).delete(user::delete_me),
        )
        .route("/api/users/search", get(user::search))
        .route("/api/users/password", put(user::change_password))
        .route(
            "/api/users/me/settings",
            get(user::get_settings).put(user::update_settings),
        )
        .route("/api/friends", get(friend::list))
        .route("/api/friends/request", post(friend::send_request))
        .route("/api/friends/requests", get(friend::incoming_requests))
        .route("/api/friends/{id}/accept", put(friend::accept))
        .route("/api/friends/{id}/reject", put(friend::reject))
        .route("/api/friends/{id}", delete(friend::remove))
        .route("/api/photos", post(photo::send_photo).get(photo::sent))
        .route("/api/photos/received", get(photo::received))
        .route("/api/photos/latest", get(photo::latest))
        .route("/api/photos/{id}", delete(photo::delete))
        .route("/api/photos/recipient/{id}/view", put(photo::mark_viewed))
        .route("/api/devices", post(device::register).get(device::list))
        .route(
            "/api/devices/{id}",
            put(device::update).delete(device::delete),
        )
        .route("/api/notifications", get(notification::list))
        .route("/api/notifications/read-all", put(notification::mark_all_read))
        .route(
            "/api/notifications/unread-count",
            get(notification::unread_count),
        )
        .route("/api/notifications/{id}/read", put(notification::mark_read))
        .route("/api/notifications/{id}", delete(notification::delete))
        .route("/api/v1/moments", post(moment::create))
        .route("/api/realtime", get(realtime::handler::upgrade))
        .nest_service("/media", ServeDir::new(media_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
}
