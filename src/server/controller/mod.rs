//! HTTP request handlers.
//!
//! Controllers authenticate the request through `AuthGuard`, convert DTOs to
//! service inputs, call the service layer and convert domain models back to
//! DTOs. Side channels that must not fail the request (realtime events, push
//! delivery) happen here after the service call succeeds.

use serde::Deserialize;

pub mod auth;
pub mod device;
pub mod friend;
pub mod moment;
pub mod notification;
pub mod photo;
pub mod user;

/// Query string for paginated listings. Pages are 1-indexed; services clamp
/// the page size.
#[derive(Deserialize)]
pub struct PaginationQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}
