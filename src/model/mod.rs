//! Request and response DTOs shared across the API surface.
//!
//! These types define the JSON wire format. Domain models live in
//! `server::model` and are converted to DTOs at the controller boundary.

pub mod api;
pub mod auth;
pub mod device;
pub mod friend;
pub mod moment;
pub mod notification;
pub mod photo;
pub mod realtime;
pub mod settings;
pub mod user;
