//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They implement the business rules (friendship state transitions,
//! recipient validation, credential checks), coordinate repository calls and
//! decide which notifications get written. Services work with domain models;
//! controllers own the DTO conversion.

pub mod auth;
pub mod device;
pub mod friend;
pub mod mail;
pub mod notification;
pub mod photo;
pub mod push;
pub mod settings;
pub mod token;
pub mod user;
