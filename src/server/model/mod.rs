//! Domain models used by the service and data layers.
//!
//! Models are built from database entities with `from_entity` and converted
//! into API DTOs with `into_dto`. String-typed enum columns are parsed here
//! so everything above the data layer works with real enum types.

pub mod device;
pub mod friend;
pub mod notification;
pub mod photo;
pub mod settings;
pub mod user;
