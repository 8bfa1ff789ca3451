//! Database repository layer for all domain entities.
//!
//! Repository structs own the CRUD queries for one table each. They use
//! SeaORM entity models internally and return domain models, parsing
//! string-typed enum columns at this boundary so nothing above the data layer
//! touches raw stored values.

pub mod device;
pub mod friend;
pub mod notification;
pub mod photo;
pub mod user;
pub mod user_setting;

#[cfg(test)]
mod test;
