//! Factory methods for creating test data.
//!
//! Each table has a factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Foreign
//! keys are always passed explicitly so tests stay clear about which rows
//! belong together.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let sender = factory::user::create_user(&db).await?;
//!     let recipient = factory::user::create_user(&db).await?;
//!     factory::friend::create_accepted_friendship(&db, sender.id, recipient.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("alice")
//!     .verified(true)
//!     .build()
//!     .await?;
//! ```

pub mod device;
pub mod friend;
pub mod helpers;
pub mod notification;
pub mod photo;
pub mod user;
pub mod user_setting;

// Re-export commonly used factory functions for concise usage
pub use device::create_device;
pub use friend::{create_accepted_friendship, create_friend_request};
pub use notification::create_notification;
pub use photo::{create_photo, create_photo_recipient};
pub use user::create_user;
pub use user_setting::create_settings;
