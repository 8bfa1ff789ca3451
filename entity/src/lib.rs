//! SeaORM entity models for the pendant database schema.
//!
//! One module per table. Enum-valued columns (friend status, device platform,
//! notification type, theme) are stored as plain strings; conversion to typed
//! domain values happens at the repository boundary in the server crate.

pub mod device;
pub mod friend;
pub mod notification;
pub mod photo;
pub mod photo_recipient;
pub mod user;
pub mod user_setting;

pub mod prelude {
    pub use super::device::Entity as Device;
    pub use super::friend::Entity as Friend;
    pub use super::notification::Entity as Notification;
    pub use super::photo::Entity as Photo;
    pub use super::photo_recipient::Entity as PhotoRecipient;
    pub use super::user::Entity as User;
    pub use super::user_setting::Entity as UserSetting;
}
