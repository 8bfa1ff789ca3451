//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique identifiers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique usernames,
/// emails and device tokens across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates two users in an accepted friendship plus a photo sent from the
/// first to the second, with its recipient row.
///
/// # Returns
/// - `Ok((sender, recipient, photo, recipient_row))` - All created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_shared_photo(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::photo::Model,
        entity::photo_recipient::Model,
    ),
    DbErr,
> {
    let sender = crate::factory::user::create_user(db).await?;
    let recipient = crate::factory::user::create_user(db).await?;
    crate::factory::friend::create_accepted_friendship(db, sender.id, recipient.id).await?;
    let photo = crate::factory::photo::create_photo(db, sender.id).await?;
    let recipient_row =
        crate::factory::photo::create_photo_recipient(db, photo.id, recipient.id).await?;

    Ok((sender, recipient, photo, recipient_row))
}
