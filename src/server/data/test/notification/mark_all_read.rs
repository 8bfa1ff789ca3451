use super::*;

/// Tests marking all unread notifications as read.
///
/// Expected: Ok(2) with no unread notifications left
#[tokio::test]
async fn returns_number_of_rows_updated() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .read(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_all_read(user.id).await?;

    assert_eq!(updated, 2);
    assert_eq!(repo.unread_count(user.id).await?, 0);

    Ok(())
}

/// Tests that a second pass has nothing left to update.
///
/// Expected: Ok(0)
#[tokio::test]
async fn second_pass_updates_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    repo.mark_all_read(user.id).await?;

    let updated = repo.mark_all_read(user.id).await?;
    assert_eq!(updated, 0);

    Ok(())
}

/// Tests that other users' notifications are untouched.
///
/// Expected: Ok with the other user's unread count unchanged
#[tokio::test]
async fn leaves_other_users_unread() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    repo.mark_all_read(user.id).await?;

    assert_eq!(repo.unread_count(other.id).await?, 1);

    Ok(())
}
