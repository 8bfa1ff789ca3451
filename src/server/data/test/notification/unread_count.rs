use super::*;

/// Tests the unread badge count.
///
/// Expected: Ok with read notifications excluded from the count
#[tokio::test]
async fn counts_only_unread() -> Result<(), AppError> {
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

    assert_eq!(repo.unread_count(user.id).await?, 2);

    Ok(())
}
