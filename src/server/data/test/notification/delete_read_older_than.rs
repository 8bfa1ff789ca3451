use super::*;

/// Tests the retention sweep used by the nightly cleanup job.
///
/// Old read notifications are deleted; unread notifications and recent read
/// ones survive regardless of age.
///
/// Expected: Ok(1) with only the old read notification removed
#[tokio::test]
async fn removes_only_old_read_notifications() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let cutoff = Utc::now() - Duration::days(30);

    let old_read = factory::notification::NotificationFactory::new(db, user.id)
        .read(true)
        .created_at(Utc::now() - Duration::days(45))
        .build()
        .await?;
    let old_unread = factory::notification::NotificationFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::days(45))
        .build()
        .await?;
    let recent_read = factory::notification::NotificationFactory::new(db, user.id)
        .read(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let deleted = repo.delete_read_older_than(cutoff).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(old_read.id).await?.is_none());
    assert!(repo.find_by_id(old_unread.id).await?.is_some());
    assert!(repo.find_by_id(recent_read.id).await?.is_some());

    Ok(())
}

/// Tests a sweep with nothing eligible.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_nothing_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let deleted = repo
        .delete_read_older_than(Utc::now() - Duration::days(30))
        .await?;

    assert_eq!(deleted, 0);

    Ok(())
}
