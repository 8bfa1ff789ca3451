use super::*;

/// Tests pagination over the user's notifications.
///
/// Expected: Ok with newest first and correct total
#[tokio::test]
async fn returns_pages_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    for i in 1..=3i64 {
        factory::notification::NotificationFactory::new(db, user.id)
            .content(format!("notification {}", i))
            .created_at(Utc::now() - Duration::hours(3 - i))
            .build()
            .await?;
    }

    let repo = NotificationRepository::new(db);

    let (page_one, total) = repo.for_user_paginated(user.id, 0, 2, false).await?;
    assert_eq!(total, 3);
    assert_eq!(page_one.len(), 2);
    assert_eq!(page_one[0].content, "notification 3");
    assert_eq!(page_one[1].content, "notification 2");

    let (page_two, _) = repo.for_user_paginated(user.id, 1, 2, false).await?;
    assert_eq!(page_two.len(), 1);
    assert_eq!(page_two[0].content, "notification 1");

    Ok(())
}

/// Tests the unread-only filter.
///
/// Expected: Ok with read notifications excluded and total matching
#[tokio::test]
async fn filters_unread_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let unread = factory::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .read(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let (notifications, total) = repo.for_user_paginated(user.id, 0, 10, true).await?;

    assert_eq!(total, 1);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].id, unread.id);

    Ok(())
}

/// Tests isolation between users.
///
/// Expected: Ok with only the subject's notifications
#[tokio::test]
async fn excludes_other_users_notifications() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let (notifications, total) = repo.for_user_paginated(user.id, 0, 10, false).await?;

    assert!(notifications.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
