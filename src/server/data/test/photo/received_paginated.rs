use super::*;

/// Tests the received listing.
///
/// Verifies that shared photos come back with the sender's summary and the
/// recipient's viewed state.
///
/// Expected: Ok with the shared photo and its sender
#[tokio::test]
async fn returns_photos_shared_with_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_photo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sender, recipient, photo, recipient_row) =
        factory::helpers::create_shared_photo(db).await?;

    let repo = PhotoRepository::new(db);
    let (received, total) = repo.received_paginated(recipient.id, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].recipient_row_id, recipient_row.id);
    assert_eq!(received[0].photo.id, photo.id);
    assert_eq!(received[0].sender.id, sender.id);
    assert!(received[0].viewed_at.is_none());

    Ok(())
}

/// Tests pagination ordering on the received feed.
///
/// Expected: Ok with newest recipient rows first
#[tokio::test]
async fn orders_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_photo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;
    let recipient = factory::create_user(db).await?;

    let old_photo = factory::create_photo(db, sender.id).await?;
    let new_photo = factory::create_photo(db, sender.id).await?;

    factory::photo::PhotoRecipientFactory::new(db, old_photo.id, recipient.id)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    factory::create_photo_recipient(db, new_photo.id, recipient.id).await?;

    let repo = PhotoRepository::new(db);
    let (received, total) = repo.received_paginated(recipient.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(received[0].photo.id, new_photo.id);
    assert_eq!(received[1].photo.id, old_photo.id);

    Ok(())
}

/// Tests that soft-deleted photos vanish from the received feed.
///
/// Expected: Ok with the deleted photo absent and total reduced
#[tokio::test]
async fn hides_deleted_photos() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_photo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;
    let recipient = factory::create_user(db).await?;

    let live = factory::create_photo(db, sender.id).await?;
    let deleted = factory::photo::PhotoFactory::new(db, sender.id)
        .deleted()
        .build()
        .await?;

    factory::create_photo_recipient(db, live.id, recipient.id).await?;
    factory::create_photo_recipient(db, deleted.id, recipient.id).await?;

    let repo = PhotoRepository::new(db);
    let (received, total) = repo.received_paginated(recipient.id, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].photo.id, live.id);

    Ok(())
}

/// Tests that photos addressed to others stay invisible.
///
/// Expected: Ok with empty feed
#[tokio::test]
async fn excludes_photos_for_other_recipients() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_photo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_sender, _recipient, _photo, _row) = factory::helpers::create_shared_photo(db).await?;
    let bystander = factory::create_user(db).await?;

    let repo = PhotoRepository::new(db);
    let (received, total) = repo.received_paginated(bystander.id, 0, 10).await?;

    assert!(received.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
