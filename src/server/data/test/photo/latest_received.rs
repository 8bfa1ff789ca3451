use super::*;

/// Tests retrieving the most recent shared photo.
///
/// Expected: Ok(Some) with the newest recipient row
#[tokio::test]
async fn returns_most_recent_photo() -> Result<(), AppError> {
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
    let latest = repo.latest_received(recipient.id).await?;

    assert_eq!(latest.map(|received| received.photo.id), Some(new_photo.id));

    Ok(())
}

/// Tests an empty feed.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_nothing_received() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_photo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PhotoRepository::new(db);
    let latest = repo.latest_received(user.id).await?;

    assert!(latest.is_none());

    Ok(())
}

/// Tests that a soft-deleted photo is never the latest.
///
/// Expected: Ok(None) when the only shared photo is deleted
#[tokio::test]
async fn skips_deleted_photos() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_photo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;
    let recipient = factory::create_user(db).await?;

    let deleted = factory::photo::PhotoFactory::new(db, sender.id)
        .deleted()
        .build()
        .await?;
    factory::create_photo_recipient(db, deleted.id, recipient.id).await?;

    let repo = PhotoRepository::new(db);
    let latest = repo.latest_received(recipient.id).await?;

    assert!(latest.is_none());

    Ok(())
}
