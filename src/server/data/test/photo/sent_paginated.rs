use super::*;

/// Tests pagination over sent photos.
///
/// Verifies newest-first ordering, page sizes and the total count.
///
/// Expected: Ok with correct pages and total
#[tokio::test]
async fn returns_pages_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_photo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;
    let recipient = factory::create_user(db).await?;

    for i in 1..=3i64 {
        let photo = factory::photo::PhotoFactory::new(db, sender.id)
            .image_url(format!("/media/photo-{}.jpg", i))
            .created_at(Utc::now() - Duration::hours(3 - i))
            .build()
            .await?;
        factory::create_photo_recipient(db, photo.id, recipient.id).await?;
    }

    let repo = PhotoRepository::new(db);

    let (page_one, total) = repo.sent_paginated(sender.id, 0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(page_one.len(), 2);
    assert_eq!(page_one[0].photo.image_url, "/media/photo-3.jpg");
    assert_eq!(page_one[1].photo.image_url, "/media/photo-2.jpg");

    let (page_two, total) = repo.sent_paginated(sender.id, 1, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(page_two.len(), 1);
    assert_eq!(page_two[0].photo.image_url, "/media/photo-1.jpg");

    Ok(())
}

/// Tests that soft-deleted photos are excluded from the sent listing.
///
/// Expected: Ok with only the live photo and total 1
#[tokio::test]
async fn excludes_soft_deleted_photos() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_photo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;

    let live = factory::create_photo(db, sender.id).await?;
    factory::photo::PhotoFactory::new(db, sender.id)
        .deleted()
        .build()
        .await?;

    let repo = PhotoRepository::new(db);
    let (photos, total) = repo.sent_paginated(sender.id, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].photo.id, live.id);

    Ok(())
}

/// Tests that other senders' photos are not included.
///
/// Expected: Ok with empty page and total 0
#[tokio::test]
async fn returns_only_own_photos() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_photo_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_photo(db, other.id).await?;

    let repo = PhotoRepository::new(db);
    let (photos, total) = repo.sent_paginated(sender.id, 0, 10).await?;

    assert!(photos.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
