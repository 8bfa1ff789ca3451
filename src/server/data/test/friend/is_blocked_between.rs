use super::*;

/// Tests block detection regardless of which side blocked.
///
/// Expected: Ok(true) for both query directions
#[tokio::test]
async fn detects_block_in_either_direction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let blocker = factory::create_user(db).await?;
    let blocked = factory::create_user(db).await?;
    factory::friend::FriendFactory::new(db, blocker.id, blocked.id)
        .status("blocked")
        .build()
        .await?;

    let repo = FriendRepository::new(db);

    assert!(repo.is_blocked_between(blocker.id, blocked.id).await?);
    assert!(repo.is_blocked_between(blocked.id, blocker.id).await?);

    Ok(())
}

/// Tests that an accepted friendship is not reported as blocked.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_accepted_friendship() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    factory::create_accepted_friendship(db, a.id, b.id).await?;

    let repo = FriendRepository::new(db);

    assert!(!repo.is_blocked_between(a.id, b.id).await?);

    Ok(())
}
