use super::*;

/// Tests counterpart resolution on both sides of the row.
///
/// Verifies that the listing shows the other user whether the subject sent
/// or received the original request.
///
/// Expected: Ok with both counterparts listed
#[tokio::test]
async fn resolves_counterpart_on_both_sides() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::create_user(db).await?;
    let sent_to = factory::create_user(db).await?;
    let received_from = factory::create_user(db).await?;

    // Subject requested one friendship and accepted the other
    factory::create_accepted_friendship(db, subject.id, sent_to.id).await?;
    factory::create_accepted_friendship(db, received_from.id, subject.id).await?;

    let repo = FriendRepository::new(db);
    let friends = repo.accepted_for_user(subject.id).await?;

    assert_eq!(friends.len(), 2);

    let ids: Vec<i64> = friends.iter().map(|link| link.user.id).collect();
    assert!(ids.contains(&sent_to.id));
    assert!(ids.contains(&received_from.id));
    assert!(!ids.contains(&subject.id));

    Ok(())
}

/// Tests that pending and rejected rows are not listed as friends.
///
/// Expected: Ok with only accepted friendships
#[tokio::test]
async fn excludes_non_accepted_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::create_user(db).await?;
    let friend = factory::create_user(db).await?;
    let pending = factory::create_user(db).await?;
    let rejected = factory::create_user(db).await?;

    factory::create_accepted_friendship(db, subject.id, friend.id).await?;
    factory::create_friend_request(db, pending.id, subject.id).await?;
    factory::friend::FriendFactory::new(db, subject.id, rejected.id)
        .status("rejected")
        .build()
        .await?;

    let repo = FriendRepository::new(db);
    let friends = repo.accepted_for_user(subject.id).await?;

    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].user.id, friend.id);

    Ok(())
}
