use super::*;

/// Tests listing incoming requests.
///
/// Verifies that only requests addressed to the user appear, with the
/// requester's summary attached.
///
/// Expected: Ok with the incoming request only
#[tokio::test]
async fn lists_requests_addressed_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::create_user(db).await?;
    let requester = factory::create_user(db).await?;
    let outgoing_target = factory::create_user(db).await?;

    factory::create_friend_request(db, requester.id, subject.id).await?;
    // Outgoing request must not show up in the incoming list
    factory::create_friend_request(db, subject.id, outgoing_target.id).await?;

    let repo = FriendRepository::new(db);
    let requests = repo.pending_for_user(subject.id).await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].user.id, requester.id);

    Ok(())
}

/// Tests that accepted rows no longer appear as pending requests.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn excludes_accepted_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::create_user(db).await?;
    let friend = factory::create_user(db).await?;
    factory::create_accepted_friendship(db, friend.id, subject.id).await?;

    let repo = FriendRepository::new(db);
    let requests = repo.pending_for_user(subject.id).await?;

    assert!(requests.is_empty());

    Ok(())
}
