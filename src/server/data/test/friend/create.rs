use super::*;

/// Tests creating a pending friend request.
///
/// Verifies the row direction: the requester lands in `user_id` and the
/// addressee in `friend_id`.
///
/// Expected: Ok with pending status and correct direction
#[tokio::test]
async fn creates_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let addressee = factory::create_user(db).await?;

    let repo = FriendRepository::new(db);
    let friendship = repo
        .create(requester.id, addressee.id, FriendStatus::Pending)
        .await?;

    assert_eq!(friendship.user_id, requester.id);
    assert_eq!(friendship.friend_id, addressee.id);
    assert_eq!(friendship.status, FriendStatus::Pending);

    Ok(())
}
