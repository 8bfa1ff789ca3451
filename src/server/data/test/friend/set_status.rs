use super::*;

/// Tests accepting a pending request.
///
/// Expected: Ok with the row's status updated to accepted
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let addressee = factory::create_user(db).await?;
    let row = factory::create_friend_request(db, requester.id, addressee.id).await?;

    let repo = FriendRepository::new(db);
    repo.set_status(row.id, FriendStatus::Accepted).await?;

    let updated = repo.find_by_id(row.id).await?.unwrap();
    assert_eq!(updated.status, FriendStatus::Accepted);

    Ok(())
}
