use super::*;

/// Tests finding the row in request direction.
///
/// Expected: Ok(Some) when queried as (requester, addressee)
#[tokio::test]
async fn finds_row_in_request_direction() -> Result<(), AppError> {
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
    let found = repo.find_between(requester.id, addressee.id).await?;

    assert_eq!(found.map(|friendship| friendship.id), Some(row.id));

    Ok(())
}

/// Tests finding the row in reverse direction.
///
/// The pair is matched regardless of which side sent the request.
///
/// Expected: Ok(Some) when queried as (addressee, requester)
#[tokio::test]
async fn finds_row_in_reverse_direction() -> Result<(), AppError> {
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
    let found = repo.find_between(addressee.id, requester.id).await?;

    assert_eq!(found.map(|friendship| friendship.id), Some(row.id));

    Ok(())
}

/// Tests that unrelated users have no row between them.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_strangers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let c = factory::create_user(db).await?;
    factory::create_friend_request(db, a.id, b.id).await?;

    let repo = FriendRepository::new(db);
    let found = repo.find_between(a.id, c.id).await?;

    assert!(found.is_none());

    Ok(())
}
