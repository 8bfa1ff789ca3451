use super::*;

/// Tests removing a friendship row.
///
/// Expected: Ok with no row between the pair afterwards
#[tokio::test]
async fn removes_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_friend_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let row = factory::create_accepted_friendship(db, a.id, b.id).await?;

    let repo = FriendRepository::new(db);
    repo.delete(row.id).await?;

    let found = repo.find_between(a.id, b.id).await?;
    assert!(found.is_none());

    Ok(())
}
