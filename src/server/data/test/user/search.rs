use super::*;

/// Tests substring matching on username.
///
/// Expected: Ok with matching users ordered by username
#[tokio::test]
async fn matches_username_substring() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let searcher = factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .username("alice_b")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("alice_a")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("carol")
        .email("carol@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let results = repo.search("alice", searcher.id, 20).await?;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].username, "alice_a");
    assert_eq!(results[1].username, "alice_b");

    Ok(())
}

/// Tests matching on email as well as username.
///
/// Expected: Ok with the user whose email contains the query
#[tokio::test]
async fn matches_email_substring() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let searcher = factory::create_user(db).await?;
    let target = factory::user::UserFactory::new(db)
        .username("someone")
        .email("dave@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let results = repo.search("dave", searcher.id, 20).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, target.id);

    Ok(())
}

/// Tests that the searching user never appears in their own results.
///
/// Expected: Ok with self excluded
#[tokio::test]
async fn excludes_searching_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let searcher = factory::user::UserFactory::new(db)
        .username("erin")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let results = repo.search("erin", searcher.id, 20).await?;

    assert!(results.is_empty());

    Ok(())
}

/// Tests that deactivated accounts are hidden from search.
///
/// Expected: Ok with inactive users excluded
#[tokio::test]
async fn excludes_deactivated_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let searcher = factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .username("frank")
        .active(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let results = repo.search("frank", searcher.id, 20).await?;

    assert!(results.is_empty());

    Ok(())
}

/// Tests the result limit.
///
/// Expected: Ok with at most `limit` results
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let searcher = factory::create_user(db).await?;
    for i in 0..5 {
        factory::user::UserFactory::new(db)
            .username(format!("grace{}", i))
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let results = repo.search("grace", searcher.id, 3).await?;

    assert_eq!(results.len(), 3);

    Ok(())
}
