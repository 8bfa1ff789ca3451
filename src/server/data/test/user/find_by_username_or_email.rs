use super::*;

/// Tests matching on username.
///
/// Expected: Ok(Some) when the username is taken
#[tokio::test]
async fn matches_on_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo
        .find_by_username_or_email("alice", "other@example.com")
        .await?;

    assert_eq!(found.map(|user| user.id), Some(existing.id));

    Ok(())
}

/// Tests matching on email.
///
/// Expected: Ok(Some) when the email is taken
#[tokio::test]
async fn matches_on_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo
        .find_by_username_or_email("someone_else", "alice@example.com")
        .await?;

    assert_eq!(found.map(|user| user.id), Some(existing.id));

    Ok(())
}

/// Tests that no collision is reported for unused credentials.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_both_are_free() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo
        .find_by_username_or_email("unused", "unused@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
