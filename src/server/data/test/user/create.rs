use super::*;

/// Tests creating a new account.
///
/// Verifies that the repository inserts the account as active and unverified
/// with the provided verification token pending.
///
/// Expected: Ok with active, unverified user
#[tokio::test]
async fn creates_active_unverified_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
            password_hash: "hashed".to_string(),
            verification_token: "verify-token".to_string(),
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(user.is_active);
    assert!(!user.is_verified);
    assert!(user.last_login.is_none());

    Ok(())
}

/// Tests that the optional phone number is stored when provided.
///
/// Expected: Ok with phone persisted
#[tokio::test]
async fn stores_optional_phone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            phone: Some("+15551234567".to_string()),
            password_hash: "hashed".to_string(),
            verification_token: "verify-token".to_string(),
        })
        .await?;

    let found = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(found.phone.as_deref(), Some("+15551234567"));

    Ok(())
}

/// Tests that the unique index on phone rejects a second account reusing
/// the number.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_phone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        username: "carol".to_string(),
        email: "carol@example.com".to_string(),
        phone: Some("+15550001111".to_string()),
        password_hash: "hashed".to_string(),
        verification_token: "verify-token".to_string(),
    })
    .await?;

    let duplicate = repo
        .create(CreateUserParams {
            username: "dave".to_string(),
            email: "dave@example.com".to_string(),
            phone: Some("+15550001111".to_string()),
            password_hash: "hashed".to_string(),
            verification_token: "verify-token".to_string(),
        })
        .await;

    assert!(duplicate.is_err());

    Ok(())
}
