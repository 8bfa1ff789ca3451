use super::*;

/// Tests replacing the password hash.
///
/// Verifies that the stored hash changes and any outstanding reset token is
/// cleared so it cannot be replayed.
///
/// Expected: Ok with new hash stored and reset token invalidated
#[tokio::test]
async fn replaces_hash_and_clears_reset_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_reset_token(user.id, "reset-token", Utc::now() + Duration::hours(1))
        .await?;

    repo.set_password(user.id, "new-hash").await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(updated.password_hash, "new-hash");

    let by_token = repo.find_by_valid_reset_token("reset-token").await?;
    assert!(by_token.is_none());

    Ok(())
}
