use super::*;

/// Tests marking an account as verified.
///
/// Verifies that the flag is set and the verification token is consumed so
/// the link cannot be used twice.
///
/// Expected: Ok with is_verified true and token cleared
#[tokio::test]
async fn sets_flag_and_consumes_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .verification_token("verify-me")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_verification_token("verify-me").await?;
    assert_eq!(found.map(|found| found.id), Some(user.id));

    repo.mark_verified(user.id).await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert!(updated.is_verified);

    let by_token = repo.find_by_verification_token("verify-me").await?;
    assert!(by_token.is_none());

    Ok(())
}
