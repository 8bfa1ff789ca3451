use super::*;

/// Tests account deactivation.
///
/// Expected: Ok with is_active false afterwards
#[tokio::test]
async fn clears_active_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.deactivate(user.id).await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert!(!updated.is_active);

    Ok(())
}
