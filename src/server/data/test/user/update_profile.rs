use super::*;

/// Tests partial profile updates.
///
/// Verifies that only the provided fields change and everything else keeps
/// its current value.
///
/// Expected: Ok with username updated and email untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("old_name")
        .email("keep@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParams {
                username: Some("new_name".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.username, "new_name");
    assert_eq!(updated.email, "keep@example.com");
    assert!(updated.phone.is_none());

    Ok(())
}

/// Tests setting the profile image.
///
/// Expected: Ok with profile image stored
#[tokio::test]
async fn sets_profile_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_profile(
            user.id,
            UpdateProfileParams {
                profile_image: Some("/media/avatar.jpg".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.profile_image.as_deref(), Some("/media/avatar.jpg"));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update_profile(9999, UpdateProfileParams::default()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
