use super::*;

/// Tests replacing the push token of a device.
///
/// Expected: Ok with the new token stored
#[tokio::test]
async fn replaces_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Device)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let device = factory::create_device(db, user.id).await?;

    let repo = DeviceRepository::new(db);
    let updated = repo.update_token(device.id, "rotated-token").await?;

    assert_eq!(updated.id, device.id);
    assert_eq!(updated.device_token, "rotated-token");

    Ok(())
}

/// Tests updating a device that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_device() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Device)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeviceRepository::new(db);
    let result = repo.update_token(9999, "token").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
