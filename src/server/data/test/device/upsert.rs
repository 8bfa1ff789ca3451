use super::*;

/// Tests registering a new device.
///
/// Expected: Ok with the device stored for the user
#[tokio::test]
async fn creates_new_device() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Device)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = DeviceRepository::new(db);
    let device = repo
        .upsert(RegisterDeviceParams {
            user_id: user.id,
            device_token: "apns-token-1".to_string(),
            platform: Platform::Ios,
        })
        .await?;

    assert_eq!(device.user_id, user.id);
    assert_eq!(device.device_token, "apns-token-1");
    assert_eq!(device.platform, Platform::Ios);

    Ok(())
}

/// Tests re-registering a token under another account.
///
/// A phone changing hands re-registers the same token; the row must move to
/// the new user rather than duplicate.
///
/// Expected: Ok with one row, now owned by the second user
#[tokio::test]
async fn reassigns_existing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Device)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let previous_owner = factory::create_user(db).await?;
    let new_owner = factory::create_user(db).await?;

    let repo = DeviceRepository::new(db);
    repo.upsert(RegisterDeviceParams {
        user_id: previous_owner.id,
        device_token: "shared-token".to_string(),
        platform: Platform::Ios,
    })
    .await?;

    let device = repo
        .upsert(RegisterDeviceParams {
            user_id: new_owner.id,
            device_token: "shared-token".to_string(),
            platform: Platform::Android,
        })
        .await?;

    assert_eq!(device.user_id, new_owner.id);
    assert_eq!(device.platform, Platform::Android);

    assert!(repo.for_user(previous_owner.id).await?.is_empty());
    assert_eq!(repo.for_user(new_owner.id).await?.len(), 1);

    Ok(())
}
