use super::*;

/// Tests that the listing covers only the user's own devices.
///
/// Expected: Ok with the other user's device absent
#[tokio::test]
async fn returns_only_own_devices() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Device)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let own = factory::create_device(db, user.id).await?;
    factory::create_device(db, other.id).await?;

    let repo = DeviceRepository::new(db);
    let devices = repo.for_user(user.id).await?;

    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].id, own.id);

    Ok(())
}

/// Tests ordering by recent activity.
///
/// Expected: Ok with the most recently active device first
#[tokio::test]
async fn orders_by_last_active() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Device)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let first = factory::create_device(db, user.id).await?;
    let second = factory::create_device(db, user.id).await?;

    let repo = DeviceRepository::new(db);
    repo.touch_last_active(first.id).await?;

    let devices = repo.for_user(user.id).await?;

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].id, first.id);
    assert_eq!(devices[1].id, second.id);

    Ok(())
}
