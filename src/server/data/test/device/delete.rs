use super::*;

/// Tests unregistering a device.
///
/// Expected: Ok with the row gone
#[tokio::test]
async fn removes_device() -> Result<(), AppError> {
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
    repo.delete(device.id).await?;

    assert!(repo.find_by_id(device.id).await?.is_none());

    Ok(())
}
