use super::*;

/// Tests lazy creation with defaults.
///
/// Expected: Ok with all notifications on, system theme, English, no
/// auto-save
#[tokio::test]
async fn creates_defaults_on_first_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserSettingRepository::new(db);
    let settings = repo.get_or_create(user.id).await?;

    assert!(settings.notification_photo);
    assert!(settings.notification_friend);
    assert!(settings.notification_system);
    assert_eq!(settings.theme, Theme::System);
    assert_eq!(settings.language, "en");
    assert!(!settings.auto_save_photos);

    Ok(())
}

/// Tests that an existing row is returned as-is.
///
/// Expected: Ok with the customized values, not defaults
#[tokio::test]
async fn returns_existing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::user_setting::UserSettingFactory::new(db, user.id)
        .theme("dark")
        .notification_photo(false)
        .build()
        .await?;

    let repo = UserSettingRepository::new(db);
    let settings = repo.get_or_create(user.id).await?;

    assert_eq!(settings.theme, Theme::Dark);
    assert!(!settings.notification_photo);

    Ok(())
}
