use super::*;

/// Tests a partial settings update.
///
/// Verifies that only the provided fields change.
///
/// Expected: Ok with theme updated and the rest untouched
#[tokio::test]
async fn applies_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_settings(db, user.id).await?;

    let repo = UserSettingRepository::new(db);
    let settings = repo
        .update(
            user.id,
            UpdateSettingsParams {
                theme: Some(Theme::Dark),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(settings.theme, Theme::Dark);
    assert!(settings.notification_photo);
    assert_eq!(settings.language, "en");

    Ok(())
}

/// Tests updating before any settings row exists.
///
/// The row is created with defaults first, then the update applies.
///
/// Expected: Ok with the update applied on top of defaults
#[tokio::test]
async fn creates_row_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserSettingRepository::new(db);
    let settings = repo
        .update(
            user.id,
            UpdateSettingsParams {
                notification_friend: Some(false),
                language: Some("fr".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(!settings.notification_friend);
    assert_eq!(settings.language, "fr");
    assert_eq!(settings.theme, Theme::System);

    Ok(())
}
