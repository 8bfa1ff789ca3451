use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserSettings::Table)
                    .if_not_exists()
                    .col(big_pk_auto(UserSettings::Id))
                    .col(big_integer_uniq(UserSettings::UserId))
                    .col(boolean(UserSettings::NotificationPhoto).default(true))
                    .col(boolean(UserSettings::NotificationFriend).default(true))
                    .col(boolean(UserSettings::NotificationSystem).default(true))
                    .col(string(UserSettings::Theme).default("system"))
                    .col(string(UserSettings::Language).default("en"))
                    .col(boolean(UserSettings::AutoSavePhotos).default(false))
                    .col(timestamp_with_time_zone(UserSettings::CreatedAt))
                    .col(timestamp_with_time_zone(UserSettings::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_settings-user_id")
                            .from(UserSettings::Table, UserSettings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserSettings {
    Table,
    Id,
    UserId,
    NotificationPhoto,
    NotificationFriend,
    NotificationSystem,
    Theme,
    Language,
    AutoSavePhotos,
    CreatedAt,
    UpdatedAt,
}
