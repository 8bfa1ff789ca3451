use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Users::Id))
                    .col(string_uniq(Users::Username))
                    .col(string_uniq(Users::Email))
                    .col(ColumnDef::new(Users::Phone).string().null().unique_key())
                    .col(string(Users::PasswordHash))
                    .col(string_null(Users::ProfileImage))
                    .col(timestamp_with_time_zone(Users::CreatedAt))
                    .col(timestamp_with_time_zone(Users::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Users::LastLogin))
                    .col(boolean(Users::IsActive).default(true))
                    .col(string_null(Users::VerificationToken))
                    .col(boolean(Users::IsVerified).default(false))
                    .col(string_null(Users::ResetToken))
                    .col(timestamp_with_time_zone_null(Users::ResetTokenExpires))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Username,
    Email,
    Phone,
    PasswordHash,
    ProfileImage,
    CreatedAt,
    UpdatedAt,
    LastLogin,
    IsActive,
    VerificationToken,
    IsVerified,
    ResetToken,
    ResetTokenExpires,
}
