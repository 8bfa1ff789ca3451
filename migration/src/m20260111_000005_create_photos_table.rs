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
                    .table(Photos::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Photos::Id))
                    .col(big_integer(Photos::SenderId))
                    .col(string(Photos::ImageUrl))
                    .col(text_null(Photos::Caption))
                    .col(timestamp_with_time_zone(Photos::CreatedAt))
                    .col(timestamp_with_time_zone_null(Photos::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-photos-sender_id")
                            .from(Photos::Table, Photos::SenderId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-photos-sender_id")
                    .table(Photos::Table)
                    .col(Photos::SenderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Photos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Photos {
    Table,
    Id,
    SenderId,
    ImageUrl,
    Caption,
    CreatedAt,
    DeletedAt,
}
