use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260110_000001_create_users_table::Users, m20260111_000005_create_photos_table::Photos,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhotoRecipients::Table)
                    .if_not_exists()
                    .col(big_pk_auto(PhotoRecipients::Id))
                    .col(big_integer(PhotoRecipients::PhotoId))
                    .col(big_integer(PhotoRecipients::RecipientId))
                    .col(timestamp_with_time_zone_null(PhotoRecipients::ViewedAt))
                    .col(timestamp_with_time_zone(PhotoRecipients::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-photo_recipients-photo_id")
                            .from(PhotoRecipients::Table, PhotoRecipients::PhotoId)
                            .to(Photos::Table, Photos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-photo_recipients-recipient_id")
                            .from(PhotoRecipients::Table, PhotoRecipients::RecipientId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-photo_recipients-photo_id-recipient_id")
                    .table(PhotoRecipients::Table)
                    .col(PhotoRecipients::PhotoId)
                    .col(PhotoRecipients::RecipientId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PhotoRecipients::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PhotoRecipients {
    Table,
    Id,
    PhotoId,
    RecipientId,
    ViewedAt,
    CreatedAt,
}
