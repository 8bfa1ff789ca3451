pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_users_table;
mod m20260110_000002_create_user_settings_table;
mod m20260110_000003_create_devices_table;
mod m20260110_000004_create_friends_table;
mod m20260111_000005_create_photos_table;
mod m20260111_000006_create_photo_recipients_table;
mod m20260111_000007_create_notifications_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_users_table::Migration),
            Box::new(m20260110_000002_create_user_settings_table::Migration),
            Box::new(m20260110_000003_create_devices_table::Migration),
            Box::new(m20260110_000004_create_friends_table::Migration),
            Box::new(m20260111_000005_create_photos_table::Migration),
            Box::new(m20260111_000006_create_photo_recipients_table::Migration),
            Box::new(m20260111_000007_create_notifications_table::Migration),
        ]
    }
}
