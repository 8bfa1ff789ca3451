use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let db = Database::connect(&config.database_url).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    Ok(client)
}

/// Ensures the media directory exists before the router starts serving it.
pub async fn setup_media_dir(config: &Config) -> Result<(), AppError> {
    tokio::fs::create_dir_all(&config.media_dir).await?;

    Ok(())
}
