use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{data::notification::NotificationRepository, error::AppError};

/// Read notifications older than this are deleted by the nightly job.
const RETENTION_DAYS: i64 = 30;

/// Starts the notification cleanup scheduler.
///
/// Runs at 03:00 UTC every day and deletes read notifications older than the
/// retention window. Unread notifications are kept regardless of age.
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 0 3 * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = cleanup_notifications(&db).await {
                tracing::error!("Error cleaning up notifications: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Notification cleanup scheduler started");

    Ok(())
}

async fn cleanup_notifications(db: &DatabaseConnection) -> Result<(), AppError> {
    let cutoff = Utc::now() - Duration::days(RETENTION_DAYS);

    let deleted = NotificationRepository::new(db)
        .delete_read_older_than(cutoff)
        .await?;

    if deleted > 0 {
        tracing::info!("Deleted {} read notifications older than {} days", deleted, RETENTION_DAYS);
    }

    Ok(())
}
