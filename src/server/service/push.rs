use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::server::{
    config::Config, data::device::DeviceRepository, error::AppError,
};

/// Delivers push notifications to a user's registered devices through an HTTP
/// push gateway. Delivery is best-effort: failures are logged and never
/// surfaced to the request that triggered them.
#[derive(Clone)]
pub struct PushService {
    http_client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
}

impl PushService {
    pub fn new(config: &Config, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            api_url: config.push_api_url.clone(),
            api_key: config.push_api_key.clone(),
        }
    }

    /// Sends `title`/`body` to every device the user has registered.
    pub async fn notify_user(
        &self,
        db: &DatabaseConnection,
        user_id: i64,
        title: &str,
        body: &str,
    ) {
        let (Some(api_url), Some(api_key)) = (&self.api_url, &self.api_key) else {
            tracing::debug!("Push gateway not configured, skipping push to user {}", user_id);
            return;
        };

        let devices = match DeviceRepository::new(db).for_user(user_id).await {
            Ok(devices) => devices,
            Err(err) => {
                tracing::error!("Failed to load devices for push to user {}: {}", user_id, err);
                return;
            }
        };

        for device in devices {
            if let Err(err) = self
                .deliver(api_url, api_key, &device.device_token, title, body)
                .await
            {
                tracing::warn!(
                    "Push delivery to device {} of user {} failed: {}",
                    device.id,
                    user_id,
                    err
                );
            }
        }
    }

    async fn deliver(
        &self,
        api_url: &str,
        api_key: &str,
        device_token: &str,
        title: &str,
        body: &str,
    ) -> Result<(), AppError> {
        self.http_client
            .post(api_url)
            .bearer_auth(api_key)
            .json(&json!({
                "token": device_token,
                "title": title,
                "body": body,
            }))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
