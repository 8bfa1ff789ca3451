use serde_json::json;

use crate::server::{config::Config, error::AppError};

/// Sends transactional mail through an HTTP relay. When no relay is
/// configured the service logs and drops the message so local development
/// works without credentials.
#[derive(Clone)]
pub struct MailService {
    http_client: reqwest::Client,
    api_url: Option<String>,
    from: Option<String>,
    app_url: String,
}

impl MailService {
    pub fn new(config: &Config, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            api_url: config.mail_api_url.clone(),
            from: config.mail_from.clone(),
            app_url: config.app_url.clone(),
        }
    }

    pub async fn send_verification_email(
        &self,
        to: &str,
        username: &str,
        token: &str,
    ) -> Result<(), AppError> {
        let link = format!("{}/api/auth/verify?token={}", self.app_url, token);

        self.send(
            to,
            "Verify your email address",
            &format!(
                "Hi {},\n\nWelcome! Confirm your email address by opening the link below:\n\n{}\n",
                username, link
            ),
        )
        .await
    }

    pub async fn send_password_reset_email(
        &self,
        to: &str,
        username: &str,
        token: &str,
    ) -> Result<(), AppError> {
        let link = format!("{}/reset-password?token={}", self.app_url, token);

        self.send(
            to,
            "Reset your password",
            &format!(
                "Hi {},\n\nA password reset was requested for your account. The link below is \
                 valid for one hour:\n\n{}\n\nIf you did not request this you can ignore this \
                 email.\n",
                username, link
            ),
        )
        .await
    }

    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), AppError> {
        let (Some(api_url), Some(from)) = (&self.api_url, &self.from) else {
            tracing::debug!("Mail relay not configured, skipping email to {}", to);
            return Ok(());
        };

        let response = self
            .http_client
            .post(api_url)
            .json(&json!({
                "from": from,
                "to": to,
                "subject": subject,
                "text": body,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::error!(
                "Mail relay returned {} for email to {}",
                response.status(),
                to
            );
        }

        Ok(())
    }
}
