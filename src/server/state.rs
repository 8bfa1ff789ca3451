use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    realtime::registry::PresenceRegistry,
    service::{mail::MailService, push::PushService, token::TokenService},
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub http_client: reqwest::Client,
    pub tokens: TokenService,
    pub presence: PresenceRegistry,
    pub mailer: MailService,
    pub push: PushService,
    /// Public base URL, used to build absolute media links.
    pub app_url: String,
    /// Directory uploaded photos are written to and served from.
    pub media_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &Config, db: DatabaseConnection, http_client: reqwest::Client) -> Self {
        Self {
            db,
            tokens: TokenService::new(config),
            presence: PresenceRegistry::new(),
            mailer: MailService::new(config, http_client.clone()),
            push: PushService::new(config, http_client.clone()),
            app_url: config.app_url.clone(),
            media_dir: PathBuf::from(&config.media_dir),
            http_client,
        }
    }
}
