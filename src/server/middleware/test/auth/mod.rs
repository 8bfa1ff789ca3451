use axum::http::{header, HeaderMap, HeaderValue};

use crate::server::{
    config::Config,
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    service::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};


fn test_token_service() -> TokenService {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        app_url: "http://localhost".to_string(),
        jwt_secret: "test-secret".to_string(),
        access_token_ttl_secs: 60,
        refresh_token_ttl_secs: 120,
        media_dir: "./media".to_string(),
        mail_api_url: None,
        mail_from: None,
        push_api_url: None,
        push_api_key: None,
    };

    TokenService::new(&config)
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
