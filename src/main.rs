mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::notification_cleanup, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::setup_media_dir(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    tracing::info!("Starting server");

    // Start notification cleanup scheduler
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = notification_cleanup::start_scheduler(scheduler_db).await {
            tracing::error!("Notification cleanup scheduler error: {}", e);
        }
    });

    let state = AppState::new(&config, db, http_client);
    let app = router::router(&state.media_dir).with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
