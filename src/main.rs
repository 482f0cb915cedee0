use std::sync::Arc;

use uplift_api::config::Config;
use uplift_api::store::{mem::MemStore, pg, Store};
use uplift_api::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uplift_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env());

    let store: Arc<dyn Store> = match &config.database_url {
        Some(url) => {
            let pool = pg::create_pool(url).await?;

            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations applied");

            Arc::new(pg::PgStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using ephemeral in-memory store");
            Arc::new(MemStore::new())
        }
    };

    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = router(state);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
