use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use activities::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use activities::shell::config::AppConfig;
use activities::shell::http::router;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let store = Arc::new(InMemoryActivityStore::seeded());
    let state = AppState::new(store, config.capacity);
    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        addr = %config.listen_addr,
        capacity = ?config.capacity,
        "activities API listening; GraphQL endpoint at /gql"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
