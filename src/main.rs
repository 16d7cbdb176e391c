use axum::Extension;
use club_forum::{config::Config, connect_to_db, db::DEFAULT_CLUBS, ensure_schema, seed_clubs};
use envconfig::Envconfig;
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("club_forum=info,tower_http=info")),
        )
        .compact()
        .init();

    let config = Config::init_from_env()?;

    let pool = connect_to_db(&config.db_url, config.pool_size)?;
    ensure_schema(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("failed to create tables: {e:?}"))?;
    if config.seed_clubs {
        seed_clubs(&pool, DEFAULT_CLUBS)
            .await
            .map_err(|e| anyhow::anyhow!("failed to seed clubs: {e:?}"))?;
    }

    let app = club_forum::app(&config.assets_dir).layer(Extension(pool));

    let addr = config.addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}, database at {}", config.db_url);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
