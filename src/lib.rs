use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod anon;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod schema;
pub mod store;
pub mod views;

#[cfg(test)]
mod test_util;

pub use db::{connect_to_db, ensure_schema, seed_clubs, DbPool};

/// Builds the forum router. The caller is expected to add the pool with
/// `.layer(Extension(pool))`.
pub fn app(assets_dir: &str) -> Router {
    Router::new()
        .merge(routes::app())
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
}
