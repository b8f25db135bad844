use sea_orm::Database;
use tracing::info;

use shopfront_commerce::config::CommerceConfig;
use shopfront_commerce::router::build_router;
use shopfront_commerce::state::AppState;
use shopfront_commerce_migration::{Migrator, MigratorTrait};
use shopfront_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    let config = CommerceConfig::from_env();
    init_tracing(config.log_format);

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.auto_migrate {
        Migrator::up(&db, None)
            .await
            .expect("failed to apply migrations");
        info!("migrations applied");
    }

    let router = build_router(AppState { db });
    let http_addr = format!("0.0.0.0:{}", config.commerce_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("commerce service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
