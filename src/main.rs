// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use migration::{Migrator, MigratorTrait};
use navhub::config::settings::Settings;
use navhub::domain::services::scrape_service::ScrapeService;
use navhub::engines::reqwest_engine::ReqwestEngine;
use navhub::infrastructure::database::connection;
use navhub::infrastructure::metrics::init_metrics;
use navhub::infrastructure::repositories::category_repo_impl::CategoryRepoImpl;
use navhub::infrastructure::repositories::website_repo_impl::WebsiteRepoImpl;
use navhub::presentation::routes;
use navhub::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting navhub...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    init_metrics(&settings.metrics);

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize components
    let fetcher = Arc::new(ReqwestEngine::new(&settings.scraper)?);
    let scrape_service = Arc::new(ScrapeService::new(fetcher, &settings.scraper));
    let categories = Arc::new(CategoryRepoImpl::new(db.clone()));
    let websites = Arc::new(
        WebsiteRepoImpl::new(db.clone())
            .with_placeholder_icon(settings.scraper.placeholder_icon.clone()),
    );

    // 5. Start HTTP server
    let app = routes::app(categories, websites, scrape_service);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down, closing database connections");
    db.as_ref().clone().close().await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
