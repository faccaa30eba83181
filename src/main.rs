// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use unisearch::config::settings::Settings;
use unisearch::infrastructure::repositories::ContentRepositories;
use unisearch::infrastructure::search::SearchAggregator;
use unisearch::presentation::routes;
use unisearch::utils::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Arc::new(Settings::new()?);

    // 2. Initialize logging and metrics
    telemetry::init_telemetry(&settings.logging.filter);
    info!("Starting unisearch...");
    info!("Configuration loaded");
    unisearch::infrastructure::metrics::init_metrics(&settings.metrics);

    // 3. Build the content collections
    let repositories = ContentRepositories::from_settings(&settings.content);
    info!("Content collections ready");

    // 4. Build the search aggregator over the full provider set
    let aggregator = Arc::new(SearchAggregator::new(
        repositories.catalog(),
        settings.search.max_results,
    ));

    // 5. Start HTTP server
    let app = routes::routes()
        .layer(Extension(aggregator))
        .layer(Extension(repositories.news.clone()))
        .layer(Extension(repositories.events.clone()))
        .layer(Extension(repositories.careers.clone()))
        .layer(Extension(repositories.education.clone()))
        .layer(Extension(repositories.schools.clone()))
        .layer(Extension(repositories.sections.clone()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
