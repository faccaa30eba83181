// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{routing::get, Router};

use crate::infrastructure::repositories::{
    CareersRepositoryImpl, EducationRepositoryImpl, EventsRepositoryImpl, NewsRepositoryImpl,
    SchoolsRepositoryImpl, SectionsRepositoryImpl,
};
use crate::infrastructure::search::SearchAggregator;
use crate::presentation::handlers::{content_handler, search_handler};

/// Build the application routes
///
/// The caller layers the repository and aggregator extensions on top.
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let api_routes = Router::new()
        .route("/api/search", get(search_handler::search::<SearchAggregator>))
        .route(
            "/api/news",
            get(content_handler::list_news::<NewsRepositoryImpl>),
        )
        .route(
            "/api/events",
            get(content_handler::list_events::<EventsRepositoryImpl>),
        )
        .route(
            "/api/careers",
            get(content_handler::list_careers::<CareersRepositoryImpl>),
        )
        .route(
            "/api/education-paths",
            get(content_handler::list_education_paths::<EducationRepositoryImpl>),
        )
        .route(
            "/api/schools",
            get(content_handler::list_schools::<SchoolsRepositoryImpl>),
        )
        .route("/api/pages", get(content_handler::list_pages))
        .route(
            "/api/sections/{kind}",
            get(content_handler::list_sections::<SectionsRepositoryImpl>),
        );

    Router::new().merge(public_routes).merge(api_routes)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
