// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Extension, Router};
use axum_test::TestServer;

use unisearch::domain::models::news::NewsArticle;
use unisearch::domain::repositories::news_repository::NewsRepository;
use unisearch::domain::repositories::RepositoryError;
use unisearch::infrastructure::repositories::ContentRepositories;
use unisearch::infrastructure::search::SearchAggregator;
use unisearch::presentation::routes;

/// A news collection that always fails, for exercising the aggregate
/// failure path end to end.
pub struct FailingNewsRepository;

#[async_trait]
impl NewsRepository for FailingNewsRepository {
    async fn find_all(&self) -> Result<Vec<NewsArticle>, RepositoryError> {
        Err(RepositoryError::Unavailable(
            "news store offline".to_string(),
        ))
    }
}

fn app_with(repositories: ContentRepositories, aggregator: Arc<SearchAggregator>) -> Router {
    routes::routes()
        .layer(Extension(aggregator))
        .layer(Extension(repositories.news.clone()))
        .layer(Extension(repositories.events.clone()))
        .layer(Extension(repositories.careers.clone()))
        .layer(Extension(repositories.education.clone()))
        .layer(Extension(repositories.schools.clone()))
        .layer(Extension(repositories.sections.clone()))
}

/// The full application over the built-in fixtures.
pub fn build_app() -> Router {
    let repositories = ContentRepositories::seeded();
    let aggregator = Arc::new(SearchAggregator::new(repositories.catalog(), 50));
    app_with(repositories, aggregator)
}

/// Same, but with the news provider replaced by a failing one inside
/// the aggregator's catalog.
pub fn build_app_with_failing_search() -> Router {
    let repositories = ContentRepositories::seeded();
    let mut catalog = repositories.catalog();
    catalog.news = Arc::new(FailingNewsRepository);
    let aggregator = Arc::new(SearchAggregator::new(catalog, 50));
    app_with(repositories, aggregator)
}

pub fn create_test_app() -> TestServer {
    TestServer::new(build_app()).expect("test server")
}

pub fn create_test_app_with_failing_search() -> TestServer {
    TestServer::new(build_app_with_failing_search()).expect("test server")
}
