// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::{
    application::dto::search_request::SearchQueryDto,
    domain::{
        search::engine::SiteSearch,
        services::search_service::{SearchService, SearchServiceError},
    },
};

/// Handle `GET /api/search?q=`
///
/// Returns the ranked result list as a JSON array. A blank `q` yields
/// `[]` without the aggregator running; an internal failure maps to
/// `500 { "error": "Search failed" }`.
pub async fn search<S>(
    Extension(engine): Extension<Arc<S>>,
    Query(params): Query<SearchQueryDto>,
) -> impl IntoResponse
where
    S: SiteSearch + 'static,
{
    let service = SearchService::new(engine);
    match service.search(params).await {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(e) => {
            warn!("Search request failed: {}", e);
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<SearchServiceError> for (StatusCode, String) {
    fn from(err: SearchServiceError) -> Self {
        match err {
            SearchServiceError::ValidationError(details) => (StatusCode::BAD_REQUEST, details),
            SearchServiceError::Engine(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Search failed".to_string())
            }
        }
    }
}
