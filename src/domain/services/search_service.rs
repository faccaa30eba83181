// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use validator::Validate;

use crate::application::dto::search_request::SearchQueryDto;
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::engine::{SearchError, SiteSearch};

#[derive(Error, Debug)]
pub enum SearchServiceError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Search failed")]
    Engine(#[from] SearchError),
}

/// Mediates between the HTTP surface and the search engine: validates
/// the query DTO and short-circuits empty queries before the engine is
/// ever invoked.
pub struct SearchService<S> {
    engine: Arc<S>,
}

impl<S> SearchService<S>
where
    S: SiteSearch + 'static,
{
    pub fn new(engine: Arc<S>) -> Self {
        Self { engine }
    }

    pub async fn search(
        &self,
        dto: SearchQueryDto,
    ) -> Result<Vec<SearchResult>, SearchServiceError> {
        dto.validate()
            .map_err(|e| SearchServiceError::ValidationError(e.to_string()))?;

        let query = dto.q.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let results = self.engine.search(query).await?;
        info!("Query \"{}\" returned {} results", query, results.len());
        Ok(results)
    }
}
