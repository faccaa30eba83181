// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::search_result::SearchResult;
use crate::domain::repositories::RepositoryError;

#[derive(Debug, Error)]
pub enum SearchError {
    /// A content provider failed; the whole search fails with it.
    #[error("Content provider failed: {0}")]
    Provider(#[from] RepositoryError),
}

#[async_trait]
pub trait SiteSearch: Send + Sync {
    /// Run a site-wide search and return the ranked result list.
    ///
    /// An empty or whitespace-only query yields an empty list without
    /// touching any content provider.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}
