// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use thiserror::Error;
use tracing::debug;

use crate::domain::models::search_result::SearchResult;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Search endpoint returned {0}")]
    Status(reqwest::StatusCode),
}

/// Remote search access, as seen by the controller.
#[async_trait]
pub trait SearchFetcher: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, FetchError>;
}

/// Fetches results from the site's search endpoint.
pub struct HttpSearchFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSearchFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SearchFetcher for HttpSearchFetcher {
    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, FetchError> {
        let url = format!(
            "{}/api/search?q={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(query)
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

/// Reuses the response to an identical query within a short validity
/// window, so re-typing the same text does not re-issue the request.
/// Failures are never cached.
pub struct CachedSearchFetcher<F> {
    inner: F,
    cache: DashMap<String, (Vec<SearchResult>, Instant)>,
    ttl: Duration,
}

impl<F> CachedSearchFetcher<F>
where
    F: SearchFetcher,
{
    pub fn new(inner: F, ttl: Duration) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
            ttl,
        }
    }
}

#[async_trait]
impl<F> SearchFetcher for CachedSearchFetcher<F>
where
    F: SearchFetcher,
{
    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, FetchError> {
        if let Some(entry) = self.cache.get(query) {
            if entry.1.elapsed() < self.ttl {
                debug!("Reusing cached response for query: {}", query);
                return Ok(entry.0.clone());
            }
        }

        let results = self.inner.fetch(query).await?;
        self.cache
            .insert(query.to_string(), (results.clone(), Instant::now()));
        Ok(results)
    }
}
