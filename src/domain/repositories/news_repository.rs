// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::news::NewsArticle;
use crate::domain::repositories::RepositoryError;

/// News collection access
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// List every article; filtering is the caller's concern
    async fn find_all(&self) -> Result<Vec<NewsArticle>, RepositoryError>;
}
