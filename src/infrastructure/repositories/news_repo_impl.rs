// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::news::NewsArticle;
use crate::domain::repositories::news_repository::NewsRepository;
use crate::domain::repositories::RepositoryError;

/// In-memory news collection.
pub struct NewsRepositoryImpl {
    articles: Vec<NewsArticle>,
}

impl NewsRepositoryImpl {
    pub fn new(articles: Vec<NewsArticle>) -> Self {
        Self { articles }
    }
}

#[async_trait]
impl NewsRepository for NewsRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<NewsArticle>, RepositoryError> {
        Ok(self.articles.clone())
    }
}
