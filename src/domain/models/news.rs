// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::models::search_result::{ResultType, SearchResult};

/// A hand-authored news article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsArticle {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub published_at: NaiveDate,
}

impl NewsArticle {
    /// Text blob matched against the search query: title + excerpt + category.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.excerpt, self.category)
    }

    pub fn to_search_result(&self) -> SearchResult {
        SearchResult::new(
            ResultType::News,
            self.id,
            &self.title,
            &self.excerpt,
            format!("/news/{}", self.id),
        )
        .with_page("/news", "News")
        .with_category(&self.category)
        .with_date(self.published_at.format("%B %d, %Y").to_string())
        .with_content(self.search_text())
    }
}
