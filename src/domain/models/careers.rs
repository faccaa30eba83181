// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::search_result::{ResultType, SearchResult};

/// An open position advertised on the careers page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerOpening {
    pub id: u32,
    pub title: String,
    /// Engagement kind, e.g. "Full Time" or "Adjunct".
    pub kind: String,
    /// Application deadline, as displayed.
    pub date: String,
    pub time: String,
}

impl CareerOpening {
    /// Blob matched against the query: title + kind + date + time.
    pub fn search_text(&self) -> String {
        format!("{} {} {} {}", self.title, self.kind, self.date, self.time)
    }

    pub fn to_search_result(&self) -> SearchResult {
        SearchResult::new(
            ResultType::Career,
            self.id,
            &self.title,
            &self.kind,
            format!("/careers/{}", self.id),
        )
        .with_page("/careers", "Careers")
        .with_category(&self.kind)
        .with_date(&self.date)
        .with_time(&self.time)
        .with_content(self.search_text())
    }
}
