// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::search_result::{ResultType, SearchResult};

/// An entry in the university events calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampusEvent {
    pub id: u32,
    pub title: String,
    /// Event kind, e.g. "Open Day" or "Public Lecture".
    pub kind: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

impl CampusEvent {
    /// Blob matched against the query: title + kind + date + time.
    pub fn search_text(&self) -> String {
        format!("{} {} {} {}", self.title, self.kind, self.date, self.time)
    }

    pub fn to_search_result(&self) -> SearchResult {
        SearchResult::new(
            ResultType::Event,
            self.id,
            &self.title,
            format!("{} at {}", self.kind, self.location),
            "/events",
        )
        .with_page("/events", "Events")
        .with_category(&self.kind)
        .with_date(&self.date)
        .with_time(&self.time)
        .with_content(self.search_text())
    }
}
