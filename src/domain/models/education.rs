// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::search_result::{ResultType, SearchResult};

/// A study path offered by the university, e.g. undergraduate degrees
/// or professional certificates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationPath {
    pub id: u32,
    pub title: String,
    pub description: String,
}

impl EducationPath {
    /// Blob matched against the query: title + description.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    pub fn to_search_result(&self) -> SearchResult {
        SearchResult::new(
            ResultType::Academic,
            self.id,
            &self.title,
            &self.description,
            "/academics",
        )
        .with_page("/academics", "Academics")
        .with_content(self.search_text())
    }
}
