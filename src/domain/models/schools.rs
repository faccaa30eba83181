// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::search_result::{ResultType, SearchResult};

/// A school of the university.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct School {
    pub id: u32,
    pub name: String,
}

impl School {
    /// Schools are matched on the name alone.
    pub fn search_text(&self) -> String {
        self.name.clone()
    }

    pub fn to_search_result(&self) -> SearchResult {
        SearchResult::new(ResultType::School, self.id, &self.name, "", "#")
            .with_page("/academics", "Academics")
            .with_content(self.search_text())
    }
}
