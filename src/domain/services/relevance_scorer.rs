// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;

// Title tiers are mutually exclusive; only the highest applicable one counts.
const TITLE_EXACT: u32 = 100;
const TITLE_PREFIX: u32 = 50;
const TITLE_CONTAINS: u32 = 30;
const DESCRIPTION_CONTAINS: u32 = 10;
const CONTENT_CONTAINS: u32 = 5;

/// Scores matched results against the query that produced them.
///
/// Plain case-insensitive containment only: no tokenization, no fuzzy
/// matching, no stemming.
pub struct RelevanceScorer {
    query: String,
}

impl RelevanceScorer {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
        }
    }

    /// Additive score across title, description and content checks.
    pub fn score(&self, result: &SearchResult) -> u32 {
        let title = result.title.to_lowercase();

        let mut score = if title == self.query {
            TITLE_EXACT
        } else if title.starts_with(&self.query) {
            TITLE_PREFIX
        } else if title.contains(&self.query) {
            TITLE_CONTAINS
        } else {
            0
        };

        if result.description.to_lowercase().contains(&self.query) {
            score += DESCRIPTION_CONTAINS;
        }

        if let Some(content) = &result.content {
            if content.to_lowercase().contains(&self.query) {
                score += CONTENT_CONTAINS;
            }
        }

        score
    }
}
