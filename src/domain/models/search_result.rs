// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Closed set of result types the search surface can emit.
///
/// The declaration order is the display order used when grouping
/// results in the search palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultType {
    Page,
    News,
    Event,
    Academic,
    School,
    Career,
    CampusLife,
    /// Part of the frontend's closed badge/grouping contract; no
    /// current collection emits it (the Research page itself is a
    /// `page` result).
    Research,
    Healthcare,
    Athletics,
    Arts,
}

impl ResultType {
    /// Every result type, in display order.
    pub const ALL: [ResultType; 11] = [
        ResultType::Page,
        ResultType::News,
        ResultType::Event,
        ResultType::Academic,
        ResultType::School,
        ResultType::Career,
        ResultType::CampusLife,
        ResultType::Research,
        ResultType::Healthcare,
        ResultType::Athletics,
        ResultType::Arts,
    ];

    /// Prefix used when building collision-free result ids.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ResultType::Page => "page",
            ResultType::News => "news",
            ResultType::Event => "event",
            ResultType::Academic => "academic",
            ResultType::School => "school",
            ResultType::Career => "career",
            ResultType::CampusLife => "campus-life",
            ResultType::Research => "research",
            ResultType::Healthcare => "healthcare",
            ResultType::Athletics => "athletics",
            ResultType::Arts => "arts",
        }
    }

    /// Human-readable group label for the palette.
    pub fn label(&self) -> &'static str {
        match self {
            ResultType::Page => "Pages",
            ResultType::News => "News",
            ResultType::Event => "Events",
            ResultType::Academic => "Academics",
            ResultType::School => "Schools",
            ResultType::Career => "Careers",
            ResultType::CampusLife => "Campus Life",
            ResultType::Research => "Research",
            ResultType::Healthcare => "Health Care",
            ResultType::Athletics => "Athletics",
            ResultType::Arts => "Arts",
        }
    }
}

/// A single entry in a search response.
///
/// Instances are built fresh on every query; ids are unique within one
/// response but carry no identity across requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub result_type: ResultType,
    pub url: String,
    /// Canonical page the result navigates to. Navigation prefers this
    /// over `url`, which may point at an anchor or external resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Raw text used for scoring; may differ from `description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Relevance score, set only by the aggregator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<u32>,
}

impl SearchResult {
    pub fn new(
        result_type: ResultType,
        record_id: impl std::fmt::Display,
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("{}-{}", result_type.id_prefix(), record_id),
            title: title.into(),
            description: description.into(),
            result_type,
            url: url.into(),
            page_url: None,
            page_title: None,
            category: None,
            date: None,
            time: None,
            content: None,
            relevance: None,
        }
    }

    pub fn with_page(mut self, url: impl Into<String>, title: impl Into<String>) -> Self {
        self.page_url = Some(url.into());
        self.page_title = Some(title.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// The link selection uses: `page_url` when present, `url` otherwise.
    pub fn navigation_target(&self) -> &str {
        self.page_url.as_deref().unwrap_or(&self.url)
    }
}
