// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::models::search_result::{ResultType, SearchResult};

/// The content areas that publish generic title + description sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    CampusLife,
    Arts,
    Healthcare,
    Athletics,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::CampusLife,
        SectionKind::Arts,
        SectionKind::Healthcare,
        SectionKind::Athletics,
    ];

    pub fn result_type(&self) -> ResultType {
        match self {
            SectionKind::CampusLife => ResultType::CampusLife,
            SectionKind::Arts => ResultType::Arts,
            SectionKind::Healthcare => ResultType::Healthcare,
            SectionKind::Athletics => ResultType::Athletics,
        }
    }

    /// Canonical page each section area belongs to. Campus life and the
    /// arts both live on the student life page.
    pub fn page(&self) -> (&'static str, &'static str) {
        match self {
            SectionKind::CampusLife | SectionKind::Arts => ("/student-life", "Student Life"),
            SectionKind::Healthcare => ("/health-care", "Health Care"),
            SectionKind::Athletics => ("/athletics", "Athletics"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::CampusLife => "campus-life",
            SectionKind::Arts => "arts",
            SectionKind::Healthcare => "healthcare",
            SectionKind::Athletics => "athletics",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "campus-life" => Ok(SectionKind::CampusLife),
            "arts" => Ok(SectionKind::Arts),
            "healthcare" => Ok(SectionKind::Healthcare),
            "athletics" => Ok(SectionKind::Athletics),
            _ => Err(()),
        }
    }
}

/// A generic content block shown on one of the section pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentSection {
    pub id: u32,
    pub kind: SectionKind,
    pub title: String,
    pub description: String,
}

impl ContentSection {
    /// Blob matched against the query: title + description.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    pub fn to_search_result(&self) -> SearchResult {
        let (page_url, page_title) = self.kind.page();
        SearchResult::new(
            self.kind.result_type(),
            self.id,
            &self.title,
            &self.description,
            format!("{}#section-{}", page_url, self.id),
        )
        .with_page(page_url, page_title)
        .with_content(self.search_text())
    }
}
