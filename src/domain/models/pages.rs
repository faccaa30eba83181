// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::models::search_result::{ResultType, SearchResult};

/// A top-level site page reachable from the main navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageDescriptor {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub path: String,
}

impl PageDescriptor {
    fn new(slug: &str, title: &str, description: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            path: format!("/{}", slug),
        }
    }

    /// Blob matched against the query: title + description.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    pub fn to_search_result(&self) -> SearchResult {
        SearchResult::new(
            ResultType::Page,
            &self.slug,
            &self.title,
            &self.description,
            &self.path,
        )
        .with_page(&self.path, &self.title)
        .with_content(self.search_text())
    }
}

/// The fixed set of static pages included in every search.
pub static SITE_PAGES: Lazy<Vec<PageDescriptor>> = Lazy::new(|| {
    vec![
        PageDescriptor::new(
            "academics",
            "Academics",
            "Schools, departments and programmes across the university.",
        ),
        PageDescriptor::new(
            "research",
            "Research",
            "Research centres, publications and funding opportunities.",
        ),
        PageDescriptor::new(
            "admission",
            "Admission",
            "How to apply, entry requirements, fees and scholarships.",
        ),
        PageDescriptor::new(
            "student-life",
            "Student Life",
            "Clubs, societies, housing and everyday life on campus.",
        ),
        PageDescriptor::new(
            "health-care",
            "Health Care",
            "Campus clinic, counselling and student wellness services.",
        ),
        PageDescriptor::new(
            "athletics",
            "Athletics",
            "University teams, facilities and sports programmes.",
        ),
        PageDescriptor::new(
            "careers",
            "Careers",
            "Open positions and working at the university.",
        ),
        PageDescriptor::new(
            "news",
            "News",
            "Announcements and stories from around the university.",
        ),
        PageDescriptor::new(
            "events",
            "Events",
            "Upcoming lectures, open days and ceremonies.",
        ),
        PageDescriptor::new(
            "about",
            "About",
            "History, leadership and the mission of the university.",
        ),
        PageDescriptor::new(
            "partners",
            "Partners",
            "Industry and academic partners we work with.",
        ),
    ]
});
