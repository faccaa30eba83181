// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::Path;
use std::sync::Arc;

use crate::config::settings::ContentSettings;
use crate::domain::repositories::ContentCatalog;
use crate::infrastructure::content::{loader, seed};

pub mod careers_repo_impl;
pub mod education_repo_impl;
pub mod events_repo_impl;
pub mod news_repo_impl;
pub mod schools_repo_impl;
pub mod sections_repo_impl;

pub use careers_repo_impl::CareersRepositoryImpl;
pub use education_repo_impl::EducationRepositoryImpl;
pub use events_repo_impl::EventsRepositoryImpl;
pub use news_repo_impl::NewsRepositoryImpl;
pub use schools_repo_impl::SchoolsRepositoryImpl;
pub use sections_repo_impl::SectionsRepositoryImpl;

/// The concrete in-memory repositories backing the site, built once at
/// startup and shared between the HTTP handlers and the aggregator.
pub struct ContentRepositories {
    pub news: Arc<NewsRepositoryImpl>,
    pub events: Arc<EventsRepositoryImpl>,
    pub careers: Arc<CareersRepositoryImpl>,
    pub education: Arc<EducationRepositoryImpl>,
    pub schools: Arc<SchoolsRepositoryImpl>,
    pub sections: Arc<SectionsRepositoryImpl>,
}

impl ContentRepositories {
    /// Built-in fixtures only.
    pub fn seeded() -> Self {
        Self {
            news: Arc::new(NewsRepositoryImpl::new(seed::news())),
            events: Arc::new(EventsRepositoryImpl::new(seed::events())),
            careers: Arc::new(CareersRepositoryImpl::new(seed::careers())),
            education: Arc::new(EducationRepositoryImpl::new(seed::education_paths())),
            schools: Arc::new(SchoolsRepositoryImpl::new(seed::schools())),
            sections: Arc::new(SectionsRepositoryImpl::new(seed::sections())),
        }
    }

    /// Fixtures, with per-collection YAML overrides from the configured
    /// content directory when present.
    pub fn from_settings(settings: &ContentSettings) -> Self {
        let Some(dir) = settings.dir.as_deref() else {
            return Self::seeded();
        };
        let dir = Path::new(dir);

        Self {
            news: Arc::new(NewsRepositoryImpl::new(
                loader::load_collection(dir, "news.yaml").unwrap_or_else(seed::news),
            )),
            events: Arc::new(EventsRepositoryImpl::new(
                loader::load_collection(dir, "events.yaml").unwrap_or_else(seed::events),
            )),
            careers: Arc::new(CareersRepositoryImpl::new(
                loader::load_collection(dir, "careers.yaml").unwrap_or_else(seed::careers),
            )),
            education: Arc::new(EducationRepositoryImpl::new(
                loader::load_collection(dir, "education_paths.yaml")
                    .unwrap_or_else(seed::education_paths),
            )),
            schools: Arc::new(SchoolsRepositoryImpl::new(
                loader::load_collection(dir, "schools.yaml").unwrap_or_else(seed::schools),
            )),
            sections: Arc::new(SectionsRepositoryImpl::new(
                loader::load_collection(dir, "sections.yaml").unwrap_or_else(seed::sections),
            )),
        }
    }

    /// The provider set handed to the search aggregator.
    pub fn catalog(&self) -> ContentCatalog {
        ContentCatalog {
            news: self.news.clone(),
            events: self.events.clone(),
            careers: self.careers.clone(),
            education: self.education.clone(),
            schools: self.schools.clone(),
            sections: self.sections.clone(),
        }
    }
}
