// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use thiserror::Error;

pub mod careers_repository;
pub mod education_repository;
pub mod events_repository;
pub mod news_repository;
pub mod schools_repository;
pub mod sections_repository;

pub use careers_repository::CareersRepository;
pub use education_repository::EducationRepository;
pub use events_repository::EventsRepository;
pub use news_repository::NewsRepository;
pub use schools_repository::SchoolsRepository;
pub use sections_repository::SectionsRepository;

/// Repository error type
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The backing content collection could not be read
    #[error("Content source unavailable: {0}")]
    Unavailable(String),
}

/// The full provider set the search aggregator fans out over.
///
/// Constructed once at startup and injected, so tests can substitute
/// fixture collections without process-wide state.
#[derive(Clone)]
pub struct ContentCatalog {
    pub news: Arc<dyn NewsRepository>,
    pub events: Arc<dyn EventsRepository>,
    pub careers: Arc<dyn CareersRepository>,
    pub education: Arc<dyn EducationRepository>,
    pub schools: Arc<dyn SchoolsRepository>,
    pub sections: Arc<dyn SectionsRepository>,
}
