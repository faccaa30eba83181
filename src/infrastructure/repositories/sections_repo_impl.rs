// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::sections::ContentSection;
use crate::domain::repositories::sections_repository::SectionsRepository;
use crate::domain::repositories::RepositoryError;

/// In-memory content sections for every section area.
pub struct SectionsRepositoryImpl {
    sections: Vec<ContentSection>,
}

impl SectionsRepositoryImpl {
    pub fn new(sections: Vec<ContentSection>) -> Self {
        Self { sections }
    }
}

#[async_trait]
impl SectionsRepository for SectionsRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<ContentSection>, RepositoryError> {
        Ok(self.sections.clone())
    }
}
