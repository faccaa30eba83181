// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::education::EducationPath;
use crate::domain::repositories::education_repository::EducationRepository;
use crate::domain::repositories::RepositoryError;

/// In-memory education paths.
pub struct EducationRepositoryImpl {
    paths: Vec<EducationPath>,
}

impl EducationRepositoryImpl {
    pub fn new(paths: Vec<EducationPath>) -> Self {
        Self { paths }
    }
}

#[async_trait]
impl EducationRepository for EducationRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<EducationPath>, RepositoryError> {
        Ok(self.paths.clone())
    }
}
