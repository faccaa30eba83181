// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::schools::School;
use crate::domain::repositories::schools_repository::SchoolsRepository;
use crate::domain::repositories::RepositoryError;

/// In-memory schools listing.
pub struct SchoolsRepositoryImpl {
    schools: Vec<School>,
}

impl SchoolsRepositoryImpl {
    pub fn new(schools: Vec<School>) -> Self {
        Self { schools }
    }
}

#[async_trait]
impl SchoolsRepository for SchoolsRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<School>, RepositoryError> {
        Ok(self.schools.clone())
    }
}
