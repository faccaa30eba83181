// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::careers::CareerOpening;
use crate::domain::repositories::careers_repository::CareersRepository;
use crate::domain::repositories::RepositoryError;

/// In-memory career openings.
pub struct CareersRepositoryImpl {
    openings: Vec<CareerOpening>,
}

impl CareersRepositoryImpl {
    pub fn new(openings: Vec<CareerOpening>) -> Self {
        Self { openings }
    }
}

#[async_trait]
impl CareersRepository for CareersRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<CareerOpening>, RepositoryError> {
        Ok(self.openings.clone())
    }
}
