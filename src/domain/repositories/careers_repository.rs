// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::careers::CareerOpening;
use crate::domain::repositories::RepositoryError;

/// Career openings access
#[async_trait]
pub trait CareersRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<CareerOpening>, RepositoryError>;
}
