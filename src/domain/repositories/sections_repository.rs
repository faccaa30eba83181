// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::sections::ContentSection;
use crate::domain::repositories::RepositoryError;

/// Content section access, covering every section area
/// (campus life, arts, healthcare, athletics)
#[async_trait]
pub trait SectionsRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<ContentSection>, RepositoryError>;
}
