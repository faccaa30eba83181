// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::events::CampusEvent;
use crate::domain::repositories::events_repository::EventsRepository;
use crate::domain::repositories::RepositoryError;

/// In-memory events calendar.
pub struct EventsRepositoryImpl {
    events: Vec<CampusEvent>,
}

impl EventsRepositoryImpl {
    pub fn new(events: Vec<CampusEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl EventsRepository for EventsRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<CampusEvent>, RepositoryError> {
        Ok(self.events.clone())
    }
}
