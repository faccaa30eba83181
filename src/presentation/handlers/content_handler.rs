// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::domain::models::pages::SITE_PAGES;
use crate::domain::models::sections::SectionKind;
use crate::domain::repositories::{
    CareersRepository, EducationRepository, EventsRepository, NewsRepository, SchoolsRepository,
    SectionsRepository,
};
use crate::presentation::errors::AppError;

/// `GET /api/news`
pub async fn list_news<R>(Extension(repo): Extension<Arc<R>>) -> Result<impl IntoResponse, AppError>
where
    R: NewsRepository + 'static,
{
    Ok(Json(repo.find_all().await?))
}

/// `GET /api/events`
pub async fn list_events<R>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<impl IntoResponse, AppError>
where
    R: EventsRepository + 'static,
{
    Ok(Json(repo.find_all().await?))
}

/// `GET /api/careers`
pub async fn list_careers<R>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<impl IntoResponse, AppError>
where
    R: CareersRepository + 'static,
{
    Ok(Json(repo.find_all().await?))
}

/// `GET /api/education-paths`
pub async fn list_education_paths<R>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<impl IntoResponse, AppError>
where
    R: EducationRepository + 'static,
{
    Ok(Json(repo.find_all().await?))
}

/// `GET /api/schools`
pub async fn list_schools<R>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<impl IntoResponse, AppError>
where
    R: SchoolsRepository + 'static,
{
    Ok(Json(repo.find_all().await?))
}

/// `GET /api/pages`
pub async fn list_pages() -> impl IntoResponse {
    Json(SITE_PAGES.clone())
}

/// `GET /api/sections/{kind}`
///
/// Unknown kinds are a 404, not an empty list.
pub async fn list_sections<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(kind): Path<String>,
) -> Response
where
    R: SectionsRepository + 'static,
{
    let Ok(kind) = kind.parse::<SectionKind>() else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Unknown section area: {}", kind) })),
        )
            .into_response();
    };

    match repo.find_all().await {
        Ok(sections) => {
            let filtered: Vec<_> = sections.into_iter().filter(|s| s.kind == kind).collect();
            Json(filtered).into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}
