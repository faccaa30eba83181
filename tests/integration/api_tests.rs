// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::Value;

use unisearch::domain::models::events::CampusEvent;
use unisearch::domain::models::news::NewsArticle;
use unisearch::domain::models::pages::PageDescriptor;
use unisearch::domain::models::schools::School;
use unisearch::domain::models::search_result::{ResultType, SearchResult};
use unisearch::domain::models::sections::{ContentSection, SectionKind};

use super::helpers::{create_test_app, create_test_app_with_failing_search};

#[tokio::test]
async fn search_returns_the_ranked_result_list() {
    let server = create_test_app();

    let response = server.get("/api/search").add_query_param("q", "law").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let results: Vec<SearchResult> = response.json();
    assert_eq!(results.len(), 2);

    let types: Vec<ResultType> = results.iter().map(|r| r.result_type).collect();
    assert!(types.contains(&ResultType::News));
    assert!(types.contains(&ResultType::School));
    for result in &results {
        assert!(result.title.to_lowercase().contains("law"));
        assert!(result.relevance.unwrap() >= 30);
    }

    // Descending relevance over the wire as well
    assert!(results[0].relevance >= results[1].relevance);
}

#[tokio::test]
async fn search_results_use_the_frontend_field_names() {
    let server = create_test_app();

    let response = server.get("/api/search").add_query_param("q", "law").await;
    let raw: Value = response.json();

    let first = &raw[0];
    assert!(first.get("type").is_some());
    assert!(first.get("pageUrl").is_some());
    assert!(first.get("pageTitle").is_some());
    assert!(first.get("result_type").is_none());
}

#[tokio::test]
async fn blank_queries_short_circuit_to_an_empty_list() {
    let server = create_test_app();

    for q in ["", "   "] {
        let response = server.get("/api/search").add_query_param("q", q).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let results: Vec<SearchResult> = response.json();
        assert!(results.is_empty());
    }

    // A missing q behaves like an empty one
    let response = server.get("/api/search").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let results: Vec<SearchResult> = response.json();
    assert!(results.is_empty());
}

#[tokio::test]
async fn unmatched_queries_return_an_empty_list() {
    let server = create_test_app();

    let response = server
        .get("/api/search")
        .add_query_param("q", "zzz-nonexistent")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let results: Vec<SearchResult> = response.json();
    assert!(results.is_empty());
}

#[tokio::test]
async fn overlong_queries_are_rejected() {
    let server = create_test_app();

    let response = server
        .get("/api/search")
        .add_query_param("q", "q".repeat(300))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn a_failing_provider_maps_to_a_search_failed_error() {
    let server = create_test_app_with_failing_search();

    let response = server.get("/api/search").add_query_param("q", "law").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Search failed");
}

#[tokio::test]
async fn content_collections_are_served_in_full() {
    let server = create_test_app();

    let news: Vec<NewsArticle> = server.get("/api/news").await.json();
    assert_eq!(news.len(), 5);

    let events: Vec<CampusEvent> = server.get("/api/events").await.json();
    assert!(!events.is_empty());

    let schools: Vec<School> = server.get("/api/schools").await.json();
    assert!(schools.iter().any(|s| s.name == "Riara Law School"));

    let pages: Vec<PageDescriptor> = server.get("/api/pages").await.json();
    assert_eq!(pages.len(), 11);
}

#[tokio::test]
async fn sections_are_filtered_by_area() {
    let server = create_test_app();

    let arts: Vec<ContentSection> = server.get("/api/sections/arts").await.json();
    assert!(!arts.is_empty());
    assert!(arts.iter().all(|s| s.kind == SectionKind::Arts));

    let response = server.get("/api/sections/research").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_and_version_respond() {
    let server = create_test_app();

    let health = server.get("/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);
    assert_eq!(health.text(), "OK");

    let version = server.get("/v1/version").await;
    assert_eq!(version.status_code(), StatusCode::OK);
    assert!(!version.text().is_empty());
}
