// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use unisearch::client::{
    FetchError, HttpSearchFetcher, MemoryRecencyStore, NavigationTarget, RecencyStore,
    SearchController, SearchFetcher, SearchPhase,
};
use unisearch::domain::models::search_result::ResultType;

use super::helpers::build_app;

#[tokio::test]
async fn http_fetcher_parses_the_search_response() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "law school"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "school-1",
                "title": "Riara Law School",
                "description": "",
                "type": "school",
                "url": "#",
                "pageUrl": "/academics",
                "pageTitle": "Academics",
                "relevance": 35
            }
        ])))
        .mount(&mock)
        .await;

    let fetcher = HttpSearchFetcher::new(mock.uri());
    let results = fetcher.fetch("law school").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].result_type, ResultType::School);
    assert_eq!(results[0].page_url.as_deref(), Some("/academics"));
    assert_eq!(results[0].relevance, Some(35));
}

#[tokio::test]
async fn http_fetcher_surfaces_server_errors() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "Search failed" })))
        .mount(&mock)
        .await;

    let fetcher = HttpSearchFetcher::new(mock.uri());
    let err = fetcher.fetch("law").await.unwrap_err();

    assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn controller_drives_a_live_search_end_to_end() {
    let app = build_app();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let store = Arc::new(MemoryRecencyStore::default());
    let controller = SearchController::new(
        Arc::new(HttpSearchFetcher::new(format!("http://{}", addr))),
        store.clone(),
        Duration::ZERO,
        Duration::from_millis(200),
    );

    controller.open();
    controller.submit("law").await;

    let SearchPhase::Results(results) = controller.phase() else {
        panic!("expected results, got {:?}", controller.phase());
    };
    assert_eq!(results.len(), 2);

    let groups = controller.grouped_results();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].kind, ResultType::News);
    assert_eq!(groups[1].kind, ResultType::School);

    // Selecting the top hit commits it to recency, closes the dialog
    // and resolves an in-app navigation to the canonical page
    let nav = controller.select(&results[0]);
    assert_eq!(nav.target, NavigationTarget::InApp("/news".to_string()));
    assert!(!controller.is_open());
    assert_eq!(store.load(), vec!["New Law Program Announced".to_string()]);
}

#[tokio::test]
async fn controller_reports_a_failed_search_from_a_dead_endpoint() {
    // Nothing is listening here, so the fetch fails at the transport level
    let controller = SearchController::new(
        Arc::new(HttpSearchFetcher::new("http://127.0.0.1:1")),
        Arc::new(MemoryRecencyStore::default()),
        Duration::ZERO,
        Duration::ZERO,
    );

    controller.open();
    controller.submit("law").await;

    assert_eq!(controller.phase(), SearchPhase::Failed);
}
