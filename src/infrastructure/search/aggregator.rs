// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Instant;

use async_trait::async_trait;
use metrics::counter;
use tracing::{debug, info};

use crate::domain::models::pages::SITE_PAGES;
use crate::domain::models::search_result::SearchResult;
use crate::domain::repositories::ContentCatalog;
use crate::domain::search::engine::{SearchError, SiteSearch};
use crate::domain::services::relevance_scorer::RelevanceScorer;

/// Default cap on the number of results per response.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Fans a query out over every content collection, filters each record
/// by substring containment, scores the matches and returns one ranked
/// list.
pub struct SearchAggregator {
    catalog: ContentCatalog,
    max_results: usize,
}

impl SearchAggregator {
    pub fn new(catalog: ContentCatalog, max_results: usize) -> Self {
        Self {
            catalog,
            max_results,
        }
    }

    /// Score, sort and truncate the merged match list. The sort is
    /// stable, so equal scores keep their encounter order.
    fn rank(&self, mut results: Vec<SearchResult>, query: &str) -> Vec<SearchResult> {
        let scorer = RelevanceScorer::new(query);
        for result in &mut results {
            result.relevance = Some(scorer.score(result));
        }
        results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        results.truncate(self.max_results);
        results
    }
}

fn matches(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[async_trait]
impl SiteSearch for SearchAggregator {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            debug!("Skipping search for blank query");
            return Ok(Vec::new());
        }

        let started = Instant::now();

        // One failing collection fails the whole search; there is no
        // partial degradation.
        let fetched = tokio::try_join!(
            self.catalog.news.find_all(),
            self.catalog.events.find_all(),
            self.catalog.careers.find_all(),
            self.catalog.education.find_all(),
            self.catalog.schools.find_all(),
            self.catalog.sections.find_all(),
        );
        let (news, events, careers, education, schools, sections) = match fetched {
            Ok(collections) => collections,
            Err(e) => {
                counter!("unisearch_search_failures_total").increment(1);
                return Err(e.into());
            }
        };

        let mut merged: Vec<SearchResult> = Vec::new();
        merged.extend(
            SITE_PAGES
                .iter()
                .filter(|p| matches(&p.search_text(), &needle))
                .map(|p| p.to_search_result()),
        );
        merged.extend(
            news.iter()
                .filter(|a| matches(&a.search_text(), &needle))
                .map(|a| a.to_search_result()),
        );
        merged.extend(
            events
                .iter()
                .filter(|e| matches(&e.search_text(), &needle))
                .map(|e| e.to_search_result()),
        );
        merged.extend(
            careers
                .iter()
                .filter(|c| matches(&c.search_text(), &needle))
                .map(|c| c.to_search_result()),
        );
        merged.extend(
            education
                .iter()
                .filter(|p| matches(&p.search_text(), &needle))
                .map(|p| p.to_search_result()),
        );
        merged.extend(
            schools
                .iter()
                .filter(|s| matches(&s.search_text(), &needle))
                .map(|s| s.to_search_result()),
        );
        merged.extend(
            sections
                .iter()
                .filter(|s| matches(&s.search_text(), &needle))
                .map(|s| s.to_search_result()),
        );

        let ranked = self.rank(merged, &needle);

        counter!("unisearch_searches_total").increment(1);
        info!(
            "Search \"{}\" matched {} results in {:?}",
            query.trim(),
            ranked.len(),
            started.elapsed()
        );

        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::domain::models::news::NewsArticle;
    use crate::domain::models::schools::School;
    use crate::domain::models::search_result::ResultType;
    use crate::domain::repositories::news_repository::NewsRepository;
    use crate::domain::repositories::RepositoryError;
    use crate::infrastructure::repositories::{
        CareersRepositoryImpl, ContentRepositories, EducationRepositoryImpl, EventsRepositoryImpl,
        NewsRepositoryImpl, SchoolsRepositoryImpl, SectionsRepositoryImpl,
    };
    use chrono::NaiveDate;

    fn catalog_with(news: Vec<NewsArticle>, schools: Vec<School>) -> ContentCatalog {
        ContentCatalog {
            news: Arc::new(NewsRepositoryImpl::new(news)),
            events: Arc::new(EventsRepositoryImpl::new(Vec::new())),
            careers: Arc::new(CareersRepositoryImpl::new(Vec::new())),
            education: Arc::new(EducationRepositoryImpl::new(Vec::new())),
            schools: Arc::new(SchoolsRepositoryImpl::new(schools)),
            sections: Arc::new(SectionsRepositoryImpl::new(Vec::new())),
        }
    }

    fn seeded_catalog() -> ContentCatalog {
        ContentRepositories::seeded().catalog()
    }

    fn article(id: u32, title: &str, excerpt: &str) -> NewsArticle {
        NewsArticle {
            id,
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            category: "General".to_string(),
            published_at: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    struct FailingNewsRepository;

    #[async_trait]
    impl NewsRepository for FailingNewsRepository {
        async fn find_all(&self) -> Result<Vec<NewsArticle>, RepositoryError> {
            Err(RepositoryError::Unavailable("news store offline".to_string()))
        }
    }

    struct CountingNewsRepository {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl NewsRepository for CountingNewsRepository {
        async fn find_all(&self) -> Result<Vec<NewsArticle>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn law_query_finds_the_school_and_the_news_article() {
        let catalog = catalog_with(
            vec![article(
                1,
                "New Law Program Announced",
                "The School of Law expands its offering.",
            )],
            vec![
                School {
                    id: 1,
                    name: "Riara Law School".to_string(),
                },
                School {
                    id: 2,
                    name: "School of Business".to_string(),
                },
            ],
        );
        let aggregator = SearchAggregator::new(catalog, DEFAULT_MAX_RESULTS);

        let results = aggregator.search("law").await.unwrap();

        assert_eq!(results.len(), 2);
        let types: Vec<ResultType> = results.iter().map(|r| r.result_type).collect();
        assert!(types.contains(&ResultType::News));
        assert!(types.contains(&ResultType::School));
        for result in &results {
            assert!(result.title.to_lowercase().contains("law"));
            assert!(result.relevance.unwrap() >= 30);
        }
    }

    #[tokio::test]
    async fn results_only_contain_matching_blobs() {
        let aggregator = SearchAggregator::new(seeded_catalog(), DEFAULT_MAX_RESULTS);

        let results = aggregator.search("grad").await.unwrap();

        assert!(!results.is_empty());
        for result in &results {
            let blob = result.content.as_deref().unwrap().to_lowercase();
            assert!(blob.contains("grad"), "{} does not match", result.id);
        }
    }

    #[tokio::test]
    async fn unmatched_query_yields_nothing() {
        let aggregator = SearchAggregator::new(seeded_catalog(), DEFAULT_MAX_RESULTS);
        let results = aggregator.search("zzz-nonexistent").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn blank_queries_skip_every_provider() {
        let counting = Arc::new(CountingNewsRepository {
            calls: AtomicUsize::new(0),
        });
        let mut catalog = catalog_with(Vec::new(), Vec::new());
        catalog.news = counting.clone();
        let aggregator = SearchAggregator::new(catalog, DEFAULT_MAX_RESULTS);

        assert!(aggregator.search("").await.unwrap().is_empty());
        assert!(aggregator.search("   ").await.unwrap().is_empty());
        assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn responses_are_capped_at_the_maximum() {
        let many: Vec<NewsArticle> = (1..=60)
            .map(|id| article(id, &format!("Campus Update {}", id), "Weekly round-up."))
            .collect();
        let aggregator =
            SearchAggregator::new(catalog_with(many, Vec::new()), DEFAULT_MAX_RESULTS);

        let results = aggregator.search("campus").await.unwrap();

        assert_eq!(results.len(), DEFAULT_MAX_RESULTS);
    }

    #[tokio::test]
    async fn scores_are_descending_and_ids_unique() {
        let aggregator = SearchAggregator::new(seeded_catalog(), DEFAULT_MAX_RESULTS);

        let results = aggregator.search("s").await.unwrap();

        let mut seen = std::collections::HashSet::new();
        for result in &results {
            assert!(seen.insert(result.id.clone()), "duplicate id {}", result.id);
        }
        for pair in results.windows(2) {
            assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[tokio::test]
    async fn exact_title_match_ranks_first() {
        let aggregator = SearchAggregator::new(seeded_catalog(), DEFAULT_MAX_RESULTS);

        let results = aggregator.search("events").await.unwrap();

        assert_eq!(results[0].id, "page-events");
        assert_eq!(results[0].relevance.unwrap(), 105);
    }

    #[tokio::test]
    async fn equal_scores_keep_encounter_order() {
        let catalog = catalog_with(
            Vec::new(),
            vec![
                School {
                    id: 1,
                    name: "Alpha Hall".to_string(),
                },
                School {
                    id: 2,
                    name: "Beta Hall".to_string(),
                },
            ],
        );
        let aggregator = SearchAggregator::new(catalog, DEFAULT_MAX_RESULTS);

        let results = aggregator.search("hall").await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].relevance, results[1].relevance);
        assert_eq!(results[0].id, "school-1");
        assert_eq!(results[1].id, "school-2");
    }

    #[tokio::test]
    async fn one_failing_provider_fails_the_whole_search() {
        let mut catalog = seeded_catalog();
        catalog.news = Arc::new(FailingNewsRepository);
        let aggregator = SearchAggregator::new(catalog, DEFAULT_MAX_RESULTS);

        let err = aggregator.search("law").await.unwrap_err();
        assert!(matches!(err, SearchError::Provider(_)));
    }
}
