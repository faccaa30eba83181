// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, warn};
use url::Url;

use crate::client::fetcher::{CachedSearchFetcher, HttpSearchFetcher, SearchFetcher};
use crate::client::keymap::{GlobalKeymap, KeyChord, PaletteAction};
use crate::client::recency::{promote, RecencyStore};
use crate::config::settings::ClientSettings;
use crate::domain::models::search_result::{ResultType, SearchResult};

/// Where the palette currently is, within an open dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    /// Open with a blank query; recent searches are shown instead.
    Empty,
    /// A debounced fetch is in flight.
    Querying,
    Results(Vec<SearchResult>),
    /// The fetch failed; a distinct empty state, not a crash.
    Failed,
}

/// Identifies the query a fetch was issued for. Responses only apply
/// while their query is still the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub query: String,
}

/// One group of results in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGroup {
    pub kind: ResultType,
    pub results: Vec<SearchResult>,
}

/// Where selecting a result navigates to.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationTarget {
    /// Root-relative path, resolved by the in-app router.
    InApp(String),
    /// Absolute http(s) URL, resolved by a full page navigation.
    External(Url),
}

impl NavigationTarget {
    /// `page_url` wins over `url`; anything that is not a root-relative
    /// path or an http(s) URL stays in-app (anchors and the like).
    pub fn resolve(result: &SearchResult) -> Self {
        let raw = result.navigation_target();
        if raw.starts_with('/') {
            return NavigationTarget::InApp(raw.to_string());
        }
        if let Ok(parsed) = Url::parse(raw) {
            if matches!(parsed.scheme(), "http" | "https") {
                return NavigationTarget::External(parsed);
            }
        }
        NavigationTarget::InApp(raw.to_string())
    }
}

/// A navigation the shell should perform once the close animation has
/// finished.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingNavigation {
    pub target: NavigationTarget,
    pub delay: Duration,
}

struct ControllerInner {
    open: bool,
    query: String,
    phase: SearchPhase,
}

/// Owns the search palette: dialog state, debounced remote queries with
/// latest-wins application, recency shortcuts and keyboard handling.
pub struct SearchController {
    fetcher: Arc<dyn SearchFetcher>,
    recency: Arc<dyn RecencyStore>,
    keymap: GlobalKeymap,
    debounce: Duration,
    nav_delay: Duration,
    inner: Mutex<ControllerInner>,
}

impl SearchController {
    pub fn new(
        fetcher: Arc<dyn SearchFetcher>,
        recency: Arc<dyn RecencyStore>,
        debounce: Duration,
        nav_delay: Duration,
    ) -> Self {
        Self {
            fetcher,
            recency,
            keymap: GlobalKeymap::new(),
            debounce,
            nav_delay,
            inner: Mutex::new(ControllerInner {
                open: false,
                query: String::new(),
                phase: SearchPhase::Empty,
            }),
        }
    }

    /// Standard wiring: HTTP fetcher behind the reuse cache, settings
    /// for the timings, caller-chosen recency persistence.
    pub fn from_settings(settings: &ClientSettings, recency: Arc<dyn RecencyStore>) -> Self {
        let fetcher = CachedSearchFetcher::new(
            HttpSearchFetcher::new(settings.base_url.clone()),
            Duration::from_secs(settings.cache_ttl_secs),
        );
        Self::new(
            Arc::new(fetcher),
            recency,
            Duration::from_millis(settings.debounce_ms),
            Duration::from_millis(settings.nav_delay_ms),
        )
    }

    // Dialog lifecycle

    pub fn open(&self) {
        let mut inner = self.inner.lock();
        inner.open = true;
    }

    pub fn close(&self) {
        let mut inner = self.inner.lock();
        inner.open = false;
        inner.query.clear();
        inner.phase = SearchPhase::Empty;
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.lock().open
    }

    pub fn query(&self) -> String {
        self.inner.lock().query.clone()
    }

    pub fn phase(&self) -> SearchPhase {
        self.inner.lock().phase.clone()
    }

    // Keyboard contract

    /// Register the document-level listener. Call on shell mount.
    pub fn attach(&self) {
        self.keymap.bind();
    }

    /// Remove the document-level listener. Call on shell unmount.
    pub fn detach(&self) {
        self.keymap.unbind();
    }

    /// Returns true when the chord was intercepted.
    pub fn handle_key(&self, chord: &KeyChord) -> bool {
        match self.keymap.action_for(chord, self.is_open()) {
            Some(PaletteAction::Toggle) => {
                self.toggle();
                true
            }
            Some(PaletteAction::Close) => {
                self.close();
                true
            }
            None => false,
        }
    }

    // Query handling

    /// Record new input. A blank query drops back to the empty phase;
    /// anything else enters the querying phase and yields the ticket
    /// the eventual response must present.
    pub fn set_query(&self, input: &str) -> Option<QueryTicket> {
        let mut inner = self.inner.lock();
        if !inner.open {
            return None;
        }
        inner.query = input.to_string();
        if input.trim().is_empty() {
            inner.phase = SearchPhase::Empty;
            return None;
        }
        inner.phase = SearchPhase::Querying;
        Some(QueryTicket {
            query: input.to_string(),
        })
    }

    fn is_current(&self, ticket: &QueryTicket) -> bool {
        let inner = self.inner.lock();
        inner.open && inner.query == ticket.query
    }

    /// Apply a response. Returns false when the response is stale
    /// (the query has moved on) and was discarded.
    pub fn apply_results(&self, ticket: &QueryTicket, results: Vec<SearchResult>) -> bool {
        let mut inner = self.inner.lock();
        if !inner.open || inner.query != ticket.query {
            debug!("Discarding stale results for query: {}", ticket.query);
            return false;
        }
        inner.phase = SearchPhase::Results(results);
        true
    }

    pub fn apply_error(&self, ticket: &QueryTicket) -> bool {
        let mut inner = self.inner.lock();
        if !inner.open || inner.query != ticket.query {
            debug!("Discarding stale failure for query: {}", ticket.query);
            return false;
        }
        inner.phase = SearchPhase::Failed;
        true
    }

    /// Debounce, fetch and apply under the latest-wins rule. Typing a
    /// newer query while this one is debouncing or in flight makes the
    /// older invocation a no-op.
    pub async fn submit(&self, input: &str) {
        let Some(ticket) = self.set_query(input) else {
            return;
        };

        tokio::time::sleep(self.debounce).await;
        if !self.is_current(&ticket) {
            return;
        }

        match self.fetcher.fetch(&ticket.query).await {
            Ok(results) => {
                self.apply_results(&ticket, results);
            }
            Err(e) => {
                warn!("Search fetch failed for \"{}\": {}", ticket.query, e);
                self.apply_error(&ticket);
            }
        }
    }

    // Result presentation

    /// Results grouped by type in display order; empty groups are
    /// omitted and in-group order follows the response.
    pub fn grouped_results(&self) -> Vec<ResultGroup> {
        let inner = self.inner.lock();
        let SearchPhase::Results(results) = &inner.phase else {
            return Vec::new();
        };

        ResultType::ALL
            .iter()
            .filter_map(|kind| {
                let members: Vec<SearchResult> = results
                    .iter()
                    .filter(|r| r.result_type == *kind)
                    .cloned()
                    .collect();
                if members.is_empty() {
                    None
                } else {
                    Some(ResultGroup {
                        kind: *kind,
                        results: members,
                    })
                }
            })
            .collect()
    }

    // Selection and recency

    /// Commit the selection: remember the title, close the dialog and
    /// hand the shell a navigation to run after the close animation.
    pub fn select(&self, result: &SearchResult) -> PendingNavigation {
        let mut entries = self.recency.load();
        promote(&mut entries, &result.title);
        if let Err(e) = self.recency.save(&entries) {
            warn!("Could not persist recent searches: {}", e);
        }

        self.close();

        PendingNavigation {
            target: NavigationTarget::resolve(result),
            delay: self.nav_delay,
        }
    }

    pub fn recent_searches(&self) -> Vec<String> {
        self.recency.load()
    }

    /// Re-populate the query field from a recency shortcut. Not a
    /// search commit; the recency list is untouched.
    pub fn select_recent(&self, entry: &str) -> Option<QueryTicket> {
        self.set_query(entry)
    }

    pub fn clear_recent(&self) {
        if let Err(e) = self.recency.clear() {
            warn!("Could not clear recent searches: {}", e);
        }
    }
}
