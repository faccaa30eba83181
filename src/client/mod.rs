// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Search palette client
///
/// - controller: dialog state machine, debounced fetch, grouping, navigation
/// - fetcher: remote search access with a short reuse window per query
/// - recency: persisted recent-search shortcuts
/// - keymap: global shortcut handling with an explicit bind lifecycle
pub mod controller;
pub mod fetcher;
pub mod keymap;
pub mod recency;

pub use controller::{
    NavigationTarget, PendingNavigation, QueryTicket, ResultGroup, SearchController, SearchPhase,
};
pub use fetcher::{CachedSearchFetcher, FetchError, HttpSearchFetcher, SearchFetcher};
pub use keymap::{GlobalKeymap, Key, KeyChord, Modifiers, PaletteAction};
pub use recency::{FileRecencyStore, MemoryRecencyStore, RecencyStore, MAX_RECENT_SEARCHES};
