// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain services
///
/// - relevance scorer (relevance_scorer): ranks matched results against a query
/// - search service (search_service): validates queries and runs the aggregator
pub mod relevance_scorer;
pub mod search_service;
