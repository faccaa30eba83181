// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use validator::Validate;

/// Query parameters of `GET /api/search`.
///
/// An absent or empty `q` is not an error; it short-circuits to an
/// empty result list.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchQueryDto {
    #[serde(default)]
    #[validate(length(max = 200, message = "Query too long"))]
    pub q: String,
}
