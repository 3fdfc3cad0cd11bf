use std::collections::HashMap;

use actix_web::http::Method;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};

use crate::models::{scenario::ScenarioResponse, Position};

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    #[schema(value_type = String, example = "GET")]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

/// Helper to build a `Link` from an href and an HTTP method.
pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Pagination metadata included in responses that return lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

pub const DEFAULT_PER_PAGE: usize = 20;
pub const MAX_PER_PAGE: usize = 100;

impl Pagination {
    /// Metadata for `page` (1-based) of `total` items split into pages of `per_page`.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        Self {
            page,
            per_page,
            total,
            total_pages: total.div_ceil(per_page.max(1)),
        }
    }

    /// Index range of the items on this page, clamped to `total`.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.page.saturating_sub(1).saturating_mul(self.per_page).min(self.total);
        let end = start.saturating_add(self.per_page).min(self.total);
        start..end
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// `?page=&perPage=` query accepted by list endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number (defaults to 1).
    pub page: Option<usize>,
    /// Items per page (defaults to 20, capped at 100).
    pub per_page: Option<usize>,
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(ScenarioApiResponse = ApiResponse<ScenarioResponse>)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(rename = "_links")]
    #[schema(value_type = Object)]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            links,
        }
    }
}

/// Generic paginated list response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(ScenarioListResponse = PaginatedResponse<ScenarioResponse>)]
pub struct PaginatedResponse<T> {
    pub payload: Vec<T>,
    #[serde(rename = "_links")]
    #[schema(value_type = Object)]
    pub links: Links,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(payload: Vec<T>, links: Links, pagination: Pagination) -> Self {
        Self {
            payload,
            links,
            pagination,
        }
    }
}

/// Body of every error response.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Algorithm names the service accepts; only set when the requested one is unknown.
    pub supported: Option<Vec<String>>,
}

/// A grid to search: dimensions, endpoints and blocked cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GridRunRequest {
    /// `BFS`, `DFS` or `DIJKSTRA`, case-insensitive, surrounding blanks ignored.
    #[schema(example = "BFS")]
    pub algorithm: String,
    #[schema(example = 3)]
    pub rows: i32,
    #[schema(example = 3)]
    pub cols: i32,
    pub start: Position,
    pub target: Position,
    #[serde(default)]
    pub walls: Vec<Position>,
}

impl GridRunRequest {
    /// Upper estimate of positions a trace of this grid copies into its steps.
    /// Every step snapshots visited and frontier, so an open grid of `n` cells
    /// costs about `n * n / 2`.
    pub fn estimated_trace_positions(&self) -> u64 {
        let cells = u64::from(self.rows.max(0).unsigned_abs())
            * u64::from(self.cols.max(0).unsigned_abs());
        cells.saturating_mul(cells) / 2
    }
}

/// One expansion event of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunStep {
    pub index: usize,
    pub current: Position,
    /// Cells visited so far, in the order they were recorded.
    pub visited: Vec<Position>,
    /// Cells discovered but not yet expanded.
    pub frontier: Vec<Position>,
    pub finished: bool,
    pub found: bool,
}

/// The full trace of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunResponse {
    #[schema(example = "BFS")]
    pub algorithm: String,
    pub total_steps: usize,
    pub found: bool,
    pub steps: Vec<RunStep>,
}
