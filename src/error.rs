use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::{
    logic::validate::Algorithm,
    models::{request::ErrorResponse, Position},
};

/// Rejections raised while validating a grid before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("algorithm must be provided.")]
    InvalidAlgorithm,

    #[error("Unsupported algorithm: {0}. Supported: BFS, DFS, DIJKSTRA")]
    UnsupportedAlgorithm(String),

    #[error("Grid dimensions must be at least 1x1 (got {rows}x{cols}).")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("{endpoint} is out of bounds: {position}")]
    OutOfBounds {
        endpoint: &'static str,
        position: Position,
    },

    #[error("Start and target must not be walls.")]
    BlockedEndpoint,
}

/// Everything the HTTP layer can answer with instead of a success body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Run(#[from] RunError),

    #[error("Grid of {rows}x{cols} would record about {estimated} positions, over the limit of {max_trace}.")]
    GridTooLarge {
        rows: i32,
        cols: i32,
        estimated: u64,
        max_trace: u64,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Run(_) | ApiError::GridTooLarge { .. } | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ScenarioNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let supported = match self {
            ApiError::Run(RunError::UnsupportedAlgorithm(_)) => Some(
                Algorithm::ALL
                    .iter()
                    .map(|a| a.as_str().to_string())
                    .collect(),
            ),
            _ => None,
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            supported,
        })
    }
}
