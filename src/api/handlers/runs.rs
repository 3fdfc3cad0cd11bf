use actix_web::{post, web, HttpResponse};
use log::{info, warn};

use crate::{
    config::AppConfig,
    error::ApiError,
    logic::runner::run_search,
    models::request::GridRunRequest,
};

/// POST /api/runs
/// Runs the requested search and returns every recorded step.
#[utoipa::path(
    post,
    path = "/api/runs",
    tag = "runs",
    request_body = GridRunRequest,
    responses(
        (status = 200, description = "Step-by-step trace of the search", body = RunResponse),
        (status = 400, description = "Invalid grid, unsupported algorithm or grid too large", body = ErrorResponse),
    )
)]
#[post("/runs")]
pub async fn post_run(
    config: web::Data<AppConfig>,
    body: web::Json<GridRunRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    let estimated = request.estimated_trace_positions();
    if estimated > config.max_trace {
        warn!(
            "rejecting {}x{} grid, trace estimate {estimated} over {}",
            request.rows, request.cols, config.max_trace
        );
        return Err(ApiError::GridTooLarge {
            rows: request.rows,
            cols: request.cols,
            estimated,
            max_trace: config.max_trace,
        });
    }

    info!(
        "running {:?} on {}x{} grid with {} walls",
        request.algorithm,
        request.rows,
        request.cols,
        request.walls.len()
    );
    let response = web::block(move || run_search(&request))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(|e| {
            warn!("run rejected: {e}");
            ApiError::from(e)
        })?;

    Ok(HttpResponse::Ok().json(response))
}
