use log::debug;

use crate::error::RunError;
use crate::logic::{
    bfs::run_bfs,
    dfs::run_dfs,
    dijkstra::run_dijkstra,
    validate::{validate, Algorithm},
};
use crate::models::request::{GridRunRequest, RunResponse};

/// Validates `request` and records the full trace of the selected search.
/// Each call owns all of its working state.
pub fn run_search(request: &GridRunRequest) -> Result<RunResponse, RunError> {
    let (algorithm, grid) = validate(request)?;

    let response = match algorithm {
        Algorithm::Bfs => run_bfs(&grid, request.start, request.target),
        Algorithm::Dfs => run_dfs(&grid, request.start, request.target),
        Algorithm::Dijkstra => run_dijkstra(&grid, request.start, request.target),
    };

    debug!(
        "{} on {}x{} grid ({} walls): {} steps, found = {}",
        response.algorithm,
        grid.rows,
        grid.cols,
        grid.walls.len(),
        response.total_steps,
        response.found
    );
    Ok(response)
}
