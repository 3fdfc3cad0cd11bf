use crate::error::RunError;
use crate::models::{grid::Grid, request::GridRunRequest, Position};

/// The traversal strategies the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra];

    /// Canonical uppercase name, as echoed back in run results.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "DIJKSTRA",
        }
    }

    /// Trims and uppercases `name` before matching it against the supported set.
    pub fn parse(name: &str) -> Result<Self, RunError> {
        let normalized = name.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(RunError::InvalidAlgorithm);
        }
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
            .ok_or_else(|| RunError::UnsupportedAlgorithm(name.to_string()))
    }
}

fn check_in_bounds(grid: &Grid, position: Position, endpoint: &'static str) -> Result<(), RunError> {
    if grid.contains(position) {
        Ok(())
    } else {
        Err(RunError::OutOfBounds { endpoint, position })
    }
}

/// Checks a run request and builds the grid the strategies search.
/// Never mutates the request; duplicate walls collapse into one.
pub fn validate(request: &GridRunRequest) -> Result<(Algorithm, Grid), RunError> {
    let algorithm = Algorithm::parse(&request.algorithm)?;

    if request.rows < 1 || request.cols < 1 {
        return Err(RunError::InvalidDimensions {
            rows: request.rows,
            cols: request.cols,
        });
    }

    let grid = Grid::new(request.rows, request.cols, request.walls.iter().copied());
    check_in_bounds(&grid, request.start, "start")?;
    check_in_bounds(&grid, request.target, "target")?;

    if grid.is_wall(request.start) || grid.is_wall(request.target) {
        return Err(RunError::BlockedEndpoint);
    }

    Ok((algorithm, grid))
}
