use std::collections::HashSet;

use indexmap::IndexSet;

use crate::logic::{recorder::StepRecorder, validate::Algorithm};
use crate::models::{grid::Grid, request::RunResponse, Position};

/// Depth-first search over an explicit stack.
///
/// Neighbours are pushed in reverse priority order so that the next pop takes
/// them in forward order (up first). A cell is pushed at most once; it joins
/// `visited` only when popped. The reported frontier is the set of stacked
/// cells in the order they were pushed, not the stack order.
pub fn run_dfs(grid: &Grid, start: Position, target: Position) -> RunResponse {
    let mut stack: Vec<Position> = Vec::new();
    let mut discovered: HashSet<Position> = HashSet::new();
    let mut visited: IndexSet<Position> = IndexSet::new();
    let mut frontier: IndexSet<Position> = IndexSet::new();
    let mut recorder = StepRecorder::new();

    stack.push(start);
    discovered.insert(start);
    frontier.insert(start);

    let mut found = false;
    while let Some(current) = stack.pop() {
        frontier.shift_remove(&current);
        visited.insert(current);
        if current == target {
            found = true;
        }

        for neighbor in grid.neighbors(current).into_iter().rev() {
            if grid.is_wall(neighbor) || !discovered.insert(neighbor) {
                continue;
            }
            stack.push(neighbor);
            frontier.insert(neighbor);
        }

        recorder.record(current, &visited, &frontier, found || stack.is_empty(), found);

        if found {
            break;
        }
    }

    recorder.finish(Algorithm::Dfs, found)
}
