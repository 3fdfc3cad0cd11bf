use std::collections::VecDeque;

use indexmap::IndexSet;

use crate::logic::{recorder::StepRecorder, validate::Algorithm};
use crate::models::{grid::Grid, request::RunResponse, Position};

/// Breadth-first search. `visited` doubles as the discovered set, so cells
/// still waiting in the queue already appear in it.
pub fn run_bfs(grid: &Grid, start: Position, target: Position) -> RunResponse {
    let mut queue: VecDeque<Position> = VecDeque::new();
    let mut visited: IndexSet<Position> = IndexSet::new();
    let mut recorder = StepRecorder::new();

    queue.push_back(start);
    visited.insert(start);

    let mut found = false;
    while let Some(current) = queue.pop_front() {
        if current == target {
            found = true;
        }

        for neighbor in grid.neighbors(current) {
            if grid.is_wall(neighbor) || visited.contains(&neighbor) {
                continue;
            }
            visited.insert(neighbor);
            queue.push_back(neighbor);
        }

        recorder.record(current, &visited, &queue, found || queue.is_empty(), found);

        if found {
            break;
        }
    }

    recorder.finish(Algorithm::Bfs, found)
}
