use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use indexmap::IndexSet;

use crate::logic::{recorder::StepRecorder, validate::Algorithm};
use crate::models::{grid::Grid, request::RunResponse, Position};

/// Cost of moving between two adjacent open cells.
pub const STEP_COST: u32 = 1;

/// Heap entry ordered by (cost, row, col), smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    cost: u32,
    position: Position,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the cheapest entry first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm with unit edge weights.
///
/// Stale heap entries are tolerated and skipped when popped. Equal-cost cells
/// are expanded by ascending row, then column.
pub fn run_dijkstra(grid: &Grid, start: Position, target: Position) -> RunResponse {
    let mut heap: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut visited: IndexSet<Position> = IndexSet::new();
    let mut frontier: IndexSet<Position> = IndexSet::new();
    let mut distance: HashMap<Position, u32> = HashMap::new();
    let mut recorder = StepRecorder::new();

    heap.push(FrontierEntry {
        cost: 0,
        position: start,
    });
    frontier.insert(start);
    distance.insert(start, 0);

    let mut found = false;
    while let Some(FrontierEntry { cost, position: current }) = heap.pop() {
        if visited.contains(&current) {
            continue;
        }

        frontier.shift_remove(&current);
        visited.insert(current);
        if current == target {
            found = true;
        }

        for neighbor in grid.neighbors(current) {
            if grid.is_wall(neighbor) || visited.contains(&neighbor) {
                continue;
            }
            let next_cost = cost + STEP_COST;
            if distance.get(&neighbor).is_some_and(|&known| next_cost >= known) {
                continue;
            }
            distance.insert(neighbor, next_cost);
            heap.push(FrontierEntry {
                cost: next_cost,
                position: neighbor,
            });
            frontier.insert(neighbor);
        }

        recorder.record(current, &visited, &frontier, found || heap.is_empty(), found);

        if found {
            break;
        }
    }

    recorder.finish(Algorithm::Dijkstra, found)
}
