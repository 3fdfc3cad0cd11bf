use crate::logic::validate::Algorithm;
use crate::models::{
    request::{RunResponse, RunStep},
    Position,
};

/// Accumulates one [`RunStep`] per expansion, numbering them from 0.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<RunStep>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots `visited` and `frontier` as they stand after expanding `current`.
    pub fn record<'a>(
        &mut self,
        current: Position,
        visited: impl IntoIterator<Item = &'a Position>,
        frontier: impl IntoIterator<Item = &'a Position>,
        finished: bool,
        found: bool,
    ) {
        self.steps.push(RunStep {
            index: self.steps.len(),
            current,
            visited: visited.into_iter().copied().collect(),
            frontier: frontier.into_iter().copied().collect(),
            finished,
            found,
        });
    }

    pub fn finish(self, algorithm: Algorithm, found: bool) -> RunResponse {
        RunResponse {
            algorithm: algorithm.as_str().to_string(),
            total_steps: self.steps.len(),
            found,
            steps: self.steps,
        }
    }
}
