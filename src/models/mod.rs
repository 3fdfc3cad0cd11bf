use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod grid;
pub mod request;
pub mod scenario;

/// A zero-based (row, col) position within the search grid.
///
/// Signed so that negative coordinates sent by a client surface as an
/// out-of-bounds error instead of a decoding failure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
