use serde::{Deserialize, Serialize};

/// A point in the Dalitz plane: the two invariant mass-squared coordinates
/// of a three-body decay event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub m12: f64,
    pub m23: f64,
}

impl Point {
    pub fn new(m12: f64, m23: f64) -> Self {
        Self { m12, m23 }
    }
}
