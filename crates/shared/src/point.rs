mod test_utils;

use serde::{Deserialize, Serialize};

/// A 2D coordinate in inches. Serializes as `[x, y]`, the form the rest
/// of the plotting pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point(f64, f64);

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point(x, y)
    }

    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }
}
