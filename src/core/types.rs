use serde::{Deserialize, Serialize};

/// Pointer location in chart-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: PointerPosition) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
