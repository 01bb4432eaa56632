//! Snapshot module - everything a driver reads to draw one frame
//!
//! Grid cells are exported as render ids (`0` empty, `1..=7` shape) in row-major order.

use serde::Serialize;

use crate::core::Piece;
use crate::types::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub rotation: u8,
    pub x: i32,
    pub y: i32,
    /// Absolute cells covered by the piece
    pub cells: [(i32, i32); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cells(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub next: Shape,
    /// Rows that disappear on the next spawn step
    pub pending_rows: Vec<usize>,
    pub lost: bool,
}

impl Snapshot {
    /// Render id at (x, y); `None` outside the grid
    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// Whether the control loop should keep issuing ticks
    pub fn playable(&self) -> bool {
        !self.lost
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            active: None,
            next: Shape::T,
            pending_rows: Vec::new(),
            lost: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_lookup_is_bounds_checked() {
        let snapshot = Snapshot {
            width: 2,
            height: 2,
            cells: vec![0, 4, 0, 7],
            ..Snapshot::default()
        };
        assert_eq!(snapshot.cell(1, 0), Some(4));
        assert_eq!(snapshot.cell(1, 1), Some(7));
        assert_eq!(snapshot.cell(2, 0), None);
        assert_eq!(snapshot.cell(0, 2), None);
    }

    #[test]
    fn test_serializes_shapes_as_lowercase_names() {
        let snapshot = Snapshot {
            width: 1,
            height: 1,
            cells: vec![0],
            active: Some(Piece::new(Shape::O, 0, 0).into()),
            next: Shape::I,
            ..Snapshot::default()
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["next"], "i");
        assert_eq!(json["active"]["shape"], "o");
        assert_eq!(json["active"]["cells"][3], serde_json::json!([1, 1]));
        assert_eq!(json["lost"], false);
    }
}
