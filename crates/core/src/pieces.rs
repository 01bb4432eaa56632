//! Pieces module - tetromino block tables
//!
//! Each shape owns a fixed list of rotation variants; each variant is four block offsets
//! relative to the piece anchor. Shapes with fewer than four distinct orientations list
//! only those, and a rotation index wraps onto the list with `rotation % len`.
//! There is no kick table: a rotation either fits in place or is rejected.

use crate::types::Shape;

/// Offset of a single block relative to the piece anchor
pub type BlockOffset = (i32, i32);

/// Shape of a piece in one orientation - 4 block offsets from the anchor
pub type Blocks = [BlockOffset; 4];

/// Number of rotation states a piece cycles through
pub const ROTATION_STATES: u8 = 4;

const T_VARIANTS: [Blocks; 4] = [
    [(0, 0), (1, 0), (2, 0), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (0, 2)],
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const L_VARIANTS: [Blocks; 4] = [
    [(0, 0), (1, 0), (2, 0), (0, 1)],
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

const J_VARIANTS: [Blocks; 4] = [
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(0, 0), (0, 1), (0, 2), (1, 0)],
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 0), (1, 1), (1, 2)],
];

// I pivots on its second block, so the horizontal variant reaches one column left
// of the anchor and the vertical one reaches one row above it.
const I_VARIANTS: [Blocks; 2] = [
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    [(0, -1), (0, 0), (0, 1), (0, 2)],
];

const S_VARIANTS: [Blocks; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_VARIANTS: [Blocks; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

const O_VARIANTS: [Blocks; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

/// All orientations of a shape, rotation 0 first
pub fn variants(shape: Shape) -> &'static [Blocks] {
    match shape {
        Shape::T => &T_VARIANTS,
        Shape::L => &L_VARIANTS,
        Shape::J => &J_VARIANTS,
        Shape::I => &I_VARIANTS,
        Shape::S => &S_VARIANTS,
        Shape::Z => &Z_VARIANTS,
        Shape::O => &O_VARIANTS,
    }
}

/// Number of distinct orientations (1, 2 or 4)
pub fn variant_count(shape: Shape) -> usize {
    variants(shape).len()
}

/// Get the block offsets for a shape at a rotation index
///
/// Any index is accepted; it wraps modulo the shape's variant count.
pub fn get_blocks(shape: Shape, rotation: u8) -> Blocks {
    let table = variants(shape);
    table[rotation as usize % table.len()]
}

/// Spawn blocks (rotation 0), as shown in a next-piece preview
pub fn get_spawn_blocks(shape: Shape) -> Blocks {
    get_blocks(shape, 0)
}

/// Anchor column for a freshly spawned piece
pub fn spawn_x(grid_width: usize) -> i32 {
    (grid_width / 2) as i32 - 1
}
