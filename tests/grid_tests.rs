//! Grid tests - bounds-checked access, full-row detection and compaction

use tick_tetris::core::Grid;
use tick_tetris::types::{GridError, Shape, GRID_HEIGHT, GRID_WIDTH};

fn fill_row(grid: &mut Grid, y: i32, shape: Shape) {
    for x in 0..grid.width() as i32 {
        grid.set(x, y, Some(shape)).unwrap();
    }
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);

    for y in 0..GRID_HEIGHT as i32 {
        for x in 0..GRID_WIDTH as i32 {
            assert!(grid.is_vacant(x, y), "Cell ({}, {}) should be vacant", x, y);
            assert_eq!(grid.get(x, y), Ok(None));
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds_is_contract_violation() {
    let grid = Grid::new(10, 20);

    for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 20)] {
        assert_eq!(
            grid.get(x, y),
            Err(GridError::ContractViolation {
                x,
                y,
                width: 10,
                height: 20
            })
        );
    }
}

#[test]
fn test_grid_set_out_of_bounds_is_contract_violation() {
    let mut grid = Grid::new(10, 20);

    assert!(grid.set(-1, 0, Some(Shape::T)).is_err());
    assert!(grid.set(0, -1, Some(Shape::T)).is_err());
    assert!(grid.set(10, 0, Some(Shape::T)).is_err());
    assert!(grid.set(0, 20, Some(Shape::T)).is_err());
    assert!(grid.cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(10, 20);

    grid.set(5, 10, Some(Shape::T)).unwrap();
    assert_eq!(grid.get(5, 10), Ok(Some(Shape::T)));
    assert!(grid.is_occupied(5, 10));
    assert!(!grid.is_vacant(5, 10));

    grid.set(5, 10, None).unwrap();
    assert_eq!(grid.get(5, 10), Ok(None));
}

#[test]
fn test_full_rows_ascending() {
    let mut grid = Grid::new(10, 20);
    assert!(grid.full_rows().is_empty());

    fill_row(&mut grid, 15, Shape::O);
    fill_row(&mut grid, 3, Shape::I);
    fill_row(&mut grid, 19, Shape::T);

    // One short of full
    for x in 0..9 {
        grid.set(x, 10, Some(Shape::S)).unwrap();
    }

    assert_eq!(grid.full_rows(), vec![3, 15, 19]);
}

#[test]
fn test_clear_single_row_shifts_rows_above() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, 5, Shape::T);
    grid.set(0, 3, Some(Shape::I)).unwrap();
    grid.set(1, 4, Some(Shape::O)).unwrap();

    grid.clear_rows(&[5]);

    assert_eq!(grid.get(1, 5), Ok(Some(Shape::O)));
    assert_eq!(grid.get(0, 4), Ok(Some(Shape::I)));
    assert_eq!(grid.get(0, 3), Ok(None));
    assert!(grid.row(0).unwrap().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_clear_adjacent_bottom_rows() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, 18, Shape::I);
    fill_row(&mut grid, 19, Shape::O);
    grid.set(0, 17, Some(Shape::T)).unwrap();

    grid.clear_rows(&grid.full_rows());

    assert_eq!(grid.get(0, 19), Ok(Some(Shape::T)));
    assert!(grid.full_rows().is_empty());
    assert_eq!(grid.cells().iter().filter(|cell| cell.is_some()).count(), 1);
}

#[test]
fn test_clear_non_contiguous_rows_keeps_order() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, 5, Shape::T);
    fill_row(&mut grid, 10, Shape::I);
    fill_row(&mut grid, 15, Shape::O);

    grid.set(0, 4, Some(Shape::J)).unwrap();
    grid.set(0, 9, Some(Shape::L)).unwrap();
    grid.set(0, 14, Some(Shape::S)).unwrap();
    grid.set(0, 19, Some(Shape::Z)).unwrap();

    grid.clear_rows(&[5, 10, 15]);

    // Each marker drops by the number of cleared rows beneath it
    assert_eq!(grid.get(0, 7), Ok(Some(Shape::J)));
    assert_eq!(grid.get(0, 11), Ok(Some(Shape::L)));
    assert_eq!(grid.get(0, 15), Ok(Some(Shape::S)));
    assert_eq!(grid.get(0, 19), Ok(Some(Shape::Z)));
    for y in 0..3 {
        assert!(grid.row(y).unwrap().iter().all(|cell| cell.is_none()));
    }
}

#[test]
fn test_clear_top_row() {
    let mut grid = Grid::from_rows(&["oooo", "t...", "...."]).unwrap();
    grid.clear_rows(&[0]);
    assert_eq!(grid, Grid::from_rows(&["....", "t...", "...."]).unwrap());
}

#[test]
fn test_clear_every_row() {
    let mut grid = Grid::from_rows(&["zzzz", "ssss", "llll"]).unwrap();
    grid.clear_rows(&grid.full_rows());
    assert_eq!(grid, Grid::new(4, 3));
}

#[test]
fn test_rows_keep_their_width() {
    let mut grid = Grid::from_rows(&["i...", "iiii", ".o..", "jjjj"]).unwrap();
    grid.clear_rows(&grid.full_rows());

    assert_eq!(grid.rows().count(), 4);
    assert!(grid.rows().all(|row| row.len() == 4));
    assert_eq!(grid, Grid::from_rows(&["....", "....", "i...", ".o.."]).unwrap());
}

#[test]
fn test_grid_clear() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, 5, Shape::T);

    grid.clear();

    assert!(grid.cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn test_display_dumps_ids() {
    let grid = Grid::from_rows(&["t..", "ioz"]).unwrap();
    assert_eq!(grid.to_string(), "[ 1     ]\n[ 4 7 6 ]\n");
}
