use pattern_paint::color::ColorValue;
use pattern_paint::geometry::{line_cells, CellPos, Region};
use pattern_paint::grid::Grid;

// Helper to build a grid with a few recognizable cells
fn create_test_grid() -> Grid {
    let mut grid = Grid::new(4, 3);
    grid.paint_cell(CellPos::new(0, 0), &ColorValue::new("#ff0000"));
    grid.paint_cell(CellPos::new(3, 2), &ColorValue::new("#00ff00"));
    grid.toggle_used(CellPos::new(2, 1));
    grid
}

#[test]
fn test_new_grid_is_blank() {
    let grid = Grid::new(5, 4);
    assert_eq!(grid.cols(), 5);
    assert_eq!(grid.rows(), 4);
    for cell in grid.cells() {
        assert!(cell.used);
        assert_eq!(cell.color, None);
    }
}

#[test]
fn test_resize_preserves_overlap() {
    let grid = create_test_grid();

    // Grow: every old position survives, new positions are blank
    let grown = grid.resized(6, 5);
    for y in 0..3 {
        for x in 0..4 {
            let pos = CellPos::new(x, y);
            assert_eq!(grown.cell(pos), grid.cell(pos), "overlap mismatch at {pos:?}");
        }
    }
    for y in 0..5 {
        for x in 0..6 {
            if x >= 4 || y >= 3 {
                let cell = grown.cell(CellPos::new(x, y)).unwrap();
                assert!(cell.used);
                assert_eq!(cell.color, None);
            }
        }
    }

    // Shrink: the surviving corner is untouched
    let shrunk = grid.resized(2, 2);
    for y in 0..2 {
        for x in 0..2 {
            let pos = CellPos::new(x, y);
            assert_eq!(shrunk.cell(pos), grid.cell(pos));
        }
    }
}

#[test]
fn test_resize_does_not_mutate_source() {
    let grid = create_test_grid();
    let copy = grid.clone();
    let _ = grid.resized(10, 10);
    assert_eq!(grid, copy);
}

#[test]
fn test_clone_is_independent() {
    let grid = create_test_grid();
    let mut clone = grid.clone();
    clone.paint_cell(CellPos::new(1, 1), &ColorValue::new("#123456"));
    clone.toggle_used(CellPos::new(0, 0));
    assert_ne!(grid, clone);
    assert_eq!(grid.cell(CellPos::new(1, 1)).unwrap().color, None);
    assert!(grid.cell(CellPos::new(0, 0)).unwrap().used);
}

#[test]
fn test_rotation_moves_cells_clockwise() {
    let mut grid = Grid::new(5, 5);
    // 2 wide, 3 tall block with distinct colors
    let colors: Vec<Vec<ColorValue>> = (0..3)
        .map(|y| (0..2).map(|x| ColorValue::new(format!("#0000{y}{x}"))).collect())
        .collect();
    for (y, row) in colors.iter().enumerate() {
        for (x, color) in row.iter().enumerate() {
            grid.paint_cell(CellPos::new(1 + x, 1 + y), color);
        }
    }

    let region = Region::new(CellPos::new(1, 1), CellPos::new(2, 3));
    let rotated = grid.rotate_region(region).expect("rotation should fit");

    // 2x3 becomes 3x2, anchored at the same top-left corner
    assert_eq!(rotated, Region::new(CellPos::new(1, 1), CellPos::new(3, 2)));
    // The source block's bottom-left cell lands at the target's top-left
    assert_eq!(
        grid.cell(CellPos::new(1, 1)).unwrap().color,
        Some(colors[2][0].clone())
    );
    // ... and its top-left ends up in the target's top-right
    assert_eq!(
        grid.cell(CellPos::new(3, 1)).unwrap().color,
        Some(colors[0][0].clone())
    );
}

#[test]
fn test_rotation_round_trip() {
    let mut grid = Grid::new(4, 4);
    for y in 0..3 {
        for x in 0..3 {
            grid.paint_cell(CellPos::new(x, y), &ColorValue::new(format!("#00{y}{x}00")));
        }
    }
    grid.toggle_used(CellPos::new(1, 1));
    let original = grid.clone();

    let mut region = Region::new(CellPos::new(0, 0), CellPos::new(2, 2));
    for _ in 0..4 {
        region = grid.rotate_region(region).expect("square region always fits");
    }
    assert_eq!(grid, original);
    assert_eq!(region, Region::new(CellPos::new(0, 0), CellPos::new(2, 2)));
}

#[test]
fn test_rotation_bounds_rejection() {
    let mut grid = create_test_grid();
    let before = grid.clone();

    // 2 wide, 3 tall anchored at x=2: rotated footprint needs x up to 4,
    // past the last column of a 4-wide grid
    let region = Region::new(CellPos::new(2, 0), CellPos::new(3, 2));
    assert_eq!(grid.rotate_region(region), None);
    assert_eq!(grid, before, "failed rotation must leave the grid untouched");
}

#[test]
fn test_exclude_clears_color_permanently() {
    let mut grid = Grid::new(3, 3);
    let pos = CellPos::new(1, 1);
    grid.paint_cell(pos, &ColorValue::new("#ff0000"));

    grid.toggle_used(pos);
    let cell = grid.cell(pos).unwrap();
    assert!(!cell.used);
    assert_eq!(cell.color, None);

    grid.toggle_used(pos);
    let cell = grid.cell(pos).unwrap();
    assert!(cell.used);
    assert_eq!(cell.color, None, "color is not restored on re-include");
}

#[test]
fn test_paint_skips_unused_cells() {
    let mut grid = Grid::new(3, 3);
    let pos = CellPos::new(0, 2);
    grid.toggle_used(pos);
    assert!(!grid.paint_cell(pos, &ColorValue::new("#ff0000")));
    assert_eq!(grid.cell(pos).unwrap().color, None);
}

#[test]
fn test_fill_region_clamps_to_bounds() {
    let mut grid = Grid::new(3, 3);
    let color = ColorValue::new("#abcdef");
    let region = Region::new(CellPos::new(1, 1), CellPos::new(10, 10));
    assert!(grid.fill_region(region, &color));
    for y in 0..3 {
        for x in 0..3 {
            let expected = if x >= 1 && y >= 1 { Some(color.clone()) } else { None };
            assert_eq!(grid.cell(CellPos::new(x, y)).unwrap().color, expected);
        }
    }
}

#[test]
fn test_line_rasterization_connectivity() {
    let path = line_cells(CellPos::new(0, 0), CellPos::new(5, 2));

    // One cell per x-step, monotonically increasing in x
    assert_eq!(path.len(), 6);
    for (i, pos) in path.iter().enumerate() {
        assert_eq!(pos.x, i);
    }
    assert_eq!(path.first(), Some(&CellPos::new(0, 0)));
    assert_eq!(path.last(), Some(&CellPos::new(5, 2)));

    // Recomputing from the same anchor/endpoint pair is identical
    assert_eq!(path, line_cells(CellPos::new(0, 0), CellPos::new(5, 2)));
}

#[test]
fn test_line_rasterization_steep_and_reverse() {
    let steep = line_cells(CellPos::new(0, 0), CellPos::new(2, 5));
    assert_eq!(steep.len(), 6);
    for (i, pos) in steep.iter().enumerate() {
        assert_eq!(pos.y, i);
    }

    let reverse = line_cells(CellPos::new(5, 2), CellPos::new(0, 0));
    assert_eq!(reverse.len(), 6);
    assert_eq!(reverse.first(), Some(&CellPos::new(5, 2)));
    assert_eq!(reverse.last(), Some(&CellPos::new(0, 0)));
}

#[test]
fn test_single_cell_line() {
    let path = line_cells(CellPos::new(3, 3), CellPos::new(3, 3));
    assert_eq!(path, vec![CellPos::new(3, 3)]);
}
