//! The life and aging rules, as pure functions over a [`Grid`] snapshot.
//!
//! Each function computes one cell's next value from the current grid
//! contents and is meant to be driven through [`Grid::transform`], which
//! guarantees every cell sees the same fully-settled generation.

use crate::grid::Grid;
use crate::CellValue;
use crate::Coord;

/// Count the live cells among the 8 Moore neighbors of `(x, y)`.
///
/// Neighbors that fall off the grid read as dead. This is the edge policy,
/// not an error: the world behaves as if surrounded by an infinite dead
/// border. Only a *direct* out-of-bounds access through [`Grid::read`] is an
/// error.
pub fn neighbor_count<G: Grid>(grid: &G, x: Coord, y: Coord) -> u8 {
    let mut pop = 0;

    for yi in y - 1..=y + 1 {
        for xi in x - 1..=x + 1 {
            if xi == x && yi == y {
                continue;
            }

            if grid.read(xi, yi).unwrap_or(0) > 0 {
                pop += 1;
            }
        }
    }

    pop
}

/// The life rule: birth on exactly 3 neighbors, survival on 2 or 3.
///
/// A surviving cell keeps its current value, so age carries forward across
/// generations. A newborn starts at `1`. Everything else dies to `0`.
pub fn life<G: Grid>(grid: &G, x: Coord, y: Coord) -> CellValue {
    let pop = neighbor_count(grid, x, y);
    let v = grid.read(x, y).unwrap_or(0);

    if pop == 3 || (pop == 2 && v > 0) {
        if v > 0 { v } else { 1 }
    } else {
        0
    }
}

/// The aging rule: bump a live cell's value by `step`, saturating below the
/// top of range. Dead cells and cells already at `256 - step` or above are
/// left untouched.
pub fn age<G: Grid>(grid: &G, x: Coord, y: Coord, step: CellValue) -> CellValue {
    let v = grid.read(x, y).unwrap_or(0);

    if v > 0 && (v as u16) < 256 - step as u16 {
        v + step
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::FlatGrid;

    fn grid_with(cells: &[(Coord, Coord, CellValue)]) -> FlatGrid {
        let mut grid = FlatGrid::new(5, 5);

        for &(x, y, v) in cells {
            grid.write(x, y, v).unwrap();
        }

        grid
    }

    #[test]
    fn neighbor_count_full_ring() {
        let grid = grid_with(&[
            (1, 1, 1),
            (2, 1, 1),
            (3, 1, 1),
            (1, 2, 1),
            (3, 2, 1),
            (1, 3, 1),
            (2, 3, 1),
            (3, 3, 1),
        ]);

        // The center cell itself is excluded from the count
        assert_eq!(neighbor_count(&grid, 2, 2), 8);
    }

    #[test]
    fn neighbor_count_treats_the_border_as_dead() {
        let grid = grid_with(&[(0, 1, 1), (1, 0, 1)]);

        // 5 of (0, 0)'s neighbors are off-grid; they contribute nothing
        assert_eq!(neighbor_count(&grid, 0, 0), 2);
    }

    #[test]
    fn isolated_cell_dies() {
        let grid = grid_with(&[(2, 2, 99)]);

        assert_eq!(life(&grid, 2, 2), 0);
    }

    #[test]
    fn birth_starts_at_one() {
        let grid = grid_with(&[(1, 1, 40), (2, 1, 80), (3, 1, 120)]);

        assert_eq!(life(&grid, 2, 2), 1);
    }

    #[test]
    fn survivor_keeps_its_value() {
        // (2, 2) has exactly two live neighbors
        let grid = grid_with(&[(1, 1, 10), (3, 3, 10), (2, 2, 200)]);

        assert_eq!(life(&grid, 2, 2), 200);
    }

    #[test]
    fn overcrowded_cell_dies() {
        let grid = grid_with(&[(1, 1, 1), (2, 1, 1), (3, 1, 1), (1, 2, 1), (2, 2, 50)]);

        assert_eq!(life(&grid, 2, 2), 0);
    }

    #[test]
    fn age_bumps_live_cells() {
        let grid = grid_with(&[(2, 2, 30)]);

        assert_eq!(age(&grid, 2, 2, 10), 40);
    }

    #[test]
    fn age_ignores_dead_cells() {
        let grid = grid_with(&[]);

        assert_eq!(age(&grid, 2, 2, 10), 0);
    }

    #[test]
    fn age_saturates() {
        // 245 < 246 so one more bump lands on 255; 246 and up stay put
        let grid = grid_with(&[(0, 0, 245), (1, 0, 246), (2, 0, 255)]);

        assert_eq!(age(&grid, 0, 0, 10), 255);
        assert_eq!(age(&grid, 1, 0, 10), 246);
        assert_eq!(age(&grid, 2, 0, 10), 255);
    }

    #[test]
    fn age_with_max_step_never_wraps() {
        // With step 255 no live value satisfies `v < 256 - step`, so every
        // cell is left alone rather than overflowing
        let grid = grid_with(&[(0, 0, 1), (1, 0, 200)]);

        assert_eq!(age(&grid, 0, 0, 255), 1);
        assert_eq!(age(&grid, 1, 0, 255), 200);
    }
}
