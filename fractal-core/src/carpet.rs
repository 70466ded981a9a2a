//! Sierpiński carpet generation.
//!
//! The carpet is built by recursive subdivision of an all-`Filled` grid:
//! each block splits into a 3 × 3 arrangement of sub-blocks, the center
//! sub-block is cleared in one bulk operation, and the remaining eight are
//! subdivided the same way, until blocks reach side 3 and only the single
//! center cell is cleared.

use crate::grid::{Cell, Grid};
use thiserror::Error;

/// Error returned for carpet sizes the subdivision cannot tile.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CarpetError {
    #[error("carpet size must be a power of 3 and at least 3, got {0}")]
    InvalidSize(usize),
}

/// Generates a Sierpiński carpet of side `size`.
///
/// `size` must be `3^k` for some `k >= 1`: repeated division by 3 has to
/// reach exactly 3 for the subdivision to tile the grid. Any other size
/// (including 0, 1 and 2) is rejected with [`CarpetError::InvalidSize`].
///
/// The returned grid carries no interior mutability; repeated calls with
/// the same `size` produce equal grids.
pub fn generate(size: usize) -> Result<Grid, CarpetError> {
    if !is_power_of_three(size) {
        return Err(CarpetError::InvalidSize(size));
    }

    let mut grid = Grid::filled(size);
    subdivide(&mut grid, 0, 0, size);
    Ok(grid)
}

fn is_power_of_three(size: usize) -> bool {
    if size < 3 {
        return false;
    }
    let mut n = size;
    while n % 3 == 0 {
        n /= 3;
    }
    n == 1
}

fn subdivide(grid: &mut Grid, row: usize, col: usize, block: usize) {
    if block == 3 {
        grid.set(row + 1, col + 1, Cell::Empty);
        return;
    }

    let sub = block / 3;
    for i in 0..3 {
        for j in 0..3 {
            let (r, c) = (row + sub * i, col + sub * j);
            match (i, j) {
                // The center sub-block is removed outright, never subdivided.
                (1, 1) => grid.fill_block(r, c, sub, Cell::Empty),
                _ => subdivide(grid, r, c, sub),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_3_clears_only_the_center_cell() {
        let grid = generate(3).unwrap();

        for row in 0..3 {
            for col in 0..3 {
                let expected = if (row, col) == (1, 1) {
                    Cell::Empty
                } else {
                    Cell::Filled
                };
                assert_eq!(grid.get(row, col), expected, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn size_9_outer_blocks_repeat_the_base_pattern() {
        let grid = generate(9).unwrap();

        for bi in 0..3 {
            for bj in 0..3 {
                if (bi, bj) == (1, 1) {
                    continue;
                }
                // Each outer 3x3 block is the size-3 carpet: only its
                // center cell is empty.
                for i in 0..3 {
                    for j in 0..3 {
                        let expected = if (i, j) == (1, 1) {
                            Cell::Empty
                        } else {
                            Cell::Filled
                        };
                        assert_eq!(grid.get(bi * 3 + i, bj * 3 + j), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn size_9_center_block_is_fully_empty() {
        let grid = generate(9).unwrap();

        for row in 3..6 {
            for col in 3..6 {
                assert_eq!(grid.get(row, col), Cell::Empty, "cell ({row}, {col})");
            }
        }
        // 9 center cells plus one per outer block.
        assert_eq!(grid.count(Cell::Empty), 9 + 8);
    }

    #[test]
    fn filled_count_is_eight_to_the_k() {
        // A carpet of side 3^k keeps exactly 8^k filled cells.
        assert_eq!(generate(3).unwrap().count(Cell::Filled), 8);
        assert_eq!(generate(9).unwrap().count(Cell::Filled), 64);
        assert_eq!(generate(27).unwrap().count(Cell::Filled), 512);
    }

    #[test]
    fn rejects_sizes_that_are_not_powers_of_three() {
        for size in [0, 1, 2, 4, 6, 12, 26, 30] {
            assert_eq!(generate(size), Err(CarpetError::InvalidSize(size)));
        }
    }

    #[test]
    fn generation_is_idempotent() {
        let a = generate(27).unwrap();
        let b = generate(27).unwrap();
        assert_eq!(a, b);
    }
}
