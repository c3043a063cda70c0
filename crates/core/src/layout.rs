//! Level layout - building a grid from the integer matrix format.
//!
//! Levels arrive as a rectangular matrix of codes in display order: row 0
//! is the top visual row. The builder inverts the vertical axis so input
//! row `j` lands at internal `y = height - 1 - j`; levels are authored
//! the way they read on screen.
//!
//! Codes: positive `v` is a regular piece of category `v - 1`, negative
//! `-1..=-8` is a blocked piece of category `|v| - 1`, `0` is an in-play
//! empty cell, and `-9` marks a cell that is permanently out of play.

use std::error::Error;
use std::fmt;

use tilematch_types::{Category, EMPTY_SENTINEL, OUT_OF_PLAY_SENTINEL};

use crate::grid::Grid;
use crate::piece::Piece;

/// Construction-time layout defects. These fail fast: a malformed level
/// matrix is a configuration error, not a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The matrix has no rows or no columns.
    EmptyLayout,
    /// A row's width differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell code outside the sentinel and category ranges.
    InvalidCode { row: usize, column: usize, code: i32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::EmptyLayout => write!(f, "layout has no cells"),
            LayoutError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout row {row} has {found} cells, expected {expected}"
            ),
            LayoutError::InvalidCode { row, column, code } => {
                write!(f, "invalid cell code {code} at row {row}, column {column}")
            }
        }
    }
}

impl Error for LayoutError {}

/// Build a grid from a display-order layout matrix.
///
/// Returns the grid and the number of initial pieces (blockers
/// included), which seeds the goal and move counters.
pub fn build_grid(rows: &[Vec<i32>]) -> Result<(Grid, u32), LayoutError> {
    let height = rows.len();
    let width = rows.first().map(Vec::len).unwrap_or(0);
    if height == 0 || width == 0 {
        return Err(LayoutError::EmptyLayout);
    }
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != width {
            return Err(LayoutError::RaggedRow {
                row,
                expected: width,
                found: cells.len(),
            });
        }
    }

    let mut grid = Grid::new(width as i32, height as i32);
    let mut piece_count = 0u32;

    for (row, cells) in rows.iter().enumerate() {
        let y = (height - 1 - row) as i32;
        for (column, &code) in cells.iter().enumerate() {
            let x = column as i32;
            match piece_for_code(code) {
                Ok(Some(piece)) => {
                    grid.place(piece, x, y);
                    piece_count += 1;
                }
                Ok(None) => {
                    if code == OUT_OF_PLAY_SENTINEL {
                        grid.set_out_of_play(x, y);
                    }
                }
                Err(()) => return Err(LayoutError::InvalidCode { row, column, code }),
            }
        }
    }

    Ok((grid, piece_count))
}

/// Decode one layout code. `Ok(None)` is an empty or out-of-play cell.
fn piece_for_code(code: i32) -> Result<Option<Piece>, ()> {
    if code == OUT_OF_PLAY_SENTINEL || code == EMPTY_SENTINEL {
        return Ok(None);
    }
    let index = (code.abs() - 1) as usize;
    let category = Category::from_index(index).ok_or(())?;
    if code > 0 {
        Ok(Some(Piece::regular(category)))
    } else {
        Ok(Some(Piece::blocked(category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn row_zero_maps_to_the_top_row() {
        let rows = vec![vec![1, 2], vec![3, 4]];
        let (grid, count) = build_grid(&rows).expect("valid layout");

        assert_eq!(count, 4);
        // Input row 0 is the top visual row: internal y = 1.
        assert_eq!(grid.piece_at(0, 1).unwrap().category, Category::LightBlue);
        assert_eq!(grid.piece_at(1, 1).unwrap().category, Category::Blue);
        assert_eq!(grid.piece_at(0, 0).unwrap().category, Category::Pink);
        assert_eq!(grid.piece_at(1, 0).unwrap().category, Category::Purple);
    }

    #[test]
    fn sentinels_map_to_cell_kinds() {
        let rows = vec![vec![-9, 0, -3, 8]];
        let (grid, count) = build_grid(&rows).expect("valid layout");

        assert_eq!(grid.get(0, 0), Some(&Cell::OutOfPlay));
        assert_eq!(grid.get(1, 0), Some(&Cell::Empty));

        let blocker = grid.piece_at(2, 0).expect("blocker");
        assert!(blocker.is_blocked());
        assert_eq!(blocker.category, Category::Pink);

        let wild = grid.piece_at(3, 0).expect("wild");
        assert_eq!(wild.category, Category::Wild);

        // Blockers count toward the initial piece tally.
        assert_eq!(count, 2);
    }

    #[test]
    fn ragged_and_empty_layouts_fail_fast() {
        assert_eq!(build_grid(&[]), Err(LayoutError::EmptyLayout));
        assert_eq!(build_grid(&[vec![]]), Err(LayoutError::EmptyLayout));
        assert_eq!(
            build_grid(&[vec![1, 2], vec![1]]),
            Err(LayoutError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        assert_eq!(
            build_grid(&[vec![9]]),
            Err(LayoutError::InvalidCode {
                row: 0,
                column: 0,
                code: 9
            })
        );
        assert_eq!(
            build_grid(&[vec![-8], vec![-10]]),
            Err(LayoutError::InvalidCode {
                row: 1,
                column: 0,
                code: -10
            })
        );
    }
}
