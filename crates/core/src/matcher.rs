//! Match detection - runs of same-category pieces along board axes.
//!
//! A run is a maximal contiguous sequence of matchable pieces sharing the
//! origin's category along one direction. Axis matches union the two
//! opposite partial runs through a cell; a full-board scan unions the
//! per-cell results with set semantics, so a piece sitting on both a
//! horizontal and a vertical run is reported once.

use std::collections::BTreeMap;

use tilematch_types::Direction;

use crate::grid::Grid;
use crate::piece::Piece;

/// Partial runs on either side of a cell only need two pieces; the
/// combined axis run is what must reach the configured minimum.
const MIN_PARTIAL_RUN: usize = 2;

/// A set of matched pieces keyed by coordinate.
///
/// Backed by an ordered map so unions have set semantics and iteration
/// order is deterministic regardless of scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    pieces: BTreeMap<(i32, i32), Piece>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a piece, keyed by its stamped coordinate.
    pub fn insert(&mut self, piece: Piece) {
        self.pieces.insert(piece.position(), piece);
    }

    /// Union another set into this one.
    pub fn extend(&mut self, other: MatchSet) {
        self.pieces.extend(other.pieces);
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.pieces.contains_key(&(x, y))
    }

    /// Matched pieces in coordinate order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Matched coordinates in order.
    pub fn positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.pieces.keys().copied()
    }

    /// Sorted, deduplicated columns touched by this set.
    pub fn columns(&self) -> Vec<i32> {
        let mut columns: Vec<i32> = self.pieces.keys().map(|&(x, _)| x).collect();
        columns.sort_unstable();
        columns.dedup();
        columns
    }
}

/// Scans a grid for matches of at least the configured length.
#[derive(Debug)]
pub struct MatchFinder<'a> {
    grid: &'a Grid,
    min_match_length: usize,
}

impl<'a> MatchFinder<'a> {
    pub fn new(grid: &'a Grid, min_match_length: usize) -> Self {
        Self {
            grid,
            min_match_length,
        }
    }

    /// Walk from (x, y) one step at a time along `direction`, collecting
    /// pieces whose category matches the origin piece's category.
    ///
    /// The walk stops at the board edge, an empty or out-of-play cell, a
    /// blocked piece, or a category mismatch. Returns `None` when the
    /// origin cell holds no matchable piece or the run (origin included)
    /// is shorter than `min_length`.
    pub fn find_run(
        &self,
        x: i32,
        y: i32,
        direction: Direction,
        min_length: usize,
    ) -> Option<Vec<Piece>> {
        let origin = *self.grid.piece_at(x, y)?;
        if origin.is_blocked() {
            return None;
        }

        let mut run = vec![origin];
        let (dx, dy) = direction.offset();
        let mut step = 1;
        loop {
            let next = match self.grid.piece_at(x + dx * step, y + dy * step) {
                Some(piece) => piece,
                None => break,
            };
            if !next.matches(&origin) {
                break;
            }
            run.push(*next);
            step += 1;
        }

        if run.len() >= min_length {
            Some(run)
        } else {
            None
        }
    }

    /// Union the two opposite partial runs through (x, y) into one axis
    /// run, kept only when the combined unique length reaches the
    /// configured minimum.
    fn find_axis_matches(&self, x: i32, y: i32, axis: [Direction; 2]) -> Option<MatchSet> {
        let mut combined = MatchSet::new();
        for direction in axis {
            if let Some(run) = self.find_run(x, y, direction, MIN_PARTIAL_RUN) {
                for piece in run {
                    combined.insert(piece);
                }
            }
        }
        if combined.len() >= self.min_match_length {
            Some(combined)
        } else {
            None
        }
    }

    pub fn find_horizontal_matches(&self, x: i32, y: i32) -> Option<MatchSet> {
        self.find_axis_matches(x, y, Direction::HORIZONTAL)
    }

    pub fn find_vertical_matches(&self, x: i32, y: i32) -> Option<MatchSet> {
        self.find_axis_matches(x, y, Direction::VERTICAL)
    }

    /// All matches through one cell: the union of its horizontal and
    /// vertical axis runs. Empty when the cell is on no valid run.
    pub fn find_matches_at(&self, x: i32, y: i32) -> MatchSet {
        let mut matches = MatchSet::new();
        if let Some(horizontal) = self.find_horizontal_matches(x, y) {
            matches.extend(horizontal);
        }
        if let Some(vertical) = self.find_vertical_matches(x, y) {
            matches.extend(vertical);
        }
        matches
    }

    /// Every match on the board, deduplicated by coordinate.
    pub fn find_all_matches(&self) -> MatchSet {
        let mut matches = MatchSet::new();
        for (x, y) in self.grid.coordinates() {
            matches.extend(self.find_matches_at(x, y));
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilematch_types::{Category, MIN_MATCH_LENGTH};

    fn row_grid(categories: &[Category]) -> Grid {
        let mut grid = Grid::new(categories.len() as i32, 1);
        for (x, &category) in categories.iter().enumerate() {
            grid.place(Piece::regular(category), x as i32, 0);
        }
        grid
    }

    #[test]
    fn run_shorter_than_minimum_is_none() {
        let grid = row_grid(&[Category::Red, Category::Red, Category::Blue]);
        let finder = MatchFinder::new(&grid, MIN_MATCH_LENGTH);
        assert!(finder.find_run(0, 0, Direction::East, 3).is_none());
        assert!(finder.find_horizontal_matches(0, 0).is_none());
    }

    #[test]
    fn run_of_exact_minimum_is_reported() {
        let grid = row_grid(&[Category::Red, Category::Red, Category::Red]);
        let finder = MatchFinder::new(&grid, MIN_MATCH_LENGTH);

        let run = finder.find_run(0, 0, Direction::East, 3).expect("run");
        assert_eq!(run.len(), 3);

        // The same axis run is visible from its middle cell.
        let matches = finder.find_horizontal_matches(1, 0).expect("matches");
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn run_compares_against_origin_category() {
        // Wild continues the run; the Blue beyond it does not match the
        // Red origin even though it matches the Wild next to it.
        let grid = row_grid(&[
            Category::Red,
            Category::Wild,
            Category::Red,
            Category::Blue,
        ]);
        let finder = MatchFinder::new(&grid, MIN_MATCH_LENGTH);
        let run = finder.find_run(0, 0, Direction::East, 3).expect("run");
        assert_eq!(run.len(), 3);
    }

    #[test]
    fn blocked_piece_interrupts_a_run() {
        let mut grid = Grid::new(5, 1);
        grid.place(Piece::regular(Category::Green), 0, 0);
        grid.place(Piece::regular(Category::Green), 1, 0);
        grid.place(Piece::blocked(Category::Green), 2, 0);
        grid.place(Piece::regular(Category::Green), 3, 0);
        grid.place(Piece::regular(Category::Green), 4, 0);

        let finder = MatchFinder::new(&grid, MIN_MATCH_LENGTH);
        assert!(finder.find_horizontal_matches(0, 0).is_none());
        assert!(finder.find_run(2, 0, Direction::East, 2).is_none());
        assert!(finder.find_all_matches().is_empty());
    }

    #[test]
    fn l_shape_counts_the_corner_once() {
        // 3 Blue horizontal and 3 Blue vertical sharing the corner (0, 0).
        let mut grid = Grid::new(3, 3);
        for x in 0..3 {
            grid.place(Piece::regular(Category::Blue), x, 0);
        }
        for y in 1..3 {
            grid.place(Piece::regular(Category::Blue), 0, y);
        }

        let finder = MatchFinder::new(&grid, MIN_MATCH_LENGTH);
        let matches = finder.find_matches_at(0, 0);
        assert_eq!(matches.len(), 5);
        assert!(matches.contains(0, 0));

        let all = finder.find_all_matches();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn full_scan_is_deterministic() {
        let mut grid = Grid::new(4, 4);
        for x in 0..4 {
            grid.place(Piece::regular(Category::Yellow), x, 2);
        }
        grid.place(Piece::regular(Category::Red), 0, 0);

        let finder = MatchFinder::new(&grid, MIN_MATCH_LENGTH);
        let first = finder.find_all_matches();
        let second = finder.find_all_matches();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
        let positions: Vec<_> = first.positions().collect();
        assert_eq!(positions, vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn empty_cell_yields_no_matches() {
        let grid = Grid::new(3, 3);
        let finder = MatchFinder::new(&grid, MIN_MATCH_LENGTH);
        assert!(finder.find_matches_at(1, 1).is_empty());
        assert!(finder.find_run(1, 1, Direction::North, 1).is_none());
    }
}
