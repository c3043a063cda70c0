//! Swap legality - adjacency and move-safety rules for player swaps.

use std::fmt;

use crate::grid::{Cell, Grid};

/// Why a proposed swap was refused. Surfaced as a value, never an error
/// propagation: an illegal swap is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapRejection {
    /// A resolution cascade is in flight; the intent is dropped.
    InputLocked,
    /// The two cells are not orthogonal neighbors.
    NotAdjacent,
    /// The clicked cell holds no piece.
    EmptySource,
    /// One of the endpoints holds an immovable blocker.
    BlockedPiece,
    /// One of the endpoints is out of bounds or permanently out of play.
    OutOfPlay,
    /// The swap would lift the clicked piece into an empty cell above it.
    UpwardIntoEmpty,
}

impl fmt::Display for SwapRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SwapRejection::InputLocked => "input is locked during resolution",
            SwapRejection::NotAdjacent => "cells are not adjacent",
            SwapRejection::EmptySource => "no piece at the clicked cell",
            SwapRejection::BlockedPiece => "a blocked piece cannot be swapped",
            SwapRejection::OutOfPlay => "cell is not part of the board",
            SwapRejection::UpwardIntoEmpty => "cannot move a piece upward into an empty cell",
        };
        f.write_str(reason)
    }
}

/// Orthogonal adjacency: Manhattan distance exactly 1, no diagonals.
pub fn is_adjacent(a: (i32, i32), b: (i32, i32)) -> bool {
    (a.0 - b.0).abs() + (a.1 - b.1).abs() == 1
}

/// Check whether swapping `clicked` with `target` is legal on `grid`.
///
/// Rejects non-adjacent pairs, endpoints off the playfield, blocked
/// endpoints, an empty clicked cell, and moves that would lift a piece
/// into an empty cell above its origin (no dragging a gap down to create
/// a piece from nothing).
pub fn check(grid: &Grid, clicked: (i32, i32), target: (i32, i32)) -> Result<(), SwapRejection> {
    if !is_adjacent(clicked, target) {
        return Err(SwapRejection::NotAdjacent);
    }

    for endpoint in [clicked, target] {
        match grid.get(endpoint.0, endpoint.1) {
            None | Some(Cell::OutOfPlay) => return Err(SwapRejection::OutOfPlay),
            Some(Cell::Piece(piece)) if piece.is_blocked() => {
                return Err(SwapRejection::BlockedPiece)
            }
            _ => {}
        }
    }

    if grid.piece_at(clicked.0, clicked.1).is_none() {
        return Err(SwapRejection::EmptySource);
    }

    if target.1 > clicked.1 && grid.is_empty(target.0, target.1) {
        return Err(SwapRejection::UpwardIntoEmpty);
    }

    Ok(())
}
