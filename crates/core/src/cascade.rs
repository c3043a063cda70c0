//! Cascade engine - the clear / collapse / rescan state machine.
//!
//! A legal swap moves the engine from `Idle` through `Swapping` into the
//! `Resolving` / `Settling` loop: clear the current match set, collapse
//! the affected columns, then rescan the whole board. Clears caused by
//! gravity can trigger further clears, so the loop repeats until a scan
//! comes back empty, at which point the engine returns to `Idle` and
//! input is accepted again.
//!
//! Logical placement is immediate. Motion pacing, stagger delays, and
//! particle effects are consumer concerns; the engine records every
//! transition in a [`CascadeReport`] so a renderer can animate from it.

use crate::grid::{Cell, Grid};
use crate::matcher::{MatchFinder, MatchSet};
use crate::notify::NotificationSink;
use crate::piece::Piece;
use crate::swap::{self, SwapRejection};

use tilematch_types::MIN_MATCH_LENGTH;

/// Tuning for one board's resolution behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeConfig {
    /// Minimum run length that counts as a match.
    pub min_match_length: usize,
    /// Undo the exchange when a swap produces no match. Off by default:
    /// an unproductive swap leaves the pieces where they landed.
    pub revert_unproductive_swap: bool,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            min_match_length: MIN_MATCH_LENGTH,
            revert_unproductive_swap: false,
        }
    }
}

/// Phase of the resolution state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeState {
    /// Waiting for a player swap.
    Idle,
    /// Exchanging the two swapped pieces.
    Swapping,
    /// Clearing the current match set and collapsing columns.
    Resolving,
    /// Pieces moved by a collapse have just reached their target rows.
    Settling,
}

/// One piece moved down by a column collapse. `piece` carries the
/// stamped destination coordinate; `from_y` is the row it fell from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceFall {
    pub piece: Piece,
    pub from_y: i32,
}

/// One clear-and-collapse round of a cascade.
#[derive(Debug, Clone, Default)]
pub struct CascadeStep {
    /// Pieces cleared this round, in coordinate order.
    pub cleared: Vec<Piece>,
    /// Falls the collapse produced, grouped by ascending column.
    pub falls: Vec<PieceFall>,
}

/// Everything one accepted swap did to the board.
#[derive(Debug, Clone, Default)]
pub struct CascadeReport {
    /// The swap matched nothing and was undone per configuration.
    pub reverted: bool,
    /// The rounds of the cascade, in order. Empty for an unproductive swap.
    pub steps: Vec<CascadeStep>,
}

impl CascadeReport {
    /// Total pieces cleared across every step.
    pub fn total_cleared(&self) -> usize {
        self.steps.iter().map(|step| step.cleared.len()).sum()
    }
}

/// Result of submitting a swap intent.
#[derive(Debug, Clone)]
pub enum SwapOutcome {
    /// The intent was illegal or arrived while locked; the board is
    /// untouched and no move was consumed.
    Rejected(SwapRejection),
    /// The swap executed; the report describes the resulting cascade.
    Completed(CascadeReport),
}

/// Drives swaps through the clear / collapse / rescan loop.
///
/// At most one resolution is in flight at a time: the engine rejects any
/// swap intent that arrives while it is not `Idle`, and a resolution
/// always runs to its fixed point before control returns.
#[derive(Debug)]
pub struct CascadeEngine {
    config: CascadeConfig,
    state: CascadeState,
}

impl CascadeEngine {
    pub fn new(config: CascadeConfig) -> Self {
        Self {
            config,
            state: CascadeState::Idle,
        }
    }

    pub fn config(&self) -> &CascadeConfig {
        &self.config
    }

    pub fn state(&self) -> CascadeState {
        self.state
    }

    /// Input is locked from the moment a swap is accepted until the
    /// engine returns to `Idle`.
    pub fn is_input_locked(&self) -> bool {
        self.state != CascadeState::Idle
    }

    /// Submit a player swap. Validates legality, exchanges the pieces,
    /// consumes the move, and resolves the cascade to its fixed point.
    pub fn try_swap(
        &mut self,
        grid: &mut Grid,
        clicked: (i32, i32),
        target: (i32, i32),
        sink: &mut dyn NotificationSink,
    ) -> SwapOutcome {
        if self.is_input_locked() {
            return SwapOutcome::Rejected(SwapRejection::InputLocked);
        }
        if let Err(rejection) = swap::check(grid, clicked, target) {
            return SwapOutcome::Rejected(rejection);
        }

        self.state = CascadeState::Swapping;
        // The move is spent once the swap is accepted, before match
        // evaluation; an unproductive swap still costs it.
        sink.on_move_consumed();
        exchange(grid, clicked, target);

        let finder = MatchFinder::new(grid, self.config.min_match_length);
        let mut seed = finder.find_matches_at(clicked.0, clicked.1);
        seed.extend(finder.find_matches_at(target.0, target.1));

        if seed.is_empty() {
            let reverted = self.config.revert_unproductive_swap;
            if reverted {
                exchange(grid, target, clicked);
            }
            self.state = CascadeState::Idle;
            return SwapOutcome::Completed(CascadeReport {
                reverted,
                steps: Vec::new(),
            });
        }

        let steps = self.resolve(grid, seed, sink);
        self.state = CascadeState::Idle;
        SwapOutcome::Completed(CascadeReport {
            reverted: false,
            steps,
        })
    }

    /// The clear / collapse / rescan loop. Runs until a full-board scan
    /// finds nothing, which the finite board guarantees.
    fn resolve(
        &mut self,
        grid: &mut Grid,
        seed: MatchSet,
        sink: &mut dyn NotificationSink,
    ) -> Vec<CascadeStep> {
        let mut steps = Vec::new();
        let mut matches = seed;

        while !matches.is_empty() {
            self.state = CascadeState::Resolving;

            let mut cleared = Vec::with_capacity(matches.len());
            for (x, y) in matches.positions().collect::<Vec<_>>() {
                if let Some(piece) = grid.clear(x, y) {
                    sink.on_piece_cleared(piece.category, x, y);
                    sink.on_score_awarded(piece.score_value);
                    cleared.push(piece);
                }
            }

            let mut falls = Vec::new();
            for column in matches.columns() {
                falls.extend(collapse_column(grid, column));
            }

            self.state = CascadeState::Settling;
            steps.push(CascadeStep { cleared, falls });

            matches = MatchFinder::new(grid, self.config.min_match_length).find_all_matches();
        }

        steps
    }
}

/// Exchange the occupants of two cells. When only one cell holds a
/// piece, that piece moves and the vacated cell becomes empty.
fn exchange(grid: &mut Grid, a: (i32, i32), b: (i32, i32)) {
    let piece_a = grid.clear(a.0, a.1);
    let piece_b = grid.clear(b.0, b.1);
    if let Some(piece) = piece_a {
        grid.place(piece, b.0, b.1);
    }
    if let Some(piece) = piece_b {
        grid.place(piece, a.0, a.1);
    }
}

/// Drop every regular piece in `column` straight down onto the lowest
/// reachable empty row.
///
/// Bottom-to-top write-pointer scan. Blocked pieces and out-of-play
/// cells are barriers: they never move, nothing falls past them, and the
/// write pointer restarts above them. Collapsing an already-settled
/// column returns no falls.
pub fn collapse_column(grid: &mut Grid, column: i32) -> Vec<PieceFall> {
    let mut falls = Vec::new();
    let mut write_y = 0;

    for y in 0..grid.height() {
        let Some(&cell) = grid.get(column, y) else {
            break;
        };
        match cell {
            Cell::OutOfPlay => write_y = y + 1,
            Cell::Piece(piece) if piece.is_blocked() => write_y = y + 1,
            Cell::Empty => {}
            Cell::Piece(_) => {
                if y != write_y {
                    if let Some(piece) = grid.clear(column, y) {
                        grid.place(piece, column, write_y);
                        if let Some(moved) = grid.piece_at(column, write_y) {
                            falls.push(PieceFall {
                                piece: *moved,
                                from_y: y,
                            });
                        }
                    }
                }
                write_y += 1;
            }
        }
    }

    falls
}
