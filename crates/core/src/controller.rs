//! Board controller - the public facade over grid, engine, and sink.
//!
//! The controller accepts player intents (select, drag, release), runs
//! them through the cascade engine, and reports to the injected
//! notification sink. It owns the selection state: at most one clicked
//! cell and one drag target at a time.

use tilematch_types::INITIAL_MOVES_DIVISOR;

use crate::cascade::{CascadeConfig, CascadeEngine, SwapOutcome};
use crate::grid::Grid;
use crate::layout::{self, LayoutError};
use crate::notify::NotificationSink;
use crate::snapshot::BoardSnapshot;
use crate::swap;

/// The pending player selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Selection {
    clicked: Option<(i32, i32)>,
    target: Option<(i32, i32)>,
}

/// Public-facing board facade.
///
/// Generic over the sink so collaborators are injected at construction
/// instead of living in process-wide singletons.
#[derive(Debug)]
pub struct BoardController<S: NotificationSink> {
    grid: Grid,
    engine: CascadeEngine,
    selection: Selection,
    sink: S,
}

impl<S: NotificationSink> BoardController<S> {
    /// Build a board from a display-order layout matrix.
    ///
    /// Fails fast on a malformed matrix. On success the sink is told the
    /// initial goal count (one per piece) and the starting move budget.
    pub fn from_layout(
        rows: &[Vec<i32>],
        config: CascadeConfig,
        mut sink: S,
    ) -> Result<Self, LayoutError> {
        let (grid, piece_count) = layout::build_grid(rows)?;
        sink.on_goals_initialized(piece_count);
        sink.on_moves_initialized(piece_count / INITIAL_MOVES_DIVISOR);
        Ok(Self {
            grid,
            engine: CascadeEngine::new(config),
            selection: Selection::default(),
            sink,
        })
    }

    /// Set the pending clicked cell, if none is set yet.
    ///
    /// Ignored while a resolution is in flight or the coordinate is off
    /// the grid.
    pub fn select_cell(&mut self, x: i32, y: i32) {
        if self.engine.is_input_locked() || self.selection.clicked.is_some() {
            return;
        }
        if self.grid.is_within_bounds(x, y) {
            self.selection.clicked = Some((x, y));
        }
    }

    /// Set the drag target; only a cell adjacent to the pending clicked
    /// cell is accepted.
    pub fn drag_to_cell(&mut self, x: i32, y: i32) {
        if let Some(clicked) = self.selection.clicked {
            if swap::is_adjacent(clicked, (x, y)) {
                self.selection.target = Some((x, y));
            }
        }
    }

    /// Run the swap sequence when both a clicked cell and a target are
    /// set. The selection is cleared regardless of the outcome.
    pub fn release(&mut self) -> Option<SwapOutcome> {
        let outcome = match (self.selection.clicked, self.selection.target) {
            (Some(clicked), Some(target)) => {
                Some(self.engine.try_swap(&mut self.grid, clicked, target, &mut self.sink))
            }
            _ => None,
        };
        self.selection = Selection::default();
        outcome
    }

    /// The currently clicked cell, if any.
    pub fn selected_cell(&self) -> Option<(i32, i32)> {
        self.selection.clicked
    }

    pub fn is_input_locked(&self) -> bool {
        self.engine.is_input_locked()
    }

    /// Read-only copy of the board for rendering layers.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_grid(&self.grid)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
