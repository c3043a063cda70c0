//! Match-3 simulation core - pure, deterministic, and testable.
//!
//! This crate contains the board state model, match detection, swap
//! legality, and the clear / collapse / rescan cascade loop. It has
//! zero dependencies on UI, networking, or I/O: rendering, animation
//! pacing, and score/move/goal counters are external collaborators
//! reached through the [`NotificationSink`] trait and the structured
//! [`CascadeReport`] the engine returns.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size cell storage with total-function bounds checks
//! - [`piece`]: the per-tile value object (category, kind, coordinate)
//! - [`matcher`]: run detection along rows and columns
//! - [`swap`]: adjacency and move-safety rules
//! - [`cascade`]: the resolution state machine and column collapse
//! - [`layout`]: building a board from the integer level matrix
//! - [`controller`]: the player-intent facade
//! - [`notify`]: the collaborator interface for counters
//! - [`snapshot`]: read-only board views for renderers
//!
//! # Example
//!
//! ```
//! use tilematch_core::{BoardController, CascadeConfig, NullSink, SwapOutcome};
//!
//! // Bottom row Red Red Empty, with a Red parked above the gap
//! // (layout rows are in display order: top row first).
//! let rows = vec![vec![0, 0, 6], vec![6, 6, 0]];
//! let mut board = BoardController::from_layout(&rows, CascadeConfig::default(), NullSink)
//!     .expect("valid layout");
//!
//! board.select_cell(2, 1);
//! board.drag_to_cell(2, 0);
//! let outcome = board.release().expect("swap attempted");
//!
//! match outcome {
//!     SwapOutcome::Completed(report) => assert_eq!(report.total_cleared(), 3),
//!     SwapOutcome::Rejected(rejection) => panic!("rejected: {rejection}"),
//! }
//! ```

pub mod cascade;
pub mod controller;
pub mod grid;
pub mod layout;
pub mod matcher;
pub mod notify;
pub mod piece;
pub mod snapshot;
pub mod swap;

pub use tilematch_types as types;

// Re-export the commonly used surface.
pub use cascade::{
    collapse_column, CascadeConfig, CascadeEngine, CascadeReport, CascadeState, CascadeStep,
    PieceFall, SwapOutcome,
};
pub use controller::BoardController;
pub use grid::{Cell, Grid};
pub use layout::{build_grid, LayoutError};
pub use matcher::{MatchFinder, MatchSet};
pub use notify::{NotificationSink, NullSink};
pub use piece::Piece;
pub use snapshot::{BoardSnapshot, CellSnapshot};
pub use swap::{is_adjacent, SwapRejection};
