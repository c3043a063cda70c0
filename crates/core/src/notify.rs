//! Notification sink - the collaborator interface the core calls into.
//!
//! Score, move, and goal counters live outside the core. The engine and
//! controller report what happened through this trait and own no
//! knowledge of how the numbers are rendered.

use tilematch_types::Category;

/// Callbacks the core invokes while a board is constructed and resolved.
///
/// All methods default to no-ops so a sink only implements what it needs.
pub trait NotificationSink {
    /// The board was built with `count` initial pieces (blockers included).
    fn on_goals_initialized(&mut self, _count: u32) {}

    /// The starting move budget derived from the initial piece count.
    fn on_moves_initialized(&mut self, _count: u32) {}

    /// A player-initiated swap was accepted. Fires exactly once per swap;
    /// cascaded clears caused by gravity consume no additional moves.
    fn on_move_consumed(&mut self) {}

    /// A piece was cleared by matching.
    fn on_piece_cleared(&mut self, _category: Category, _x: i32, _y: i32) {}

    /// Points awarded for a cleared piece.
    fn on_score_awarded(&mut self, _points: u32) {}
}

/// A sink that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {}
