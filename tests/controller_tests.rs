//! Controller tests: the select / drag / release flow and collaborator
//! notifications, end to end through the facade.

use tilematch::core::{BoardController, CascadeConfig, MatchFinder, NotificationSink, SwapOutcome};
use tilematch::types::{Category, MIN_MATCH_LENGTH};

#[derive(Debug, Default)]
struct Counters {
    goals: u32,
    moves: u32,
    moves_consumed: u32,
    cleared: Vec<(Category, i32, i32)>,
    score: u32,
}

impl NotificationSink for Counters {
    fn on_goals_initialized(&mut self, count: u32) {
        self.goals = count;
    }
    fn on_moves_initialized(&mut self, count: u32) {
        self.moves = count;
    }
    fn on_move_consumed(&mut self) {
        self.moves_consumed += 1;
    }
    fn on_piece_cleared(&mut self, category: Category, x: i32, y: i32) {
        self.cleared.push((category, x, y));
    }
    fn on_score_awarded(&mut self, points: u32) {
        self.score += points;
    }
}

// The built-in demo level: ragged playfield, three blockers, in display
// order with row 0 on top.
fn demo_layout() -> Vec<Vec<i32>> {
    vec![
        vec![-9, -9, -9, -9, -9, -9, -9],
        vec![-9, -9, -9, -9, -9, -9, -9],
        vec![-9, 1, -9, -9, -9, -9, -9],
        vec![-9, 2, 1, 1, -9, -9, -9],
        vec![2, 1, 2, 2, 3, 2, -9],
        vec![2, 1, 3, -1, 1, 4, 1],
        vec![4, -3, 1, 1, 2, 1, -5],
    ]
}

#[test]
fn construction_seeds_goal_and_move_counters() {
    let board =
        BoardController::from_layout(&demo_layout(), CascadeConfig::default(), Counters::default())
            .expect("valid layout");

    // 24 initial pieces (blockers included), 24 / 3 = 8 moves.
    assert_eq!(board.sink().goals, 24);
    assert_eq!(board.sink().moves, 8);
}

#[test]
fn demo_layout_starts_stable() {
    let board =
        BoardController::from_layout(&demo_layout(), CascadeConfig::default(), Counters::default())
            .expect("valid layout");
    assert!(MatchFinder::new(board.grid(), MIN_MATCH_LENGTH)
        .find_all_matches()
        .is_empty());
}

#[test]
fn layout_axis_flip_places_top_row_high() {
    let board =
        BoardController::from_layout(&demo_layout(), CascadeConfig::default(), Counters::default())
            .expect("valid layout");

    // Input row 2, column 1 holds code 1 (LightBlue); it must land at
    // internal y = 7 - 1 - 2 = 4.
    let piece = board.grid().piece_at(1, 4).expect("piece at (1, 4)");
    assert_eq!(piece.category, Category::LightBlue);

    // The top two input rows are entirely out of play.
    for y in [5, 6] {
        for x in 0..7 {
            assert!(board.grid().get(x, y).unwrap().is_out_of_play());
        }
    }
}

#[test]
fn full_swap_notifies_collaborators_once_per_piece() {
    // Bottom row Red Red Empty with a Red above the gap.
    let rows = vec![vec![0, 0, 6], vec![6, 6, 0]];
    let mut board =
        BoardController::from_layout(&rows, CascadeConfig::default(), Counters::default())
            .expect("valid layout");

    board.select_cell(2, 1);
    board.drag_to_cell(2, 0);
    let outcome = board.release().expect("swap attempted");

    let report = match outcome {
        SwapOutcome::Completed(report) => report,
        SwapOutcome::Rejected(rejection) => panic!("rejected: {rejection}"),
    };
    assert_eq!(report.total_cleared(), 3);

    // One clear notification per unique piece, one move total.
    assert_eq!(board.sink().cleared.len(), 3);
    assert_eq!(board.sink().moves_consumed, 1);
    assert_eq!(board.sink().score, 30);
    let mut cleared = board.sink().cleared.clone();
    cleared.sort();
    cleared.dedup();
    assert_eq!(cleared.len(), 3, "no duplicate clear notifications");

    // Input unlocks once the cascade reaches its fixed point.
    assert!(!board.is_input_locked());
}

#[test]
fn cascaded_clears_consume_no_extra_moves() {
    let rows = vec![
        vec![0, 0, 7],
        vec![7, 7, 6],
        vec![6, 6, 0],
    ];
    let mut board =
        BoardController::from_layout(&rows, CascadeConfig::default(), Counters::default())
            .expect("valid layout");

    board.select_cell(2, 1);
    board.drag_to_cell(2, 0);
    let outcome = board.release().expect("swap attempted");

    match outcome {
        SwapOutcome::Completed(report) => assert_eq!(report.steps.len(), 2),
        SwapOutcome::Rejected(rejection) => panic!("rejected: {rejection}"),
    }
    assert_eq!(board.sink().cleared.len(), 6);
    assert_eq!(board.sink().moves_consumed, 1, "gravity clears are free");
}

#[test]
fn selection_is_cleared_after_every_release() {
    let rows = vec![vec![6, 2]];
    let mut board =
        BoardController::from_layout(&rows, CascadeConfig::default(), Counters::default())
            .expect("valid layout");

    board.select_cell(0, 0);
    board.drag_to_cell(1, 0);
    board.release();
    assert!(board.selected_cell().is_none());

    // A fresh selection works after an unproductive swap.
    board.select_cell(1, 0);
    assert_eq!(board.selected_cell(), Some((1, 0)));
}

#[test]
fn snapshot_reflects_cascade_results() {
    let rows = vec![vec![0, 0, 6], vec![6, 6, 0]];
    let mut board =
        BoardController::from_layout(&rows, CascadeConfig::default(), Counters::default())
            .expect("valid layout");

    board.select_cell(2, 1);
    board.drag_to_cell(2, 0);
    board.release();

    let snapshot = board.snapshot();
    for y in 0..snapshot.height() {
        for x in 0..snapshot.width() {
            assert_eq!(
                snapshot.get(x, y),
                Some(tilematch::core::CellSnapshot::Empty)
            );
        }
    }
}

#[test]
fn malformed_layouts_fail_at_construction() {
    let ragged = vec![vec![1, 2], vec![1]];
    assert!(
        BoardController::from_layout(&ragged, CascadeConfig::default(), Counters::default())
            .is_err()
    );

    let bad_code = vec![vec![42]];
    assert!(
        BoardController::from_layout(&bad_code, CascadeConfig::default(), Counters::default())
            .is_err()
    );
}
