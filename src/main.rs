//! Terminal match-3 demo (default binary).
//!
//! Renders the board with crossterm and feeds player intents into the
//! core. Pass a path to a JSON level file (a matrix of cell codes in
//! display order) to play a custom layout.

use std::env;
use std::fs;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tilematch::core::{BoardController, CascadeConfig};
use tilematch::term::{map_key, GameView, Hud, PlayerIntent, TerminalRenderer};

/// The built-in demo level, in display order (top row first).
const DEFAULT_LAYOUT: [[i32; 7]; 7] = [
    [-9, -9, -9, -9, -9, -9, -9],
    [-9, -9, -9, -9, -9, -9, -9],
    [-9, 1, -9, -9, -9, -9, -9],
    [-9, 2, 1, 1, -9, -9, -9],
    [2, 1, 2, 2, 3, 2, -9],
    [2, 1, 3, -1, 1, 4, 1],
    [4, -3, 1, 1, 2, 1, -5],
];

fn main() -> Result<()> {
    let rows = match env::args().nth(1) {
        Some(path) => load_layout(&path)?,
        None => DEFAULT_LAYOUT.iter().map(|row| row.to_vec()).collect(),
    };

    let mut board = BoardController::from_layout(&rows, CascadeConfig::default(), Hud::new())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut board);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, board: &mut BoardController<Hud>) -> Result<()> {
    let view = GameView::new();
    let mut cursor = (0i32, 0i32);

    loop {
        let status = board.sink().status_line();
        let lines = view.render(&board.snapshot(), cursor, board.selected_cell(), &status);
        term.draw(&lines)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(intent) = map_key(key) else {
            continue;
        };

        match intent {
            PlayerIntent::Quit => return Ok(()),
            PlayerIntent::Cancel => {
                board.release();
            }
            PlayerIntent::Select => {
                board.select_cell(cursor.0, cursor.1);
            }
            PlayerIntent::Move(direction) => {
                let (dx, dy) = direction.offset();
                let next = (cursor.0 + dx, cursor.1 + dy);
                if board.selected_cell().is_some() {
                    // Moving off a selected cell swaps with the neighbor.
                    board.drag_to_cell(next.0, next.1);
                    board.release();
                } else if board.grid().is_within_bounds(next.0, next.1) {
                    cursor = next;
                }
            }
        }
    }
}

fn load_layout(path: &str) -> Result<Vec<Vec<i32>>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading level file {path}"))?;
    let rows =
        serde_json::from_str(&text).with_context(|| format!("parsing level file {path}"))?;
    Ok(rows)
}
