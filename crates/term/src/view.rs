//! Game view - turns a board snapshot into styled terminal lines.
//!
//! The board is drawn with the highest row first so the internal
//! bottom-up y axis appears the right way up on screen.

use crossterm::style::{Color, Stylize};

use tilematch_core::{BoardSnapshot, CellSnapshot};
use tilematch_types::{Category, PieceKind};

/// Stateless renderer from snapshot to text lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the board plus status and help lines.
    ///
    /// `cursor` is the cell the player is hovering; `selected` the
    /// pending clicked cell, drawn highlighted.
    pub fn render(
        &self,
        snapshot: &BoardSnapshot,
        cursor: (i32, i32),
        selected: Option<(i32, i32)>,
        status: &str,
    ) -> Vec<String> {
        let mut lines = Vec::with_capacity(snapshot.height() as usize + 3);

        for y in (0..snapshot.height()).rev() {
            let mut line = String::new();
            for x in 0..snapshot.width() {
                let glyph = match snapshot.get(x, y) {
                    Some(cell) => cell_glyph(cell),
                    None => " ".to_string(),
                };
                let (open, close) = if (x, y) == cursor {
                    ('[', ']')
                } else if selected == Some((x, y)) {
                    ('(', ')')
                } else {
                    (' ', ' ')
                };
                line.push(open);
                line.push_str(&glyph);
                line.push(close);
            }
            lines.push(line);
        }

        lines.push(String::new());
        lines.push(status.to_string());
        lines.push("arrows move | space select+swap | esc cancel | q quit".to_string());
        lines
    }
}

fn cell_glyph(cell: CellSnapshot) -> String {
    match cell {
        CellSnapshot::Empty => "·".to_string(),
        CellSnapshot::OutOfPlay => " ".to_string(),
        CellSnapshot::Piece { category, kind } => {
            let glyph = match kind {
                PieceKind::Regular => '●',
                PieceKind::Blocked => '▓',
            };
            glyph.with(category_color(category)).to_string()
        }
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::LightBlue => Color::Cyan,
        Category::Blue => Color::Blue,
        Category::Pink => Color::Magenta,
        Category::Purple => Color::DarkMagenta,
        Category::Green => Color::Green,
        Category::Red => Color::Red,
        Category::Yellow => Color::Yellow,
        Category::Wild => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilematch_core::{BoardController, CascadeConfig, NullSink};

    #[test]
    fn top_layout_row_renders_first() {
        // Top row Red, bottom row Blue.
        let rows = vec![vec![6], vec![2]];
        let controller =
            BoardController::from_layout(&rows, CascadeConfig::default(), NullSink)
                .expect("valid layout");

        let view = GameView::new();
        let lines = view.render(&controller.snapshot(), (0, 0), None, "status");

        // Two board lines, a blank line, status, help.
        assert_eq!(lines.len(), 5);
        assert!(lines[2].is_empty());
        assert_eq!(lines[3], "status");
    }

    #[test]
    fn cursor_and_selection_markers_differ() {
        let rows = vec![vec![6, 2]];
        let controller =
            BoardController::from_layout(&rows, CascadeConfig::default(), NullSink)
                .expect("valid layout");

        let view = GameView::new();
        let lines = view.render(&controller.snapshot(), (0, 0), Some((1, 0)), "");
        assert!(lines[0].starts_with('['));
        assert!(lines[0].contains('('));
    }
}
