//! Rendering surface driven by the game.
//!
//! The core never draws anything itself. It calls [`BoardView::render`]
//! once per new board and [`BoardView::update_cell`] once per reveal.

use crate::games::trivia::{Board, CellRef};
use std::io::Write;
use tracing::{instrument, warn};

/// External rendering surface.
pub trait BoardView {
    /// Draws a freshly built board.
    fn render(&mut self, board: &Board);

    /// Redraws a single cell with its new text.
    fn update_cell(&mut self, cell: CellRef, text: &str);
}

/// Text shown in a cell nobody has revealed yet.
pub const HIDDEN_MARK: &str = "?";

/// Plain-text board view writing to any `Write`.
///
/// The grid is one header row of titles followed by one row per clue.
/// Columns are fixed-width; longer text is cut with `…`.
#[derive(Debug)]
pub struct TextView<W> {
    out: W,
    column_width: usize,
}

impl<W: Write> TextView<W> {
    /// Default column width in characters.
    pub const DEFAULT_COLUMN_WIDTH: usize = 18;

    /// Creates a view with the default column width.
    pub fn new(out: W) -> Self {
        Self::with_column_width(out, Self::DEFAULT_COLUMN_WIDTH)
    }

    /// Creates a view with a custom column width (at least 4).
    pub fn with_column_width(out: W, column_width: usize) -> Self {
        Self {
            out,
            column_width: column_width.max(4),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Formats the full grid, reflecting every clue's current state.
    pub fn format_board(&self, board: &Board) -> String {
        let mut lines = Vec::with_capacity(board.height() + 2);

        let header: Vec<_> = board
            .categories()
            .iter()
            .enumerate()
            .map(|(i, c)| self.cell(&format!("{}. {}", i, c.title())))
            .collect();
        lines.push(header.join(" | "));
        lines.push(vec!["-".repeat(self.column_width); board.width()].join("-+-"));

        for row in 0..board.height() {
            let cells: Vec<_> = (0..board.width())
                .map(|col| {
                    let text = board
                        .clue(CellRef::new(col, row))
                        .and_then(|clue| clue.visible_text())
                        .unwrap_or(HIDDEN_MARK);
                    self.cell(text)
                })
                .collect();
            lines.push(cells.join(" | "));
        }

        lines.join("\n")
    }

    fn cell(&self, text: &str) -> String {
        let width = self.column_width;
        let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let len = flat.chars().count();
        if len > width {
            let cut: String = flat.chars().take(width - 1).collect();
            format!("{}…", cut)
        } else {
            format!("{}{}", flat, " ".repeat(width - len))
        }
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to write to board view");
        }
    }
}

impl<W: Write> BoardView for TextView<W> {
    #[instrument(skip_all, fields(width = board.width(), height = board.height()))]
    fn render(&mut self, board: &Board) {
        let grid = self.format_board(board);
        self.emit(&grid);
    }

    #[instrument(skip(self, text), fields(cell = %cell))]
    fn update_cell(&mut self, cell: CellRef, text: &str) {
        let line = format!("[{}] {}", cell, text);
        self.emit(&line);
    }
}
