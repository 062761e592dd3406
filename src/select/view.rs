//! Grid rendering: project the model onto the output surface.
//!
//! Frame assembly is pure: `frame` maps a model to lines; the only
//! effect is handing those lines to the surface. Every dispatch rebuilds
//! the full frame; the grid is at most a handful of lines, so there is
//! nothing to diff.

use std::fmt::Display;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::Error;
use crate::mvu::View;
use crate::term::{Line, Span, Surface};

use super::state::{COLUMN_WIDTH, ITEMS_PER_COLUMN, SelectorModel, index_at};

/// Keybinding hint shown above the grid.
pub(crate) const INSTRUCTIONS: &str =
    "Use arrows or hjkl to navigate, space to select, enter to confirm, esc to cancel";

/// Marker for a selected item: check glyph plus a space.
const SELECTED_MARK: &str = "✓ ";

/// The selector's view. Owns the surface it draws on.
pub struct SelectorView<S> {
    surface: S,
}

impl<S: Surface> SelectorView<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }
}

impl<T, S> View<SelectorModel<T>> for SelectorView<S>
where
    T: Display + PartialEq,
    S: Surface,
{
    fn render(&mut self, model: SelectorModel<T>) -> Result<SelectorModel<T>, Error> {
        // A completed session emits nothing.
        if model.is_completed() {
            return Ok(model);
        }

        self.surface.clear().map_err(Error::Output)?;
        for line in frame(&model) {
            self.surface.write_line(&line).map_err(Error::Output)?;
        }
        self.surface.flush().map_err(Error::Output)?;
        Ok(model)
    }
}

/// Assemble the full frame for a model: title block, instruction line,
/// then the grid, row 0 first.
pub(crate) fn frame<T: Display + PartialEq>(model: &SelectorModel<T>) -> Vec<Line> {
    let mut lines = Vec::new();

    if !model.title().is_empty() {
        lines.push(Line::raw(model.title()));
        lines.push(Line::default());
    }
    lines.push(Line::raw(INSTRUCTIONS));
    lines.push(Line::default());

    for row in 0..model.total_rows() {
        let mut line = Line::default();
        for col in 0..ITEMS_PER_COLUMN {
            line.push(cell(model, index_at(row, col)));
        }
        lines.push(line);
    }

    lines
}

/// One grid cell: cursor marker, selection marker, truncated item text,
/// right-padded to exactly [`COLUMN_WIDTH`] display cells. The cursor
/// cell is painted inverse; cells past the last choice are blank.
fn cell<T: Display + PartialEq>(model: &SelectorModel<T>, index: usize) -> Span {
    let Some(item) = model.choices().get(index) else {
        return Span::raw(" ".repeat(COLUMN_WIDTH));
    };

    let cursor_mark = if index == model.current_index() { "> " } else { "  " };
    let selected_mark = if model.selected().contains(item) { SELECTED_MARK } else { "  " };
    let text = truncate(&item.to_string(), COLUMN_WIDTH - 5, COLUMN_WIDTH - 8);

    let mut content = format!("{cursor_mark}{selected_mark}{text}");
    let pad = COLUMN_WIDTH.saturating_sub(content.width());
    content.push_str(&" ".repeat(pad));

    if index == model.current_index() {
        Span::inverse(content)
    } else {
        Span::raw(content)
    }
}

/// Truncate to `keep` display cells plus an ellipsis marker when the text
/// is wider than `max`. Width-aware: wide glyphs count as two cells.
fn truncate(text: &str, max: usize, keep: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > keep {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}
