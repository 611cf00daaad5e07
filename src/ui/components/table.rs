//! Table component renderer.
//!
//! This module renders the book list as a two-column table with TITLE and
//! PUBLISHED columns. Individual rows are delegated to the pure book row
//! renderer.

use crate::ui::components::book::render_book_row;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Fixed width of the TITLE column, including trailing gap.
pub(super) const TITLE_COLUMN_WIDTH: usize = 37;

/// Renders the table column headers at the specified row.
///
/// Displays "TITLE" and "PUBLISHED" column headers with bold styling and
/// theme colors.
///
/// Returns the next available row position (row + 1).
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<width$} {:<}", "TITLE", "PUBLISHED", width = TITLE_COLUMN_WIDTH);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// Iterates through display items and renders each as a book row with proper
/// selection and highlight styling.
///
/// Returns the next available row position (row + number of items).
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_book_row(current_row, item, theme, cols);
    }
    current_row
}
