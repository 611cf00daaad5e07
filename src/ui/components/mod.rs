//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with count and sort marker
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`table`]: Book list with columns (TITLE, PUBLISHED)
//! - [`book`]: Single book row, the pure rendering leaf
//! - [`loading`]: Loading indicator shown while the fetch is pending
//! - [`empty`]: Empty state message for no visible books
//!
//! # Layout Modes
//!
//! The module provides two high-level layout functions:
//!
//! - [`render_normal_mode`]: Header + Table + Footer
//! - [`render_search_mode`]: Header + `SearchBar` + Table + Footer
//!
//! The loading indicator is not a layout mode: when active it replaces both
//! (see [`render_loading`]).

mod book;
mod empty;
mod footer;
mod header;
mod loading;
mod search;
mod table;

pub use loading::render_loading;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/table, table/footer).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the book list content area: rows, or the empty state message.
fn render_content(row: usize, vm: &UIViewModel, theme: &Theme, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        render_empty_state(row + 1, empty, theme, cols);
    } else {
        render_table_rows(row, &vm.display_items, theme, cols);
    }
}

/// Renders the normal mode layout (no search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Column Headers]
/// [Book Rows | Empty State]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// Reserves 6 lines for chrome (blank, header, 2 borders, column header row,
/// footer); the rest belongs to the list.
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_table_headers(current_row, theme);
    render_content(current_row, vm, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the search mode layout (with search bar).
///
/// Same as [`render_normal_mode`] with a 3-line search box between the
/// header border and the column headers, for 9 lines of chrome in total.
pub fn render_search_mode(
    vm: &UIViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    current_row = render_table_headers(current_row, theme);
    render_content(current_row, vm, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
