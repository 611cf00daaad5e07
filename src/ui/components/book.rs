//! Book row renderer, the pure rendering leaf.
//!
//! Given a display item (title, publication line, selection flag, highlight
//! ranges) this module produces one styled terminal row. It holds no state
//! and makes no decisions beyond layout.

use crate::ui::components::table::TITLE_COLUMN_WIDTH;
use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders a single book row at the specified row position.
///
/// Displays one book with:
/// - TITLE column (fixed width, left-aligned)
/// - PUBLISHED column ("Published by {author} in {year}")
/// - Selection highlighting (full row background)
/// - Match highlighting on the title (char ranges)
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Match highlights (unless selected)
/// 3. Normal text color
///
/// The row is padded to fill the entire terminal width so the selection
/// background renders consistently.
///
/// Returns the next available row position (row + 1).
pub fn render_book_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if item.highlight_ranges.is_empty() {
        print!("{}", item.title);
    } else {
        helpers::render_highlighted_text(
            &item.title,
            &item.highlight_ranges,
            theme,
            item.is_selected,
        );
    }

    let title_len = item.title.chars().count();
    print!(
        "{}",
        " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len))
    );

    print!("{}", item.detail);

    let line_len = TITLE_COLUMN_WIDTH + item.detail.chars().count();
    let padding = cols.saturating_sub(line_len);
    print!("{}", " ".repeat(padding));

    print!("{}", Theme::reset());
    row + 1
}
