//! Loading indicator component renderer.
//!
//! This module renders the loading indicator shown from plugin load until the
//! catalog fetch settles. It is rendered exclusively: while loading, no other
//! UI element is drawn.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LoadingInfo;

/// Renders the loading indicator, replacing all other output.
///
/// Displays the loading message horizontally centered at the vertical middle
/// of the pane, with a dimmed hint line beneath it.
///
/// # Layout
///
/// ```text
///
///            ⏳ Loading the library...
///        waiting for the catalog endpoint
///
/// ```
pub fn render_loading(loading: &LoadingInfo, theme: &Theme, rows: usize, cols: usize) {
    let message = format!("⏳ {}", loading.message);
    let msg_len = message.chars().count();
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;
    let middle_row = (rows / 2).max(1);

    position_cursor(middle_row, 1);
    print!("{}", Theme::fg(&theme.colors.loading_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let hint = "waiting for the catalog endpoint";
    let hint_len = hint.chars().count();
    let hint_padding = (cols.saturating_sub(hint_len)) / 2;

    position_cursor(middle_row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(hint_padding));
    print!("{hint}");
    print!("{}", " ".repeat(cols.saturating_sub(hint_padding + hint_len)));
    print!("{}", Theme::reset());
}
