//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar and active-filter badges
//! - [`footer`]: Keybinding hints
//! - [`cards`]: Country rows with column headings
//! - [`detail`]: Expanded card for the selected country
//! - [`picker`]: Selector box with type-ahead
//! - [`status`]: Loading, failure, and no-match messages
//!
//! # Layout Modes
//!
//! - [`render_browse_mode`]: Header + Cards + Detail + Footer
//! - [`render_picker_mode`]: Header + Picker + Footer
//! - [`render_status_mode`]: Header + Status + Footer
//!
//! Every mode pins the footer to the last two rows.

mod cards;
mod detail;
mod footer;
mod header;
mod picker;
mod status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PickerInfo, StatusInfo, UIViewModel};

use cards::{render_card_headers, render_card_rows};
use detail::render_detail;
use footer::render_footer;
use header::render_header;
use picker::render_picker;
use status::render_status;

/// Rows reserved below the picker box for the footer and its border.
const FOOTER_ROWS: usize = 2;

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Header and its separator; returns the first body row.
fn render_top(vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
    let row = render_header(1, &vm.header, theme, cols);
    render_border(row, &theme.colors.border, cols)
}

/// Footer and its separator on the last two rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.max(FOOTER_ROWS);
    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the card list layout.
///
/// ```text
/// [Header: title + badges]
/// [Border]
/// [Column headings]
/// [Cards]
/// [Border + Detail card, when present]
/// [Border]
/// [Footer]
/// ```
pub fn render_browse_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_top(vm, theme, cols);
    current_row = render_card_headers(current_row, theme, cols);
    render_card_rows(current_row, &vm.cards, theme, cols);

    if let Some(detail) = &vm.detail {
        let detail_row = rows.saturating_sub(FOOTER_ROWS + 3);
        render_border(detail_row.saturating_sub(1), &theme.colors.border, cols);
        render_detail(detail_row, detail, theme, cols);
    }

    render_bottom(vm, theme, cols, rows);
}

/// Renders the picker layout in place of the card list.
pub fn render_picker_mode(vm: &UIViewModel, picker: &PickerInfo, theme: &Theme, cols: usize, rows: usize) {
    let current_row = render_top(vm, theme, cols);
    // Frame (4) and footer take the rest; options fill what remains.
    let max_rows = rows.saturating_sub(current_row - 1 + 4 + FOOTER_ROWS).max(1);
    render_picker(current_row, picker, theme, cols, max_rows);
    render_bottom(vm, theme, cols, rows);
}

/// Renders a full-body status message.
pub fn render_status_mode(vm: &UIViewModel, status: &StatusInfo, theme: &Theme, cols: usize, rows: usize) {
    let current_row = render_top(vm, theme, cols);
    render_status(current_row, status, theme, cols);
    render_bottom(vm, theme, cols, rows);
}
