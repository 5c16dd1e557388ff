//! Picker component renderer.
//!
//! A bordered box standing in for a select control: the title and type-ahead
//! query on top, then the matching options with fuzzy matches highlighted.

use crate::ui::helpers::{self, display_len, pad_right, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PickerInfo, PickerItem};

/// Horizontal margin for the picker box (spaces on left and right).
const PICKER_BOX_MARGIN: usize = 5;

/// Marker drawn before the option currently applied.
const CURRENT_MARKER: &str = "● ";

/// Renders the picker box at `row` and returns the next free row.
///
/// ```text
/// [margin] ┌ Subregion ──────────── 3 ┐
/// [margin] │ > west                   │
/// [margin] ├──────────────────────────┤
/// [margin] │   All Subregions         │
/// [margin] │ ● Western Africa         │
/// [margin] └──────────────────────────┘
/// ```
///
/// Blank option rows are drawn up to `max_rows` so the box keeps its height
/// while the query narrows the list.
pub fn render_picker(row: usize, picker: &PickerInfo, theme: &Theme, cols: usize, max_rows: usize) -> usize {
    let box_width = cols.saturating_sub(PICKER_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.picker_border);
    let margin = " ".repeat(PICKER_BOX_MARGIN);

    let title = format!(" {} ", picker.title);
    let count = format!(" {} ", picker.match_count);
    let rule = inner_width.saturating_sub(display_len(&title) + display_len(&count));

    position_cursor(row, 1);
    print!("{margin}{border}┌");
    print!("{}{title}{}", Theme::bold(), Theme::reset());
    print!("{border}{}{count}┐{}", "─".repeat(rule), Theme::reset());

    position_cursor(row + 1, 1);
    print!("{margin}{border}│{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", pad_right(&format!(" > {}", picker.query), inner_width));
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{border}├{}┤{}", "─".repeat(inner_width), Theme::reset());

    let mut current_row = row + 3;
    for index in 0..max_rows.max(picker.items.len()) {
        position_cursor(current_row, 1);
        print!("{margin}{border}│{}", Theme::reset());
        match picker.items.get(index) {
            Some(item) => render_item(item, theme, inner_width),
            None => print!("{}", " ".repeat(inner_width)),
        }
        print!("{border}│{}", Theme::reset());
        current_row += 1;
    }

    position_cursor(current_row, 1);
    print!("{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    current_row + 1
}

fn render_item(item: &PickerItem, theme: &Theme, width: usize) {
    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let marker = if item.is_current { CURRENT_MARKER } else { "  " };
    if item.is_current && !item.is_selected {
        print!("{}{marker}{}", Theme::fg(&theme.colors.badge_fg), Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{marker}");
    }

    let label_width = width.saturating_sub(2 + display_len(marker));
    let label = truncate(&item.label, label_width);
    print!(" ");
    helpers::render_highlighted_text(&label, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat(width.saturating_sub(1 + display_len(marker) + display_len(&label))));
    print!("{}", Theme::reset());
}
