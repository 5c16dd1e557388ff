//! Full-body status message renderer (loading, failure, no matches).

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusInfo, StatusTone};

/// Blank rows left between the header and the message.
const TOP_MARGIN: usize = 3;

/// Renders a centered two-line message below `row`.
///
/// The message takes `status_fg`, or `error_fg` for failures; the subtitle is
/// dimmed.
pub fn render_status(row: usize, status: &StatusInfo, theme: &Theme, cols: usize) {
    let color = match status.tone {
        StatusTone::Info => &theme.colors.status_fg,
        StatusTone::Error => &theme.colors.error_fg,
    };

    render_centered(row + TOP_MARGIN, &status.message, &Theme::fg(color), cols);
    let dimmed = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_centered(row + TOP_MARGIN + 1, &status.subtitle, &dimmed, cols);
}

fn render_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = display_len(&text);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
