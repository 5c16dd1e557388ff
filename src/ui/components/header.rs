//! Header component renderer.
//!
//! Two lines: the centered title, then the active-filter badges on the left
//! with the dimmed load details right-aligned.

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Separator drawn between badges.
const BADGE_SEPARATOR: &str = "  ";

/// Renders the header at `row` and returns the next free row (`row + 2`).
///
/// ```text
/// [padding]  Country Explorer (2 of 250)  [padding]
///  Continent: Africa  Top 10 by population      loaded 5m ago
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = display_len(&title);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());

    render_badges(row + 1, header, theme, cols);
    row + 2
}

fn render_badges(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let badges = if header.badges.is_empty() {
        String::new()
    } else {
        format!(" {}", header.badges.join(BADGE_SEPARATOR))
    };
    let details = if header.details.is_empty() {
        String::new()
    } else {
        format!("{} ", header.details)
    };

    let details_len = display_len(&details);
    let badges = truncate(&badges, cols.saturating_sub(details_len + 1));
    let gap = cols.saturating_sub(display_len(&badges) + details_len);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.badge_fg));
    print!("{badges}");
    print!("{}", " ".repeat(gap));
    if details_len < cols {
        print!("{}{}", Theme::fg(&theme.colors.text_dim), Theme::dim());
        print!("{details}");
    }
    print!("{}", Theme::reset());
}
