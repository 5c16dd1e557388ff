//! Shared rendering and formatting utilities.
//!
//! Low-level helpers used by several components: cursor positioning, fuzzy
//! match highlighting, column fitting, and the number formats shown on
//! country cards.
//!
//! All width arithmetic counts `char`s, not bytes, so names such as
//! "São Tomé and Príncipe" line up with plain ASCII ones.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Ranges are `(start, end)` character indices, end exclusive. When
/// `is_selected` is set the selection colors win and no highlighting is drawn.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal: String = chars[current_pos..start].iter().collect();
            print!("{normal}");
        }

        let highlighted: String = chars[start.max(current_pos)..end].iter().collect();
        print!(
            "{}{}{highlighted}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset()
        );
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end.max(current_pos);
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Number of characters in `text`.
#[must_use]
pub fn display_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `width` characters, marking cuts with `…`.
///
/// # Examples
///
/// ```
/// use zatlas::ui::helpers::truncate;
///
/// assert_eq!(truncate("Chad", 10), "Chad");
/// assert_eq!(truncate("South Georgia", 8), "South G…");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_len(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Left-aligns `text` in a column of `width` characters.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let fitted = truncate(text, width);
    let pad = width.saturating_sub(display_len(&fitted));
    format!("{fitted}{}", " ".repeat(pad))
}

/// Right-aligns `text` in a column of `width` characters.
#[must_use]
pub fn pad_left(text: &str, width: usize) -> String {
    let fitted = truncate(text, width);
    let pad = width.saturating_sub(display_len(&fitted));
    format!("{}{fitted}", " ".repeat(pad))
}

/// Formats an integer with comma grouping separators.
///
/// # Examples
///
/// ```
/// use zatlas::ui::helpers::group_digits;
///
/// assert_eq!(group_digits(17_000_000), "17,000,000");
/// assert_eq!(group_digits(999), "999");
/// ```
#[must_use]
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats an area in km² with grouping and up to three decimals.
///
/// Trailing zero decimals are dropped, matching how a browser prints numbers
/// with `toLocaleString`.
///
/// # Examples
///
/// ```
/// use zatlas::ui::helpers::format_area;
///
/// assert_eq!(format_area(1_284_000.0), "1,284,000 km²");
/// assert_eq!(format_area(0.44), "0.44 km²");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_area(area: f64) -> String {
    let thousandths = (area.max(0.0) * 1000.0).round() as u64;
    let whole = group_digits(thousandths / 1000);
    let fraction = thousandths % 1000;
    if fraction == 0 {
        format!("{whole} km²")
    } else {
        let decimals = format!("{fraction:03}");
        format!("{whole}.{} km²", decimals.trim_end_matches('0'))
    }
}

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Describes an elapsed duration: "just now", "5m ago", "3h ago", "2d ago".
#[must_use]
pub fn format_age(elapsed_seconds: i64) -> String {
    if elapsed_seconds < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if elapsed_seconds < SECONDS_PER_HOUR {
        format!("{}m ago", elapsed_seconds / SECONDS_PER_MINUTE)
    } else if elapsed_seconds < SECONDS_PER_DAY {
        format!("{}h ago", elapsed_seconds / SECONDS_PER_HOUR)
    } else {
        format!("{}d ago", elapsed_seconds / SECONDS_PER_DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_at_every_boundary() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(56_785), "56,785");
        assert_eq!(group_digits(1_402_112_000), "1,402,112,000");
    }

    #[test]
    fn area_drops_trailing_zero_decimals() {
        assert_eq!(format_area(56_785.0), "56,785 km²");
        assert_eq!(format_area(2.5), "2.5 km²");
        assert_eq!(format_area(12.345_6), "12.346 km²");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("São Tomé", 8), "São Tomé");
        assert_eq!(truncate("São Tomé and Príncipe", 5), "São …");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn padding_fills_to_width() {
        assert_eq!(pad_right("Chad", 6), "Chad  ");
        assert_eq!(pad_left("1,000", 7), "  1,000");
        assert_eq!(display_len(&pad_right("Réunion", 10)), 10);
    }

    #[test]
    fn ages_pick_largest_unit() {
        assert_eq!(format_age(5), "just now");
        assert_eq!(format_age(300), "5m ago");
        assert_eq!(format_age(3 * 3600 + 10), "3h ago");
        assert_eq!(format_age(7 * 86400), "7d ago");
    }
}
