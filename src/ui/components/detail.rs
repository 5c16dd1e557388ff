//! Detail card renderer for the selected country.

use crate::ui::helpers::{pad_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailCard;

/// Width of the label column, e.g. `Population:`.
const LABEL_WIDTH: usize = 12;

/// Renders the four detail lines starting at `row`.
///
/// ```text
///  Chad                        flag: https://flagcdn.com/w320/td.png
///  Capital:    N'Djamena       Population: 17,000,000
///  Area:       1,284,000 km²   Continent:  Africa
///  Subregion:  Middle Africa
/// ```
pub fn render_detail(row: usize, detail: &DetailCard, theme: &Theme, cols: usize) -> usize {
    let half = cols / 2;
    let field = |label: &str, value: &str| pad_right(&format!("{}{value}", pad_right(label, LABEL_WIDTH)), half);

    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", pad_right(&format!(" {}", detail.name), half));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", pad_right(&format!("flag: {}", detail.flag_url), cols.saturating_sub(half)));
    print!("{}", Theme::reset());

    let lines = [
        (field(" Capital:", &detail.capital), field("Population:", &detail.population)),
        (field(" Area:", &detail.area), field("Continent:", &detail.continent)),
        (field(" Subregion:", &detail.subregion), String::new()),
    ];

    print!("{}", Theme::fg(&theme.colors.text_normal));
    for (offset, (left, right)) in lines.iter().enumerate() {
        position_cursor(row + 1 + offset, 1);
        print!("{}", pad_right(&format!("{left}{right}"), cols));
    }
    print!("{}", Theme::reset());

    row + 1 + lines.len()
}
