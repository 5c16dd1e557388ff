//! Country card list renderer.
//!
//! Each country is one row with fixed-width NAME, CAPITAL, POPULATION, AREA,
//! and CONTINENT columns; SUBREGION takes whatever width remains. Numeric
//! columns are right-aligned.

use crate::ui::helpers::{pad_left, pad_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardRow;

const NAME_WIDTH: usize = 26;
const CAPITAL_WIDTH: usize = 18;
const POPULATION_WIDTH: usize = 15;
const AREA_WIDTH: usize = 18;
const CONTINENT_WIDTH: usize = 15;
const GAP: &str = "  ";

/// Lays out one row of the six columns, fitted to exactly `cols` characters.
fn layout_columns(cells: [&str; 6], cols: usize) -> String {
    let [name, capital, population, area, continent, subregion] = cells;
    let line = format!(
        " {}{GAP}{}{GAP}{}{GAP}{}{GAP}{}{GAP}{subregion}",
        pad_right(name, NAME_WIDTH),
        pad_right(capital, CAPITAL_WIDTH),
        pad_left(population, POPULATION_WIDTH),
        pad_left(area, AREA_WIDTH),
        pad_right(continent, CONTINENT_WIDTH),
    );
    pad_right(&line, cols)
}

/// Renders the column headings at `row`.
pub fn render_card_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{}",
        layout_columns(["NAME", "CAPITAL", "POPULATION", "AREA", "CONTINENT", "SUBREGION"], cols)
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every card starting at `row` and returns the next free row.
pub fn render_card_rows(row: usize, cards: &[CardRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card_row(current_row, card, theme, cols);
    }
    current_row
}

/// Renders one card, padded to the full width so the selection bar is solid.
fn render_card_row(row: usize, card: &CardRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(
        "{}",
        layout_columns(
            [
                &card.name,
                &card.capital,
                &card.population,
                &card.area,
                &card.continent,
                &card.subregion,
            ],
            cols,
        )
    );

    print!("{}", Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::display_len;

    #[test]
    fn rows_fill_exact_width() {
        let line = layout_columns(["Chad", "N'Djamena", "17,000,000", "1,284,000 km²", "Africa", "Middle Africa"], 140);
        assert_eq!(display_len(&line), 140);
        assert!(line.starts_with(" Chad "));

        let narrow = layout_columns(["Chad", "N'Djamena", "17,000,000", "1,284,000 km²", "Africa", "Middle Africa"], 30);
        assert_eq!(display_len(&narrow), 30);
        assert!(narrow.ends_with('…'));
    }
}
