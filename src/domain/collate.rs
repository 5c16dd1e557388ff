//! Locale-aware name ordering.
//!
//! Approximates the default collation of a browser's `localeCompare` for the
//! Latin-script names found in the dataset: accents and case are ignored at
//! the primary level, so "Åland Islands" sorts next to "Albania" rather than
//! after "Zimbabwe". Names that compare
//! equal at the primary level fall back to their raw text, keeping the order
//! total.

use std::cmp::Ordering;

/// Compares two names for alphabetical display order.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use zatlas::domain::collate::compare_names;
///
/// assert_eq!(compare_names("Åland Islands", "Albania"), Ordering::Less);
/// assert_eq!(compare_names("curaçao", "Cuba"), Ordering::Greater);
/// ```
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn primary_key(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase).map(fold)
}

/// Maps a lowercase Latin letter with diacritics to its base letter.
const fn fold(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' | 'ș' => 's',
        'ţ' | 'ť' | 'ŧ' | 'ț' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&'static str]) -> Vec<&'static str> {
        let mut v = names.to_vec();
        v.sort_by(|a, b| compare_names(a, b));
        v
    }

    #[test]
    fn accents_sort_with_base_letter() {
        assert_eq!(
            sorted(&["Zambia", "Åland Islands", "Algeria", "Afghanistan"]),
            ["Afghanistan", "Åland Islands", "Algeria", "Zambia"]
        );
    }

    #[test]
    fn case_is_ignored_at_primary_level() {
        assert_eq!(sorted(&["bhutan", "Belgium", "Brazil"]), ["Belgium", "bhutan", "Brazil"]);
    }

    #[test]
    fn accented_and_plain_twins_are_ordered_deterministically() {
        assert_eq!(compare_names("Reunion", "Réunion"), Ordering::Less);
        assert_eq!(compare_names("Réunion", "Reunion"), Ordering::Greater);
        assert_eq!(compare_names("Chad", "Chad"), Ordering::Equal);
    }

    #[test]
    fn sao_tome_sorts_among_s() {
        assert_eq!(
            sorted(&["Senegal", "São Tomé and Príncipe", "Samoa"]),
            ["Samoa", "São Tomé and Príncipe", "Senegal"]
        );
    }
}
