//! End-to-end pipeline behaviour through the public API: a raw payload is
//! decoded, loaded into the explorer, and driven through filter, rank, sort,
//! and reset the way key presses would.

use zatlas::infrastructure::interpret_response;
use zatlas::{
    handle_event, AppState, ContinentScheme, Country, Event, Explorer, FilterChange, PickerKind,
    RankMetric, Theme,
};

const PAYLOAD: &str = r#"[
    {"name":{"common":"Chad"},"flags":{"png":"https://flagcdn.com/w320/td.png"},"capital":["N'Djamena"],
     "population":17000000,"area":1284000,"continents":["Africa"],"subregion":"Middle Africa"},
    {"name":{"common":"Togo"},"flags":{"png":"https://flagcdn.com/w320/tg.png"},"capital":["Lomé"],
     "population":8000000,"area":56785,"continents":["Africa"],"subregion":"Western Africa"},
    {"name":{"common":"Peru"},"flags":{"png":"https://flagcdn.com/w320/pe.png"},"capital":["Lima"],
     "population":33000000,"area":1285216,"continents":["South America"],"subregion":"South America"},
    {"name":{"common":"Mexico"},"flags":{"png":"https://flagcdn.com/w320/mx.png"},"capital":["Mexico City"],
     "population":128900000,"area":1964375,"continents":["North America"],"subregion":"North America"},
    {"name":{"common":"Åland Islands"},"flags":{"png":"https://flagcdn.com/w320/ax.png"},"capital":["Mariehamn"],
     "population":29458,"area":1580,"continents":["Europe"],"subregion":"Northern Europe"},
    {"name":{"common":"Antarctica"},"flags":{"png":"https://flagcdn.com/w320/aq.png"},
     "population":1000,"area":14000000,"continents":["Antarctica"]},
    {"name":{"common":"Broken"},"population":1,"area":1,"continents":["Europe"]}
]"#;

fn names(countries: &[Country]) -> Vec<&str> {
    countries.iter().map(Country::common_name).collect()
}

fn explorer(scheme: ContinentScheme) -> Explorer {
    let dataset = interpret_response(200, PAYLOAD.as_bytes()).unwrap();
    assert_eq!(dataset.rejected, 1);
    Explorer::new(dataset.countries, scheme)
}

#[test]
fn payload_loads_in_order_without_malformed_record() {
    let explorer = explorer(ContinentScheme::Combined);
    assert_eq!(
        names(explorer.countries()),
        ["Chad", "Togo", "Peru", "Mexico", "Åland Islands", "Antarctica"]
    );
    assert_eq!(
        explorer.subregions(),
        ["Middle Africa", "North America", "Northern Europe", "South America", "Western Africa"]
    );
}

#[test]
fn combined_scheme_americas_spans_both_continents() {
    let mut explorer = explorer(ContinentScheme::Combined);
    explorer.apply(FilterChange::Continent(Some("Americas".to_string())));
    assert_eq!(names(explorer.countries()), ["Peru", "Mexico"]);
}

#[test]
fn split_scheme_keeps_americas_apart() {
    let mut explorer = explorer(ContinentScheme::Split);
    explorer.apply(FilterChange::Continent(Some("North America".to_string())));
    assert_eq!(names(explorer.countries()), ["Mexico"]);
}

#[test]
fn rank_by_area_over_whole_dataset() {
    let mut explorer = explorer(ContinentScheme::Combined);
    explorer.apply(FilterChange::Rank(Some(RankMetric::Area)));
    assert_eq!(
        names(explorer.countries()),
        ["Antarctica", "Mexico", "Peru", "Chad", "Togo", "Åland Islands"]
    );
}

#[test]
fn alphabetical_sort_folds_diacritics_then_untoggle_shows_everything() {
    let mut explorer = explorer(ContinentScheme::Combined);
    explorer.apply(FilterChange::parse("continent", "Europe").unwrap());
    explorer.apply(FilterChange::Continent(None));

    explorer.toggle_sort();
    assert_eq!(
        names(explorer.countries()),
        ["Åland Islands", "Antarctica", "Chad", "Mexico", "Peru", "Togo"]
    );

    explorer.apply(FilterChange::Continent(Some("Africa".to_string())));
    explorer.toggle_sort();
    assert_eq!(names(explorer.countries()), ["Chad", "Togo"]);
    explorer.toggle_sort();
    assert_eq!(explorer.countries().len(), 6);
    assert_eq!(explorer.filter().continent.as_deref(), Some("Africa"));
}

#[test]
fn key_driven_session_from_fetch_to_reset() {
    let mut state = AppState::new(Theme::default(), ContinentScheme::Combined);
    let mut send = |event: Event| handle_event(&mut state, &event).unwrap();

    let (_, actions) = send(Event::PermissionsGranted);
    assert_eq!(actions.len(), 1);

    let dataset = interpret_response(200, PAYLOAD.as_bytes()).unwrap();
    send(Event::DatasetLoaded { countries: dataset.countries, rejected: dataset.rejected });

    send(Event::OpenPicker(PickerKind::Subregion));
    for c in "western".chars() {
        send(Event::Char(c));
    }
    send(Event::ConfirmPicker);
    send(Event::OpenSelected);
    send(Event::ResetFilters);
    drop(send);

    let vm = state.compute_viewmodel(30, 120);
    assert_eq!(vm.header.title, " Country Explorer (6 of 6) ");
    assert!(vm.header.badges.is_empty());
    assert!(vm.header.details.ends_with("1 skipped"));
    assert_eq!(vm.cards[1].capital, "Lomé");
    assert_eq!(vm.cards[5].capital, "N/A");
    assert_eq!(vm.cards[5].subregion, "N/A");
    assert_eq!(vm.cards[3].population, "128,900,000");
}
