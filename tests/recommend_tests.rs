// Host-side tests for the recommendation rule tables.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/recommend.rs"]
mod recommend;

use recommend::*;

#[test]
fn spot_detection_is_substring_containment_on_lowercased_query() {
    let (name, info) = detect_spot("  Surf trip to SIDI KAOUKI tomorrow ").unwrap();
    assert_eq!(name, "sidi kaouki");
    assert_eq!(info.wind_kmh, 30);
    assert_eq!(info.activity, SpotActivity::Surfing);

    assert!(detect_spot("paris").is_none());
    assert!(detect_spot("").is_none());
}

#[test]
fn first_match_in_table_order_wins() {
    // "plage d'essaouira" contains the broader "plage" pattern, which comes
    // first in the table; precedence is the list order, documented contract.
    let (name, _) = detect_spot("plage d'essaouira").unwrap();
    assert_eq!(name, "plage");

    let (name, _) = detect_spot("Skala de la Ville").unwrap();
    assert_eq!(name, "skala");

    // A query matching only the longer pattern still resolves.
    let (name, info) = detect_spot("musée sidi mohamed ben abdallah").unwrap();
    assert_eq!(name, "musée sidi mohamed ben abdallah");
    assert_eq!(info.activity, SpotActivity::Museum);
}

#[test]
fn essaouira_detection_uses_query_or_display_name() {
    assert!(is_essaouira("Essaouira", ""));
    assert!(is_essaouira("medina", "Medina, Essaouira, Morocco"));
    assert!(!is_essaouira("casablanca", "Casablanca, Morocco"));
}

#[test]
fn spot_rules_take_precedence_and_follow_activity_keywords() {
    let plage = detect_spot("plage").unwrap();
    let reco = recommendation("swimming", 26, Some(plage), true);
    assert!(reco.contains("Swimming is not recommended today"));
    assert!(reco.contains("25 km/h"));

    let kaouki = detect_spot("sidi kaouki").unwrap();
    let reco = recommendation("surfing", 25, Some(kaouki), true);
    assert!(reco.contains("Excellent conditions for surfing at sidi kaouki"));
    assert!(reco.contains("30 km/h"));

    let medina = detect_spot("medina").unwrap();
    let reco = recommendation("walking", 27, Some(medina), true);
    assert!(reco.contains("Perfect weather for walking in medina"));
    assert!(reco.contains("27°C"));

    let port = detect_spot("port").unwrap();
    let reco = recommendation("a walk by the sea", 26, Some(port), true);
    assert!(reco.contains("ocean views"));
    assert!(reco.contains("22 km/h"));

    // No activity rule matches: generic spot summary.
    let kasbah = detect_spot("kasbah").unwrap();
    let reco = recommendation("museum tour", 27, Some(kasbah), true);
    assert!(reco.starts_with("At kasbah, the temperature is 27°C"));
}

#[test]
fn essaouira_general_rules_apply_without_a_spot() {
    let reco = recommendation("swimming", 26, None, true);
    assert!(reco.contains("go to the gym instead"));

    let reco = recommendation("une promenade", 26, None, true);
    assert!(reco.contains("wait until the sun sets"));

    let reco = recommendation("surfing", 26, None, true);
    assert!(reco.contains("known for its wind"));

    let reco = recommendation("reading", 26, None, true);
    assert!(reco.contains("be prepared for wind"));
}

#[test]
fn generic_city_rules_fall_back_in_order() {
    let reco = recommendation("swimming", 26, None, false);
    assert!(reco.starts_with("Pleasant weather (26°C)."));
    assert!(reco.contains("sunscreen"));

    let reco = recommendation("hiking", 26, None, false);
    assert!(reco.contains("Comfortable shoes"));

    let reco = recommendation("football", 26, None, false);
    assert!(reco.contains("Athletic wear"));

    let reco = recommendation("jardinage", 26, None, false);
    assert!(reco.contains("Gardening gloves"));

    let reco = recommendation("stargazing", 26, None, false);
    assert!(reco.ends_with("Enjoy your activity!"));
}

#[test]
fn icon_precedence_mirrors_recommendations() {
    let plage = detect_spot("plage").unwrap();
    assert_eq!(icon("swimming", Some(plage), true), "🏖️");

    let kaouki = detect_spot("sidi kaouki").unwrap();
    assert_eq!(icon("anything", Some(kaouki), true), "🏄");

    // Boat-tour spots have no dedicated icon and fall through.
    let mogador = detect_spot("ile de mogador").unwrap();
    assert_eq!(icon("boat tour", Some(mogador), true), "🌬️");

    assert_eq!(icon("swimming", None, true), "🏋️");
    assert_eq!(icon("walking", None, true), "🌅");
    assert_eq!(icon("soccer", None, false), "⚽");
    assert_eq!(icon("gardening", None, false), "🌱");
    assert_eq!(icon("unknown", None, false), "🌤️");
}

#[test]
fn spot_display_name_capitalizes_and_appends_city() {
    assert_eq!(spot_display_name("plage"), "Plage, Essaouira");
    assert_eq!(spot_display_name("sidi kaouki"), "Sidi kaouki, Essaouira");
    assert_eq!(spot_display_name(""), "Essaouira");
}
