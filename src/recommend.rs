//! Canned weather recommendation rules.
//!
//! Two ordered tables drive the output: a spot table mapping lowercase
//! location substrings to local conditions, and prioritized activity rules.
//! Precedence is explicit everywhere: the first matching entry wins, in
//! definition order. Matching is substring containment on the lowercased,
//! trimmed query.

/// What a spot is primarily good for; drives icon selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpotActivity {
    Beach,
    Surfing,
    Walking,
    Sightseeing,
    Shopping,
    Cultural,
    Museum,
    BoatTour,
}

/// Canned local conditions for one known spot.
#[derive(Clone, Copy, Debug)]
pub struct SpotInfo {
    pub temp_c: i32,
    pub wind_kmh: i32,
    pub activity: SpotActivity,
}

const fn spot(temp_c: i32, wind_kmh: i32, activity: SpotActivity) -> SpotInfo {
    SpotInfo {
        temp_c,
        wind_kmh,
        activity,
    }
}

/// Known Essaouira spots, in precedence order. Broad patterns come first on
/// purpose: "plage d'essaouira" resolves to "plage".
pub const ESSAOUIRA_SPOTS: &[(&str, SpotInfo)] = &[
    // Beaches
    ("plage", spot(26, 25, SpotActivity::Beach)),
    ("beach", spot(26, 25, SpotActivity::Beach)),
    ("plage d'essaouira", spot(26, 25, SpotActivity::Beach)),
    ("sidi kaouki", spot(25, 30, SpotActivity::Surfing)),
    ("diabat", spot(26, 28, SpotActivity::Beach)),
    // Medina and town center
    ("medina", spot(27, 15, SpotActivity::Walking)),
    ("médina", spot(27, 15, SpotActivity::Walking)),
    ("médina d'essaouira", spot(27, 15, SpotActivity::Walking)),
    ("place moulay hassan", spot(27, 15, SpotActivity::Walking)),
    ("moulay hassan", spot(27, 15, SpotActivity::Walking)),
    ("skala", spot(26, 20, SpotActivity::Sightseeing)),
    ("skala de la ville", spot(26, 20, SpotActivity::Sightseeing)),
    ("port", spot(26, 22, SpotActivity::Walking)),
    ("port d'essaouira", spot(26, 22, SpotActivity::Walking)),
    // Districts
    ("mellah", spot(27, 12, SpotActivity::Walking)),
    ("kasbah", spot(27, 14, SpotActivity::Walking)),
    ("bab doukkala", spot(27, 16, SpotActivity::Walking)),
    ("bab marrakech", spot(27, 16, SpotActivity::Walking)),
    // Main streets
    ("avenue mohamed v", spot(27, 15, SpotActivity::Shopping)),
    ("avenue de l'istiqlal", spot(27, 15, SpotActivity::Walking)),
    ("rue mohamed el qory", spot(27, 14, SpotActivity::Shopping)),
    // Landmarks
    ("ile de mogador", spot(25, 30, SpotActivity::BoatTour)),
    ("borj el berod", spot(26, 20, SpotActivity::Sightseeing)),
    ("dar souiri", spot(27, 12, SpotActivity::Cultural)),
    ("musée sidi mohamed ben abdallah", spot(27, 10, SpotActivity::Museum)),
];

/// Find the first spot whose pattern is contained in `query` (lowercased,
/// trimmed). Table order is the precedence contract.
pub fn detect_spot(query: &str) -> Option<(&'static str, &'static SpotInfo)> {
    let needle = query.trim().to_lowercase();
    ESSAOUIRA_SPOTS
        .iter()
        .find(|(pattern, _)| needle.contains(pattern))
        .map(|(pattern, info)| (*pattern, info))
}

/// Whether the query or the geocoder's display name points at Essaouira.
pub fn is_essaouira(query: &str, display_name: &str) -> bool {
    query.to_lowercase().contains("essaouira") || display_name.to_lowercase().contains("essaouira")
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Spot display string for the results header: "Plage, Essaouira".
pub fn spot_display_name(spot_name: &str) -> String {
    let mut chars = spot_name.chars();
    match chars.next() {
        Some(first) => format!(
            "{}{}, Essaouira",
            first.to_uppercase(),
            chars.as_str()
        ),
        None => "Essaouira".to_string(),
    }
}

/// Build the recommendation line. Rules are evaluated in a fixed order:
/// spot-specific rules, then Essaouira-general rules, then generic-city
/// rules with a catch-all tail.
pub fn recommendation(
    activity: &str,
    temp_c: i32,
    spot: Option<(&str, &SpotInfo)>,
    essaouira: bool,
) -> String {
    let act = activity.to_lowercase();

    if let Some((name, info)) = spot {
        if contains_any(&act, &["swim", "swimming"])
            && contains_any(name, &["plage", "beach", "sidi kaouki"])
        {
            return format!(
                "The {name} has strong winds ({} km/h). Swimming is not recommended today. \
                 Consider visiting the medina or trying indoor activities.",
                info.wind_kmh
            );
        }
        if contains_any(&act, &["walk", "walking"]) {
            if contains_any(name, &["medina", "moulay hassan"]) {
                return format!(
                    "Perfect weather for walking in {name}! Temperature is {temp_c}\u{b0}C with \
                     light winds. Explore the souks and enjoy the local atmosphere. Best time: \
                     late afternoon."
                );
            }
            if contains_any(name, &["skala", "port"]) {
                return format!(
                    "Great spot for walking! {name} offers beautiful ocean views. Wind speed: \
                     {} km/h. Bring a light jacket and camera!",
                    info.wind_kmh
                );
            }
        }
        if contains_any(&act, &["surf", "surfing"])
            && contains_any(name, &["sidi kaouki", "plage"])
        {
            return format!(
                "Excellent conditions for surfing at {name}! Wind speed: {} km/h. Perfect waves \
                 today. Don't forget your wetsuit!",
                info.wind_kmh
            );
        }
        return format!(
            "At {name}, the temperature is {temp_c}\u{b0}C with winds at {} km/h. Great weather \
             for your activity!",
            info.wind_kmh
        );
    }

    if essaouira {
        if contains_any(&act, &["swim", "swimming", "natation", "nager"]) {
            return "I don't advise you to swim today, the weather in Essaouira is not favorable \
                    and not suitable for swimming. I advise you to go to the gym instead."
                .to_string();
        }
        if contains_any(&act, &["walk", "walking", "marche", "promenade"]) {
            return "Walking is a great activity to do today, but don't go now, wait until the \
                    sun sets."
                .to_string();
        }
        if contains_any(&act, &["surf", "surfing"]) {
            return "Essaouira is known for its wind! Today is a perfect day for surfing and \
                    water sports. The wind conditions are excellent."
                .to_string();
        }
        return format!(
            "The weather in Essaouira today is {temp_c}\u{b0}C. It's a great day for outdoor \
             activities, but be prepared for wind!"
        );
    }

    let mut recos = format!("Pleasant weather ({temp_c}\u{b0}C). ");
    if contains_any(&act, &["swim", "swimming", "natation"]) {
        recos.push_str("Perfect temperature for swimming! Remember sunscreen and stay hydrated.");
    } else if contains_any(&act, &["walk", "walking", "marche", "hiking"]) {
        recos.push_str("Perfect for walking! Comfortable shoes and water bottle recommended.");
    } else if contains_any(&act, &["soccer", "football", "foot", "sport"]) {
        recos.push_str(
            "Great weather for sports! Athletic wear and sufficient hydration recommended.",
        );
    } else if contains_any(&act, &["garden", "jardin", "jardinage"]) {
        recos.push_str("Ideal for gardening! Gardening gloves and sun protection recommended.");
    } else {
        recos.push_str("Enjoy your activity!");
    }
    recos
}

/// Pick the result icon with the same precedence as `recommendation`.
pub fn icon(activity: &str, spot: Option<(&str, &SpotInfo)>, essaouira: bool) -> &'static str {
    let act = activity.to_lowercase();

    if let Some((_, info)) = spot {
        match info.activity {
            SpotActivity::Beach => return "\u{1f3d6}\u{fe0f}",
            SpotActivity::Surfing => return "\u{1f3c4}",
            SpotActivity::Walking => return "\u{1f6b6}",
            SpotActivity::Sightseeing => return "\u{1f4f8}",
            SpotActivity::Shopping => return "\u{1f6cd}\u{fe0f}",
            SpotActivity::Cultural => return "\u{1f3db}\u{fe0f}",
            SpotActivity::Museum => return "\u{1f5bc}\u{fe0f}",
            SpotActivity::BoatTour => {}
        }
    }

    if essaouira {
        if contains_any(&act, &["swim", "swimming"]) {
            return "\u{1f3cb}\u{fe0f}";
        }
        if contains_any(&act, &["walk", "walking"]) {
            return "\u{1f305}";
        }
        if act.contains("surf") {
            return "\u{1f3c4}";
        }
        return "\u{1f32c}\u{fe0f}";
    }

    if contains_any(&act, &["swim", "swimming"]) {
        return "\u{1f3ca}";
    }
    if contains_any(&act, &["walk", "walking"]) {
        return "\u{1f6b6}";
    }
    if contains_any(&act, &["soccer", "football"]) {
        return "\u{26bd}";
    }
    if act.contains("garden") {
        return "\u{1f331}";
    }
    if act.contains("surf") {
        return "\u{1f3c4}";
    }
    "\u{1f324}\u{fe0f}"
}
