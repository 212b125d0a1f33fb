use dioxus::prelude::*;

const TYPE_BADGE_CSS: Asset = asset!("/assets/styling/type_badge.css");

const KNOWN_TYPES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

/// CSS modifier for an elemental type; unknown types share the neutral colour.
pub fn type_class(kind: &str) -> String {
    let kind = kind.trim().to_lowercase();
    if KNOWN_TYPES.contains(&kind.as_str()) {
        format!("type-{kind}")
    } else {
        "type-unknown".to_string()
    }
}

#[component]
pub fn TypeBadge(kind: String) -> Element {
    let class = type_class(&kind);

    rsx! {
        document::Link { rel: "stylesheet", href: TYPE_BADGE_CSS }
        span {
            class: "type-badge {class}",
            "{kind}"
        }
    }
}
