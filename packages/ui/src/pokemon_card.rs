use dioxus::prelude::*;
use store::catalog::{display_name, formatted_id, id_from_url, NamedResource};

use crate::services::use_services;
use crate::type_badge::{type_class, TypeBadge};

const POKEMON_CARD_CSS: Asset = asset!("/assets/styling/pokemon_card.css");

/// Catalog grid card. Fetches its own base record from the entry's URL.
#[component]
pub fn PokemonCard(entry: NamedResource, on_select: EventHandler<String>) -> Element {
    let services = use_services();
    let key = id_from_url(&entry.url)
        .map(|id| id.to_string())
        .unwrap_or_else(|| entry.name.clone());

    let details = use_resource({
        let key = key.clone();
        move || {
            let catalog = services.catalog.clone();
            let key = key.clone();
            async move {
                catalog
                    .pokemon(&key)
                    .await
                    .inspect_err(|e| tracing::warn!("Card for {key} failed to load: {e}"))
                    .ok()
            }
        }
    });

    let name = display_name(&entry.name);

    rsx! {
        document::Link { rel: "stylesheet", href: POKEMON_CARD_CSS }
        div {
            class: "pokemon-card",
            onclick: move |_| on_select.call(key.clone()),
            match details() {
                Some(Some(pokemon)) => {
                    let types: Vec<String> = pokemon.type_names().into_iter().map(str::to_string).collect();
                    let header = types.first().map(|t| type_class(t)).unwrap_or_else(|| "type-unknown".to_string());
                    let number = formatted_id(pokemon.id);
                    let height = pokemon.height_m();
                    let weight = pokemon.weight_kg();
                    rsx! {
                        div {
                            class: "pokemon-card-header {header}",
                            span { class: "pokemon-card-id", "{number}" }
                            if let Some(src) = pokemon.artwork() {
                                img { class: "pokemon-card-art", src: "{src}", alt: "{pokemon.name}" }
                            }
                        }
                        div {
                            class: "pokemon-card-body",
                            h3 { class: "pokemon-name", "{name}" }
                            div {
                                class: "type-list",
                                for kind in types {
                                    TypeBadge { key: "{kind}", kind: kind.clone() }
                                }
                            }
                            div {
                                class: "pokemon-card-measures",
                                div {
                                    p { class: "muted", "Height" }
                                    p { "{height} m" }
                                }
                                div {
                                    p { class: "muted", "Weight" }
                                    p { "{weight} kg" }
                                }
                            }
                        }
                    }
                }
                _ => rsx! {
                    div {
                        class: "pokemon-card-body",
                        h3 { class: "pokemon-name", "{name}" }
                    }
                },
            }
        }
    }
}
