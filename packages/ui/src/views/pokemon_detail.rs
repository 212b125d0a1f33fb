use dioxus::prelude::*;
use store::catalog::{
    display_name, formatted_id, missing_description, sprite_url, stat_label, stat_tier,
    MAX_BASE_STAT,
};

use super::{Loader, LoaderSize};
use crate::hooks::use_pokemon_details;
use crate::icons::FaArrowLeft;
use crate::type_badge::{type_class, TypeBadge};
use crate::Icon;

const POKEMON_DETAIL_CSS: Asset = asset!("/assets/styling/pokemon_detail.css");

/// Shown moves before collapsing the rest into a "+N more" tile.
const MOVES_SHOWN: usize = 12;

/// Catalog entry page: base record first, then description and evolution
/// line as the species and chain requests complete.
#[component]
pub fn PokemonDetailView(
    id_or_name: String,
    /// Navigate to another catalog entry (evolution stages).
    on_select: EventHandler<String>,
    on_back: EventHandler<()>,
) -> Element {
    let details = use_pokemon_details(id_or_name);
    let state = details.read();

    let back = rsx! {
        button {
            class: "btn btn-secondary btn-sm",
            onclick: move |_| on_back.call(()),
            Icon { icon: FaArrowLeft, width: 12, height: 12 }
            span { "Back to Pokédex" }
        }
    };

    let Some(pokemon) = state.pokemon.as_ref() else {
        return rsx! {
            div {
                class: "detail-page",
                {back}
                if state.loading {
                    div { class: "center-block", Loader { size: LoaderSize::Large } }
                } else if state.error.is_some() {
                    div {
                        class: "error-panel",
                        p { "Error loading Pokémon details. Please try again later." }
                    }
                }
            }
        };
    };

    let types: Vec<String> = pokemon.type_names().into_iter().map(str::to_string).collect();
    let primary = types
        .first()
        .map(|t| type_class(t))
        .unwrap_or_else(|| "type-unknown".to_string());
    let number = formatted_id(pokemon.id);
    let name = display_name(&pokemon.name);
    let description = state
        .species
        .as_ref()
        .map(|s| s.english_description())
        .unwrap_or_else(|| missing_description().to_string());
    let genus = state
        .species
        .as_ref()
        .and_then(|s| s.english_genus())
        .map(str::to_string);
    let height = pokemon.height_m();
    let weight = pokemon.weight_kg();
    let base_experience = pokemon
        .base_experience
        .map_or_else(|| "-".to_string(), |xp| xp.to_string());
    let stages = state
        .evolution_chain
        .as_ref()
        .map(|chain| chain.stages())
        .unwrap_or_default();
    let hidden_moves = pokemon.moves.len().saturating_sub(MOVES_SHOWN);
    let current_id = pokemon.id;

    rsx! {
        document::Link { rel: "stylesheet", href: POKEMON_DETAIL_CSS }
        div {
            class: "detail-page",
            {back}

            if let Some(err) = &state.error {
                div { class: "error-panel", p { "{err}" } }
            }

            div {
                class: "detail-card",
                div {
                    class: "detail-header {primary}",
                    span { class: "detail-id", "{number}" }
                    h1 { class: "pokemon-name", "{name}" }
                    if let Some(genus) = genus {
                        p { class: "detail-genus", "{genus}" }
                    }
                    div {
                        class: "type-list",
                        for kind in types.iter().cloned() {
                            TypeBadge { key: "{kind}", kind }
                        }
                    }
                    if let Some(src) = pokemon.artwork() {
                        img { class: "detail-art", src: "{src}", alt: "{pokemon.name}" }
                    }
                }

                div {
                    class: "detail-body",
                    section {
                        h2 { "Description" }
                        p { "{description}" }
                    }

                    div {
                        class: "detail-columns",
                        section {
                            h2 { "Stats" }
                            for stat in pokemon.stats.iter() {
                                {
                                    let label = stat_label(&stat.stat.name);
                                    let tier = stat_tier(stat.base_stat);
                                    let width = stat.base_stat.min(MAX_BASE_STAT) * 100 / MAX_BASE_STAT;
                                    rsx! {
                                        div {
                                            key: "{stat.stat.name}",
                                            class: "stat-row",
                                            span { class: "stat-label", "{label}" }
                                            div {
                                                class: "stat-track",
                                                div { class: "stat-bar stat-{tier}", style: "width: {width}%" }
                                            }
                                            span { class: "stat-value", "{stat.base_stat}" }
                                        }
                                    }
                                }
                            }
                        }

                        section {
                            h2 { "Details" }
                            div {
                                class: "detail-facts",
                                div { p { class: "muted", "Height" } p { "{height} m" } }
                                div { p { class: "muted", "Weight" } p { "{weight} kg" } }
                                div { p { class: "muted", "Base Experience" } p { "{base_experience}" } }
                            }

                            h2 { "Abilities" }
                            div {
                                class: "ability-list",
                                for slot in pokemon.abilities.iter() {
                                    {
                                        let ability = display_name(&slot.ability.name);
                                        let class = if slot.is_hidden { "ability ability-hidden" } else { "ability" };
                                        rsx! {
                                            div {
                                                key: "{slot.ability.name}",
                                                class: "{class}",
                                                "{ability}"
                                                if slot.is_hidden {
                                                    span { class: "muted", " (Hidden)" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if stages.len() > 1 {
                        section {
                            h2 { "Evolution Chain" }
                            div {
                                class: "evolution-line",
                                for (i, stage) in stages.iter().cloned().enumerate() {
                                    if i > 0 {
                                        span { class: "evolution-arrow", "→" }
                                    }
                                    {
                                        let stage_name = display_name(&stage.name);
                                        let target = stage.id.map_or_else(|| stage.name.clone(), |id| id.to_string());
                                        let active = if stage.id == Some(current_id) { "evolution-stage active" } else { "evolution-stage" };
                                        rsx! {
                                            button {
                                                key: "{stage.name}",
                                                class: "{active}",
                                                onclick: move |_| on_select.call(target.clone()),
                                                if let Some(id) = stage.id {
                                                    img { src: sprite_url(id), alt: "{stage.name}" }
                                                }
                                                span { "{stage_name}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    section {
                        h2 { "Moves" }
                        div {
                            class: "move-list",
                            for slot in pokemon.moves.iter().take(MOVES_SHOWN) {
                                {
                                    let move_name = display_name(&slot.kind.name);
                                    rsx! { div { key: "{slot.kind.name}", class: "move", "{move_name}" } }
                                }
                            }
                            if hidden_moves > 0 {
                                div { class: "move move-more", "+{hidden_moves} more" }
                            }
                        }
                    }
                }
            }
        }
    }
}
