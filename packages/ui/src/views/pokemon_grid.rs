use dioxus::prelude::*;

use super::{Loader, LoaderSize};
use crate::hooks::use_pokemon_list;
use crate::PokemonCard;

/// Paginated catalog grid with previous/next controls.
#[component]
pub fn PokemonGridView(page_size: u32, on_select: EventHandler<String>) -> Element {
    let mut list = use_pokemon_list(page_size);
    let state = list.read();

    if state.loading && state.results.is_empty() {
        return rsx! {
            div { class: "center-block", Loader { size: LoaderSize::Large } }
        };
    }

    if state.error.is_some() {
        return rsx! {
            div {
                class: "error-panel",
                p { "Error loading Pokémon data. Please try again later." }
            }
        };
    }

    let cursor = state.cursor;
    let current_page = cursor.current_page();
    let total_pages = cursor.total_pages();

    rsx! {
        div {
            div {
                class: "card-grid",
                for entry in state.results.iter().cloned() {
                    PokemonCard { key: "{entry.name}", entry, on_select }
                }
            }

            if state.loading {
                div { class: "center-block", Loader { size: LoaderSize::Medium } }
            }

            div {
                class: "pager",
                button {
                    class: "btn btn-primary",
                    disabled: !cursor.has_prev(),
                    onclick: move |_| {
                        list.write().prev_page();
                    },
                    "Previous"
                }
                span { class: "muted", "Page {current_page} of {total_pages}" }
                button {
                    class: "btn btn-primary",
                    disabled: !cursor.has_next(),
                    onclick: move |_| {
                        list.write().next_page();
                    },
                    "Next"
                }
            }
        }
    }
}
