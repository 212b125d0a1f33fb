use dioxus::prelude::*;
use ui::views::PokemonDetailView;

use crate::Route;

/// Catalog entry page, addressed by id or lowercase name.
#[component]
pub fn PokemonPage(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "page",
            PokemonDetailView {
                id_or_name: id,
                on_select: move |next: String| {
                    nav.push(Route::PokemonPage { id: next });
                },
                on_back: move |_| nav.go_back(),
            }
        }
    }
}
