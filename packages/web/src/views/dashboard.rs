use dioxus::prelude::*;
use ui::icons::{FaBoxOpen, FaChartColumn};
use ui::views::PokemonGridView;
use ui::{use_services, Icon};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let services = use_services();
    let nav = use_navigator();
    let page_size = services.config.catalog.page_size;

    rsx! {
        div {
            class: "page",
            div {
                class: "dashboard-links",
                Link {
                    class: "dashboard-link",
                    to: Route::Inventory {},
                    Icon { icon: FaBoxOpen, width: 20, height: 20 }
                    span { "My Inventory" }
                }
                Link {
                    class: "dashboard-link",
                    to: Route::Statistics {},
                    Icon { icon: FaChartColumn, width: 20, height: 20 }
                    span { "Statistics" }
                }
            }
            h1 { "Pokémon" }
            PokemonGridView {
                page_size,
                on_select: move |id: String| {
                    nav.push(Route::PokemonPage { id });
                },
            }
        }
    }
}
