use api::collection::Phase;
use dioxus::prelude::*;
use store::models::count_by_primary_type;

use super::{Loader, LoaderSize};
use crate::hooks::use_inventory;

const STATISTICS_CSS: Asset = asset!("/assets/styling/statistics.css");

/// Type distribution chart and summary table for the collection.
#[component]
pub fn StatisticsView() -> Element {
    let inventory = use_inventory();
    let state = inventory.state.read();

    match state.phase {
        Phase::Idle | Phase::Loading => {
            return rsx! {
                div { class: "center-block", Loader { size: LoaderSize::Medium } }
            };
        }
        Phase::Errored => {
            return rsx! {
                div {
                    class: "page",
                    h1 { class: "error-title", "Failed to fetch Pokémon data. Please try again later." }
                }
            };
        }
        Phase::Loaded => {}
    }

    let counts = count_by_primary_type(&state.records);
    let max = counts.values().copied().max().unwrap_or(0).max(1);

    rsx! {
        document::Link { rel: "stylesheet", href: STATISTICS_CSS }
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { "Pokemon Collection Statistics" }
                    p { class: "muted", "Explore statistics about your Pokémon collection." }
                }
            }

            section {
                h2 { "Pokemon Type Distribution" }
                if counts.is_empty() {
                    p { "No Pokémon data available to display statistics." }
                } else {
                    div {
                        class: "bar-chart",
                        for (kind, count) in counts {
                            {
                                let height = count * 100 / max;
                                rsx! {
                                    div {
                                        key: "{kind}",
                                        class: "bar-column",
                                        span { class: "bar-count", "{count}" }
                                        div { class: "bar", style: "height: {height}%" }
                                        span { class: "bar-label", "{kind}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section {
                h2 { "Pokemon Details Table" }
                if state.records.is_empty() {
                    p { "No Pokémon data available to display in the table." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Type(s)" }
                                th { "HP" }
                                th { "Attack" }
                                th { "Defense" }
                            }
                        }
                        tbody {
                            for record in state.records.iter() {
                                {
                                    let key = record.key().to_string();
                                    let types = record.types.join(", ");
                                    rsx! {
                                        tr {
                                            key: "{key}",
                                            td { "{record.name}" }
                                            td { "{types}" }
                                            td { "{record.stats.hp}" }
                                            td { "{record.stats.attack}" }
                                            td { "{record.stats.defense}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
