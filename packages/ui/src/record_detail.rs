use dioxus::prelude::*;
use store::CollectionRecord;

use crate::icons::{FaPenToSquare, FaTrashCan, FaXmark};
use crate::Icon;

const RECORD_DETAIL_CSS: Asset = asset!("/assets/styling/record_detail.css");

/// Read-only view of one collection record with modify/delete actions.
#[component]
pub fn RecordDetail(
    record: CollectionRecord,
    #[props(default)] busy: bool,
    on_close: EventHandler<()>,
    on_modify: EventHandler<CollectionRecord>,
    on_delete: EventHandler<String>,
) -> Element {
    let types = record.types.join(", ");
    let abilities = record.abilities.join(", ");
    let evolves_from = record.evolution.evolves_from.clone();
    let evolves_to = record.evolution.evolves_to.clone();
    let has_evolution = evolves_from.is_some() || evolves_to.is_some();
    let name = record.name.clone();
    let stats = record.stats.clone();
    let editable = record.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: RECORD_DETAIL_CSS }
        div {
            class: "record-detail",
            button {
                class: "icon-btn record-detail-close",
                aria_label: "Close",
                onclick: move |_| on_close.call(()),
                Icon { icon: FaXmark, width: 18, height: 18 }
            }
            h2 { class: "pokemon-name", "{record.name}" }

            div {
                class: "record-detail-body",
                p { strong { "Type(s): " } "{types}" }
                p { strong { "Abilities: " } "{abilities}" }
                div {
                    strong { "Moves:" }
                    if record.moves.is_empty() {
                        p { class: "indent", "No moves listed." }
                    } else {
                        ul {
                            for (i, m) in record.moves.iter().enumerate() {
                                li { key: "{i}", "{m}" }
                            }
                        }
                    }
                }
                div {
                    strong { "Stats:" }
                    ul {
                        li { "HP: {stats.hp}" }
                        li { "Attack: {stats.attack}" }
                        li { "Defense: {stats.defense}" }
                        li { "Special Attack: {stats.special_attack}" }
                        li { "Special Defense: {stats.special_defense}" }
                        li { "Speed: {stats.speed}" }
                    }
                }
                if has_evolution {
                    div {
                        strong { "Evolution:" }
                        if let Some(from) = evolves_from {
                            p { class: "indent", "Evolves from: {from}" }
                        }
                        if let Some(to) = evolves_to {
                            p { class: "indent", "Evolves to: {to}" }
                        }
                    }
                }
                p { strong { "Description: " } "{record.description}" }
            }

            div {
                class: "record-detail-actions",
                button {
                    class: "btn btn-warning",
                    disabled: busy,
                    onclick: move |_| on_modify.call(editable.clone()),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    span { "Modify" }
                }
                button {
                    class: "btn btn-danger",
                    disabled: busy,
                    onclick: move |_| on_delete.call(name.clone()),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                    span { if busy { "Deleting..." } else { "Delete" } }
                }
            }
        }
    }
}
