use api::collection::{FormMode, Overlay, Phase, RecordForm};
use dioxus::prelude::*;

use super::{Loader, LoaderSize, ModalOverlay};
use crate::confirm::confirm;
use crate::hooks::use_inventory;
use crate::icons::{FaCirclePlus, FaMagnifyingGlass};
use crate::{Icon, RecordDetail, RecordFormDialog};

const INVENTORY_CSS: Asset = asset!("/assets/styling/inventory.css");

/// The signed-in user's collection: card list, detail overlay and
/// add/modify form.
#[component]
pub fn InventoryView() -> Element {
    let inventory = use_inventory();
    let mut state = inventory.state;
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let open_add = move |_| {
        form_error.set(None);
        state.write().open_form(FormMode::Add);
    };

    let handle_submit = {
        let inventory = inventory.clone();
        move |form: RecordForm| {
            let Some(mode) = state.read().form_mode().cloned() else {
                return;
            };
            let inventory = inventory.clone();
            spawn(async move {
                saving.set(true);
                let result = inventory.submit(mode, form).await;
                saving.set(false);
                form_error.set(result.err());
            });
        }
    };

    let mut search_kind = use_signal(String::new);
    let mut search_hp = use_signal(String::new);
    let mut search_error = use_signal(|| Option::<String>::None);

    let handle_search = {
        let inventory = inventory.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let inventory = inventory.clone();
            spawn(async move {
                let result = inventory.search(search_kind(), search_hp()).await;
                search_error.set(result.err());
            });
        }
    };

    let handle_clear = {
        let inventory = inventory.clone();
        move |_| {
            search_kind.set(String::new());
            search_hp.set(String::new());
            search_error.set(None);
            let inventory = inventory.clone();
            spawn(async move {
                let _ = inventory.search(String::new(), String::new()).await;
            });
        }
    };

    let handle_delete = {
        let inventory = inventory.clone();
        move |name: String| {
            let inventory = inventory.clone();
            spawn(async move {
                inventory
                    .delete(name, |name| {
                        confirm(&format!(
                            "Are you sure you want to delete {name}? This action cannot be undone."
                        ))
                    })
                    .await;
            });
        }
    };

    let current = state.read();
    let records = current.records.clone();
    let phase = current.phase;
    let error = current.error.clone();
    let overlay = current.overlay.clone();
    let busy = current.busy;
    let filtered = !current.filter.is_empty();
    let editing = current
        .form_record()
        .map(RecordForm::from_record)
        .unwrap_or_default();
    drop(current);
    let has_records = !records.is_empty();
    let overlay_open = overlay != Overlay::None;

    rsx! {
        document::Link { rel: "stylesheet", href: INVENTORY_CSS }
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { "Pokemon Collection" }
                    p { class: "muted", "Manage your captured Pokémon." }
                }
                button {
                    class: "btn btn-success",
                    onclick: open_add,
                    Icon { icon: FaCirclePlus, width: 16, height: 16 }
                    span { "Add Pokemon" }
                }
            }

            form {
                class: "collection-search",
                onsubmit: handle_search,
                input {
                    r#type: "text",
                    placeholder: "Type (e.g. fire)",
                    value: search_kind(),
                    oninput: move |evt: FormEvent| search_kind.set(evt.value()),
                }
                input {
                    r#type: "number",
                    min: "0",
                    placeholder: "Min HP",
                    value: search_hp(),
                    oninput: move |evt: FormEvent| search_hp.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-sm",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    span { "Search" }
                }
                if filtered {
                    button {
                        r#type: "button",
                        class: "btn btn-secondary btn-sm",
                        onclick: handle_clear,
                        "Clear"
                    }
                }
            }

            if let Some(err) = search_error() {
                p { class: "form-error", "{err}" }
            }

            if phase == Phase::Loading && !overlay_open {
                div { class: "center-block", Loader { size: LoaderSize::Medium } }
            }

            if let Some(err) = error {
                p { class: "error-panel", "Error: {err}" }
            }

            if phase == Phase::Loaded && !has_records && !overlay_open {
                if filtered {
                    p { class: "center-block", "No Pokemon in your collection match this search." }
                } else {
                    p { class: "center-block", "No Pokemon in your collection yet. Click \"Add Pokemon\" to start!" }
                }
            }

            if has_records {
                div {
                    class: "card-grid",
                    for record in records {
                        {
                            let key = record.key().to_string();
                            let selected = record.clone();
                            let moves = if record.moves.len() > 2 {
                                format!("{}...", record.moves[..2].join(", "))
                            } else {
                                record.moves.join(", ")
                            };
                            let types = record.types.join(", ");
                            let abilities = record.abilities.join(", ");
                            rsx! {
                                div {
                                    key: "{key}",
                                    class: "record-card",
                                    onclick: move |_| state.write().open_detail(selected.clone()),
                                    h2 { class: "pokemon-name", "{record.name}" }
                                    p { class: "muted", "Type: {types}" }
                                    p { class: "muted small truncate", "Abilities: {abilities}" }
                                    if !record.moves.is_empty() {
                                        p { class: "muted small truncate", "Moves: {moves}" }
                                    }
                                    h4 { "Base Stats:" }
                                    ul {
                                        class: "small",
                                        li { "HP: {record.stats.hp}" }
                                        li { "Attack: {record.stats.attack}" }
                                        li { "Defense: {record.stats.defense}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        match overlay {
            Overlay::Detail(record) => rsx! {
                ModalOverlay {
                    wide: true,
                    on_close: move |_| state.write().close_overlay(),
                    RecordDetail {
                        record,
                        busy,
                        on_close: move |_| state.write().close_overlay(),
                        on_modify: move |record: store::CollectionRecord| {
                            form_error.set(None);
                            state.write().open_form(FormMode::Modify { name: record.name });
                        },
                        on_delete: handle_delete,
                    }
                }
            },
            Overlay::Form(mode) => rsx! {
                ModalOverlay {
                    on_close: move |_| state.write().close_overlay(),
                    RecordFormDialog {
                        mode,
                        initial: editing,
                        error: form_error(),
                        busy: saving(),
                        on_submit: handle_submit,
                        on_cancel: move |_| state.write().close_overlay(),
                    }
                }
            },
            Overlay::None => rsx! {},
        }
    }
}
