//! Reactive wrappers around the `api` state machines.
//!
//! Each hook owns a `Signal` of the corresponding state and re-runs its fetch
//! whenever the parameters it reads change. Signals are only written between
//! awaits, never held across one.

use api::catalog::{fetch_details, fetch_page, DetailState, ListState};
use api::collection::{self, FormMode, InventoryState, RecordForm};
use dioxus::prelude::*;

use crate::services::{use_services, Backend};

/// Paginated catalog list. Changing the cursor through the returned signal
/// (`next_page`, `prev_page`) triggers a refetch.
pub fn use_pokemon_list(limit: u32) -> Signal<ListState> {
    let services = use_services();
    let mut state = use_signal(|| ListState::new(limit));

    let position = use_memo(move || {
        let cursor = state.read().cursor;
        (cursor.offset(), cursor.limit())
    });

    let _loader = use_resource(move || {
        let catalog = services.catalog.clone();
        let _ = position();
        async move {
            let request = state.write().begin();
            let result = fetch_page(&catalog, request).await;
            state.write().complete(request, result);
        }
    });

    state
}

/// Base record, species and evolution chain for `id_or_name`, fetched in
/// that order. Nothing is fetched for an empty id.
pub fn use_pokemon_details(id_or_name: String) -> Signal<DetailState> {
    let services = use_services();

    // Track the id in a signal so the loader re-runs on route param change
    let mut target = use_signal(|| id_or_name.clone());
    if *target.peek() != id_or_name {
        target.set(id_or_name);
    }

    let mut state = use_signal(DetailState::default);

    let _loader = use_resource(move || {
        let catalog = services.catalog.clone();
        let id = target();
        async move {
            let Some(request) = state.write().begin(&id) else {
                return;
            };
            let result = fetch_details(&catalog, &request, |update| {
                state.write().apply(&request, update);
            })
            .await;
            state.write().finish(&request, result);
        }
    });

    state
}

/// Collection state plus the backend it talks to.
#[derive(Clone)]
pub struct InventoryHandle {
    pub state: Signal<InventoryState>,
    backend: Backend,
}

/// Collection of the signed-in user, loaded on mount.
pub fn use_inventory() -> InventoryHandle {
    let services = use_services();
    let state = use_signal(InventoryState::default);
    let handle = InventoryHandle {
        state,
        backend: services.backend,
    };

    let loader = handle.clone();
    use_hook(move || spawn(async move { loader.refresh().await }));

    handle
}

impl InventoryHandle {
    pub async fn refresh(&self) {
        let mut state = self.state;
        let generation = state.write().begin_load();
        let filter = state.read().filter.clone();
        let result = collection::fetch_records(&self.backend, &filter).await;
        state.write().finish_load(generation, result);
    }

    /// Apply a type/min-HP search and reload. Blank inputs clear it.
    pub async fn search(&self, kind: String, min_hp: String) -> Result<(), String> {
        let mut state = self.state;
        state.write().set_filter(&kind, &min_hp)?;
        self.refresh().await;
        Ok(())
    }

    /// Validate and save the form, then refetch the whole collection.
    /// Returns the message to show in the form on failure.
    pub async fn submit(&self, mode: FormMode, form: RecordForm) -> Result<(), String> {
        let record = form.to_record().map_err(|e| e.to_string())?;
        let result = collection::save_record(&self.backend, &mode, &record).await;
        let mut state = self.state;
        state.write().finish_submit(&mode, result)?;
        self.refresh().await;
        Ok(())
    }

    /// Delete `name` once `confirm` agrees.
    pub async fn delete(&self, name: String, confirm: impl FnOnce(&str) -> bool) {
        if !confirm(&name) {
            return;
        }
        let mut state = self.state;
        state.write().begin_delete();
        let result = collection::delete_record(&self.backend, &name).await;
        state.write().finish_delete(&name, result);
    }
}
