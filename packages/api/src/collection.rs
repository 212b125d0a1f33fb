//! # Personal collection: form assembly, CRUD requests and inventory state
//!
//! ## Requests
//!
//! | Function | Endpoint |
//! |----------|----------|
//! | [`list_records`] | `GET /pokemon` |
//! | [`search_records`] | `GET /pokemon/search?type=&min_hp=` |
//! | [`create_record`] | `POST /pokemon` |
//! | [`update_record`] | `PUT /pokemon/{name}` |
//! | [`delete_record`] | `DELETE /pokemon/{name}` |
//!
//! [`fetch_records`] picks between the first two based on the active [`SearchFilter`].
//!
//! The backend addresses records by name. Create and update may answer with
//! the stored record or with a bare acknowledgement (`{"message": ..., "id": ...}`);
//! in the second case the submitted record stands in as the canonical copy.
//!
//! ## Inventory state
//!
//! [`InventoryState`] follows `Idle → Loading → Loaded | Errored`. While
//! loaded, at most one overlay is open: the detail view or the add/modify
//! form. [`Inventory`] drives the state sequentially against a client.

use serde::Deserialize;
use store::models::{CollectionRecord, Evolution, RecordId, StatBlock};
use store::SessionStorage;

use crate::client::BackendClient;
use crate::error::ApiError;
use crate::transport::{HttpResponse, Transport};

/// Form validation failures, reported before any request is sent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Name is required")]
    MissingName,
    #[error("At least one type is required")]
    MissingType,
    #[error("{field} must be a non-negative whole number, got {value:?}")]
    InvalidStat { field: &'static str, value: String },
}

/// Raw text of the add/modify form.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordForm {
    pub name: String,
    /// Comma-separated.
    pub types: String,
    pub abilities: String,
    pub moves: String,
    pub hp: String,
    pub attack: String,
    pub defense: String,
    pub special_attack: String,
    pub special_defense: String,
    pub speed: String,
    pub evolves_from: String,
    pub evolves_to: String,
    pub description: String,
}

impl Default for RecordForm {
    fn default() -> Self {
        let zero = || "0".to_string();
        Self {
            name: String::new(),
            types: String::new(),
            abilities: String::new(),
            moves: String::new(),
            hp: zero(),
            attack: zero(),
            defense: zero(),
            special_attack: zero(),
            special_defense: zero(),
            speed: zero(),
            evolves_from: String::new(),
            evolves_to: String::new(),
            description: String::new(),
        }
    }
}

/// Editable fields of [`RecordForm`], in display order per group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Types,
    Abilities,
    Moves,
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    EvolvesFrom,
    EvolvesTo,
    Description,
}

impl FormField {
    pub const LISTS: [FormField; 3] = [FormField::Types, FormField::Abilities, FormField::Moves];
    pub const STATS: [FormField; 6] = [
        FormField::Hp,
        FormField::Attack,
        FormField::Defense,
        FormField::SpecialAttack,
        FormField::SpecialDefense,
        FormField::Speed,
    ];
    pub const EVOLUTION: [FormField; 2] = [FormField::EvolvesFrom, FormField::EvolvesTo];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Types => "Types (comma-separated)",
            FormField::Abilities => "Abilities (comma-separated)",
            FormField::Moves => "Moves (comma-separated)",
            FormField::Hp => "HP",
            FormField::Attack => "Attack",
            FormField::Defense => "Defense",
            FormField::SpecialAttack => "Special Attack",
            FormField::SpecialDefense => "Special Defense",
            FormField::Speed => "Speed",
            FormField::EvolvesFrom => "Evolves From",
            FormField::EvolvesTo => "Evolves To",
            FormField::Description => "Description",
        }
    }

    /// HTML id of the input.
    pub fn id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Types => "types",
            FormField::Abilities => "abilities",
            FormField::Moves => "moves",
            FormField::Hp => "hp",
            FormField::Attack => "attack",
            FormField::Defense => "defense",
            FormField::SpecialAttack => "specialAttack",
            FormField::SpecialDefense => "specialDefense",
            FormField::Speed => "speed",
            FormField::EvolvesFrom => "evolvesFrom",
            FormField::EvolvesTo => "evolvesTo",
            FormField::Description => "description",
        }
    }

    pub fn is_stat(self) -> bool {
        Self::STATS.contains(&self)
    }
}

/// Split a comma-separated field, trimming and dropping empty tokens.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_stat(form: &RecordForm, field: FormField) -> Result<u32, FormError> {
    let input = form.field(field).trim();
    if input.is_empty() {
        return Ok(0);
    }
    input.parse().map_err(|_| FormError::InvalidStat {
        field: field.label(),
        value: input.to_string(),
    })
}

fn non_empty(input: &str) -> Option<String> {
    let input = input.trim();
    (!input.is_empty()).then(|| input.to_string())
}

/// Type and minimum-HP filter applied to the collection list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub kind: Option<String>,
    pub min_hp: Option<u32>,
}

impl SearchFilter {
    /// Parse the raw search inputs. Blank inputs leave that criterion unset.
    pub fn parse(kind: &str, min_hp: &str) -> Result<Self, FormError> {
        let min_hp = match min_hp.trim() {
            "" => None,
            input => Some(input.parse().map_err(|_| FormError::InvalidStat {
                field: "Minimum HP",
                value: input.to_string(),
            })?),
        };
        Ok(Self {
            kind: non_empty(kind).map(|kind| kind.to_lowercase()),
            min_hp,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.min_hp.is_none()
    }
}

impl RecordForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Types => &self.types,
            FormField::Abilities => &self.abilities,
            FormField::Moves => &self.moves,
            FormField::Hp => &self.hp,
            FormField::Attack => &self.attack,
            FormField::Defense => &self.defense,
            FormField::SpecialAttack => &self.special_attack,
            FormField::SpecialDefense => &self.special_defense,
            FormField::Speed => &self.speed,
            FormField::EvolvesFrom => &self.evolves_from,
            FormField::EvolvesTo => &self.evolves_to,
            FormField::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Types => &mut self.types,
            FormField::Abilities => &mut self.abilities,
            FormField::Moves => &mut self.moves,
            FormField::Hp => &mut self.hp,
            FormField::Attack => &mut self.attack,
            FormField::Defense => &mut self.defense,
            FormField::SpecialAttack => &mut self.special_attack,
            FormField::SpecialDefense => &mut self.special_defense,
            FormField::Speed => &mut self.speed,
            FormField::EvolvesFrom => &mut self.evolves_from,
            FormField::EvolvesTo => &mut self.evolves_to,
            FormField::Description => &mut self.description,
        }
    }

    /// Pre-fill the form from an existing record.
    pub fn from_record(record: &CollectionRecord) -> Self {
        let stats = &record.stats;
        Self {
            name: record.name.clone(),
            types: record.types.join(", "),
            abilities: record.abilities.join(", "),
            moves: record.moves.join(", "),
            hp: stats.hp.to_string(),
            attack: stats.attack.to_string(),
            defense: stats.defense.to_string(),
            special_attack: stats.special_attack.to_string(),
            special_defense: stats.special_defense.to_string(),
            speed: stats.speed.to_string(),
            evolves_from: record.evolution.evolves_from.clone().unwrap_or_default(),
            evolves_to: record.evolution.evolves_to.clone().unwrap_or_default(),
            description: record.description.clone(),
        }
    }

    /// Assemble the request payload.
    pub fn to_record(&self) -> Result<CollectionRecord, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let types = split_list(&self.types);
        if types.is_empty() {
            return Err(FormError::MissingType);
        }
        Ok(CollectionRecord {
            id: None,
            name: name.to_string(),
            types,
            abilities: split_list(&self.abilities),
            moves: split_list(&self.moves),
            stats: StatBlock {
                hp: parse_stat(self, FormField::Hp)?,
                attack: parse_stat(self, FormField::Attack)?,
                defense: parse_stat(self, FormField::Defense)?,
                special_attack: parse_stat(self, FormField::SpecialAttack)?,
                special_defense: parse_stat(self, FormField::SpecialDefense)?,
                speed: parse_stat(self, FormField::Speed)?,
            },
            evolution: Evolution {
                evolves_from: non_empty(&self.evolves_from),
                evolves_to: non_empty(&self.evolves_to),
            },
            description: self.description.trim().to_string(),
        })
    }
}

/// Which form is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Add,
    /// Modify the record currently stored under `name`.
    Modify { name: String },
}

impl FormMode {
    pub fn verb(&self) -> &'static str {
        match self {
            FormMode::Add => "add",
            FormMode::Modify { .. } => "modify",
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SaveResponse {
    Record(CollectionRecord),
    Ack {
        #[serde(default)]
        id: Option<String>,
    },
}

/// The stored record from a create/update response.
fn canonical(response: &HttpResponse, submitted: &CollectionRecord) -> CollectionRecord {
    let parsed = if response.body.trim().is_empty() {
        None
    } else {
        response.json::<SaveResponse>().ok()
    };
    match parsed {
        Some(SaveResponse::Record(record)) => record,
        Some(SaveResponse::Ack { id }) => CollectionRecord {
            id: id.map(|oid| RecordId { oid }).or_else(|| submitted.id.clone()),
            ..submitted.clone()
        },
        None => submitted.clone(),
    }
}

pub async fn list_records<T: Transport, S: SessionStorage>(
    client: &BackendClient<T, S>,
) -> Result<Vec<CollectionRecord>, ApiError> {
    client.get(&["pokemon"]).await
}

pub async fn search_records<T: Transport, S: SessionStorage>(
    client: &BackendClient<T, S>,
    kind: Option<&str>,
    min_hp: Option<u32>,
) -> Result<Vec<CollectionRecord>, ApiError> {
    let mut query = Vec::new();
    if let Some(kind) = kind.map(str::trim).filter(|k| !k.is_empty()) {
        query.push(("type", kind.to_string()));
    }
    if let Some(min_hp) = min_hp {
        query.push(("min_hp", min_hp.to_string()));
    }
    client.get_with_query(&["pokemon", "search"], &query).await
}

/// The whole collection, or the matching subset when `filter` is set.
pub async fn fetch_records<T: Transport, S: SessionStorage>(
    client: &BackendClient<T, S>,
    filter: &SearchFilter,
) -> Result<Vec<CollectionRecord>, ApiError> {
    if filter.is_empty() {
        list_records(client).await
    } else {
        search_records(client, filter.kind.as_deref(), filter.min_hp).await
    }
}

pub async fn create_record<T: Transport, S: SessionStorage>(
    client: &BackendClient<T, S>,
    record: &CollectionRecord,
) -> Result<CollectionRecord, ApiError> {
    let response = client.post(&["pokemon"], record).await?;
    Ok(canonical(&response, record))
}

pub async fn update_record<T: Transport, S: SessionStorage>(
    client: &BackendClient<T, S>,
    name: &str,
    record: &CollectionRecord,
) -> Result<CollectionRecord, ApiError> {
    let response = client.put(&["pokemon", name], record).await?;
    Ok(canonical(&response, record))
}

pub async fn delete_record<T: Transport, S: SessionStorage>(
    client: &BackendClient<T, S>,
    name: &str,
) -> Result<(), ApiError> {
    client.delete(&["pokemon", name]).await?;
    Ok(())
}

/// Create or update depending on the form mode.
pub async fn save_record<T: Transport, S: SessionStorage>(
    client: &BackendClient<T, S>,
    mode: &FormMode,
    record: &CollectionRecord,
) -> Result<CollectionRecord, ApiError> {
    match mode {
        FormMode::Add => create_record(client, record).await,
        FormMode::Modify { name } => update_record(client, name, record).await,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Overlay {
    #[default]
    None,
    Detail(CollectionRecord),
    Form(FormMode),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryState {
    pub records: Vec<CollectionRecord>,
    pub phase: Phase,
    pub overlay: Overlay,
    pub error: Option<String>,
    /// A delete is in flight.
    pub busy: bool,
    /// Active search. Refreshes honour it until it is cleared.
    pub filter: SearchFilter,
    generation: u64,
}

impl InventoryState {
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.generation
    }

    pub fn finish_load(
        &mut self,
        generation: u64,
        result: Result<Vec<CollectionRecord>, ApiError>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!("Dropping stale collection response");
            return false;
        }
        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
                self.phase = Phase::Loaded;
            }
            Err(e) => {
                tracing::error!("Failed to fetch Pokemon collection: {e}");
                self.error = Some(e.user_message("Failed to load Pokemon collection."));
                self.records.clear();
                self.phase = Phase::Errored;
            }
        }
        true
    }

    pub fn open_detail(&mut self, record: CollectionRecord) {
        self.overlay = Overlay::Detail(record);
    }

    pub fn selected(&self) -> Option<&CollectionRecord> {
        match &self.overlay {
            Overlay::Detail(record) => Some(record),
            _ => None,
        }
    }

    /// Open the add/modify form, replacing any open detail view.
    pub fn open_form(&mut self, mode: FormMode) {
        self.overlay = Overlay::Form(mode);
    }

    pub fn form_mode(&self) -> Option<&FormMode> {
        match &self.overlay {
            Overlay::Form(mode) => Some(mode),
            _ => None,
        }
    }

    /// Record being modified by the open form, if any.
    pub fn form_record(&self) -> Option<&CollectionRecord> {
        match self.form_mode()? {
            FormMode::Modify { name } => self.records.iter().find(|r| &r.name == name),
            FormMode::Add => None,
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Merge a saved record into the local copy and close the form.
    pub fn apply_saved(&mut self, mode: &FormMode, saved: CollectionRecord) {
        match mode {
            FormMode::Add => self.records.push(saved),
            FormMode::Modify { name } => {
                match self
                    .records
                    .iter_mut()
                    .find(|r| &r.name == name || r.same_record(&saved))
                {
                    Some(slot) => *slot = saved,
                    None => self.records.push(saved),
                }
            }
        }
        self.close_overlay();
    }

    /// Drop a deleted record and close any open detail view.
    pub fn apply_deleted(&mut self, name: &str) {
        self.records.retain(|r| r.name != name);
        if matches!(self.overlay, Overlay::Detail(_)) {
            self.overlay = Overlay::None;
        }
        self.error = None;
    }

    pub fn is_empty(&self) -> bool {
        self.phase == Phase::Loaded && self.records.is_empty()
    }

    /// Validate and store a new search. The caller refreshes afterwards.
    pub fn set_filter(&mut self, kind: &str, min_hp: &str) -> Result<(), String> {
        self.filter = SearchFilter::parse(kind, min_hp).map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Apply the outcome of a create/update request. On failure the form
    /// stays open and the returned message belongs in it.
    pub fn finish_submit(
        &mut self,
        mode: &FormMode,
        result: Result<CollectionRecord, ApiError>,
    ) -> Result<(), String> {
        match result {
            Ok(saved) => {
                self.apply_saved(mode, saved);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to {} Pokemon: {e}", mode.verb());
                Err(e.user_message(&format!("Could not {} Pokemon.", mode.verb())))
            }
        }
    }

    /// Mark a delete as in flight.
    pub fn begin_delete(&mut self) {
        self.busy = true;
    }

    /// Apply the outcome of a delete request. Returns whether the record was removed.
    pub fn finish_delete(&mut self, name: &str, result: Result<(), ApiError>) -> bool {
        self.busy = false;
        match result {
            Ok(()) => {
                self.apply_deleted(name);
                true
            }
            Err(e) => {
                tracing::error!("Failed to delete Pokemon: {e}");
                self.error = Some(e.user_message("Could not delete Pokemon."));
                false
            }
        }
    }
}

/// Sequential driver around [`InventoryState`].
pub struct Inventory<T, S> {
    client: BackendClient<T, S>,
    pub state: InventoryState,
}

impl<T: Transport, S: SessionStorage> Inventory<T, S> {
    pub fn new(client: BackendClient<T, S>) -> Self {
        Self {
            client,
            state: InventoryState::default(),
        }
    }

    pub async fn refresh(&mut self) {
        let generation = self.state.begin_load();
        let result = fetch_records(&self.client, &self.state.filter).await;
        self.state.finish_load(generation, result);
    }

    /// Apply a search and reload. Blank inputs show the whole collection.
    pub async fn search(&mut self, kind: &str, min_hp: &str) -> Result<(), String> {
        self.state.set_filter(kind, min_hp)?;
        self.refresh().await;
        Ok(())
    }

    /// Submit the form. On success the record is merged locally and the full
    /// collection is refetched; on failure the message for the form is returned.
    pub async fn submit(&mut self, mode: &FormMode, form: &RecordForm) -> Result<(), String> {
        let record = form.to_record().map_err(|e| e.to_string())?;
        let result = save_record(&self.client, mode, &record).await;
        self.state.finish_submit(mode, result)?;
        self.refresh().await;
        Ok(())
    }

    /// Delete after `confirm` agrees. Returns whether the record was removed.
    pub async fn delete(&mut self, name: &str, confirm: impl FnOnce(&str) -> bool) -> bool {
        if !confirm(name) {
            return false;
        }
        self.state.begin_delete();
        let result = delete_record(&self.client, name).await;
        self.state.finish_delete(name, result)
    }
}
