//! # Paginated list and cascading detail state
//!
//! Both states tag every request they start with a generation number. A
//! response is applied only if its generation is still the latest one, so a
//! slow response for page 2 can never overwrite page 3 after the user has
//! clicked "next" twice.

use store::catalog::{EvolutionChain, NamedResource, Pokemon, PokemonPage, PokemonSpecies};

use crate::client::CatalogClient;
use crate::error::{ApiError, LoadError};
use crate::transport::Transport;

/// Offset/limit/total triple for the paginated catalog list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    offset: u32,
    limit: u32,
    /// Unknown until the first page arrives.
    total_count: Option<u32>,
}

impl Cursor {
    pub fn new(limit: u32) -> Self {
        Self {
            offset: 0,
            limit: limit.max(1),
            total_count: None,
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn total_count(&self) -> u32 {
        self.total_count.unwrap_or(0)
    }

    pub fn set_total_count(&mut self, total: u32) {
        self.total_count = Some(total);
    }

    pub fn has_next(&self) -> bool {
        self.total_count
            .map_or(true, |total| self.offset.saturating_add(self.limit) < total)
    }

    pub fn has_prev(&self) -> bool {
        self.offset > 0
    }

    /// Advance by one page. Refuses to move past the known total.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.offset += self.limit;
        true
    }

    /// Go back one page, never below zero.
    pub fn prev_page(&mut self) -> bool {
        let target = self.offset.saturating_sub(self.limit);
        let target = target - target % self.limit;
        let moved = target != self.offset;
        self.offset = target;
        moved
    }

    pub fn current_page(&self) -> u32 {
        self.offset / self.limit + 1
    }

    pub fn total_pages(&self) -> u32 {
        self.total_count().div_ceil(self.limit)
    }
}

/// Parameters of one in-flight list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub offset: u32,
    pub limit: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    pub cursor: Cursor,
    pub results: Vec<NamedResource>,
    pub loading: bool,
    pub error: Option<LoadError>,
    generation: u64,
}

impl ListState {
    pub fn new(limit: u32) -> Self {
        Self {
            cursor: Cursor::new(limit),
            results: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
        }
    }

    /// Start a fetch for the current cursor position.
    pub fn begin(&mut self) -> PageRequest {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        PageRequest {
            generation: self.generation,
            offset: self.cursor.offset(),
            limit: self.cursor.limit(),
        }
    }

    /// Apply a response. Returns false if the response was stale and dropped.
    pub fn complete(&mut self, request: PageRequest, result: Result<PokemonPage, ApiError>) -> bool {
        if request.generation != self.generation {
            tracing::debug!(
                "Dropping stale list response for offset {}",
                request.offset
            );
            return false;
        }
        match result {
            Ok(page) => {
                self.cursor.set_total_count(page.count);
                self.results = page.results;
            }
            Err(e) => {
                let error = LoadError::new("Pokémon list", e);
                tracing::error!("{error}");
                self.error = Some(error);
            }
        }
        self.loading = false;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.cursor.next_page()
    }

    pub fn prev_page(&mut self) -> bool {
        self.cursor.prev_page()
    }

    /// Fetch the current page and apply it.
    pub async fn load<T: Transport>(&mut self, catalog: &CatalogClient<T>) {
        let request = self.begin();
        let result = fetch_page(catalog, request).await;
        self.complete(request, result);
    }
}

pub async fn fetch_page<T: Transport>(
    catalog: &CatalogClient<T>,
    request: PageRequest,
) -> Result<PokemonPage, ApiError> {
    catalog.list(request.limit, request.offset).await
}

/// One step of the detail cascade.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailUpdate {
    Pokemon(Pokemon),
    Species(PokemonSpecies),
    Evolution(EvolutionChain),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRequest {
    pub generation: u64,
    pub id_or_name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    pub pokemon: Option<Pokemon>,
    pub species: Option<PokemonSpecies>,
    pub evolution_chain: Option<EvolutionChain>,
    pub loading: bool,
    pub error: Option<LoadError>,
    current: String,
    generation: u64,
}

impl DetailState {
    /// Start loading `id_or_name`. Empty input starts nothing.
    ///
    /// Switching to a different Pokémon drops the previous one's records so a
    /// page never mixes two entries.
    pub fn begin(&mut self, id_or_name: &str) -> Option<DetailRequest> {
        let id_or_name = id_or_name.trim();
        if id_or_name.is_empty() {
            return None;
        }
        if self.current != id_or_name {
            self.pokemon = None;
            self.species = None;
            self.evolution_chain = None;
            self.current = id_or_name.to_string();
        }
        self.generation += 1;
        self.loading = true;
        self.error = None;
        Some(DetailRequest {
            generation: self.generation,
            id_or_name: self.current.clone(),
        })
    }

    fn is_current(&self, request: &DetailRequest) -> bool {
        request.generation == self.generation
    }

    pub fn apply(&mut self, request: &DetailRequest, update: DetailUpdate) -> bool {
        if !self.is_current(request) {
            tracing::debug!("Dropping stale detail step for {}", request.id_or_name);
            return false;
        }
        match update {
            DetailUpdate::Pokemon(p) => self.pokemon = Some(p),
            DetailUpdate::Species(s) => self.species = Some(s),
            DetailUpdate::Evolution(e) => self.evolution_chain = Some(e),
        }
        true
    }

    /// Close out a cascade. Steps already applied stay in place on failure.
    pub fn finish(&mut self, request: &DetailRequest, result: Result<(), ApiError>) -> bool {
        if !self.is_current(request) {
            return false;
        }
        if let Err(e) = result {
            let error = LoadError::new("Pokémon details", e);
            tracing::error!("{error}");
            self.error = Some(error);
        }
        self.loading = false;
        true
    }

    pub async fn load<T: Transport>(&mut self, catalog: &CatalogClient<T>, id_or_name: &str) {
        let Some(request) = self.begin(id_or_name) else {
            return;
        };
        let result = fetch_details(catalog, &request, |update| {
            self.apply(&request, update);
        })
        .await;
        self.finish(&request, result);
    }
}

/// Base record, then species, then (if referenced) the evolution chain.
///
/// Each step is handed to `on_update` as soon as it arrives; the first failure
/// stops the cascade.
pub async fn fetch_details<T: Transport>(
    catalog: &CatalogClient<T>,
    request: &DetailRequest,
    mut on_update: impl FnMut(DetailUpdate),
) -> Result<(), ApiError> {
    let pokemon = catalog.search(&request.id_or_name).await?;
    on_update(DetailUpdate::Pokemon(pokemon));

    let species = catalog.species(&request.id_or_name.to_lowercase()).await?;
    let chain_url = species.evolution_chain_url().map(str::to_string);
    on_update(DetailUpdate::Species(species));

    if let Some(url) = chain_url {
        let chain = catalog.evolution_chain(&url).await?;
        on_update(DetailUpdate::Evolution(chain));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use crate::transport::Method;
    use store::PokedexConfig;

    const PIKACHU: &str = r#"{"id": 25, "name": "pikachu"}"#;
    const PIKACHU_SPECIES: &str = r#"{
        "id": 25, "name": "pikachu",
        "flavor_text_entries": [],
        "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/10/"}
    }"#;
    const CHAIN: &str = r#"{"id": 10, "chain": {
        "species": {"name": "pichu", "url": "https://pokeapi.co/api/v2/pokemon-species/172/"},
        "evolves_to": [{"species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"}, "evolves_to": []}]
    }}"#;

    fn catalog(mock: &MockTransport) -> CatalogClient<MockTransport> {
        CatalogClient::new(mock.clone(), &PokedexConfig::default())
    }

    fn page(count: u32, names: &[&str]) -> String {
        let results: Vec<_> = names
            .iter()
            .map(|n| serde_json::json!({"name": n, "url": ""}))
            .collect();
        serde_json::json!({"count": count, "next": null, "previous": null, "results": results})
            .to_string()
    }

    #[test]
    fn test_prev_page_floors_at_zero() {
        let mut cursor = Cursor::new(12);
        assert!(!cursor.prev_page());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_next_page_adds_limit() {
        let mut cursor = Cursor::new(12);
        assert!(cursor.next_page());
        assert!(cursor.next_page());
        assert_eq!(cursor.offset(), 24);

        assert!(cursor.prev_page());
        assert_eq!(cursor.offset(), 12);
        assert_eq!(cursor.current_page(), 2);
    }

    #[test]
    fn test_next_page_clamps_to_total() {
        let mut cursor = Cursor::new(12);
        cursor.set_total_count(20);
        assert!(cursor.next_page());
        assert_eq!(cursor.offset(), 12);
        assert!(!cursor.has_next());
        assert!(!cursor.next_page());
        assert_eq!(cursor.offset(), 12);
        assert_eq!(cursor.total_pages(), 2);
    }

    #[test]
    fn test_zero_limit_is_raised() {
        let mut cursor = Cursor::new(0);
        assert_eq!(cursor.limit(), 1);
        assert!(cursor.next_page());
        assert_eq!(cursor.offset(), 1);
    }

    #[tokio::test]
    async fn test_list_load_sets_results_and_total() {
        let mock = MockTransport::new().on(
            Method::Get,
            "/pokemon?limit=12&offset=0",
            200,
            &page(1302, &["bulbasaur", "ivysaur"]),
        );
        let mut state = ListState::new(12);

        state.load(&catalog(&mock)).await;

        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.cursor.total_count(), 1302);
        assert_eq!(state.cursor.total_pages(), 109);
    }

    #[tokio::test]
    async fn test_list_load_failure_keeps_previous_results() {
        let mock = MockTransport::new()
            .on(Method::Get, "/pokemon?limit=12&offset=0", 200, &page(30, &["bulbasaur"]))
            .on(Method::Get, "/pokemon?limit=12&offset=12", 503, "");
        let catalog = catalog(&mock);
        let mut state = ListState::new(12);
        state.load(&catalog).await;

        state.next_page();
        state.load(&catalog).await;

        let error = state.error.as_ref().unwrap();
        assert_eq!(error.cause, ApiError::Status { status: 503, message: None });
        assert_eq!(state.results.len(), 1);
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_list_response_is_dropped() {
        let mut state = ListState::new(12);
        let first = state.begin();
        state.next_page();
        let second = state.begin();

        assert!(state.complete(second, Ok(PokemonPage {
            count: 100,
            results: vec![NamedResource { name: "page-two".to_string(), url: String::new() }],
            ..Default::default()
        })));
        assert!(!state.complete(first, Ok(PokemonPage {
            count: 100,
            results: vec![NamedResource { name: "page-one".to_string(), url: String::new() }],
            ..Default::default()
        })));

        assert_eq!(state.results[0].name, "page-two");
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_detail_cascade() {
        let mock = MockTransport::new()
            .on(Method::Get, "/pokemon/pikachu", 200, PIKACHU)
            .on(Method::Get, "/pokemon-species/pikachu", 200, PIKACHU_SPECIES)
            .on(Method::Get, "/evolution-chain/10/", 200, CHAIN);
        let mut state = DetailState::default();

        state.load(&catalog(&mock), "pikachu").await;

        assert!(state.error.is_none());
        assert!(!state.loading);
        assert_eq!(state.pokemon.as_ref().unwrap().id, 25);
        assert_eq!(state.evolution_chain.as_ref().unwrap().stages().len(), 2);
        assert_eq!(
            mock.urls(),
            vec![
                "https://pokeapi.co/api/v2/pokemon/pikachu",
                "https://pokeapi.co/api/v2/pokemon-species/pikachu",
                "https://pokeapi.co/api/v2/evolution-chain/10/",
            ]
        );
    }

    #[tokio::test]
    async fn test_detail_lookup_ignores_case() {
        let mock = MockTransport::new()
            .on(Method::Get, "/pokemon/pikachu", 200, PIKACHU)
            .on(Method::Get, "/pokemon-species/pikachu", 200, PIKACHU_SPECIES)
            .on(Method::Get, "/evolution-chain/10/", 200, CHAIN);
        let mut state = DetailState::default();

        state.load(&catalog(&mock), " Pikachu ").await;

        assert!(state.error.is_none());
        assert_eq!(state.pokemon.as_ref().unwrap().name, "pikachu");
        assert_eq!(mock.urls()[1], "https://pokeapi.co/api/v2/pokemon-species/pikachu");
    }

    #[tokio::test]
    async fn test_detail_species_failure_keeps_base_record() {
        let mock = MockTransport::new()
            .on(Method::Get, "/pokemon/pikachu", 200, PIKACHU)
            .fail(
                Method::Get,
                "/pokemon-species/pikachu",
                ApiError::Transport("connection reset".to_string()),
            );
        let mut state = DetailState::default();

        state.load(&catalog(&mock), "pikachu").await;

        assert_eq!(state.pokemon.as_ref().unwrap().name, "pikachu");
        assert!(state.species.is_none());
        assert!(state.evolution_chain.is_none());
        assert!(state.error.is_some());
        assert!(!state.loading);
        assert_eq!(mock.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_detail_without_chain_reference() {
        let mock = MockTransport::new()
            .on(Method::Get, "/pokemon/132", 200, r#"{"id": 132, "name": "ditto"}"#)
            .on(Method::Get, "/pokemon-species/132", 200, r#"{"id": 132, "name": "ditto"}"#);
        let mut state = DetailState::default();

        state.load(&catalog(&mock), "132").await;

        assert!(state.error.is_none());
        assert!(state.species.is_some());
        assert!(state.evolution_chain.is_none());
        assert_eq!(mock.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_detail_empty_id_does_nothing() {
        let mock = MockTransport::new();
        let mut state = DetailState::default();

        state.load(&catalog(&mock), "  ").await;

        assert!(!state.loading);
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn test_stale_detail_steps_are_dropped() {
        let mut state = DetailState::default();
        let old = state.begin("1").unwrap();
        let new = state.begin("4").unwrap();

        let bulbasaur: Pokemon = serde_json::from_str(r#"{"id": 1, "name": "bulbasaur"}"#).unwrap();
        assert!(!state.apply(&old, DetailUpdate::Pokemon(bulbasaur)));
        assert!(!state.finish(&old, Ok(())));
        assert!(state.pokemon.is_none());
        assert!(state.loading);

        assert!(state.finish(&new, Ok(())));
        assert!(!state.loading);
    }
}
