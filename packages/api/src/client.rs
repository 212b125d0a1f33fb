//! # HTTP clients for the two remote APIs
//!
//! | Client | Talks to | Credentials |
//! |--------|----------|-------------|
//! | [`BackendClient`] | personal collection backend | `Authorization: Bearer` from the persisted session |
//! | [`CatalogClient`] | public read-only catalog | none |
//!
//! Both take their base address from [`PokedexConfig`] at construction time.
//!
//! Every backend request goes through [`BackendClient::authorize`], which
//! re-reads the persisted session JSON on each call. The client therefore
//! never holds its own copy of the credential: logging in or out through the
//! session store takes effect on the very next request.

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::catalog::{EvolutionChain, Pokemon, PokemonPage, PokemonSpecies};
use store::{PokedexConfig, SessionStorage};

use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

/// Build `base/segment/segment...` with each segment percent-encoded.
fn join_url(base: &str, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = Url::parse(base).map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidUrl(format!("{base}: cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Client for the personal collection backend.
#[derive(Clone, Debug)]
pub struct BackendClient<T, S> {
    transport: T,
    storage: S,
    base_url: String,
    session_key: String,
}

impl<T: Transport, S: SessionStorage> BackendClient<T, S> {
    pub fn new(transport: T, storage: S, config: &PokedexConfig) -> Self {
        Self {
            transport,
            storage,
            base_url: config.backend.base_url.clone(),
            session_key: config.storage.session_key.clone(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach the persisted bearer credential, if there is one.
    ///
    /// Unparseable session data is logged and the request goes out without
    /// credentials.
    pub fn authorize(&self, request: &mut HttpRequest) {
        let Some(raw) = self.storage.get_item(&self.session_key) else {
            return;
        };
        match store::session::bearer_token(&raw) {
            Ok(Some(token)) => request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {token}"))),
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Could not read session to attach credentials: {e}");
            }
        }
    }

    /// Send a request to `base/segments...`, failing on non-2xx responses.
    pub async fn send(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<String>,
    ) -> Result<HttpResponse, ApiError> {
        let mut url = join_url(&self.base_url, segments)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }

        let mut request = HttpRequest::new(method, url.as_str());
        request
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        request.body = body;
        self.authorize(&mut request);

        self.transport.send(request).await?.error_for_status()
    }

    pub async fn get<R: DeserializeOwned>(&self, segments: &[&str]) -> Result<R, ApiError> {
        self.send(Method::Get, segments, &[], None).await?.json()
    }

    pub async fn get_with_query<R: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<R, ApiError> {
        self.send(Method::Get, segments, query, None).await?.json()
    }

    /// POST a JSON body; the raw response is returned for the caller to decode.
    pub async fn post<B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<HttpResponse, ApiError> {
        let body = encode(body)?;
        self.send(Method::Post, segments, &[], Some(body)).await
    }

    pub async fn put<B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<HttpResponse, ApiError> {
        let body = encode(body)?;
        self.send(Method::Put, segments, &[], Some(body)).await
    }

    pub async fn delete(&self, segments: &[&str]) -> Result<HttpResponse, ApiError> {
        self.send(Method::Delete, segments, &[], None).await
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Client for the public catalog API.
#[derive(Clone, Debug)]
pub struct CatalogClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> CatalogClient<T> {
    pub fn new(transport: T, config: &PokedexConfig) -> Self {
        Self {
            transport,
            base_url: config.catalog.base_url.clone(),
        }
    }

    async fn fetch<R: DeserializeOwned>(&self, url: Url) -> Result<R, ApiError> {
        let request = HttpRequest::new(Method::Get, url.as_str());
        let response = self.transport.send(request).await?.error_for_status();
        if let Err(e) = &response {
            tracing::error!("Catalog request {url} failed: {e}");
        }
        response?.json()
    }

    /// `GET /pokemon?limit=&offset=`
    pub async fn list(&self, limit: u32, offset: u32) -> Result<PokemonPage, ApiError> {
        let mut url = join_url(&self.base_url, &["pokemon"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());
        self.fetch(url).await
    }

    /// `GET /pokemon/{idOrName}`
    pub async fn pokemon(&self, id_or_name: &str) -> Result<Pokemon, ApiError> {
        self.fetch(join_url(&self.base_url, &["pokemon", id_or_name])?)
            .await
    }

    /// `GET /pokemon-species/{idOrName}`
    pub async fn species(&self, id_or_name: &str) -> Result<PokemonSpecies, ApiError> {
        self.fetch(join_url(&self.base_url, &["pokemon-species", id_or_name])?)
            .await
    }

    /// Follow the absolute chain URL from a species record.
    pub async fn evolution_chain(&self, url: &str) -> Result<EvolutionChain, ApiError> {
        let url = Url::parse(url).map_err(|e| ApiError::InvalidUrl(format!("{url}: {e}")))?;
        self.fetch(url).await
    }

    /// Look up a single Pokémon by free-text name or number.
    pub async fn search(&self, query: &str) -> Result<Pokemon, ApiError> {
        self.pokemon(&query.trim().to_lowercase()).await
    }
}
