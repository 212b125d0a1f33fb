//! Shared service handles for all views.
//!
//! [`Services`] bundles both HTTP clients around the platform-appropriate
//! [`store::SessionStorage`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::BrowserStorage`]
//! - **Everything else**: in-process [`store::MemoryStorage`]

use api::{BackendClient, CatalogClient, ReqwestTransport};
use dioxus::prelude::*;
use store::PokedexConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::BrowserStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;

pub type Backend = BackendClient<ReqwestTransport, PlatformStorage>;
pub type Catalog = CatalogClient<ReqwestTransport>;

#[derive(Clone, Debug)]
pub struct Services {
    pub config: PokedexConfig,
    pub backend: Backend,
    pub catalog: Catalog,
}

impl Services {
    pub fn new(config: PokedexConfig) -> Self {
        let transport = ReqwestTransport::new();
        Self {
            backend: BackendClient::new(transport.clone(), PlatformStorage::default(), &config),
            catalog: CatalogClient::new(transport, &config),
            config,
        }
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Makes [`Services`] built from `config` available to every descendant.
#[component]
pub fn ServicesProvider(config: PokedexConfig, children: Element) -> Element {
    use_context_provider(|| Services::new(config));

    rsx! {
        {children}
    }
}
