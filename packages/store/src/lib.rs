//! # Store crate: session persistence, configuration and domain types
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`storage`] | `SessionStorage` trait over a string key-value store |
//! | [`session`] | `Session` encoding, restore/persist/clear, bearer credential lookup |
//! | [`config`] | `PokedexConfig` loaded from `Pokedex.toml` |
//! | [`models`] | `CollectionRecord` and per-type counts |
//! | [`catalog`] | Catalog wire types and display helpers |
//!
//! ## Backends
//!
//! - [`MemoryStorage`]: in-process map, used off the browser and in tests
//! - `BrowserStorage`: `window.localStorage` (WASM + `web` feature)

pub mod catalog;
pub mod config;
pub mod models;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStorage;

pub use config::{ConfigError, PokedexConfig};
pub use models::{CollectionRecord, Evolution, RecordId, StatBlock};
pub use session::{InvalidSession, Session};
pub use storage::SessionStorage;
