//! # API crate: remote calls and view state for the Pokédex
//!
//! Everything the frontends need to talk to the two remote services, plus the
//! plain state machines the views drive. Nothing here depends on Dioxus: each
//! state type exposes a `begin`/`finish` pair so a reactive layer can update
//! it around an `await`, and a sequential driver for tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | `Transport` trait over a single HTTP exchange, with the `reqwest` implementation |
//! | [`client`] | `BackendClient` (bearer credential from the stored session) and `CatalogClient` (anonymous) |
//! | [`error`] | `ApiError`, server-message extraction, user-facing fallbacks |
//! | [`session`] | Login/register requests and the `SessionState` store |
//! | [`catalog`] | Paged catalog list and the detail cascade (record → species → evolution chain) |
//! | [`collection`] | Add/modify form assembly, collection CRUD and `InventoryState` |
//!
//! ## Features
//!
//! - `web`: enables `localStorage`-backed session storage in `store`.

pub mod catalog;
pub mod client;
pub mod collection;
pub mod error;
pub mod session;
pub mod transport;

#[cfg(test)]
mod mock;

pub use client::{BackendClient, CatalogClient};
pub use error::{ApiError, LoadError};
pub use transport::{ReqwestTransport, Transport};
