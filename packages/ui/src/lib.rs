//! This crate contains all shared UI for the workspace.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`ServicesProvider`] / [`use_services`] | HTTP clients and configuration in context |
//! | [`SessionProvider`] / [`use_session`] | Signed-in identity, restored from storage on mount |
//! | [`use_pokemon_list`], [`use_pokemon_details`], [`use_inventory`] | Reactive data hooks |
//! | [`views`] | Whole-page bodies shared by the platform packages |

use dioxus::prelude::*;

/// Theme variables, layout helpers and buttons shared by every component.
pub const BASE_CSS: Asset = asset!("/assets/styling/base.css");

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod services;
pub use services::{use_services, Backend, Catalog, PlatformStorage, Services, ServicesProvider};

pub mod session;
pub use session::{use_session, LogoutButton, SessionProvider};

mod hooks;
pub use hooks::{use_inventory, use_pokemon_details, use_pokemon_list, InventoryHandle};

mod confirm;
pub use confirm::confirm;

pub mod views;

mod navbar;
pub use navbar::Navbar;

mod type_badge;
pub use type_badge::{type_class, TypeBadge};

mod pokemon_card;
pub use pokemon_card::PokemonCard;

mod record_form;
pub use record_form::RecordFormDialog;

mod record_detail;
pub use record_detail::RecordDetail;
